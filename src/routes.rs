use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tracing::{error, warn};

use crate::handlers;
use crate::line::{verify_signature, SignatureError, SIGNATURE_HEADER};
use crate::state::AppState;
use crate::translate::{TranslationRequest, TranslationResult};

pub fn create_routes() -> Router<AppState> {
    Router::new()
        // Messaging platform webhook
        .route("/", post(webhook))

        // Health check
        .route("/api/health", get(health_check))

        // REST API routes
        .route("/api/translate", post(translate))
}

/// Webhook endpoint. Answers `OK` for everything except a bad signature.
async fn webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<&'static str, (StatusCode, &'static str)> {
    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or(SignatureError::Missing)
        .and_then(|signature| {
            verify_signature(&state.config.line_config.channel_secret, &body, signature)
        });
    if let Err(e) = signature {
        warn!("Rejected webhook: {}", e);
        return Err((StatusCode::BAD_REQUEST, "Invalid signature"));
    }

    let body = String::from_utf8_lossy(&body);
    if let Err(e) = handlers::handle_webhook(&state, &body).await {
        error!("error caused by {}, body: {}", e, body);
    }

    Ok("OK")
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok"
    }))
}

async fn translate(
    State(state): State<AppState>,
    Json(request): Json<TranslationRequest>,
) -> Result<Json<TranslationResult>, (StatusCode, Json<Value>)> {
    state
        .pipeline
        .execute_translation_flow(&request.text)
        .await
        .map(Json)
        .map_err(|e| {
            error!("Translation pipeline failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": e.to_string()})),
            )
        })
}
