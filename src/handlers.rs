use tracing::{debug, error, info};

use crate::line::{WebhookBody, WebhookEvent};
use crate::state::AppState;

/// Reply sent when the incoming message is not text
pub const NON_TEXT_REPLY: &str = "你傳的不是文字呦～";

/// Handle a verified webhook body, replying to every message event.
///
/// A failed event is logged and does not stop the remaining events.
pub async fn handle_webhook(state: &AppState, body: &str) -> anyhow::Result<()> {
    let webhook: WebhookBody = serde_json::from_str(body)?;

    if webhook.events.is_empty() {
        debug!("Webhook without events, nothing to do");
        return Ok(());
    }

    let mut failed = 0;
    for event in &webhook.events {
        if let Err(e) = handle_event(state, event).await {
            error!(
                "Failed to handle {} event (reply token {:?}): {}",
                event.event_type, event.reply_token, e
            );
            failed += 1;
        }
    }

    if failed > 0 {
        anyhow::bail!("{} of {} event(s) failed", failed, webhook.events.len());
    }
    Ok(())
}

async fn handle_event(state: &AppState, event: &WebhookEvent) -> anyhow::Result<()> {
    if !event.is_message() {
        debug!("Ignoring {} event", event.event_type);
        return Ok(());
    }
    let Some(reply_token) = event.reply_token.as_deref() else {
        debug!("Message event without reply token");
        return Ok(());
    };

    let reply = match event.text() {
        Some(text) => {
            info!("Received text: {}", text);
            // The reply needs the final text, so wait for the whole pipeline
            state.pipeline.translate_text(text).await?
        }
        None => NON_TEXT_REPLY.to_string(),
    };

    info!("Reply: {}", reply);
    state.reply_sink.reply(reply_token, &reply).await?;

    Ok(())
}
