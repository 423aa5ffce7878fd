mod config_manager;
mod handlers;
mod line;
mod routes;
mod state;
mod translate;
mod utils;
mod validation;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use config_manager::Config;
use state::AppState;

#[derive(Debug, Parser)]
#[command(version, about = "Chinese/Vietnamese translation bot for the LINE Messaging API")]
struct Cli {
    /// Path to the JSON-LD configuration file
    #[arg(long, env = "CONFIG_PATH", global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the webhook server (default)
    Serve,
    /// Translate a single text and print the result
    Translate { text: String },
    /// Run the built-in bilingual dialogue and report pass/fail counts
    Validate,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("linebot_translator=debug,tower_http=debug")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            let config = load_config(cli.config.as_deref())?;
            serve(config).await
        }
        Command::Translate { text } => {
            let config = load_config_or_default(cli.config.as_deref());
            let state = AppState::new(config)?;

            println!("--- 啟動正式翻譯模式 ---");
            let result = state.pipeline.execute_translation_flow(&text).await?;
            println!("\n--- 翻譯結果 ---");
            validation::print_result(&result);
            println!("{}", "-".repeat(50));
            Ok(())
        }
        Command::Validate => {
            let config = load_config_or_default(cli.config.as_deref());
            let state = AppState::new(config)?;

            println!("--- 啟動翻譯可靠度驗證模式 ---");
            let cases = validation::load_cases()?;
            validation::run_validation(&state.pipeline, &cases).await?;
            Ok(())
        }
    }
}

async fn serve(config: Config) -> Result<()> {
    if !config.line_config.is_configured() {
        anyhow::bail!("line_config.channel_secret and line_config.channel_access_token are required to serve");
    }

    let addr = config.system_config.socket_addr()?;
    let app_state = AppState::new(config)?;

    // Build application
    let app = routes::create_routes()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Load configuration - try multiple paths
fn load_config(explicit: Option<&str>) -> Result<Config> {
    // Get the executable directory to resolve relative paths correctly
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| std::path::PathBuf::from("."));

    let config_paths: Vec<String> = match explicit {
        Some(path) => vec![path.to_string()],
        None => vec![
            Some("conf.jsonld".to_string()),
            exe_dir.join("conf.jsonld").to_str().map(|s| s.to_string()),
        ]
        .into_iter()
        .flatten()
        .collect(),
    };

    for path in &config_paths {
        match Config::load(path) {
            Ok(config) => {
                info!("Loaded configuration from: {}", path);
                return Ok(config);
            }
            Err(e) => {
                tracing::debug!("Failed to load config from {}: {}", path, e);
            }
        }
    }

    Err(anyhow::anyhow!(
        "Could not find config file. Tried: {:?}",
        config_paths
    ))
}

/// One-shot commands only need the translator, so a missing file is not fatal
fn load_config_or_default(explicit: Option<&str>) -> Config {
    load_config(explicit).unwrap_or_else(|e| {
        warn!("{}; using default translator settings", e);
        Config::default()
    })
}
