use std::sync::Arc;
use anyhow::Result;
use reqwest::Client;
use tracing::info;

use crate::config_manager::translator::TranslatorConfig;
use super::deeplx::DeepLXTranslator;
use super::google::{GoogleTranslator, DEFAULT_GOOGLE_API_BASE};
use super::interface::Translate;

/// Factory for creating translation providers
pub struct TranslatorFactory;

impl TranslatorFactory {
    /// Create a translator based on configuration
    ///
    /// # Arguments
    /// * `config` - Translator section of the configuration
    /// * `client` - Shared HTTP client
    pub fn create_translator(config: &TranslatorConfig, client: Client) -> Result<Arc<dyn Translate>> {
        info!("Initializing translator: {}", config.translate_provider);

        match config.translate_provider.as_str() {
            "google" => {
                let api_base = config
                    .google
                    .as_ref()
                    .map(|g| g.api_base.clone())
                    .unwrap_or_else(|| DEFAULT_GOOGLE_API_BASE.to_string());
                Ok(Arc::new(GoogleTranslator::new(client, api_base)))
            }
            "deeplx" => {
                let deeplx = config
                    .deeplx
                    .as_ref()
                    .ok_or_else(|| anyhow::anyhow!("deeplx provider selected but deeplx config is missing"))?;
                Ok(Arc::new(DeepLXTranslator::new(
                    client,
                    deeplx.deeplx_api_endpoint.clone(),
                )))
            }
            other => Err(anyhow::anyhow!("Unsupported translate provider: {}", other)),
        }
    }
}
