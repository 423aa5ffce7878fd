use std::sync::Arc;

use crate::config_manager::Config;
use crate::line::{LineClient, ReplySink};
use crate::translate::{LanguageDetector, TranslationPipeline, TranslatorFactory, WhatlangIdentifier};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub pipeline: Arc<TranslationPipeline>,
    pub reply_sink: Arc<dyn ReplySink>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        // No request timeout: a hung provider call blocks its pipeline
        let client = reqwest::Client::new();

        let translator = TranslatorFactory::create_translator(&config.translator_config, client.clone())?;
        let detector = LanguageDetector::new(Arc::new(WhatlangIdentifier::new()));
        let pipeline = Arc::new(TranslationPipeline::new(
            detector,
            translator,
            config.translator_config.char_limit,
        ));

        let reply_sink = Arc::new(LineClient::new(
            client,
            config.line_config.api_base.clone(),
            config.line_config.channel_access_token.clone(),
        ));

        Ok(Self::from_parts(config, pipeline, reply_sink))
    }

    pub fn from_parts(
        config: Config,
        pipeline: Arc<TranslationPipeline>,
        reply_sink: Arc<dyn ReplySink>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            pipeline,
            reply_sink,
        }
    }
}
