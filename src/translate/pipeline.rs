use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use super::dispatcher::translate_all;
use super::interface::Translate;
use super::language::LanguageDetector;
use super::segmenter::{segment, TextChunk};

/// Default character limit above which text is segmented
pub const DEFAULT_CHAR_LIMIT: usize = 15000;

/// Pipeline-level failure, distinct from absorbed per-chunk failures
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("translation task failed: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub original_text: String,
    pub original_lang: String,
    pub translated_text: String,
    pub translated_lang: String,
    /// Wall-clock seconds
    pub execution_time: f64,
}

/// Detect, segment, translate concurrently and reassemble
pub struct TranslationPipeline {
    detector: LanguageDetector,
    translator: Arc<dyn Translate>,
    char_limit: usize,
}

impl TranslationPipeline {
    pub fn new(detector: LanguageDetector, translator: Arc<dyn Translate>, char_limit: usize) -> Self {
        Self {
            detector,
            translator,
            char_limit,
        }
    }

    pub async fn execute_translation_flow(&self, text: &str) -> Result<TranslationResult, PipelineError> {
        let start = Instant::now();

        if text.is_empty() {
            return Ok(TranslationResult::default());
        }

        let chunks = if text.chars().count() > self.char_limit {
            segment(text, self.char_limit)
        } else {
            vec![TextChunk {
                index: 0,
                text: text.to_string(),
            }]
        };

        let source_lang = self.detector.detect(text);
        let dest_lang = source_lang.counterpart();
        debug!("{} chunk(s), {} -> {}", chunks.len(), source_lang, dest_lang);

        let translated_parts =
            translate_all(Arc::clone(&self.translator), &chunks, source_lang, dest_lang).await?;
        let translated_text = translated_parts.concat();

        let execution_time = start.elapsed().as_secs_f64();
        info!("Translated {} -> {} in {:.4}s", source_lang, dest_lang, execution_time);

        Ok(TranslationResult {
            original_text: text.to_string(),
            original_lang: source_lang.code().to_string(),
            translated_text,
            translated_lang: dest_lang.code().to_string(),
            execution_time,
        })
    }

    /// Run the flow and keep only the translated text
    pub async fn translate_text(&self, text: &str) -> Result<String, PipelineError> {
        Ok(self.execute_translation_flow(text).await?.translated_text)
    }
}
