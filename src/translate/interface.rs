use async_trait::async_trait;
use thiserror::Error;

/// Errors raised by translation and language identification providers
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("request to translation provider failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("translation provider returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("unexpected translation provider response: {0}")]
    InvalidResponse(String),

    #[error("language could not be identified")]
    Undetected,
}

/// Translation capability - one call per piece of text
#[async_trait]
pub trait Translate: Send + Sync {
    /// Translate `text` from `source_lang` into `dest_lang`
    ///
    /// # Arguments
    /// * `text` - The text to translate
    /// * `source_lang` - Provider language code of the input
    /// * `dest_lang` - Provider language code of the output
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        dest_lang: &str,
    ) -> Result<String, TranslateError>;
}

/// Language identification capability
pub trait DetectLanguage: Send + Sync {
    /// Identify the language of `text`, returning an ISO 639-1 code
    fn detect_language(&self, text: &str) -> Result<String, TranslateError>;
}
