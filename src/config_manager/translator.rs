use serde::{Deserialize, Serialize};

use crate::translate::google::DEFAULT_GOOGLE_API_BASE;
use crate::translate::pipeline::DEFAULT_CHAR_LIMIT;

/// Configuration for the Google Translate endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleConfig {
    #[serde(default = "default_google_api_base")]
    pub api_base: String,
}

/// Configuration for DeepLX translation service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeepLXConfig {
    pub deeplx_api_endpoint: String,
}

/// Configuration for translation services
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslatorConfig {
    #[serde(default = "default_provider")]
    pub translate_provider: String, // "google", "deeplx"

    /// Texts longer than this many characters are segmented
    #[serde(default = "default_char_limit")]
    pub char_limit: usize,

    pub google: Option<GoogleConfig>,

    pub deeplx: Option<DeepLXConfig>,
}

fn default_provider() -> String {
    "google".to_string()
}

fn default_char_limit() -> usize {
    DEFAULT_CHAR_LIMIT
}

fn default_google_api_base() -> String {
    DEFAULT_GOOGLE_API_BASE.to_string()
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            translate_provider: default_provider(),
            char_limit: default_char_limit(),
            google: None,
            deeplx: None,
        }
    }
}
