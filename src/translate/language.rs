use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;
use whatlang::{Detector, Lang};

use super::interface::{DetectLanguage, TranslateError};

/// The two languages the bot translates between
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    /// Traditional Chinese, the default for anything not recognised as Vietnamese
    #[default]
    #[serde(rename = "zh-tw")]
    ChineseTraditional,
    #[serde(rename = "vi")]
    Vietnamese,
}

impl Language {
    /// Provider language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::ChineseTraditional => "zh-tw",
            Language::Vietnamese => "vi",
        }
    }

    /// The language a message in `self` is translated into
    pub fn counterpart(&self) -> Language {
        match self {
            Language::ChineseTraditional => Language::Vietnamese,
            Language::Vietnamese => Language::ChineseTraditional,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Reduces any identification outcome to one of the two supported languages.
///
/// Only an exact Vietnamese match yields [`Language::Vietnamese`]; Chinese,
/// any third language and identification failures all fall back to
/// [`Language::ChineseTraditional`].
#[derive(Clone)]
pub struct LanguageDetector {
    identifier: Arc<dyn DetectLanguage>,
}

impl LanguageDetector {
    pub fn new(identifier: Arc<dyn DetectLanguage>) -> Self {
        Self { identifier }
    }

    pub fn detect(&self, text: &str) -> Language {
        match self.identifier.detect_language(text) {
            Ok(code) if code == Language::Vietnamese.code() => Language::Vietnamese,
            Ok(code) => {
                debug!("Identified '{}', falling back to {}", code, Language::default());
                Language::default()
            }
            Err(e) => {
                debug!("Language identification failed ({}), falling back to {}", e, Language::default());
                Language::default()
            }
        }
    }
}

/// Local trigram-based identification using `whatlang`
pub struct WhatlangIdentifier {
    detector: Detector,
}

impl WhatlangIdentifier {
    pub fn new() -> Self {
        Self {
            detector: Detector::new(),
        }
    }
}

impl Default for WhatlangIdentifier {
    fn default() -> Self {
        Self::new()
    }
}

impl DetectLanguage for WhatlangIdentifier {
    fn detect_language(&self, text: &str) -> Result<String, TranslateError> {
        let info = self.detector.detect(text).ok_or(TranslateError::Undetected)?;
        let code = match info.lang() {
            Lang::Vie => "vi",
            Lang::Cmn => "zh",
            Lang::Jpn => "ja",
            Lang::Eng => "en",
            // Fallback to 3-letter code if not explicitly mapped
            l => l.code(),
        };
        Ok(code.to_string())
    }
}
