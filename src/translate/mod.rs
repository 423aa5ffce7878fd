pub mod interface;
pub mod language;
pub mod segmenter;
pub mod dispatcher;
pub mod pipeline;
pub mod google;
pub mod deeplx;
pub mod factory;

pub use interface::{DetectLanguage, Translate, TranslateError};
pub use language::{Language, LanguageDetector, WhatlangIdentifier};
pub use pipeline::{PipelineError, TranslationPipeline, TranslationRequest, TranslationResult};
pub use factory::TranslatorFactory;
