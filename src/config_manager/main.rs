use serde::{Deserialize, Serialize};
use crate::config_manager::line::LineConfig;
use crate::config_manager::system::SystemConfig;
use crate::config_manager::translator::TranslatorConfig;

/// Main configuration for the application using JSON-LD format
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(rename = "@context")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<serde_json::Value>,

    #[serde(default)]
    pub system_config: SystemConfig,

    #[serde(default)]
    pub line_config: LineConfig,

    #[serde(default)]
    pub translator_config: TranslatorConfig,
}

impl Config {
    /// Load configuration from JSON-LD file
    pub fn load(path: &str) -> anyhow::Result<Self> {
        use crate::config_manager::utils::{read_jsonld, validate_config};
        let json_value = read_jsonld(path)?;
        validate_config(&json_value)
    }
}
