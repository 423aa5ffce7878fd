use serde::{Deserialize, Serialize};

/// Messaging API channel credentials
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineConfig {
    #[serde(default)]
    pub channel_access_token: String,

    #[serde(default)]
    pub channel_secret: String,

    #[serde(default = "default_api_base")]
    pub api_base: String,
}

fn default_api_base() -> String {
    "https://api.line.me".to_string()
}

impl LineConfig {
    pub fn is_configured(&self) -> bool {
        !self.channel_secret.is_empty() && !self.channel_access_token.is_empty()
    }
}

impl Default for LineConfig {
    fn default() -> Self {
        Self {
            channel_access_token: String::new(),
            channel_secret: String::new(),
            api_base: default_api_base(),
        }
    }
}
