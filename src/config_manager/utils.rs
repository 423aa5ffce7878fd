use std::fs;
use std::path::Path;
use anyhow::Result;
use regex::Regex;
use serde_json::Value;
use tracing::debug;

use crate::config_manager::main::Config;

/// Read JSON-LD configuration file with environment variable substitution
pub fn read_jsonld(config_path: &str) -> Result<Value> {
    if !Path::new(config_path).exists() {
        anyhow::bail!("Configuration file not found: {}", config_path);
    }

    let content = load_text_file_with_guess_encoding(config_path)?;
    if content.trim().is_empty() {
        anyhow::bail!("Failed to read configuration file: {}", config_path);
    }

    // Replace environment variables: ${VAR_NAME}
    let pattern = Regex::new(r"\$\{(\w+)\}")?;
    let content = pattern.replace_all(&content, |caps: &regex::Captures| {
        std::env::var(&caps[1]).unwrap_or_else(|_| {
            debug!("Environment variable {} is not set", &caps[1]);
            caps[0].to_string()
        })
    });

    // @context is kept in the value and ignored on deserialization
    let json_value: Value = serde_json::from_str(&content)?;
    Ok(json_value)
}

/// Validate configuration data against the Config model
pub fn validate_config(config_data: &Value) -> Result<Config> {
    let config: Config = serde_json::from_value(config_data.clone())?;
    Ok(config)
}

/// Load text file, trying UTF-8 (with or without BOM) before GBK
pub fn load_text_file_with_guess_encoding(file_path: &str) -> Result<String> {
    let mut bytes = fs::read(file_path)?;

    if bytes.starts_with(&[0xEF, 0xBB, 0xBF]) {
        bytes.drain(0..3);
    }

    match String::from_utf8(bytes) {
        Ok(content) => Ok(content),
        Err(e) => {
            debug!("{} is not UTF-8, decoding as GBK", file_path);
            let (cow, _, _) = encoding_rs::GBK.decode(e.as_bytes());
            Ok(cow.into_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(content: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".jsonld").tempfile().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn test_env_substitution() {
        std::env::set_var("LINEBOT_TEST_SECRET", "s3cret");
        let file = write_temp(
            br#"{
                "@context": {"@vocab": "https://example.org/config#"},
                "line_config": {
                    "channel_access_token": "${LINEBOT_TEST_UNSET_TOKEN}",
                    "channel_secret": "${LINEBOT_TEST_SECRET}"
                }
            }"#,
        );

        let config = Config::load(file.path().to_str().unwrap()).unwrap();

        assert_eq!(config.line_config.channel_secret, "s3cret");
        assert_eq!(config.line_config.channel_access_token, "${LINEBOT_TEST_UNSET_TOKEN}");
        assert_eq!(config.line_config.api_base, "https://api.line.me");
        assert_eq!(config.system_config.port, 5000);
        assert_eq!(config.translator_config.translate_provider, "google");
        assert_eq!(config.translator_config.char_limit, 15000);
    }

    #[test]
    fn test_utf8_bom_is_stripped() {
        let mut content = vec![0xEF, 0xBB, 0xBF];
        content.extend_from_slice("{\"name\": \"翻譯\"}".as_bytes());
        let file = write_temp(&content);

        let value = read_jsonld(file.path().to_str().unwrap()).unwrap();
        assert_eq!(value["name"], "翻譯");
    }

    #[test]
    fn test_gbk_fallback() {
        let (encoded, _, _) = encoding_rs::GBK.encode("{\"name\": \"翻译\"}");
        let file = write_temp(&encoded);

        let value = read_jsonld(file.path().to_str().unwrap()).unwrap();
        assert_eq!(value["name"], "翻译");
    }

    #[test]
    fn test_missing_file() {
        assert!(read_jsonld("/nonexistent/conf.jsonld").is_err());
    }
}
