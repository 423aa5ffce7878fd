use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use super::interface::{Translate, TranslateError};

pub const DEFAULT_GOOGLE_API_BASE: &str = "https://translate.googleapis.com";

/// Google Translate through the public `translate_a/single` endpoint
pub struct GoogleTranslator {
    client: Client,
    api_base: String,
}

impl GoogleTranslator {
    pub fn new(client: Client, api_base: String) -> Self {
        Self { client, api_base }
    }

    /// Google expects region subtags upper-cased, e.g. `zh-TW`
    fn provider_code(code: &str) -> String {
        match code.split_once('-') {
            Some((lang, region)) => format!("{}-{}", lang, region.to_uppercase()),
            None => code.to_string(),
        }
    }
}

#[async_trait]
impl Translate for GoogleTranslator {
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        dest_lang: &str,
    ) -> Result<String, TranslateError> {
        let url = format!("{}/translate_a/single", self.api_base.trim_end_matches('/'));
        let source = Self::provider_code(source_lang);
        let dest = Self::provider_code(dest_lang);

        let response = self
            .client
            .post(&url)
            .query(&[
                ("client", "gtx"),
                ("sl", source.as_str()),
                ("tl", dest.as_str()),
                ("dt", "t"),
            ])
            .form(&[("q", text)])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(TranslateError::Status { status, body });
        }

        let body: Value = response.json().await?;
        let translated = parse_sentences(&body)?;
        debug!("Google Translate {} -> {}: {} chars", source, dest, translated.chars().count());
        Ok(translated)
    }
}

/// The response is a nested array; `body[0]` holds one `[translated, original, ...]`
/// entry per sentence.
fn parse_sentences(body: &Value) -> Result<String, TranslateError> {
    let sentences = body
        .get(0)
        .and_then(|v| v.as_array())
        .ok_or_else(|| TranslateError::InvalidResponse(body.to_string()))?;

    Ok(sentences
        .iter()
        .filter_map(|sentence| sentence.get(0).and_then(|v| v.as_str()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_string_contains, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_provider_code() {
        assert_eq!(GoogleTranslator::provider_code("zh-tw"), "zh-TW");
        assert_eq!(GoogleTranslator::provider_code("vi"), "vi");
    }

    #[test]
    fn test_parse_sentences_joins_segments() {
        let body = json!([
            [["Xin chào. ", "你好。", null, null, 10], ["Tạm biệt.", "再見。", null, null, 10]],
            null,
            "zh-TW"
        ]);
        assert_eq!(parse_sentences(&body).unwrap(), "Xin chào. Tạm biệt.");
        assert!(parse_sentences(&json!({"error": "x"})).is_err());
    }

    #[tokio::test]
    async fn test_translate_against_mock_server() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/translate_a/single"))
            .and(query_param("sl", "zh-TW"))
            .and(query_param("tl", "vi"))
            .and(body_string_contains("q="))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                [["Xin chào mọi người", "大家好", null, null, 10]],
                null,
                "zh-TW"
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let translator = GoogleTranslator::new(Client::new(), server.uri());
        let translated = translator.translate("大家好", "zh-tw", "vi").await.unwrap();

        assert_eq!(translated, "Xin chào mọi người");
    }

    #[tokio::test]
    async fn test_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
            .mount(&server)
            .await;

        let translator = GoogleTranslator::new(Client::new(), server.uri());
        let err = translator.translate("大家好", "zh-tw", "vi").await.unwrap_err();

        assert!(matches!(err, TranslateError::Status { status: 429, .. }));
    }
}
