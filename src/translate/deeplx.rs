use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::interface::{Translate, TranslateError};

#[derive(Debug, Serialize)]
struct DeepLXRequest<'a> {
    text: &'a str,
    source_lang: String,
    target_lang: String,
}

#[derive(Debug, Deserialize)]
struct DeepLXResponse {
    code: u16,
    data: Option<String>,
}

/// DeepLX-compatible translation endpoint
pub struct DeepLXTranslator {
    client: Client,
    api_endpoint: String,
}

impl DeepLXTranslator {
    pub fn new(client: Client, api_endpoint: String) -> Self {
        Self {
            client,
            api_endpoint,
        }
    }

    /// DeepL uses bare upper-case codes: `zh-tw` -> `ZH`
    fn provider_code(code: &str) -> String {
        code.split('-').next().unwrap_or(code).to_uppercase()
    }
}

#[async_trait]
impl Translate for DeepLXTranslator {
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        dest_lang: &str,
    ) -> Result<String, TranslateError> {
        let request = DeepLXRequest {
            text,
            source_lang: Self::provider_code(source_lang),
            target_lang: Self::provider_code(dest_lang),
        };

        let response = self.client.post(&self.api_endpoint).json(&request).send().await?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(TranslateError::Status { status, body });
        }

        let result: DeepLXResponse = response.json().await?;
        match (result.code, result.data) {
            (200, Some(data)) => Ok(data),
            (code, _) => Err(TranslateError::InvalidResponse(format!(
                "DeepLX returned code {}",
                code
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_translate() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_json(json!({
                "text": "Xin chào",
                "source_lang": "VI",
                "target_lang": "ZH"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "code": 200,
                "data": "你好"
            })))
            .mount(&server)
            .await;

        let translator = DeepLXTranslator::new(Client::new(), format!("{}/translate", server.uri()));
        assert_eq!(
            translator.translate("Xin chào", "vi", "zh-tw").await.unwrap(),
            "你好"
        );
    }

    #[tokio::test]
    async fn test_non_200_code_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "code": 503,
                "data": null
            })))
            .mount(&server)
            .await;

        let translator = DeepLXTranslator::new(Client::new(), server.uri());
        let err = translator.translate("Xin chào", "vi", "zh-tw").await.unwrap_err();
        assert!(matches!(err, TranslateError::InvalidResponse(_)));
    }
}
