use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

/// Destination for reply messages
#[async_trait]
pub trait ReplySink: Send + Sync {
    /// Reply to the event identified by `reply_token` with a text message
    async fn reply(&self, reply_token: &str, text: &str) -> Result<(), anyhow::Error>;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReplyRequest<'a> {
    reply_token: &'a str,
    messages: Vec<TextMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct TextMessage<'a> {
    #[serde(rename = "type")]
    message_type: &'static str,
    text: &'a str,
}

/// Messaging API client
#[derive(Debug, Clone)]
pub struct LineClient {
    client: Client,
    api_base: String,
    channel_access_token: String,
}

impl LineClient {
    pub fn new(client: Client, api_base: String, channel_access_token: String) -> Self {
        Self {
            client,
            api_base,
            channel_access_token,
        }
    }
}

#[async_trait]
impl ReplySink for LineClient {
    async fn reply(&self, reply_token: &str, text: &str) -> Result<(), anyhow::Error> {
        let url = format!("{}/v2/bot/message/reply", self.api_base.trim_end_matches('/'));
        let request = ReplyRequest {
            reply_token,
            messages: vec![TextMessage {
                message_type: "text",
                text,
            }],
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.channel_access_token)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Reply API returned status {}: {}", status, body);
        }

        debug!("Replied to {}", reply_token);
        Ok(())
    }
}
