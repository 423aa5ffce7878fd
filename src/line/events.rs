use serde::Deserialize;

/// Webhook request body. Fields the bot does not use are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookBody {
    #[serde(default)]
    pub events: Vec<WebhookEvent>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookEvent {
    #[serde(rename = "type")]
    pub event_type: String,

    pub reply_token: Option<String>,

    pub message: Option<MessageContent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessageContent {
    #[serde(rename = "type")]
    pub message_type: String,

    pub text: Option<String>,
}

impl WebhookEvent {
    /// Text of a text-message event
    pub fn text(&self) -> Option<&str> {
        self.message
            .as_ref()
            .filter(|m| m.message_type == "text")
            .and_then(|m| m.text.as_deref())
    }

    pub fn is_message(&self) -> bool {
        self.event_type == "message" && self.message.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_text_message() {
        let body: WebhookBody = serde_json::from_str(
            r#"{
                "destination": "Uxxxxxxxx",
                "events": [{
                    "type": "message",
                    "mode": "active",
                    "timestamp": 1462629479859,
                    "source": {"type": "user", "userId": "U4af4980629"},
                    "webhookEventId": "01FZ74A0TDDPYRVKNK77XKC3ZR",
                    "replyToken": "nHuyWiB7yP5Zw52FIkcQobQuGDXCTA",
                    "message": {"id": "444573844083572737", "type": "text", "text": "大家好"}
                }]
            }"#,
        )
        .unwrap();

        let event = &body.events[0];
        assert!(event.is_message());
        assert_eq!(event.reply_token.as_deref(), Some("nHuyWiB7yP5Zw52FIkcQobQuGDXCTA"));
        assert_eq!(event.text(), Some("大家好"));
    }

    #[test]
    fn test_sticker_has_no_text() {
        let body: WebhookBody = serde_json::from_str(
            r#"{"events": [{
                "type": "message",
                "replyToken": "t",
                "message": {"id": "1", "type": "sticker", "packageId": "1", "stickerId": "1"}
            }]}"#,
        )
        .unwrap();

        assert!(body.events[0].is_message());
        assert_eq!(body.events[0].text(), None);
    }

    #[test]
    fn test_missing_events_is_empty() {
        let body: WebhookBody = serde_json::from_str(r#"{"destination": "U1"}"#).unwrap();
        assert!(body.events.is_empty());
    }

    #[test]
    fn test_verification_ping() {
        let body: WebhookBody = serde_json::from_str(r#"{"destination": "U1", "events": []}"#).unwrap();
        assert!(body.events.is_empty());
    }
}
