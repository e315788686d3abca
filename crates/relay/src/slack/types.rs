//! Slack Block Kit types for relayed messages.
//!
//! These types represent the subset of the Slack Block Kit specification
//! the relay emits: a header block and a `mrkdwn` section block.
//!
//! See: <https://api.slack.com/block-kit>

use serde::{Deserialize, Serialize};

/// Body of a `chat.postMessage` request.
#[derive(Debug, Clone, Serialize)]
pub struct SlackMessage {
    /// Channel ID or name to post to.
    pub channel: String,
    /// Message blocks.
    pub blocks: Vec<Block>,
    /// Optional plain text fallback.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Block Kit block types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// Header block with large plain text.
    Header {
        #[serde(skip_serializing_if = "Option::is_none")]
        block_id: Option<String>,
        text: Text,
    },
    /// Section block with text.
    Section {
        #[serde(skip_serializing_if = "Option::is_none")]
        block_id: Option<String>,
        text: Text,
    },
}

/// Text object types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Text {
    /// Plain text (no formatting).
    PlainText { text: String, emoji: bool },
    /// Markdown text (supports formatting).
    Mrkdwn {
        text: String,
        #[serde(skip_serializing_if = "std::ops::Not::not")]
        verbatim: bool,
    },
}

impl Text {
    /// Create a plain text object with emoji shortcodes left as typed.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self::PlainText {
            text: text.into(),
            emoji: false,
        }
    }

    /// Create a markdown text object.
    #[must_use]
    pub fn mrkdwn(text: impl Into<String>) -> Self {
        Self::Mrkdwn {
            text: text.into(),
            verbatim: false,
        }
    }

    /// The raw text content.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::PlainText { text, .. } | Self::Mrkdwn { text, .. } => text,
        }
    }
}

// =============================================================================
// Response Types
// =============================================================================

/// Response from posting a message.
#[derive(Debug, Clone, Deserialize)]
pub struct PostMessageResponse {
    /// Whether the request was successful.
    pub ok: bool,
    /// Channel ID where message was posted.
    #[serde(default)]
    pub channel: Option<String>,
    /// Message timestamp (unique ID).
    #[serde(default)]
    pub ts: Option<String>,
    /// Error code if not ok.
    #[serde(default)]
    pub error: Option<String>,
    /// Non-fatal warning codes, comma separated.
    #[serde(default)]
    pub warning: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_header_block_serialization() {
        let block = Block::Header {
            block_id: Some("header_block".to_string()),
            text: Text::plain("Build failed :fire:"),
        };

        assert_eq!(
            serde_json::to_value(&block).expect("serializes"),
            json!({
                "type": "header",
                "block_id": "header_block",
                "text": {"type": "plain_text", "text": "Build failed :fire:", "emoji": false}
            })
        );
    }

    #[test]
    fn test_section_block_serialization() {
        let block = Block::Section {
            block_id: None,
            text: Text::mrkdwn("*bold*"),
        };

        assert_eq!(
            serde_json::to_value(&block).expect("serializes"),
            json!({
                "type": "section",
                "text": {"type": "mrkdwn", "text": "*bold*"}
            })
        );
    }

    #[test]
    fn test_message_omits_missing_fallback_text() {
        let message = SlackMessage {
            channel: "C123".to_string(),
            blocks: vec![],
            text: None,
        };

        let value = serde_json::to_value(&message).expect("serializes");
        assert!(value.get("text").is_none());
        assert_eq!(value["channel"], "C123");
    }

    #[test]
    fn test_post_message_response_error() {
        let response: PostMessageResponse =
            serde_json::from_str(r#"{"ok":false,"error":"channel_not_found"}"#)
                .expect("deserializes");

        assert!(!response.ok);
        assert_eq!(response.error.as_deref(), Some("channel_not_found"));
        assert!(response.ts.is_none());
    }
}
