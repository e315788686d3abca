//! Inbound event payload.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// An event received by the relay.
///
/// Only `title` and `body.text` are recognized. Unknown fields are ignored,
/// and missing or `null` fields decode as empty strings. Field names match
/// case-insensitively when no exact match exists, a repeated key keeps its
/// last value, and a top-level `null` is an empty message.
///
/// ```
/// use slack_relay_core::InboundMessage;
///
/// let msg = InboundMessage::from_slice(br#"{"title":"Deploy","body":{"text":"*done*"}}"#).unwrap();
/// assert_eq!(msg.title, "Deploy");
/// assert_eq!(msg.body.text, "*done*");
///
/// let empty = InboundMessage::from_slice(b"{}").unwrap();
/// assert!(empty.title.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundMessage {
    /// Rendered as the plain-text header.
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Nested body carrying the markup text.
    #[serde(default, deserialize_with = "null_as_default")]
    pub body: MessageBody,
}

/// Body of an [`InboundMessage`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    /// Slack `mrkdwn` text for the section block.
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
}

impl InboundMessage {
    /// Create a message from a title and body text.
    #[must_use]
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: MessageBody { text: text.into() },
        }
    }

    /// Decode a message from a raw JSON request body.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not JSON, or not an object of the
    /// expected shape (for example a `title` that is not a string).
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_slice(bytes)?;
        Self::from_value(value)
    }

    fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        match value {
            Value::Null => Ok(Self::default()),
            Value::Object(map) => {
                let mut map = fold_keys(map, &["title", "body"]);
                if let Some(Value::Object(body)) = map.get_mut("body") {
                    *body = fold_keys(std::mem::take(body), &["text"]);
                }
                Self::deserialize(Value::Object(map))
            }
            other => Self::deserialize(other),
        }
    }
}

/// Rename keys that match `fields` ignoring ASCII case. An exact key wins.
fn fold_keys(mut map: Map<String, Value>, fields: &[&str]) -> Map<String, Value> {
    for &field in fields {
        if map.contains_key(field) {
            continue;
        }
        let folded = map
            .keys()
            .rev()
            .find(|key| key.eq_ignore_ascii_case(field))
            .cloned();
        if let Some(value) = folded.and_then(|key| map.remove(&key)) {
            map.insert(field.to_string(), value);
        }
    }
    map
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
