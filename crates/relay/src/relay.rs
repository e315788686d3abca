//! The relay pipeline: decode, build, send, echo.

use std::sync::Arc;

use axum::body::Bytes;
use slack_relay_core::{ChannelId, InboundMessage};
use tracing::{debug, info, instrument};

use crate::config::SlackConfig;
use crate::error::RelayError;
use crate::slack::{MessageSender, SlackClient, build_message};

/// Forwards inbound events to one Slack channel.
///
/// Cheap to clone; the sender is shared.
#[derive(Clone)]
pub struct Relay {
    sender: Arc<dyn MessageSender>,
    channel: ChannelId,
}

impl std::fmt::Debug for Relay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Relay")
            .field("channel", &self.channel)
            .finish_non_exhaustive()
    }
}

impl Relay {
    /// Create a relay sending through `sender` to `channel`.
    #[must_use]
    pub fn new(sender: Arc<dyn MessageSender>, channel: ChannelId) -> Self {
        Self { sender, channel }
    }

    /// Create a relay backed by the Slack Web API.
    #[must_use]
    pub fn from_config(config: &SlackConfig) -> Self {
        let client = SlackClient::new(config.api_token.clone(), config.debug)
            .with_base_url(&config.api_base);
        Self::new(Arc::new(client), config.channel.clone())
    }

    /// Get the target channel.
    #[must_use]
    pub const fn channel(&self) -> &ChannelId {
        &self.channel
    }

    /// Run one invocation.
    ///
    /// Decodes `body`, builds the two-block message and sends it exactly
    /// once. On success the original bytes are handed back untouched so
    /// they can be echoed to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::Decode`] before any send if the body is not a
    /// valid event, or [`RelayError::Send`] if Slack rejects the message.
    #[instrument(skip_all, fields(channel = %self.channel, bytes = body.len()))]
    pub async fn invoke(&self, body: Bytes) -> Result<Bytes, RelayError> {
        let inbound = InboundMessage::from_slice(&body)?;
        let message = build_message(&inbound);
        debug!(title = %message.header, "Relaying message");

        self.sender.send(&self.channel, &message).await?;

        info!("Message relayed to Slack");
        Ok(body)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::slack::{OutboundMessage, SlackError};

    #[derive(Default)]
    struct StubSender {
        sent: Mutex<Vec<(String, OutboundMessage)>>,
        fail_with: Option<String>,
    }

    #[async_trait]
    impl MessageSender for StubSender {
        async fn send(
            &self,
            channel: &ChannelId,
            message: &OutboundMessage,
        ) -> Result<(), SlackError> {
            self.sent
                .lock()
                .unwrap()
                .push((channel.to_string(), message.clone()));
            match &self.fail_with {
                Some(code) => Err(SlackError::Api(code.clone())),
                None => Ok(()),
            }
        }
    }

    fn relay_with(sender: Arc<StubSender>) -> Relay {
        Relay::new(sender, ChannelId::parse("C0123").unwrap())
    }

    #[tokio::test]
    async fn test_invoke_echoes_original_bytes() {
        let sender = Arc::new(StubSender::default());
        let relay = relay_with(sender.clone());

        // Whitespace and key order must survive untouched
        let body = Bytes::from_static(b"{ \"body\": {\"text\": \"hi\"},  \"title\": \"T\" }");
        let echoed = relay.invoke(body.clone()).await.unwrap();

        assert_eq!(echoed, body);
        let sent = sender.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        let (channel, message) = sent.first().unwrap();
        assert_eq!(channel, "C0123");
        assert_eq!(message.header, "T");
        assert_eq!(message.text, "hi");
    }

    #[tokio::test]
    async fn test_invoke_send_failure() {
        let sender = Arc::new(StubSender {
            fail_with: Some("rate_limited".to_string()),
            ..Default::default()
        });
        let relay = relay_with(sender.clone());

        let err = relay
            .invoke(Bytes::from_static(br#"{"title":"t","body":{"text":"x"}}"#))
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Failed to send message to Slack. Error: rate_limited"
        );
        assert_eq!(sender.sent.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_invoke_malformed_body_never_sends() {
        let sender = Arc::new(StubSender::default());
        let relay = relay_with(sender.clone());

        let err = relay
            .invoke(Bytes::from_static(b"{\"title\": "))
            .await
            .unwrap_err();

        assert!(matches!(err, RelayError::Decode(_)));
        assert!(sender.sent.lock().unwrap().is_empty());
    }
}
