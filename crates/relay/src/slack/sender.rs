//! Seam between the relay and the Slack Web API.

use async_trait::async_trait;
use slack_relay_core::ChannelId;

use super::error::SlackError;
use super::messages::OutboundMessage;

/// Sends a two-block message (header text, markup text) to a channel.
///
/// [`SlackClient`](super::SlackClient) is the production implementation;
/// tests substitute their own to observe or fail sends without a network.
#[async_trait]
pub trait MessageSender: Send + Sync {
    /// Send `message` to `channel` once.
    ///
    /// # Errors
    ///
    /// Returns a [`SlackError`] describing why the message was not delivered.
    async fn send(&self, channel: &ChannelId, message: &OutboundMessage)
    -> Result<(), SlackError>;
}
