//! Slack Web API client.
//!
//! Posts Block Kit messages with `chat.postMessage`.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, header::RETRY_AFTER};
use secrecy::{ExposeSecret, SecretString};
use slack_relay_core::ChannelId;
use tracing::{debug, error, info, instrument, warn};

use super::error::SlackError;
use super::messages::OutboundMessage;
use super::sender::MessageSender;
use super::types::{Block, PostMessageResponse, SlackMessage};

/// Slack Web API base URL.
pub const SLACK_API_BASE: &str = "https://slack.com/api";

/// Log target for request/response dumps enabled by the client's debug flag.
pub const SLACK_DEBUG_TARGET: &str = "slack_api_debug";

/// Slack API client for posting messages.
#[derive(Clone)]
pub struct SlackClient {
    /// HTTP client.
    client: Client,
    /// Bot token for authentication.
    token: SecretString,
    /// Web API base URL, without trailing slash.
    api_base: String,
    /// Log request payloads and raw responses.
    debug: bool,
}

impl std::fmt::Debug for SlackClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlackClient")
            .field("token", &"[REDACTED]")
            .field("api_base", &self.api_base)
            .field("debug", &self.debug)
            .finish_non_exhaustive()
    }
}

impl SlackClient {
    /// Create a new Slack client against the public Web API.
    #[must_use]
    pub fn new(token: SecretString, debug: bool) -> Self {
        Self {
            client: Client::new(),
            token,
            api_base: SLACK_API_BASE.to_string(),
            debug,
        }
    }

    /// Point the client at a different Web API base URL.
    #[must_use]
    pub fn with_base_url(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    /// Get the Web API base URL.
    #[must_use]
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Post a message to a channel.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails, Slack answers with a
    /// non-success status, or Slack returns `ok: false`.
    #[instrument(skip(self, blocks), fields(channel = %channel))]
    pub async fn post_message(
        &self,
        channel: &ChannelId,
        blocks: Vec<Block>,
    ) -> Result<PostMessageResponse, SlackError> {
        let message = SlackMessage {
            channel: channel.to_string(),
            blocks,
            text: None,
        };

        if self.debug {
            info!(
                target: SLACK_DEBUG_TARGET,
                payload = %serde_json::to_string(&message).unwrap_or_default(),
                "Slack chat.postMessage request"
            );
        }

        let response = self
            .client
            .post(format!("{}/chat.postMessage", self.api_base))
            .bearer_auth(self.token.expose_secret())
            .json(&message)
            .send()
            .await
            .map_err(|e| SlackError::Request(e.to_string()))?;

        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get(RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(0);
            warn!(retry_after, "Slack rate limited the request");
            return Err(SlackError::RateLimited { retry_after });
        }

        if !status.is_success() {
            error!(status = %status, "Slack returned non-success status");
            return Err(SlackError::Status(status.to_string()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SlackError::Response(e.to_string()))?;

        if self.debug {
            info!(target: SLACK_DEBUG_TARGET, body = %body, "Slack chat.postMessage response");
        }

        let result: PostMessageResponse =
            serde_json::from_str(&body).map_err(|e| SlackError::Response(e.to_string()))?;

        if let Some(warning) = &result.warning {
            warn!(warning = %warning, "Slack API warning posting message");
        }

        if !result.ok {
            error!(
                error = ?result.error,
                "Slack API error posting message"
            );
            return Err(SlackError::Api(
                result.error.unwrap_or_else(|| "unknown_error".to_string()),
            ));
        }

        debug!(
            ts = ?result.ts,
            channel = ?result.channel,
            "Message posted to Slack"
        );

        Ok(result)
    }
}

#[async_trait]
impl MessageSender for SlackClient {
    async fn send(
        &self,
        channel: &ChannelId,
        message: &OutboundMessage,
    ) -> Result<(), SlackError> {
        self.post_message(channel, message.to_blocks()).await?;
        Ok(())
    }
}
