//! Slack-related errors.

use thiserror::Error;

/// Errors that can occur when sending to Slack.
#[derive(Debug, Error)]
pub enum SlackError {
    /// HTTP request failed.
    #[error("Slack request failed: {0}")]
    Request(String),

    /// Failed to read or parse the response.
    #[error("Slack response error: {0}")]
    Response(String),

    /// Slack answered with a non-success HTTP status.
    #[error("slack server error: {0}")]
    Status(String),

    /// Slack throttled the request (HTTP 429).
    #[error("slack rate limit exceeded, retry after {retry_after}s")]
    RateLimited {
        /// Seconds from the `Retry-After` header.
        retry_after: u64,
    },

    /// Slack API returned `ok: false`; holds Slack's error code verbatim.
    #[error("{0}")]
    Api(String),
}
