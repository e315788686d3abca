//! Unified error handling for the relay.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::slack::SlackError;

/// Per-request error produced by a relay invocation.
#[derive(Debug, Error)]
pub enum RelayError {
    /// Request body is not a valid event payload.
    #[error("Failed to decode message: {0}")]
    Decode(#[from] serde_json::Error),

    /// Slack did not accept the message.
    #[error("Failed to send message to Slack. Error: {0}")]
    Send(#[from] SlackError),
}

impl RelayError {
    /// HTTP status reported for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Decode(_) => StatusCode::BAD_REQUEST,
            Self::Send(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        if matches!(self, Self::Send(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Relay request error"
            );
        } else {
            tracing::warn!(error = %self, "Rejected relay request");
        }

        (self.status_code(), self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_error_body() {
        let err = RelayError::Send(SlackError::Api("rate_limited".to_string()));
        assert_eq!(
            err.to_string(),
            "Failed to send message to Slack. Error: rate_limited"
        );
    }

    #[test]
    fn test_relay_error_status_codes() {
        fn get_status(err: RelayError) -> StatusCode {
            err.into_response().status()
        }

        let decode = serde_json::from_slice::<serde_json::Value>(b"{").unwrap_err();
        assert_eq!(
            get_status(RelayError::Decode(decode)),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(RelayError::Send(SlackError::Api("channel_not_found".into()))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
