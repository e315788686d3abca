//! Integration test support for the Slack relay.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p slack-relay-integration-tests
//! ```
//!
//! No Slack workspace is needed: router tests send through
//! [`RecordingSender`], and client tests run against a local `wiremock`
//! server standing in for the Web API.
//!
//! # Test Categories
//!
//! - `relay_http` - Router behavior with a recording sender
//! - `slack_client` - `chat.postMessage` wire format and error mapping
//! - `relay_end_to_end` - Environment → router → mock Slack

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::collections::HashMap;
use std::io::Write;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::{Body, Bytes};
use axum::http::{Request, Response, header::CONTENT_TYPE};
use http_body_util::BodyExt;
use slack_relay::slack::{MessageSender, OutboundMessage, SlackError};
use slack_relay::{AppState, Relay, routes};
use slack_relay_core::ChannelId;
use tempfile::NamedTempFile;
use tower::ServiceExt;

/// Channel used by test relays.
pub const TEST_CHANNEL: &str = "C0TESTCHAN";

/// A send observed by [`RecordingSender`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedSend {
    pub channel: String,
    pub message: OutboundMessage,
}

/// [`MessageSender`] that records every send and optionally fails.
#[derive(Debug, Default)]
pub struct RecordingSender {
    sends: Mutex<Vec<RecordedSend>>,
    failure: Option<String>,
}

impl RecordingSender {
    /// A sender whose sends all succeed.
    #[must_use]
    pub fn succeeding() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// A sender whose sends all fail with the given Slack error code.
    #[must_use]
    pub fn failing(code: &str) -> Arc<Self> {
        Arc::new(Self {
            sends: Mutex::new(Vec::new()),
            failure: Some(code.to_string()),
        })
    }

    /// Sends observed so far.
    #[must_use]
    pub fn sends(&self) -> Vec<RecordedSend> {
        self.sends.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessageSender for RecordingSender {
    async fn send(
        &self,
        channel: &ChannelId,
        message: &OutboundMessage,
    ) -> Result<(), SlackError> {
        self.sends.lock().unwrap().push(RecordedSend {
            channel: channel.to_string(),
            message: message.clone(),
        });
        match &self.failure {
            Some(code) => Err(SlackError::Api(code.clone())),
            None => Ok(()),
        }
    }
}

/// Router wired to a relay that sends through `sender`.
#[must_use]
pub fn test_router(sender: Arc<RecordingSender>) -> Router {
    let relay = Relay::new(sender, ChannelId::parse(TEST_CHANNEL).unwrap());
    routes::router(AppState::new(relay))
}

/// Build a JSON `POST /` request.
#[must_use]
pub fn relay_request(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header(CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

/// Send a request through the router via `tower::ServiceExt::oneshot`.
pub async fn oneshot(router: Router, request: Request<Body>) -> Response<Body> {
    router.oneshot(request).await.unwrap()
}

/// Collect a response body.
pub async fn body_bytes(response: Response<Body>) -> Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

/// Write a token secret file.
#[must_use]
pub fn token_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

/// Variable source over a fixed set of pairs, for `RelayConfig::from_lookup`.
#[must_use]
pub fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}
