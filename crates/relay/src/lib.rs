//! Slack relay library.
//!
//! This crate provides the relay functionality as a library,
//! allowing it to be tested and reused by the CLI.
//!
//! An invocation decodes a `{ "title", "body": { "text" } }` event, posts it
//! to the configured Slack channel as a header + section message, and echoes
//! the request body back on success.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod relay;
pub mod routes;
pub mod slack;
pub mod state;
pub mod telemetry;

pub use axum::body::Bytes;
pub use config::{ConfigError, RelayConfig};
pub use error::RelayError;
pub use relay::Relay;
pub use state::AppState;
