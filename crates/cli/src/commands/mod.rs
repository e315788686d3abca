//! CLI command implementations.

use thiserror::Error;

pub mod config;
pub mod invoke;

/// Errors that can occur before the relay runs.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Reading the request body failed.
    #[error("Failed to read request body: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding the event from arguments failed.
    #[error("Failed to encode event: {0}")]
    Encode(#[from] serde_json::Error),
}
