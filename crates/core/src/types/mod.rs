//! Core types for the Slack relay.
//!
//! This module provides type-safe wrappers for the relay's domain concepts.

pub mod channel;
pub mod flag;
pub mod log_level;
pub mod message;

pub use channel::{ChannelId, ChannelIdError};
pub use flag::{ParseFlagError, parse_flag};
pub use log_level::LogLevel;
pub use message::{InboundMessage, MessageBody};
