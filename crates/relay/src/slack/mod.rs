//! Slack integration for relayed events.
//!
//! This module provides:
//! - [`SlackClient`] for posting messages with `chat.postMessage`
//! - [`MessageSender`], the seam the relay sends through
//! - Block Kit types and the relay message builder
//!
//! # Flow
//!
//! 1. An inbound event is decoded into an `InboundMessage`
//! 2. [`build_message`] turns it into a header + section [`OutboundMessage`]
//! 3. A [`MessageSender`] posts it to the configured channel once

mod client;
mod error;
mod messages;
mod sender;
mod types;

pub use client::{SLACK_API_BASE, SLACK_DEBUG_TARGET, SlackClient};
pub use error::SlackError;
pub use messages::{HEADER_BLOCK_ID, OutboundMessage, build_message};
pub use sender::MessageSender;
pub use types::{Block, PostMessageResponse, SlackMessage, Text};
