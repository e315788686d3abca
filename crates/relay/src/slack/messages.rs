//! Slack message builder for relayed events.
//!
//! An inbound event becomes a two-block message:
//! - Header with the event title as plain text
//! - Section with the event body rendered as `mrkdwn`

use slack_relay_core::InboundMessage;

use super::types::{Block, Text};

/// Block ID assigned to the header block.
pub const HEADER_BLOCK_ID: &str = "header_block";

/// A message ready to be posted: header text plus markup text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    /// Plain text for the header block.
    pub header: String,
    /// `mrkdwn` text for the section block.
    pub text: String,
}

impl OutboundMessage {
    /// Render the Block Kit blocks for this message.
    #[must_use]
    pub fn to_blocks(&self) -> Vec<Block> {
        vec![
            Block::Header {
                block_id: Some(HEADER_BLOCK_ID.to_string()),
                text: Text::plain(&self.header),
            },
            Block::Section {
                block_id: None,
                text: Text::mrkdwn(&self.text),
            },
        ]
    }
}

/// Build the outbound message for an inbound event.
#[must_use]
pub fn build_message(inbound: &InboundMessage) -> OutboundMessage {
    OutboundMessage {
        header: inbound.title.clone(),
        text: inbound.body.text.clone(),
    }
}
