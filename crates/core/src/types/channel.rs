//! Slack channel identifier.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`ChannelId`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ChannelIdError {
    /// The input string is empty.
    #[error("channel cannot be empty")]
    Empty,
}

/// Target channel for relayed messages.
///
/// Accepts anything Slack accepts in the `channel` field of
/// `chat.postMessage`: a channel ID (`C0123ABCD`), a name (`#alerts`), or a
/// user ID for direct messages. The only local constraint is non-emptiness.
///
/// ```
/// use slack_relay_core::ChannelId;
///
/// assert!(ChannelId::parse("C0123ABCD").is_ok());
/// assert!(ChannelId::parse("#alerts").is_ok());
/// assert!(ChannelId::parse("").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ChannelId(String);

impl ChannelId {
    /// Parse a `ChannelId` from a string.
    ///
    /// # Errors
    ///
    /// Returns [`ChannelIdError::Empty`] if the input is empty.
    pub fn parse(s: &str) -> Result<Self, ChannelIdError> {
        if s.is_empty() {
            return Err(ChannelIdError::Empty);
        }
        Ok(Self(s.to_owned()))
    }

    /// Returns the channel as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `ChannelId` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ChannelId {
    type Err = ChannelIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for ChannelId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
