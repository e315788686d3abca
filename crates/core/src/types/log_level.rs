//! Diagnostic verbosity selected by `SLACK_LOGLEVEL`.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Log verbosity for the relay.
///
/// `Fatal` is accepted for compatibility with existing deployments. It
/// logs the same events as `Error`, since `tracing` has no level above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
    Fatal,
}

impl LogLevel {
    /// Select a level from a raw environment value.
    ///
    /// Matching is exact and case-sensitive. Unset or unrecognized values
    /// (including `"info"`) select [`LogLevel::Info`].
    ///
    /// ```
    /// use slack_relay_core::LogLevel;
    ///
    /// assert_eq!(LogLevel::from_env_value(Some("warn")), LogLevel::Warn);
    /// assert_eq!(LogLevel::from_env_value(Some("WARN")), LogLevel::Info);
    /// assert_eq!(LogLevel::from_env_value(None), LogLevel::Info);
    /// ```
    #[must_use]
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value {
            Some("debug") => Self::Debug,
            Some("warn") => Self::Warn,
            Some("error") => Self::Error,
            Some("fatal") => Self::Fatal,
            _ => Self::Info,
        }
    }

    /// The `tracing` filter directive for this level.
    #[must_use]
    pub const fn filter_directive(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error | Self::Fatal => "error",
        }
    }

    /// The name as written in `SLACK_LOGLEVEL`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Fatal => "fatal",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognized_values() {
        assert_eq!(LogLevel::from_env_value(Some("debug")), LogLevel::Debug);
        assert_eq!(LogLevel::from_env_value(Some("warn")), LogLevel::Warn);
        assert_eq!(LogLevel::from_env_value(Some("error")), LogLevel::Error);
        assert_eq!(LogLevel::from_env_value(Some("fatal")), LogLevel::Fatal);
        assert_eq!(LogLevel::from_env_value(Some("info")), LogLevel::Info);
    }

    #[test]
    fn test_unrecognized_defaults_to_info() {
        assert_eq!(LogLevel::from_env_value(None), LogLevel::Info);
        assert_eq!(LogLevel::from_env_value(Some("")), LogLevel::Info);
        assert_eq!(LogLevel::from_env_value(Some("trace")), LogLevel::Info);
        assert_eq!(LogLevel::from_env_value(Some("Debug")), LogLevel::Info);
    }

    #[test]
    fn test_fatal_filters_like_error() {
        assert_eq!(LogLevel::Fatal.filter_directive(), "error");
        assert_eq!(LogLevel::Error.filter_directive(), "error");
        assert_eq!(LogLevel::Debug.filter_directive(), "debug");
    }

    #[test]
    fn test_display_round_trips_env_value() {
        for level in [
            LogLevel::Debug,
            LogLevel::Info,
            LogLevel::Warn,
            LogLevel::Error,
            LogLevel::Fatal,
        ] {
            assert_eq!(LogLevel::from_env_value(Some(&level.to_string())), level);
        }
    }
}
