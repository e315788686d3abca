//! Relay configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `SLACK_DEBUG` - Slack client debug logging (`true`/`false`, `1`/`0`, `t`/`f`).
//!   Request/response dumps go to the `slack_api_debug` target, which is
//!   enabled regardless of `SLACK_LOGLEVEL` unless `RUST_LOG` is set
//! - `SLACK_CHANNEL` - Channel ID or name messages are posted to
//!
//! ## Secret file
//! - `/var/openfaas/secrets/slack-api-token` - Slack bot token (whitespace trimmed)
//!
//! ## Optional
//! - `SLACK_LOGLEVEL` - `debug`, `warn`, `error`, `fatal` (anything else: `info`)
//! - `SLACK_API_TOKEN_FILE` - Override the secret file path
//! - `SLACK_API_BASE` - Override the Slack Web API base URL
//! - `RELAY_HOST` - Bind address (default: 0.0.0.0)
//! - `RELAY_PORT` - Listen port (default: 8080)
//! - `RELAY_LOG_FORMAT` - `json` for JSON logs, text otherwise
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Sentry error sample rate (default: 1.0)

use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

use secrecy::SecretString;
use slack_relay_core::{ChannelId, LogLevel, parse_flag};
use thiserror::Error;

use crate::slack::SLACK_API_BASE;

/// Default location of the mounted Slack token secret.
pub const DEFAULT_TOKEN_PATH: &str = "/var/openfaas/secrets/slack-api-token";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Unusable secret {}: {reason}", .path.display())]
    Secret { path: PathBuf, reason: String },
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Relay application configuration.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Diagnostic verbosity
    pub log_level: LogLevel,
    /// Log output format
    pub log_format: LogFormat,
    /// Slack delivery configuration
    pub slack: SlackConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g., "staging", "production")
    pub sentry_environment: Option<String>,
    /// Sentry error sample rate (0.0 to 1.0)
    pub sentry_sample_rate: f32,
}

/// Slack delivery configuration.
///
/// Implements `Debug` manually to redact the token.
#[derive(Clone)]
pub struct SlackConfig {
    /// Enables request/response logging in the Slack client.
    pub debug: bool,
    /// Bot token read from the secret file.
    pub api_token: SecretString,
    /// Target channel.
    pub channel: ChannelId,
    /// Web API base URL.
    pub api_base: String,
}

impl std::fmt::Debug for SlackConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlackConfig")
            .field("debug", &self.debug)
            .field("api_token", &"[REDACTED]")
            .field("channel", &self.channel)
            .field("api_base", &self.api_base)
            .finish()
    }
}

impl RelayConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid,
    /// or if the token secret is unreadable or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Same as [`RelayConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level = LogLevel::from_env_value(lookup("SLACK_LOGLEVEL").as_deref());
        let slack = SlackConfig::from_lookup(&lookup)?;

        let host = get_env_or_default(&lookup, "RELAY_HOST", "0.0.0.0")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("RELAY_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default(&lookup, "RELAY_PORT", "8080")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("RELAY_PORT".to_string(), e.to_string()))?;
        let log_format = match lookup("RELAY_LOG_FORMAT").as_deref() {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };
        let sentry_sample_rate = lookup("SENTRY_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(1.0);

        Ok(Self {
            host,
            port,
            log_level,
            log_format,
            slack,
            sentry_dsn: lookup("SENTRY_DSN"),
            sentry_environment: lookup("SENTRY_ENVIRONMENT"),
            sentry_sample_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl SlackConfig {
    /// Resolve the debug flag, token and channel, in that order.
    fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let debug_value = lookup("SLACK_DEBUG").unwrap_or_default();
        let debug = parse_flag(&debug_value)
            .map_err(|e| ConfigError::InvalidEnvVar("SLACK_DEBUG".to_string(), e.to_string()))?;

        let token_path = lookup("SLACK_API_TOKEN_FILE")
            .map_or_else(|| PathBuf::from(DEFAULT_TOKEN_PATH), PathBuf::from);
        let api_token = read_token(&token_path)?;

        let channel_value = get_required_env(lookup, "SLACK_CHANNEL")?;
        let channel = ChannelId::parse(&channel_value)
            .map_err(|e| ConfigError::InvalidEnvVar("SLACK_CHANNEL".to_string(), e.to_string()))?;
        tracing::debug!(channel = %channel, "Slack channel resolved");

        let api_base = get_env_or_default(lookup, "SLACK_API_BASE", SLACK_API_BASE);

        Ok(Self {
            debug,
            api_token,
            channel,
            api_base,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env<F>(lookup: &F, key: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an environment variable with a default value.
fn get_env_or_default<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).unwrap_or_else(|| default.to_string())
}

/// Read the token secret file, trimming surrounding whitespace.
fn read_token(path: &Path) -> Result<SecretString, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Secret {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let token = raw.trim();
    if token.is_empty() {
        return Err(ConfigError::Secret {
            path: path.to_path_buf(),
            reason: "Missing Slack API token".to_string(),
        });
    }

    Ok(SecretString::from(token.to_string()))
}
