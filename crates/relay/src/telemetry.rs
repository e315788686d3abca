//! Tracing and Sentry initialization shared by the relay binaries.

use sentry::integrations::tracing as sentry_tracing;
use slack_relay_core::LogLevel;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{LogFormat, RelayConfig};
use crate::slack::SLACK_DEBUG_TARGET;

/// Crates whose events are governed by `SLACK_LOGLEVEL`.
const LOG_TARGETS: &[&str] = &["slack_relay", "slack_relay_cli", "tower_http"];

/// Initialize Sentry error tracking and return guard that must be kept alive.
pub fn init_sentry(config: &RelayConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: config
                .sentry_environment
                .clone()
                .map(std::borrow::Cow::Owned),
            sample_rate: config.sentry_sample_rate,
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    tracing::info!("Sentry initialized");
    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

/// Default filter directive for a log level.
///
/// With `slack_debug` set, Slack request/response dumps are logged whatever
/// the level.
#[must_use]
pub fn filter_directive(level: LogLevel, slack_debug: bool) -> String {
    let mut directives: Vec<String> = LOG_TARGETS
        .iter()
        .map(|target| format!("{target}={}", level.filter_directive()))
        .collect();
    if slack_debug {
        directives.push(format!("{SLACK_DEBUG_TARGET}=info"));
    }
    directives.join(",")
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level comes from `SLACK_LOGLEVEL`.
/// Called once at startup, never per request.
pub fn init_tracing(level: LogLevel, slack_debug: bool, format: LogFormat) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| filter_directive(level, slack_debug).into());

    let is_json = format == LogFormat::Json;
    let json_layer = is_json.then(|| tracing_subscriber::fmt::layer().json().flatten_event(true));
    let text_layer = (!is_json).then(|| tracing_subscriber::fmt::layer());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directive_scopes_relay_crates() {
        assert_eq!(
            filter_directive(LogLevel::Warn, false),
            "slack_relay=warn,slack_relay_cli=warn,tower_http=warn"
        );
    }

    #[test]
    fn test_filter_directive_fatal_maps_to_error() {
        assert!(filter_directive(LogLevel::Fatal, false).starts_with("slack_relay=error"));
    }

    #[test]
    fn test_filter_directive_parses() {
        for level in [LogLevel::Debug, LogLevel::Info, LogLevel::Fatal] {
            for slack_debug in [false, true] {
                let directive = filter_directive(level, slack_debug);
                assert!(tracing_subscriber::EnvFilter::try_new(directive).is_ok());
            }
        }
    }

    #[test]
    fn test_slack_debug_target_ignores_level() {
        let directive = filter_directive(LogLevel::Warn, true);
        assert!(directive.starts_with("slack_relay=warn"));
        assert!(directive.ends_with(",slack_api_debug=info"));

        assert!(!filter_directive(LogLevel::Error, false).contains(SLACK_DEBUG_TARGET));
    }
}
