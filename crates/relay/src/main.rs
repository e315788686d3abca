//! Slack Relay - forwards HTTP events to a Slack channel.
//!
//! This binary serves the relay on port 8080 by default.
//!
//! # Architecture
//!
//! - Axum web framework
//! - Slack Web API (`chat.postMessage`) via reqwest
//! - Configuration resolved once at startup from the environment and the
//!   mounted token secret
//!
//! A configuration error stops the process before the listener is bound, so
//! no message can be sent with incomplete settings.

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::Router;
use slack_relay::config::RelayConfig;
use slack_relay::telemetry::{init_sentry, init_tracing};
use slack_relay::{AppState, Relay, routes};
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

#[tokio::main]
async fn main() {
    // Load configuration from environment (needed for Sentry and log level)
    let config = RelayConfig::from_env().expect("Failed to load configuration");

    // Initialize Sentry (must be done before tracing subscriber)
    let _sentry_guard = init_sentry(&config);

    init_tracing(config.log_level, config.slack.debug, config.log_format);
    tracing::info!(
        channel = %config.slack.channel,
        log_level = %config.log_level,
        slack_debug = config.slack.debug,
        "Configuration loaded"
    );

    let state = AppState::new(Relay::from_config(&config.slack));

    let app: Router = routes::router(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record(
                            "latency_ms",
                            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        );
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        // Sentry layers (outermost for full request coverage)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction());

    let addr = config.socket_addr();
    tracing::info!("slack relay listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
