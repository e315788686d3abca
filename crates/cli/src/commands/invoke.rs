//! One-shot relay invocation.
//!
//! Mirrors a single function invocation: one body in, one send, one
//! response out. The response body goes to stdout on success and stderr on
//! failure; the exit code is `0` only for a `200`.

use std::io::{Read, Write};
use std::path::Path;
use std::process::ExitCode;

use slack_relay::{Bytes, Relay, RelayConfig};
use slack_relay_core::InboundMessage;

use super::CommandError;

/// Read the raw request body from `file`, or stdin when `None`.
///
/// # Errors
///
/// Returns an I/O error if the source cannot be read.
pub fn read_body(file: Option<&Path>) -> Result<Bytes, CommandError> {
    let bytes = match file {
        Some(path) => std::fs::read(path)?,
        None => {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf)?;
            buf
        }
    };
    Ok(Bytes::from(bytes))
}

/// Encode an event body from a title and text.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn encode_event(title: &str, text: &str) -> Result<Bytes, CommandError> {
    let body = serde_json::to_vec(&InboundMessage::new(title, text))?;
    Ok(Bytes::from(body))
}

/// Run the relay once against the configured Slack channel.
#[allow(clippy::print_stderr)]
pub async fn run(config: &RelayConfig, body: Bytes) -> ExitCode {
    let relay = Relay::from_config(&config.slack);

    match relay.invoke(body).await {
        Ok(echoed) => {
            let mut stdout = std::io::stdout().lock();
            match stdout.write_all(&echoed).and_then(|()| stdout.flush()) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    tracing::error!(error = %e, "Failed to write response body");
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            tracing::error!(status = e.status_code().as_u16(), error = %e, "Invocation failed");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::commands::testing::config_for;

    const EVENT: &str = r#"{"title":"Build failed","body":{"text":"*job-42*"}}"#;

    #[test]
    fn test_encode_event_shape() {
        let body = encode_event("Build failed", "*job-42*").unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(value["title"], "Build failed");
        assert_eq!(value["body"]["text"], "*job-42*");
    }

    #[test]
    fn test_read_body_from_file_is_verbatim() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ \"title\" : \"x\" }\n").unwrap();

        let body = read_body(Some(file.path())).unwrap();
        assert_eq!(&body[..], b"{ \"title\" : \"x\" }\n");
    }

    #[test]
    fn test_read_body_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_body(Some(&dir.path().join("missing.json")));
        assert!(matches!(result, Err(CommandError::Io(_))));
    }

    #[tokio::test]
    async fn test_run_exits_zero_when_slack_accepts() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat.postMessage"))
            .and(body_partial_json(json!({"channel": "C0CLITEST"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .expect(1)
            .mount(&server)
            .await;

        let (config, _secret) = config_for(&server.uri());
        let code = run(&config, Bytes::from_static(EVENT.as_bytes())).await;

        assert_eq!(code, ExitCode::SUCCESS);
    }

    #[tokio::test]
    async fn test_run_exits_one_on_send_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat.postMessage"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"ok": false, "error": "rate_limited"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let (config, _secret) = config_for(&server.uri());
        let code = run(&config, Bytes::from_static(EVENT.as_bytes())).await;

        assert_eq!(code, ExitCode::FAILURE);
    }

    #[tokio::test]
    async fn test_run_malformed_body_never_sends() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .expect(0)
            .mount(&server)
            .await;

        let (config, _secret) = config_for(&server.uri());
        let code = run(&config, Bytes::from_static(b"{\"title\": ")).await;

        assert_eq!(code, ExitCode::FAILURE);
    }
}
