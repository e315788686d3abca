//! Configuration check command.

use secrecy::ExposeSecret;
use slack_relay::RelayConfig;

/// Token kind prefix (`xoxb`, `xoxp`, ...) without exposing the token.
fn token_kind(token: &str) -> &str {
    match token.split_once('-') {
        Some((kind, _)) if kind.starts_with("xox") => kind,
        _ => "unknown",
    }
}

/// Print a redacted summary of the resolved configuration.
#[allow(clippy::print_stdout)]
pub fn print_summary(config: &RelayConfig) {
    println!("Configuration OK");
    println!("  channel:      {}", config.slack.channel);
    println!("  slack debug:  {}", config.slack.debug);
    println!("  slack api:    {}", config.slack.api_base);
    println!(
        "  token:        [REDACTED] ({})",
        token_kind(config.slack.api_token.expose_secret())
    );
    println!("  log level:    {}", config.log_level);
    println!("  listen:       {}", config.socket_addr());
    println!(
        "  sentry:       {}",
        if config.sentry_dsn.is_some() {
            "enabled"
        } else {
            "disabled"
        }
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_kind() {
        assert_eq!(token_kind("xoxb-123-456"), "xoxb");
        assert_eq!(token_kind("xoxp-abc"), "xoxp");
        assert_eq!(token_kind("plain-token"), "unknown");
        assert_eq!(token_kind("notoken"), "unknown");
    }
}
