//! Slack Relay CLI - one-shot invocations and configuration checks.
//!
//! # Usage
//!
//! ```bash
//! # Relay a raw event body from a file (or stdin when --file is omitted)
//! relay-cli invoke --file event.json
//! echo '{"title":"Deploy","body":{"text":"*done*"}}' | relay-cli invoke
//!
//! # Relay an event built from arguments
//! relay-cli send --title "Build failed" --text "*job-42* failed"
//!
//! # Resolve configuration and print a redacted summary
//! relay-cli check-config
//! ```
//!
//! # Commands
//!
//! - `invoke` - Run the relay once on a raw request body
//! - `send` - Run the relay once on a title and text
//! - `check-config` - Validate environment and token secret
//!
//! Every command resolves the same environment as the server. A
//! configuration error exits non-zero before anything is sent.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use slack_relay::RelayConfig;
use slack_relay::telemetry::init_tracing;

mod commands;

#[derive(Parser)]
#[command(name = "relay-cli")]
#[command(author, version, about = "Slack relay CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Relay a raw event body once
    Invoke {
        /// File holding the request body (reads stdin when omitted)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Relay an event built from a title and text
    Send {
        /// Header text
        #[arg(short, long)]
        title: String,

        /// Section text (Slack mrkdwn)
        #[arg(short = 'x', long)]
        text: String,
    },
    /// Resolve configuration and print a redacted summary
    CheckConfig,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match RelayConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing_subscriber::fmt::init();
            tracing::error!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    init_tracing(config.log_level, config.slack.debug, config.log_format);

    match run(cli, &config).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("Command failed: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli, config: &RelayConfig) -> Result<ExitCode, commands::CommandError> {
    match cli.command {
        Commands::Invoke { file } => {
            let body = commands::invoke::read_body(file.as_deref())?;
            Ok(commands::invoke::run(config, body).await)
        }
        Commands::Send { title, text } => {
            let body = commands::invoke::encode_event(&title, &text)?;
            Ok(commands::invoke::run(config, body).await)
        }
        Commands::CheckConfig => {
            commands::config::print_summary(config);
            Ok(ExitCode::SUCCESS)
        }
    }
}
