//! elasticloud - Decode hosted search deployment cloud ids.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use elasticloud::cli::output;
use elasticloud::cli::{execute, Cli};
use elasticloud::core::constants::{LOG_ENV, LOG_FORMAT_ENV};
use elasticloud::error::{ConfigError, DecodeError, Error};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("elasticloud=debug")
        } else {
            EnvFilter::new("elasticloud=warn")
        }
    });

    let json_logs = std::env::var(LOG_FORMAT_ENV).is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    let registry = tracing_subscriber::registry().with(filter);
    if json_logs {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .without_time()
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    if let Err(e) = execute(cli.command, cli.config) {
        let suggestion = match &e {
            Error::Config(ConfigError::MissingCloudId) => {
                Some("pass a cloud id or set ELASTICLOUD_CLOUD_ID")
            }
            Error::Config(ConfigError::MissingCloudAuth) => {
                Some("pass a cloud auth or set ELASTICLOUD_CLOUD_AUTH")
            }
            Error::Decode(DecodeError::MissingDelimiter { .. }) => {
                Some("cloud auth must look like username:password")
            }
            Error::Decode(DecodeError::InvalidEncoding { .. }) => {
                Some("the part after the last `:` must be padded standard base64")
            }
            Error::Decode(DecodeError::MalformedPayload { .. }) => {
                Some("the decoded payload needs domain$primary$secondary")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
