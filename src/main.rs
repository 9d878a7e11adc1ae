//! Tally - command-line client for a ledger node.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tally::cli::output;
use tally::cli::{execute, Cli};
use tally::core::constants;
use tally::error::{ApiError, Error, InputError};

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("tally=debug")
        } else {
            EnvFilter::new("tally=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    if let Err(e) = execute(cli) {
        let suggestion = match &e {
            Error::Input(InputError::StdinMissing(_)) => {
                Some("pipe one line per stdin field: passphrase, second passphrase, password, then data")
            }
            Error::Input(InputError::UnknownSourceType(_)) => {
                Some("use env:NAME, file:PATH, pass:VALUE or stdin")
            }
            Error::Api(ApiError::Transport(_)) => Some("run: tally config set api.nodes <URL>"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
