//! Command-line interface.

pub mod account;
pub mod completions;
pub mod config;
pub mod message;
pub mod node;
pub mod output;
pub mod transaction;

use std::io::{self, StdinLock};

use clap::{Parser, Subcommand};
use tracing::warn;

use crate::core::api::HttpNode;
use crate::core::config::Config;
use crate::core::constants::SOURCE_HELP;
use crate::core::input::{Resolver, Terminal};
use crate::error::{Error, Result};
use output::Format;

/// Tally - command-line client for a ledger node.
#[derive(Parser)]
#[command(
    name = "tally",
    about = "Command-line client for a ledger node",
    version,
    after_help = "Secrets: env:NAME, file:PATH, pass:VALUE or stdin. Omit to be prompted."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print results as JSON
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Pretty-print JSON results
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Node to talk to (overrides api.nodes)
    #[arg(long, global = true, env = "TALLY_NODE", value_name = "URL")]
    pub node: Option<String>,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Inspect accounts
    Account {
        #[command(subcommand)]
        action: AccountAction,
    },

    /// Sign and verify messages
    Message {
        #[command(subcommand)]
        action: MessageAction,
    },

    /// Query and control a node
    Node {
        #[command(subcommand)]
        action: NodeAction,
    },

    /// Work with signed transactions
    Transaction {
        #[command(subcommand)]
        action: TransactionAction,
    },

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Account subcommands.
#[derive(Subcommand)]
pub enum AccountAction {
    /// Show the public key and address for a passphrase
    Show {
        /// Passphrase source
        #[arg(short, long, value_name = "SRC", long_help = SOURCE_HELP)]
        passphrase: Option<String>,

        /// Also derive the second public key (prompts when given no source)
        #[arg(
            short,
            long,
            value_name = "SRC",
            num_args = 0..=1,
            default_missing_value = "",
            long_help = SOURCE_HELP
        )]
        second_passphrase: Option<String>,
    },
}

/// Message subcommands.
#[derive(Subcommand)]
pub enum MessageAction {
    /// Sign a message with a passphrase
    Sign {
        /// Message to sign
        message: Option<String>,

        /// Message source when not given inline (file:PATH or stdin)
        #[arg(short = 'm', long = "message", value_name = "SRC")]
        message_source: Option<String>,

        /// Passphrase source
        #[arg(short, long, value_name = "SRC", long_help = SOURCE_HELP)]
        passphrase: Option<String>,
    },

    /// Verify a signed message
    Verify {
        /// Signer's public key (hex)
        public_key: String,

        /// Signature (hex)
        signature: String,

        /// Message that was signed
        message: Option<String>,

        /// Message source when not given inline (file:PATH or stdin)
        #[arg(short = 'm', long = "message", value_name = "SRC")]
        message_source: Option<String>,
    },
}

/// Node subcommands.
#[derive(Subcommand)]
pub enum NodeAction {
    /// Show node constants and status
    Get {
        /// Include the forging status
        #[arg(long)]
        forging_status: bool,
    },

    /// Enable or disable forging for a delegate
    Forging {
        /// New forging state
        #[arg(value_enum)]
        status: ForgingState,

        /// Delegate public key (hex)
        public_key: String,

        /// Password source for the node's key store
        #[arg(short = 'w', long, value_name = "SRC", long_help = SOURCE_HELP)]
        password: Option<String>,
    },
}

/// Forging states a delegate can be switched to.
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ForgingState {
    Enable,
    Disable,
}

/// Transaction subcommands.
#[derive(Subcommand)]
pub enum TransactionAction {
    /// Broadcast a signed transaction
    Broadcast {
        /// Transaction JSON
        transaction: Option<String>,

        /// Transaction source when not given inline (file:PATH or stdin)
        #[arg(short = 't', long = "transaction", value_name = "SRC")]
        transaction_source: Option<String>,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the current configuration
    Show,

    /// Change one setting
    Set {
        /// Setting (api.nodes, output.json, output.pretty)
        key: String,
        /// New value
        value: String,
    },
}

/// Execute a parsed command line.
///
/// An unreadable config file fails every command except `completions` and
/// `config set`, which start from defaults so the file can be repaired.
pub fn execute(cli: Cli) -> Result<()> {
    let config = match (&cli.command, Config::load()) {
        (
            Command::Completions { .. }
            | Command::Config {
                action: ConfigAction::Set { .. },
            },
            Err(e),
        ) => {
            warn!(error = %e, "ignoring unreadable config");
            Config::default()
        }
        (_, loaded) => loaded?,
    };
    let format = Format {
        json: cli.json || config.output.json,
        pretty: cli.pretty || config.output.pretty,
    };
    let node_url = cli.node.as_deref().unwrap_or(config.node_url());

    let result = match cli.command {
        Command::Account {
            action:
                AccountAction::Show {
                    passphrase,
                    second_passphrase,
                },
        } => account::show(
            resolver(),
            passphrase.as_deref(),
            second_passphrase.as_deref(),
        )?,
        Command::Message { action } => match action {
            MessageAction::Sign {
                message,
                message_source,
                passphrase,
            } => message::sign(
                resolver(),
                message.as_deref(),
                message_source.as_deref(),
                passphrase.as_deref(),
            )?,
            MessageAction::Verify {
                public_key,
                signature,
                message,
                message_source,
            } => message::verify(
                resolver(),
                &public_key,
                &signature,
                message.as_deref(),
                message_source.as_deref(),
            )?,
        },
        Command::Node { action } => {
            let client = HttpNode::new(node_url)?;
            match action {
                NodeAction::Get { forging_status } => node::get(&client, forging_status)?,
                NodeAction::Forging {
                    status,
                    public_key,
                    password,
                } => node::forging(
                    &client,
                    resolver(),
                    status,
                    &public_key,
                    password.as_deref(),
                )?,
            }
        }
        Command::Transaction {
            action:
                TransactionAction::Broadcast {
                    transaction,
                    transaction_source,
                },
        } => {
            let client = HttpNode::new(node_url)?;
            transaction::broadcast(
                &client,
                resolver(),
                transaction.as_deref(),
                transaction_source.as_deref(),
            )?
        }
        Command::Config { action } => match action {
            ConfigAction::Show => config::show(&config)?,
            ConfigAction::Set { key, value } => {
                let saved = config::set(config, &key, &value)?;
                if !format.json {
                    output::success(&format!("{} updated", key));
                    return Ok(());
                }
                saved
            }
        },
        Command::Completions { shell } => {
            return completions::execute(shell, &mut io::stdout())
        }
    };

    output::print(&result, format)
}

/// Resolver reading the terminal and this process's standard input.
fn resolver() -> Resolver<'static, StdinLock<'static>> {
    Resolver::new(&Terminal, io::stdin().lock())
}

/// Unwrap a field the resolver was asked for.
pub(crate) fn required<T>(value: Option<T>, name: &str) -> Result<T> {
    value.ok_or_else(|| Error::Other(format!("{} was not resolved", name)))
}
