//! Tally - command-line client for a ledger node.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── account       # Derive public key and address
//! │   ├── message       # Sign and verify messages
//! │   ├── node          # Node status and forging
//! │   ├── transaction   # Broadcast signed transactions
//! │   ├── config        # Show and edit config.toml
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── source        # `type:identifier` source specifiers
//!     ├── input/        # Secret and data resolution
//!     │   ├── mod       # Resolver (orchestrates one request)
//!     │   ├── prompt    # Prompter trait and terminal prompt
//!     │   ├── secret    # env / file / pass resolvers
//!     │   ├── stdin     # Standard-input demultiplexer
//!     │   └── data      # Bulk data resolver
//!     ├── config        # config.toml management
//!     ├── api           # Node HTTP client
//!     ├── keys          # Ed25519 account keys
//!     └── validation    # Argument checks
//! ```
//!
//! # Features
//!
//! - Secrets from prompts, environment variables, files, literals or stdin
//! - One standard-input stream shared across several fields
//! - Ed25519 message signing
//! - Blocking node client with a small, mockable trait

pub mod cli;
pub mod core;
pub mod error;
