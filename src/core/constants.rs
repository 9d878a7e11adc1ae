//! Constants used throughout tally.
//!
//! Centralizes magic strings and configuration values.

/// Configuration file name inside the config directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Config directory relative to HOME (~/.tally).
pub const CONFIG_DIR: &str = ".tally";

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "TALLY_CONFIG_DIR";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "TALLY_LOG";

/// Node used when the config names none.
pub const DEFAULT_NODE: &str = "http://localhost:4000";

/// Prefix hashed into every signed message.
pub const SIGNED_MESSAGE_PREFIX: &str = "Tally Signed Message:\n";

/// Default display names for the resolvable fields.
pub const PASSPHRASE_NAME: &str = "your secret passphrase";
pub const SECOND_PASSPHRASE_NAME: &str = "your second secret passphrase";
pub const PASSWORD_NAME: &str = "your password";
pub const DATA_NAME: &str = "data";

/// Help text shared by every flag that takes a source specifier.
pub const SOURCE_HELP: &str = "Source: env:NAME, file:PATH, pass:VALUE or stdin; omit to prompt. \
pass: exposes the value in shell history and process listings";
