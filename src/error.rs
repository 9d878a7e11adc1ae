//! Error types.
//!
//! Each domain has its own enum; [`Error`] wraps them so commands can use `?`
//! across layers and `main` can match on the specific failure.

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// Failures while acquiring a secret or data value.
///
/// Messages name the field's display name, never its internal key, and
/// never the value.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("{} was not successfully repeated.", capitalise(.0))]
    VerificationFailed(String),

    #[error(
        "{} was provided with an unknown source type. Must be one of `env`, `file`, `pass`, or `stdin`. Leave blank for prompt.",
        capitalise(.0)
    )]
    UnknownSourceType(String),

    #[error("Environmental variable for {0} not set.")]
    EnvNotSet(String),

    #[error("File at {0} does not exist.")]
    FileNotFound(String),

    #[error("File at {0} could not be read.")]
    FileUnreadable(String),

    #[error("No data was provided.")]
    DataMissing,

    #[error("Unknown data source type. Must be one of `file`, or `stdin`.")]
    DataSourceUnknown,

    #[error("{} was not provided on standard input.", capitalise(.0))]
    StdinMissing(String),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// Any other I/O failure, passed through unchanged.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Configuration file errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to write config: {0}")]
    WriteFile(#[source] std::io::Error),

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("unable to determine home directory")]
    NoHomeDir,

    #[error("unknown config key: {0} (expected one of: api.nodes, output.json, output.pretty)")]
    UnknownKey(String),

    #[error("invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },
}

/// Node API errors.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request to node failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid node url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("node rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("unexpected response from node: {0}")]
    InvalidResponse(String),
}

/// Validation errors for command arguments and resolved values.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("invalid public key {key}: {reason}")]
    InvalidPublicKey { key: String, reason: String },

    #[error("invalid signature: {0}")]
    InvalidSignature(String),

    #[error("Could not parse transaction JSON. Did you use the `--json` option?")]
    InvalidTransaction,

    #[error("No transaction was provided.")]
    MissingTransaction,

    #[error("No message was provided.")]
    MissingMessage,

    #[error("{0} must not be empty.")]
    EmptyValue(String),
}

/// Uppercase the first character of a display name for sentence starts.
pub(crate) fn capitalise(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, Error>;
