//! Secret resolvers for explicit sources (`env`, `file`, `pass`).

use std::fs::File;
use std::io::{self, BufRead, BufReader};

use tracing::debug;
use zeroize::Zeroizing;

use super::prompt::{from_prompt, Prompter};
use crate::core::source::{is_given, Source, SourceKind};
use crate::error::{Error, InputError, Result};

/// Read environment variable `key`.
///
/// # Errors
///
/// Returns `InputError::EnvNotSet` naming `display_name` (not the variable)
/// if it is unset, empty or not valid unicode.
pub fn from_env(key: &str, display_name: &str) -> Result<Zeroizing<String>> {
    match std::env::var(key) {
        Ok(value) if !value.is_empty() => Ok(Zeroizing::new(value)),
        _ => Err(InputError::EnvNotSet(display_name.to_string()).into()),
    }
}

/// Read the first line of the file at `path`.
///
/// The line terminator is stripped and the handle is closed before
/// returning. An empty file yields an empty string.
///
/// # Errors
///
/// `InputError::FileNotFound` / `InputError::FileUnreadable` for missing or
/// permission-denied paths; any other I/O error is returned as is.
pub fn from_file(path: &str) -> Result<Zeroizing<String>> {
    let file = File::open(path).map_err(|e| file_error(path, e))?;
    let mut line = Zeroizing::new(String::new());
    BufReader::new(file)
        .read_line(&mut line)
        .map_err(|e| file_error(path, e))?;

    let trimmed = line.trim_end_matches('\n').trim_end_matches('\r').len();
    line.truncate(trimmed);
    Ok(line)
}

/// Map an I/O failure on `path` to the user-facing file errors.
pub(crate) fn file_error(path: &str, err: io::Error) -> Error {
    match err.kind() {
        io::ErrorKind::NotFound => InputError::FileNotFound(path.to_string()).into(),
        io::ErrorKind::PermissionDenied => InputError::FileUnreadable(path.to_string()).into(),
        _ => InputError::Io(err).into(),
    }
}

/// Resolve a secret from an explicit specifier.
///
/// `stdin` is rejected here; only the orchestrator reads standard input.
///
/// # Errors
///
/// Returns `InputError::UnknownSourceType` for anything other than `env`,
/// `file` or `pass`.
pub fn from_source(source: &Source, display_name: &str) -> Result<Zeroizing<String>> {
    debug!(field = display_name, source_type = source.source_type(), "resolving secret");

    match source.kind() {
        SourceKind::Env => from_env(source.identifier(), display_name),
        SourceKind::File => from_file(source.identifier()),
        SourceKind::Pass => Ok(Zeroizing::new(source.identifier().to_string())),
        SourceKind::Stdin | SourceKind::Unknown => {
            Err(InputError::UnknownSourceType(display_name.to_string()).into())
        }
    }
}

/// Resolve a secret, prompting when no specifier is given.
pub fn resolve_secret(
    prompter: &dyn Prompter,
    source: Option<&str>,
    display_name: &str,
    repeat: bool,
) -> Result<Zeroizing<String>> {
    match source {
        Some(s) if is_given(source) => from_source(&Source::parse(s), display_name),
        _ => from_prompt(prompter, display_name, repeat),
    }
}
