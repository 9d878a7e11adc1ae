//! Source specifiers.
//!
//! A specifier is a compact `type:identifier` string naming where a value
//! comes from:
//!
//! | specifier       | value                                   |
//! |-----------------|-----------------------------------------|
//! | `env:NAME`      | environment variable `NAME`             |
//! | `file:PATH`     | first line of the file at `PATH`        |
//! | `pass:VALUE`    | `VALUE` itself                          |
//! | `stdin`         | a line of standard input                |
//!
//! An absent specifier means "prompt interactively". Only the first colon
//! delimits, so identifiers may contain colons (`file:C:\keys\a.txt`).

use std::fmt;

const DELIMITER: char = ':';

/// Recognised source types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Env,
    File,
    Pass,
    Stdin,
    Unknown,
}

/// A parsed source specifier.
#[derive(Clone, PartialEq, Eq)]
pub struct Source {
    source_type: String,
    identifier: String,
}

impl Source {
    /// Split a specifier on its first colon.
    ///
    /// Never fails: a string without a colon is all type, and the empty
    /// string yields an empty type and identifier. Unrecognised types are
    /// rejected later, by whichever resolver receives them.
    pub fn parse(source: &str) -> Self {
        let (source_type, identifier) = source.split_once(DELIMITER).unwrap_or((source, ""));
        Self {
            source_type: source_type.to_string(),
            identifier: identifier.to_string(),
        }
    }

    /// Text before the first colon.
    pub fn source_type(&self) -> &str {
        &self.source_type
    }

    /// Everything after the first colon, verbatim.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn kind(&self) -> SourceKind {
        match self.source_type.as_str() {
            "env" => SourceKind::Env,
            "file" => SourceKind::File,
            "pass" => SourceKind::Pass,
            "stdin" => SourceKind::Stdin,
            _ => SourceKind::Unknown,
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.source_type, DELIMITER, self.identifier)
    }
}

// `pass:` identifiers are literal secrets.
impl fmt::Debug for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let identifier = match self.kind() {
            SourceKind::Pass => "<redacted>",
            _ => self.identifier.as_str(),
        };
        f.debug_struct("Source")
            .field("source_type", &self.source_type)
            .field("identifier", &identifier)
            .finish()
    }
}

/// Whether an optional flag value names a source at all.
///
/// Empty strings count as absent, so `--passphrase ""` prompts.
pub fn is_given(source: Option<&str>) -> bool {
    source.is_some_and(|s| !s.is_empty())
}
