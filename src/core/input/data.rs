//! Bulk data resolution.
//!
//! Non-secret payloads (messages, transactions) come from a file. Standard
//! input is also accepted by the CLI, but it goes through the orchestrator so
//! it can share the stream with secrets; this resolver only handles `file:`.

use tracing::debug;

use super::secret::file_error;
use crate::core::source::{Source, SourceKind};
use crate::error::{InputError, Result};

/// Read the whole file named by a `file:PATH` specifier.
///
/// # Errors
///
/// - `InputError::DataMissing` if `source` is absent or empty
/// - `InputError::DataSourceUnknown` for any type other than `file`
/// - file errors mapped as for secrets (missing, unreadable, other)
pub fn resolve_data(source: Option<&str>) -> Result<String> {
    let source = match source {
        Some(s) if !s.is_empty() => Source::parse(s),
        _ => return Err(InputError::DataMissing.into()),
    };

    if source.kind() != SourceKind::File {
        return Err(InputError::DataSourceUnknown.into());
    }

    let path = source.identifier();
    debug!(path, "reading data file");
    std::fs::read_to_string(path).map_err(|e| file_error(path, e))
}
