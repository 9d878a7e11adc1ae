//! Argument validation.
//!
//! Checks that run on command arguments and resolved values before anything
//! is sent to a node.

use serde_json::Value;

use crate::core::keys;
use crate::error::{capitalise, Result, ValidationError};

/// Validate a hex-encoded public key.
///
/// # Errors
///
/// Returns `ValidationError::InvalidPublicKey` if `key` is not 64 hex
/// characters encoding a valid Ed25519 point.
pub fn validate_public_key(key: &str) -> Result<()> {
    keys::parse_public_key(key).map(|_| ())
}

/// Reject an empty resolved value.
///
/// # Arguments
///
/// * `name` - Display name of the field (for error messages)
/// * `value` - The value to validate
pub fn validate_value(name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(ValidationError::EmptyValue(capitalise(name)).into());
    }
    Ok(())
}

/// Parse a signed transaction given as JSON text.
///
/// # Errors
///
/// Returns `ValidationError::MissingTransaction` for blank input and
/// `ValidationError::InvalidTransaction` unless the text is a JSON object.
pub fn parse_transaction(text: &str) -> Result<Value> {
    if text.trim().is_empty() {
        return Err(ValidationError::MissingTransaction.into());
    }
    match serde_json::from_str::<Value>(text) {
        Ok(value) if value.is_object() => Ok(value),
        _ => Err(ValidationError::InvalidTransaction.into()),
    }
}
