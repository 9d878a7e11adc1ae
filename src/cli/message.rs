//! Message commands.
//!
//! Sign a message with a passphrase, or check a signature against a public
//! key. The message is given inline or resolved as the data field, so it
//! can come from a file or from the rest of standard input.

use std::io::BufRead;

use serde_json::{json, Value};

use crate::cli::required;
use crate::core::constants;
use crate::core::input::{FieldRequest, InputRequest, Resolver};
use crate::core::keys::{self, Account};
use crate::core::validation::{validate_public_key, validate_value};
use crate::error::{Result, ValidationError};

const MESSAGE_NAME: &str = "message";

/// Data request for a message not given inline.
fn message_request(inline: Option<&str>, source: Option<&str>) -> Result<Option<FieldRequest>> {
    match (inline, source) {
        (Some(_), _) => Ok(None),
        (None, Some(source)) if !source.is_empty() => Ok(Some(
            FieldRequest::new(Some(source)).display_name(MESSAGE_NAME),
        )),
        _ => Err(ValidationError::MissingMessage.into()),
    }
}

/// Sign a message.
///
/// A prompted passphrase is asked for twice and both entries must match.
pub fn sign<R: BufRead>(
    resolver: Resolver<'_, R>,
    message: Option<&str>,
    message_source: Option<&str>,
    passphrase: Option<&str>,
) -> Result<Value> {
    let request = InputRequest {
        passphrase: Some(FieldRequest::new(passphrase).repeat_prompt()),
        data: message_request(message, message_source)?,
        ..Default::default()
    };
    let inputs = resolver.resolve(&request)?;

    let passphrase = required(inputs.passphrase, constants::PASSPHRASE_NAME)?;
    validate_value(constants::PASSPHRASE_NAME, &passphrase)?;
    let message = match message {
        Some(inline) => inline.to_string(),
        None => required(inputs.data, MESSAGE_NAME)?,
    };

    let account = Account::from_passphrase(&passphrase);
    Ok(json!({
        "message": message,
        "publicKey": account.public_key_hex(),
        "signature": account.sign_message(&message),
    }))
}

/// Verify a signed message.
///
/// A signature that does not match prints `verified: false`; only malformed
/// keys or signatures are errors.
pub fn verify<R: BufRead>(
    resolver: Resolver<'_, R>,
    public_key: &str,
    signature: &str,
    message: Option<&str>,
    message_source: Option<&str>,
) -> Result<Value> {
    validate_public_key(public_key)?;

    let request = InputRequest {
        data: message_request(message, message_source)?,
        ..Default::default()
    };
    let inputs = resolver.resolve(&request)?;
    let message = match message {
        Some(inline) => inline.to_string(),
        None => required(inputs.data, MESSAGE_NAME)?,
    };

    let verified = keys::verify_message(public_key, signature, &message)?;
    Ok(json!({ "verified": verified }))
}
