//! Account command.
//!
//! Derives the public key and address for a passphrase.

use std::io::BufRead;

use serde_json::{json, Value};
use tracing::debug;

use crate::cli::required;
use crate::core::constants;
use crate::core::input::{FieldRequest, InputRequest, Resolver};
use crate::core::keys::Account;
use crate::core::validation::validate_value;
use crate::error::Result;

/// Show the public key and address behind a passphrase.
///
/// `second_passphrase` is only resolved when given; `Some("")` prompts.
pub fn show<R: BufRead>(
    resolver: Resolver<'_, R>,
    passphrase: Option<&str>,
    second_passphrase: Option<&str>,
) -> Result<Value> {
    let request = InputRequest {
        passphrase: Some(FieldRequest::new(passphrase)),
        second_passphrase: second_passphrase.map(|s| FieldRequest::new(Some(s))),
        ..Default::default()
    };
    let inputs = resolver.resolve(&request)?;

    let passphrase = required(inputs.passphrase, constants::PASSPHRASE_NAME)?;
    validate_value(constants::PASSPHRASE_NAME, &passphrase)?;
    let account = Account::from_passphrase(&passphrase);
    debug!(address = %account.address(), "derived account");

    let mut result = json!({
        "publicKey": account.public_key_hex(),
        "address": account.address(),
    });

    if let Some(second) = inputs.second_passphrase {
        validate_value(constants::SECOND_PASSPHRASE_NAME, &second)?;
        result["secondPublicKey"] = Value::String(Account::from_passphrase(&second).public_key_hex());
    }

    Ok(result)
}
