//! Transaction commands.
//!
//! Transactions are built and signed elsewhere; this only relays the signed
//! JSON to a node.

use std::io::BufRead;

use serde_json::Value;
use tracing::debug;

use crate::core::api::NodeApi;
use crate::core::input::{FieldRequest, InputRequest, Resolver};
use crate::core::validation::parse_transaction;
use crate::error::{Error, InputError, Result, ValidationError};

/// Broadcast a signed transaction.
///
/// The JSON is the inline argument, or the data field resolved from
/// `source` (standard input when no source is given).
pub fn broadcast<R: BufRead>(
    node: &dyn NodeApi,
    resolver: Resolver<'_, R>,
    transaction: Option<&str>,
    source: Option<&str>,
) -> Result<Value> {
    let text = match transaction {
        Some(inline) => inline.to_string(),
        None => read_transaction(resolver, source.unwrap_or("stdin"))?,
    };

    let transaction = parse_transaction(&text)?;
    debug!(id = ?transaction.get("id"), "broadcasting transaction");
    node.broadcast_transaction(&transaction)
}

fn read_transaction<R: BufRead>(resolver: Resolver<'_, R>, source: &str) -> Result<String> {
    let request = InputRequest {
        data: Some(FieldRequest::new(Some(source)).display_name("transaction")),
        ..Default::default()
    };
    match resolver.resolve(&request) {
        Ok(inputs) => inputs
            .data
            .ok_or_else(|| ValidationError::MissingTransaction.into()),
        Err(Error::Input(InputError::StdinMissing(_) | InputError::DataMissing)) => {
            Err(ValidationError::MissingTransaction.into())
        }
        Err(e) => Err(e),
    }
}
