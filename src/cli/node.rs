//! Node commands.

use std::io::BufRead;

use serde_json::{Map, Value};
use tracing::debug;

use crate::cli::{required, ForgingState};
use crate::core::api::{ForgingUpdate, NodeApi};
use crate::core::constants;
use crate::core::input::{FieldRequest, InputRequest, Resolver};
use crate::core::validation::validate_public_key;
use crate::error::Result;

/// Node constants and status, merged into one object.
///
/// A failed forging status lookup does not fail the command; its error
/// message is reported as the `forgingStatus` value instead.
pub fn get(node: &dyn NodeApi, forging_status: bool) -> Result<Value> {
    let mut merged = Map::new();
    for part in [node.constants()?, node.status()?] {
        match part {
            Value::Object(fields) => merged.extend(fields),
            other => debug!(?other, "ignoring non-object node response"),
        }
    }
    if forging_status {
        let status = match node.forging_status() {
            Ok(status) => status,
            Err(e) => {
                debug!(error = %e, "forging status unavailable");
                Value::String(e.to_string())
            }
        };
        merged.insert("forgingStatus".to_string(), status);
    }
    Ok(Value::Object(merged))
}

/// Enable or disable forging for the delegate behind `public_key`.
///
/// The key is checked before the password is resolved, so a typo never
/// costs a prompt.
pub fn forging<R: BufRead>(
    node: &dyn NodeApi,
    resolver: Resolver<'_, R>,
    state: ForgingState,
    public_key: &str,
    password: Option<&str>,
) -> Result<Value> {
    validate_public_key(public_key)?;

    let request = InputRequest {
        password: Some(FieldRequest::new(password)),
        ..Default::default()
    };
    let inputs = resolver.resolve(&request)?;
    let password = required(inputs.password, constants::PASSWORD_NAME)?;

    node.update_forging_status(&ForgingUpdate {
        password: &password,
        public_key,
        forging: state == ForgingState::Enable,
    })
}
