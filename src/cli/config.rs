//! Config commands.

use serde_json::{json, Value};

use crate::core::config::Config;
use crate::error::Result;

/// Show the effective configuration and where it lives.
pub fn show(config: &Config) -> Result<Value> {
    Ok(json!({
        "path": Config::path()?.display().to_string(),
        "api.nodes": config.api.nodes,
        "output.json": config.output.json,
        "output.pretty": config.output.pretty,
    }))
}

/// Change one setting and save the file.
pub fn set(mut config: Config, key: &str, value: &str) -> Result<Value> {
    config.set(key, value)?;
    config.save()?;

    let saved = match key {
        "api.nodes" => json!(config.api.nodes),
        "output.json" => json!(config.output.json),
        _ => json!(config.output.pretty),
    };
    Ok(json!({ key: saved }))
}
