//! Shared CLI output helpers.
//!
//! Results go to stdout, as JSON or aligned key-value lines. Status lines
//! (errors, hints) go to stderr so they never mix with piped results.
//!
//! Color scheme (respects NO_COLOR):
//! - Green: success
//! - Red: errors
//! - Cyan: hints
//! - Dimmed: labels

use console::style;
use serde_json::Value;

use crate::error::Result;

/// How results are printed.
#[derive(Debug, Clone, Copy, Default)]
pub struct Format {
    pub json: bool,
    pub pretty: bool,
}

fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err()
}

/// Print a success message with checkmark (green).
///
/// Example: `✓ api.nodes updated`
pub fn success(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("✓").green(), msg);
    } else {
        println!("✓ {}", msg);
    }
}

/// Print an error message to stderr (red).
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red().for_stderr(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a hint message to stderr (cyan).
///
/// Example: `→ run: tally config set api.nodes <URL>`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!(
            "{} {}",
            style("→").cyan().for_stderr(),
            style(msg).cyan().for_stderr()
        );
    } else {
        eprintln!("→ {}", msg);
    }
}

/// Print a command result.
///
/// Objects print one `label  value` line per key, labels padded to the
/// widest. Nested values print as compact JSON.
pub fn print(value: &Value, format: Format) -> Result<()> {
    if format.json {
        let text = if format.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        println!("{}", text);
        return Ok(());
    }

    match value {
        Value::Object(map) => {
            let width = map.keys().map(|k| k.len()).max().unwrap_or(0);
            for (label, value) in map {
                kv(&format!("{:width$}", label, width = width), &scalar(value));
            }
        }
        other => println!("{}", scalar(other)),
    }
    Ok(())
}

/// Print a key-value pair (label dimmed).
fn kv(label: &str, value: &str) {
    if colors_enabled() {
        println!("{}  {}", style(label).dim(), value);
    } else {
        println!("{}  {}", label, value);
    }
}

fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
