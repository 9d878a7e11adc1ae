//! Interactive secret prompts.

use dialoguer::Password;
use tracing::debug;
use zeroize::Zeroizing;

use crate::error::{InputError, Result};

/// Asks the operator for a masked value.
///
/// Injected into the resolver so commands can run against the terminal and
/// tests can script the answers.
pub trait Prompter {
    /// Show `prompt` and return what the operator typed, without echo.
    fn secret(&self, prompt: &str) -> Result<String>;
}

/// Prompts on the controlling terminal with hidden input.
pub struct Terminal;

impl Prompter for Terminal {
    fn secret(&self, prompt: &str) -> Result<String> {
        let value = Password::new()
            .with_prompt(prompt)
            .allow_empty_password(true)
            .report(false)
            .interact()
            .map_err(InputError::from)?;
        Ok(value)
    }
}

/// Prompt for `display_name`, asking a second time when `repeat` is set.
///
/// # Errors
///
/// Returns `InputError::VerificationFailed` if the two entries differ.
pub fn from_prompt(
    prompter: &dyn Prompter,
    display_name: &str,
    repeat: bool,
) -> Result<Zeroizing<String>> {
    debug!(field = display_name, repeat, "prompting");

    let value = Zeroizing::new(prompter.secret(&format!("Please enter {}", display_name))?);
    if !repeat {
        return Ok(value);
    }

    let repeated = Zeroizing::new(prompter.secret(&format!("Please re-enter {}", display_name))?);
    if value.as_bytes() != repeated.as_bytes() {
        return Err(InputError::VerificationFailed(display_name.to_string()).into());
    }

    Ok(value)
}
