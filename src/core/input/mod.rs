//! Input resolution.
//!
//! Every command that needs a passphrase, second passphrase, password or
//! bulk data describes what it needs in an [`InputRequest`] and gets back
//! [`Inputs`]. Each field can come from a prompt, an environment variable, a
//! file, an inline literal or standard input (see [`crate::core::source`]).
//!
//! ```ignore
//! let request = InputRequest {
//!     passphrase: Some(FieldRequest::new(flags.passphrase.as_deref()).repeat_prompt()),
//!     password: Some(FieldRequest::new(Some("stdin"))),
//!     ..Default::default()
//! };
//! let inputs = Resolver::new(&Terminal, io::stdin().lock()).resolve(&request)?;
//! ```

pub mod data;
pub mod prompt;
pub mod secret;
pub mod stdin;

use std::io::BufRead;

use tracing::debug;
use zeroize::Zeroizing;

pub use data::resolve_data;
pub use prompt::{Prompter, Terminal};
pub use secret::resolve_secret;
pub use stdin::{read_stdin, StdinFlags, StdinInputs};

use crate::core::constants;
use crate::core::source::{Source, SourceKind};
use crate::error::{InputError, Result};

/// How one field should be resolved.
#[derive(Clone, Default)]
pub struct FieldRequest {
    source: Option<String>,
    repeat_prompt: bool,
    display_name: Option<String>,
}

impl FieldRequest {
    /// A field read from `source`, or prompted for when `source` is `None`
    /// or empty.
    pub fn new(source: Option<&str>) -> Self {
        Self {
            source: source.filter(|s| !s.is_empty()).map(str::to_string),
            ..Default::default()
        }
    }

    /// Ask twice when prompting, and require both entries to match.
    pub fn repeat_prompt(mut self) -> Self {
        self.repeat_prompt = true;
        self
    }

    /// Name used in prompts and error messages.
    pub fn display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    fn from_stdin(&self) -> bool {
        self.source()
            .is_some_and(|s| Source::parse(s).kind() == SourceKind::Stdin)
    }

    fn name<'a>(&'a self, default: &'a str) -> &'a str {
        self.display_name.as_deref().unwrap_or(default)
    }
}

// Custom Debug so inline `pass:` secrets are not printed.
impl std::fmt::Debug for InputRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let describe = |field: &Option<FieldRequest>| match field {
            None => "none".to_string(),
            Some(r) => match r.source() {
                None => "prompt".to_string(),
                Some(s) => format!("{:?}", Source::parse(s).kind()).to_lowercase(),
            },
        };
        f.debug_struct("InputRequest")
            .field("passphrase", &describe(&self.passphrase))
            .field("second_passphrase", &describe(&self.second_passphrase))
            .field("password", &describe(&self.password))
            .field("data", &describe(&self.data))
            .finish()
    }
}

/// The fields a command needs. `None` means "not required".
#[derive(Clone, Default)]
pub struct InputRequest {
    pub passphrase: Option<FieldRequest>,
    pub second_passphrase: Option<FieldRequest>,
    pub password: Option<FieldRequest>,
    pub data: Option<FieldRequest>,
}

impl InputRequest {
    fn stdin_flags(&self) -> StdinFlags {
        let wants = |field: &Option<FieldRequest>| field.as_ref().is_some_and(|r| r.from_stdin());
        StdinFlags {
            passphrase: wants(&self.passphrase),
            second_passphrase: wants(&self.second_passphrase),
            password: wants(&self.password),
            data: wants(&self.data),
        }
    }
}

/// Resolved values. Every requested field is `Some`; the rest are `None`.
#[derive(Default)]
pub struct Inputs {
    pub passphrase: Option<Zeroizing<String>>,
    pub second_passphrase: Option<Zeroizing<String>>,
    pub password: Option<Zeroizing<String>>,
    pub data: Option<String>,
}

/// Resolves an [`InputRequest`] against a prompter and a standard-input
/// stream.
pub struct Resolver<'a, R> {
    prompter: &'a dyn Prompter,
    stdin: R,
}

impl<'a, R: BufRead> Resolver<'a, R> {
    pub fn new(prompter: &'a dyn Prompter, stdin: R) -> Self {
        Self { prompter, stdin }
    }

    /// Resolve every requested field.
    ///
    /// Standard input is read at most once, and only if some field asks for
    /// it. Other fields resolve one by one in priority order. The first
    /// failure is returned and nothing already resolved escapes.
    pub fn resolve(self, request: &InputRequest) -> Result<Inputs> {
        let Resolver { prompter, stdin } = self;
        let flags = request.stdin_flags();
        debug!(?request, "resolving inputs");

        let mut piped = read_stdin(stdin, flags)?;

        let passphrase = resolve_field(
            prompter,
            &request.passphrase,
            &mut piped.passphrase,
            constants::PASSPHRASE_NAME,
        )?;
        let second_passphrase = resolve_field(
            prompter,
            &request.second_passphrase,
            &mut piped.second_passphrase,
            constants::SECOND_PASSPHRASE_NAME,
        )?;
        let password = resolve_field(
            prompter,
            &request.password,
            &mut piped.password,
            constants::PASSWORD_NAME,
        )?;

        let data = match &request.data {
            None => None,
            Some(field) if field.from_stdin() => {
                let name = field.name(constants::DATA_NAME);
                let data = piped
                    .data
                    .take()
                    .ok_or_else(|| InputError::StdinMissing(name.to_string()))?;
                Some(data)
            }
            Some(field) => Some(resolve_data(field.source())?),
        };

        Ok(Inputs {
            passphrase,
            second_passphrase,
            password,
            data,
        })
    }
}

/// Resolve one secret field, taking its line from `piped` when it is
/// stdin-sourced.
fn resolve_field(
    prompter: &dyn Prompter,
    field: &Option<FieldRequest>,
    piped: &mut Option<Zeroizing<String>>,
    default_name: &str,
) -> Result<Option<Zeroizing<String>>> {
    let Some(field) = field else {
        return Ok(None);
    };
    let name = field.name(default_name);

    if field.from_stdin() {
        return match piped.take() {
            Some(value) => Ok(Some(value)),
            None => Err(InputError::StdinMissing(name.to_string()).into()),
        };
    }

    resolve_secret(prompter, field.source(), name, field.repeat_prompt).map(Some)
}
