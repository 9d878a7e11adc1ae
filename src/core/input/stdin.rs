//! Standard-input demultiplexing.
//!
//! Several fields may ask for standard input in one invocation, but the
//! stream can be read only once. It is read here, in full, and its lines are
//! handed out by position in a fixed order:
//!
//! 1. passphrase
//! 2. second passphrase
//! 3. password
//! 4. data (every remaining line, joined with `\n`)
//!
//! Only requested slots take a line. With a passphrase and a password
//! requested, `alpha\nbeta\ngamma` gives passphrase `alpha`, password `beta`
//! and data `gamma`. This order is what operators pipe against; changing it
//! breaks their scripts.

use std::io::BufRead;

use tracing::debug;
use zeroize::Zeroizing;

use crate::error::{InputError, Result};

/// Which slots the caller needs from standard input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StdinFlags {
    pub passphrase: bool,
    pub second_passphrase: bool,
    pub password: bool,
    pub data: bool,
}

impl StdinFlags {
    pub fn any(&self) -> bool {
        self.passphrase || self.second_passphrase || self.password || self.data
    }
}

/// Values taken from standard input; `None` for slots not requested or not
/// supplied.
#[derive(Default)]
pub struct StdinInputs {
    pub passphrase: Option<Zeroizing<String>>,
    pub second_passphrase: Option<Zeroizing<String>>,
    pub password: Option<Zeroizing<String>>,
    pub data: Option<String>,
}

/// Read `reader` to the end and split its lines into slots.
///
/// When no flag is set the reader is not touched, so commands that never
/// need standard input do not block on it.
pub fn read_stdin<R: BufRead>(reader: R, required: StdinFlags) -> Result<StdinInputs> {
    if !required.any() {
        return Ok(StdinInputs::default());
    }

    let mut lines = Vec::new();
    for line in reader.lines() {
        lines.push(Zeroizing::new(line.map_err(InputError::from)?));
    }
    debug!(lines = lines.len(), ?required, "read standard input");

    let mut next = 0;
    let mut take = |wanted: bool| -> Option<Zeroizing<String>> {
        if !wanted {
            return None;
        }
        let line = lines.get(next).cloned()?;
        next += 1;
        Some(line)
    };

    let passphrase = take(required.passphrase);
    let second_passphrase = take(required.second_passphrase);
    let password = take(required.password);

    let rest = lines.get(next..).unwrap_or_default();
    let data = if rest.is_empty() {
        None
    } else {
        Some(
            rest.iter()
                .map(|line| line.as_str())
                .collect::<Vec<_>>()
                .join("\n"),
        )
    };

    Ok(StdinInputs {
        passphrase,
        second_passphrase,
        password,
        data,
    })
}
