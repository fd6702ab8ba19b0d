//! Where the CNF expression is read from.
use std::io::Read;
use std::path::PathBuf;

use crate::error::{CnfDotError, Result};

/// Source of the CNF expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    Path(PathBuf),
    /// JSON text passed directly on the command line.
    Inline(String),
}

impl InputSource {
    /// `-` denotes stdin, an existing file is read from its path and
    /// anything else is taken as the JSON expression itself.
    #[must_use]
    pub fn from_arg(arg: &str) -> InputSource {
        if arg == "-" {
            return InputSource::Stdin;
        }

        let path = PathBuf::from(arg);
        if path.is_file() {
            InputSource::Path(path)
        } else {
            InputSource::Inline(arg.to_owned())
        }
    }
}

/// Read the whole CNF expression from `source`, trimmed of surrounding whitespace.
///
/// # Errors
/// Returns [`CnfDotError::MissingStdin`] if stdin was requested but it is
/// a terminal or empty, and [`CnfDotError::Io`] if reading fails.
pub fn read_input(
    source: &InputSource,
    stdin: &mut dyn Read,
    stdin_is_terminal: bool,
) -> Result<String> {
    let contents = match source {
        InputSource::Stdin => {
            if stdin_is_terminal {
                return Err(CnfDotError::MissingStdin);
            }

            let mut buffer = String::new();
            stdin.read_to_string(&mut buffer)?;
            if buffer.trim().is_empty() {
                return Err(CnfDotError::MissingStdin);
            }
            buffer
        }
        InputSource::Path(path) => std::fs::read_to_string(path)?,
        InputSource::Inline(expression) => expression.clone(),
    };

    tracing::debug!(bytes = contents.len(), ?source, "read CNF expression");
    Ok(contents.trim().to_owned())
}
