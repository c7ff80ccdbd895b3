//! CLI support for mathexpr
//!
//! Provides programmatic access to the `mathexpr` binary's behaviour: one-shot
//! evaluation, the interactive shell, display rounding and tree export.

mod convert;
mod eval;
mod round;
mod shell;

pub use convert::node_to_json;
pub use eval::{execute_eval, EvalOptions, EvalResult, OutputMode};
pub use round::round_to_sig_figs;
pub use shell::{Shell, ShellAction, EXIT_COMMAND, PROMPT};

use std::io;

/// Significant figures used for displayed values unless configured.
pub const DEFAULT_ROUND_SF: u32 = 12;

/// Errors that can occur during CLI operations
#[derive(Debug)]
pub enum CliError {
    /// Parser error
    Parse(crate::ParseError),
    /// JSON serialisation error
    Json(serde_json::Error),
    /// IO error
    Io(io::Error),
    /// Invalid combination of arguments
    Usage(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Parse(e) => write!(f, "Parse error: {}", e),
            CliError::Json(e) => write!(f, "JSON error: {}", e),
            CliError::Io(e) => write!(f, "IO error: {}", e),
            CliError::Usage(msg) => write!(f, "Invalid CLI arguments: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Parse(e) => Some(e),
            CliError::Json(e) => Some(e),
            CliError::Io(e) => Some(e),
            CliError::Usage(_) => None,
        }
    }
}

impl From<crate::ParseError> for CliError {
    fn from(e: crate::ParseError) -> Self {
        CliError::Parse(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}
