//! Evaluate a single expression given on the command line

use super::{node_to_json, round_to_sig_figs, CliError, DEFAULT_ROUND_SF};
use crate::Parser;

/// What to produce from a parsed expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// The rounded numeric result
    #[default]
    Value,
    /// The expression re-rendered with minimal parentheses
    Format,
    /// The syntax tree as JSON
    Tree,
}

/// Options for one-shot evaluation
#[derive(Debug, Clone)]
pub struct EvalOptions {
    /// The expression to evaluate
    pub expression: String,
    /// Significant figures for the displayed value
    pub round_sf: u32,
    pub mode: OutputMode,
}

impl Default for EvalOptions {
    fn default() -> Self {
        EvalOptions {
            expression: String::new(),
            round_sf: DEFAULT_ROUND_SF,
            mode: OutputMode::Value,
        }
    }
}

/// Result of a one-shot evaluation
#[derive(Debug, Clone, PartialEq)]
pub enum EvalResult {
    /// Rounded value
    Value(f64),
    /// Minimal-parentheses rendering
    Formatted(String),
    /// Syntax tree
    Tree(serde_json::Value),
}

/// Parse `options.expression` and produce the requested output
pub fn execute_eval(options: &EvalOptions) -> Result<EvalResult, CliError> {
    let node = Parser::new(&options.expression).parse()?;

    let result = match options.mode {
        OutputMode::Value => EvalResult::Value(round_to_sig_figs(node.evaluate(), options.round_sf)),
        OutputMode::Format => EvalResult::Formatted(node.format()),
        OutputMode::Tree => EvalResult::Tree(node_to_json(&node)),
    };
    Ok(result)
}
