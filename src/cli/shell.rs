//! Interactive read-eval-print loop

use std::io::{BufRead, Write};

use super::{round_to_sig_figs, CliError};
use crate::output::format_number;
use crate::Parser;

/// Prompt written before each line when the shell is interactive
pub const PROMPT: &str = ">? ";

/// Reserved command that ends the session
pub const EXIT_COMMAND: &str = "!exit";

/// What the shell should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellAction {
    Continue,
    Exit,
}

/// A read-eval-print loop over any line source and output sink.
///
/// ```
/// use mathexpr::cli::Shell;
///
/// let mut out = Vec::new();
/// Shell::new("1 + 2\n!exit\n3 + 4\n".as_bytes(), &mut out, 12).run().unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "3.0\n");
/// ```
pub struct Shell<R, W> {
    input: R,
    output: W,
    round_sf: u32,
    prompt: bool,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, round_sf: u32) -> Self {
        Shell {
            input,
            output,
            round_sf,
            prompt: false,
        }
    }

    /// Write [`PROMPT`] before reading each line.
    pub fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    /// Run until end of input or [`EXIT_COMMAND`].
    pub fn run(&mut self) -> Result<(), CliError> {
        loop {
            if self.prompt {
                write!(self.output, "{}", PROMPT)?;
                self.output.flush()?;
            }

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                log::debug!("end of input, leaving shell");
                break;
            }

            if self.run_command(&line)? == ShellAction::Exit {
                break;
            }
        }
        Ok(())
    }

    /// Run one line. Parse errors are reported to the output, not returned.
    pub fn run_command(&mut self, line: &str) -> Result<ShellAction, CliError> {
        let line = line.trim();
        let command = line.split_whitespace().next().unwrap_or("");

        match command {
            "" => Ok(ShellAction::Continue),
            EXIT_COMMAND => {
                log::debug!("exit command received");
                Ok(ShellAction::Exit)
            }
            _ => {
                log::debug!("evaluating {:?}", line);
                match Parser::new(line).parse() {
                    Ok(node) => {
                        let value = round_to_sig_figs(node.evaluate(), self.round_sf);
                        writeln!(self.output, "{}", format_number(value))?;
                    }
                    Err(e) => writeln!(self.output, "{}", e)?,
                }
                Ok(ShellAction::Continue)
            }
        }
    }
}
