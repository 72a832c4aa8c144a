//! Line-oriented prompting over any reader/writer pair.
//!
//! The driver talks to stdin/stdout through this type; tests hand it an
//! in-memory cursor and a `Vec<u8>`.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use roster_core::model::parse_score;

/// A prompt-and-read console.
///
/// Every `prompt*` method returns `Ok(None)` once input is exhausted.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writer for command output.
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consume the console, returning the writer.
    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `label` and read one line, without its line terminator.
    pub fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush().context("failed to flush output")?;
        self.read_line()
    }

    /// Print `label` and read the first whitespace-delimited token.
    ///
    /// Blank lines are skipped; anything after the first token is dropped.
    pub fn prompt_token(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush().context("failed to flush output")?;
        loop {
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            if let Some(token) = line.split_whitespace().next() {
                return Ok(Some(token.to_string()));
            }
        }
    }

    /// Print `label` and read a score, re-prompting until it parses.
    pub fn prompt_score(&mut self, label: &str) -> Result<Option<f64>> {
        loop {
            let Some(line) = self.prompt(label)? else {
                return Ok(None);
            };
            match parse_score(&line) {
                Ok(score) => return Ok(Some(score)),
                Err(e) => {
                    tracing::debug!(error = %e, "rejected score input");
                    writeln!(self.output, "Invalid score, please enter a number.")?;
                }
            }
        }
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let n = self
            .input
            .read_line(&mut line)
            .context("failed to read input")?;
        if n == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}
