//! Line-based console used by the menu handlers
//!
//! Generic over the reader and writer so sessions can be scripted in tests.

use std::io::{self, BufRead, Write};
use crate::utils::errors::{EventDeskError, Result};
use crate::utils::validation::trim;

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Write one line
    pub fn say(&mut self, text: impl AsRef<str>) -> Result<()> {
        writeln!(self.output, "{}", text.as_ref())?;
        Ok(())
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.output
    }

    /// Show `label` and read one trimmed line.
    ///
    /// End of input is reported as an `UnexpectedEof` I/O error, which the
    /// session loop treats as logout.
    pub fn prompt(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input").into());
        }
        Ok(trim(&line).to_string())
    }

    /// Read a whole number; anything else yields `None`
    pub fn prompt_number(&mut self, label: &str) -> Result<Option<i64>> {
        Ok(self.prompt(label)?.parse().ok())
    }

    /// Ask a yes/no question, only an explicit "yes" counts
    pub fn confirm(&mut self, label: &str) -> Result<bool> {
        Ok(self.prompt(label)?.eq_ignore_ascii_case("yes"))
    }

    /// Print a failed action and keep going; I/O errors on the console
    /// itself are passed up
    pub fn report(&mut self, result: Result<()>) -> Result<()> {
        match result {
            Err(EventDeskError::Io(e)) => Err(EventDeskError::Io(e)),
            Err(e) => self.say(format!("Error: {}", e)),
            Ok(()) => Ok(()),
        }
    }
}

/// True for the error raised when input runs out
pub fn is_end_of_input(error: &EventDeskError) -> bool {
    matches!(error, EventDeskError::Io(e) if e.kind() == io::ErrorKind::UnexpectedEof)
}
