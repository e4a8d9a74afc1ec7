use std::io::Write;

use crate::checker::{FileReport, ValidationConfig};
use crate::error::Result;

use super::ansi;

/// Writes per-file diagnostics as plain text lines.
///
/// Each report is written and flushed as soon as it is produced, so output
/// from a long filename list shows up incrementally.
pub struct TextReporter<W: Write> {
    writer: W,
    use_colors: bool,
    verbose: bool,
}

impl<W: Write> TextReporter<W> {
    #[must_use]
    pub const fn new(writer: W, use_colors: bool, verbose: bool) -> Self {
        Self {
            writer,
            use_colors,
            verbose,
        }
    }

    /// Reporter whose verbosity follows `config`.
    #[must_use]
    pub const fn for_config(writer: W, use_colors: bool, config: &ValidationConfig) -> Self {
        Self::new(writer, use_colors, config.verbose)
    }

    /// Write the diagnostics for one filename.
    ///
    /// In verbose mode the diagnostics are framed by a `Validating <name>...`
    /// line and an `[OK]`/`[FAIL]` status line.
    ///
    /// # Errors
    /// Returns an error if the underlying writer fails.
    pub fn report(&mut self, report: &FileReport) -> Result<()> {
        if self.verbose {
            writeln!(self.writer, "Validating {}...", report.path().display())?;
        }

        for message in report.messages() {
            writeln!(self.writer, "{message}")?;
        }

        if self.verbose {
            let status = self.status(report.is_valid());
            writeln!(self.writer, "{status}")?;
        }

        self.writer.flush()?;
        Ok(())
    }

    fn status(&self, valid: bool) -> String {
        let (text, color) = if valid {
            ("[OK]", ansi::GREEN)
        } else {
            ("[FAIL]", ansi::RED)
        };

        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
