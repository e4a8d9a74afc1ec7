//! Error output on stderr.
//!
//! Format: `✖ Error Type: message` / `  × detail` / `  help: suggestion`

use std::io::Write;

use crate::error::FilenameValidationError;

use super::{ColorMode, ansi};

/// Error output formatter with color support.
pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    /// Creates a formatter, resolving `mode` against stderr.
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: mode.use_colors(&std::io::stderr()),
        }
    }

    /// Prints a crate error with its detail and suggestion, if any.
    pub fn print(&self, err: &FilenameValidationError) {
        let mut stderr = std::io::stderr().lock();
        self.write_error(
            &mut stderr,
            err.error_type(),
            &err.message(),
            err.detail().as_deref(),
            err.suggestion(),
        );
    }

    /// Writes an error to any writer.
    pub fn write_error<W: Write>(
        &self,
        w: &mut W,
        error_type: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        // Nothing useful can be done if stderr itself is gone.
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}✖ {error_type}:{} {message}",
                ansi::BOLD,
                ansi::RED,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "✖ {error_type}: {message}");
        }

        if let Some(d) = detail {
            for line in d.lines() {
                if self.use_colors {
                    let _ = writeln!(w, "  {}× {line}{}", ansi::DIM, ansi::RESET);
                } else {
                    let _ = writeln!(w, "  × {line}");
                }
            }
        }

        if let Some(s) = suggestion {
            if self.use_colors {
                let _ = writeln!(w, "  {}help:{} {s}", ansi::CYAN, ansi::RESET);
            } else {
                let _ = writeln!(w, "  help: {s}");
            }
        }
    }

    #[cfg(test)]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
