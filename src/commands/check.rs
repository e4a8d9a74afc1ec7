use std::io::Write;

use crate::checker::{Checker, FilenameValidator, ValidationConfig};
use crate::cli::Cli;
use crate::output::{ColorMode, ErrorOutput, TextReporter};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, EXIT_VALIDATION_FAILED};

/// Validate every filename given on the command line and return the exit code.
#[must_use]
pub fn run_check(cli: &Cli) -> i32 {
    let mode = ColorMode::from(cli.color);
    let stdout = std::io::stdout();
    let use_colors = mode.use_colors(&stdout);

    match run_check_impl(cli, stdout, use_colors) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            ErrorOutput::new(mode).print(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Core of [`run_check`] with the output sink injected.
///
/// A `min_len` of zero or below disables the length check.
///
/// The pattern is compiled before any filename is checked; every filename is
/// then checked and reported even after a failure.
///
/// # Errors
/// Returns an error if the naming pattern is invalid or the output cannot be written.
pub fn run_check_impl<W: Write>(cli: &Cli, writer: W, use_colors: bool) -> crate::Result<i32> {
    let config = ValidationConfig::new(cli.min_len, &cli.regex)?.with_verbose(cli.verbose);
    let mut reporter = TextReporter::for_config(writer, use_colors, &config);
    let validator = FilenameValidator::new(config);

    let mut failed = 0usize;
    for filename in &cli.filenames {
        let report = validator.check(filename);
        reporter.report(&report)?;
        if !report.is_valid() {
            failed += 1;
        }
    }

    Ok(if failed == 0 {
        EXIT_SUCCESS
    } else {
        EXIT_VALIDATION_FAILED
    })
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
