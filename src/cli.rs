use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, ValueEnum};

use crate::checker::{DEFAULT_MIN_LEN, SNAKE_CASE_PATTERN};
use crate::output::ColorMode;

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "validate-filename")]
#[command(version, about = "Check that filenames meet a minimum length and naming pattern")]
#[command(long_about = "Check that filenames meet a minimum length and naming pattern.\n\n\
    Only the stem of each filename (last path component without its final\n\
    extension) is checked. Intended for use as a pre-commit hook.\n\n\
    Exit codes:\n  \
    0 - All filenames are valid\n  \
    1 - At least one filename is invalid\n  \
    2 - Invalid arguments or naming pattern")]
pub struct Cli {
    /// Filenames to process
    pub filenames: Vec<PathBuf>,

    /// Minimum length for a filename stem (zero or negative disables the check)
    #[arg(long, allow_negative_numbers = true, default_value_t = DEFAULT_MIN_LEN)]
    pub min_len: i64,

    /// Regex the filename stem must match (searched, not implicitly anchored)
    #[arg(long, default_value = SNAKE_CASE_PATTERN)]
    pub regex: String,

    /// Print a line for every file checked, with its [OK]/[FAIL] status
    #[arg(short, long)]
    pub verbose: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,
}

/// What the command line asks for.
#[derive(Debug)]
pub enum Invocation {
    Run(Cli),
    Version,
}

impl Cli {
    /// Parse the process arguments.
    ///
    /// # Errors
    /// Returns the clap error for malformed invocations; see [`Cli::parse_invocation_from`].
    pub fn parse_invocation() -> Result<Invocation, clap::Error> {
        Self::parse_invocation_from(std::env::args_os())
    }

    /// Parse `args`, letting `--version` win over any other parse error.
    ///
    /// clap stops at the first bad argument, so `--bogus --version` would
    /// otherwise be a usage error instead of printing the version.
    ///
    /// # Errors
    /// Returns the clap error when parsing fails and `--version` was not given,
    /// and for clap's own `--help`/`--version` display requests.
    pub fn parse_invocation_from<I, T>(args: I) -> Result<Invocation, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        match Self::try_parse_from(&args) {
            Ok(cli) => Ok(Invocation::Run(cli)),
            Err(e) if matches!(e.kind(), ErrorKind::DisplayVersion | ErrorKind::DisplayHelp) => {
                Err(e)
            }
            Err(_) if requests_version(&args) => Ok(Invocation::Version),
            Err(e) => Err(e),
        }
    }
}

/// Whether `--version` appears as its own token before a `--` separator.
/// The first element is the program name and is skipped.
pub fn requests_version<T: AsRef<OsStr>>(args: &[T]) -> bool {
    args.iter()
        .skip(1)
        .map(AsRef::<OsStr>::as_ref)
        .take_while(|arg| *arg != "--")
        .any(|arg| arg == "--version")
}

/// `<prog> <version>`, as printed by `--version`.
#[must_use]
pub fn version_line() -> String {
    format!("{} {}", Cli::command().get_name(), env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
