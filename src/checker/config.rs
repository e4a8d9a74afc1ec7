use regex::Regex;

use crate::error::{FilenameValidationError, Result};

pub const DEFAULT_MIN_LEN: i64 = 3;

/// Lowercase letters and underscores only.
pub const SNAKE_CASE_PATTERN: &str = "^[a-z_]+$";

/// Immutable parameters for one invocation.
///
/// The pattern is compiled exactly once, so a malformed `--regex` is reported
/// before any filename is looked at.
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    /// Values of zero or below disable the length check.
    pub min_len: i64,
    pub pattern: Regex,
    pub verbose: bool,
}

impl ValidationConfig {
    /// # Errors
    /// Returns [`FilenameValidationError::InvalidRegex`] if `pattern` does not compile.
    pub fn new(min_len: i64, pattern: &str) -> Result<Self> {
        let compiled = Regex::new(pattern).map_err(|source| FilenameValidationError::InvalidRegex {
            pattern: pattern.to_string(),
            source,
        })?;

        Ok(Self {
            min_len,
            pattern: compiled,
            verbose: false,
        })
    }

    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_len: DEFAULT_MIN_LEN,
            pattern: Regex::new(SNAKE_CASE_PATTERN).expect("Invalid regex"),
            verbose: false,
        }
    }
}
