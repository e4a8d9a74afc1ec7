mod config;
mod result;
mod validator;

pub use config::{DEFAULT_MIN_LEN, SNAKE_CASE_PATTERN, ValidationConfig};
pub use result::{FileReport, Violation};
pub use validator::FilenameValidator;

use std::path::Path;

pub trait Checker {
    /// Check a single filename. Implementations must not print anything.
    fn check(&self, path: &Path) -> FileReport;
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
