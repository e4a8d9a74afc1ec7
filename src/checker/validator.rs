use std::path::Path;

use crate::path_utils::file_stem;

use super::{Checker, FileReport, ValidationConfig, Violation};

pub struct FilenameValidator {
    config: ValidationConfig,
}

impl FilenameValidator {
    #[must_use]
    pub const fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validate every path in order. Never stops at the first failure.
    pub fn check_all<I, P>(&self, paths: I) -> Vec<FileReport>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        paths
            .into_iter()
            .map(|p| self.check(p.as_ref()))
            .collect()
    }
}

impl Checker for FilenameValidator {
    fn check(&self, path: &Path) -> FileReport {
        let stem = file_stem(path);
        let mut violations = Vec::new();

        // Length counts characters, not bytes.
        let len = i64::try_from(stem.chars().count()).unwrap_or(i64::MAX);
        if len < self.config.min_len {
            violations.push(Violation::TooShort {
                min_len: self.config.min_len,
            });
        }

        if !self.config.pattern.is_match(&stem) {
            violations.push(Violation::PatternMismatch);
        }

        FileReport::new(path.to_path_buf(), stem, violations)
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
