use std::path::{Path, PathBuf};

/// A single failed check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    TooShort { min_len: i64 },
    PatternMismatch,
}

impl Violation {
    /// Diagnostic line printed for `path`.
    #[must_use]
    pub fn message(&self, path: &Path) -> String {
        match self {
            Self::TooShort { min_len } => {
                format!("Name too short (min_len={min_len}): {}", path.display())
            }
            Self::PatternMismatch => {
                format!("Filename is not in snake case: {}", path.display())
            }
        }
    }
}

/// Outcome of validating one filename.
///
/// Violations are stored in check order: length first, then pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    path: PathBuf,
    stem: String,
    violations: Vec<Violation>,
}

impl FileReport {
    #[must_use]
    pub const fn new(path: PathBuf, stem: String, violations: Vec<Violation>) -> Self {
        Self {
            path,
            stem,
            violations,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn stem(&self) -> &str {
        &self.stem
    }

    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Diagnostic lines in the order they are printed.
    pub fn messages(&self) -> impl Iterator<Item = String> + '_ {
        self.violations.iter().map(|v| v.message(&self.path))
    }
}
