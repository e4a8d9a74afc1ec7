use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilenameValidationError {
    #[error("Invalid naming pattern: {pattern}")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FilenameValidationError {
    /// Short category label shown in front of the message.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::InvalidRegex { .. } => "Config",
            Self::Io(_) => "IO",
        }
    }

    /// The primary message without the category prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::InvalidRegex { pattern, .. } => format!("invalid --regex pattern '{pattern}'"),
            Self::Io(e) => e.to_string(),
        }
    }

    /// Underlying cause, when there is one worth showing.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::InvalidRegex { source, .. } => Some(source.to_string()),
            Self::Io(_) => None,
        }
    }

    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::InvalidRegex { .. } => {
                Some("Check the regex syntax, e.g. --regex '^[a-z_]+$' (https://docs.rs/regex)")
            }
            Self::Io(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, FilenameValidationError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
