pub mod checker;
pub mod cli;
pub mod commands;
pub mod error;
pub mod output;
pub mod path_utils;

pub use error::{FilenameValidationError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_VALIDATION_FAILED: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
