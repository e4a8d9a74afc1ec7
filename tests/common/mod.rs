#![allow(dead_code)]

/// Creates an `assert_cmd` Command for the validate-filename binary.
#[macro_export]
macro_rules! validate_filename {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("validate-filename"))
    };
}

/// Filenames that pass the default checks.
pub const VALID_FILENAMES: &[&str] = &[
    "src/filename_validation/cli.py",
    "src/filename_validation/__init__.py",
    "validate_filename.py",
];
