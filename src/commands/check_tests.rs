use clap::Parser;

use super::*;

fn run(args: &[&str]) -> (crate::Result<i32>, String) {
    let cli = Cli::parse_from(std::iter::once("validate-filename").chain(args.iter().copied()));
    let mut buf = Vec::new();
    let result = run_check_impl(&cli, &mut buf, false);
    let output = String::from_utf8(buf).unwrap();
    (result, output)
}

#[test]
fn single_short_name_fails() {
    let (result, output) = run(&["x.py", "--min-len", "2"]);
    assert_eq!(result.unwrap(), EXIT_VALIDATION_FAILED);
    assert!(output.contains("too short"));
}

#[test]
fn valid_names_pass_with_default_min_len() {
    let (result, output) = run(&[
        "src/filename_validation/cli.py",
        "src/filename_validation/__init__.py",
        "--min-len",
        "3",
    ]);
    assert_eq!(result.unwrap(), EXIT_SUCCESS);
    assert!(output.is_empty());
}

#[test]
fn raising_min_len_fails_short_stem() {
    let (result, _) = run(&[
        "src/filename_validation/cli.py",
        "src/filename_validation/__init__.py",
        "--min-len",
        "4",
    ]);
    assert_eq!(result.unwrap(), EXIT_VALIDATION_FAILED);
}

#[test]
fn one_bad_name_fails_the_whole_run() {
    for min_len in ["3", "4"] {
        let (result, output) = run(&[
            "src/filename_validation/cli.py",
            "HelloWorld.py",
            "--min-len",
            min_len,
        ]);
        assert_eq!(result.unwrap(), EXIT_VALIDATION_FAILED);
        assert!(output.contains("snake case"));
    }
}

#[test]
fn no_filenames_succeeds() {
    let (result, output) = run(&[]);
    assert_eq!(result.unwrap(), EXIT_SUCCESS);
    assert!(output.is_empty());
}

#[test]
fn every_filename_is_checked_after_a_failure() {
    let (result, output) = run(&["HelloWorld.py", "x.py"]);
    assert_eq!(result.unwrap(), EXIT_VALIDATION_FAILED);
    assert!(output.contains("not in snake case: HelloWorld.py"));
    assert!(output.contains("too short (min_len=3): x.py"));
}

#[test]
fn invalid_regex_fails_before_any_output() {
    let (result, output) = run(&["HelloWorld.py", "--regex", "[a-z"]);
    let err = result.unwrap_err();
    assert!(matches!(
        err,
        crate::FilenameValidationError::InvalidRegex { .. }
    ));
    assert!(output.is_empty());
}

#[test]
fn custom_regex_changes_accepted_names() {
    let (result, _) = run(&["kebab-case.md", "--regex", "^[a-z-]+$"]);
    assert_eq!(result.unwrap(), EXIT_SUCCESS);
}

#[test]
fn verbose_reports_every_file() {
    let (result, output) = run(&["-v", "cli.py", "Bad.py"]);
    assert_eq!(result.unwrap(), EXIT_VALIDATION_FAILED);
    assert_eq!(
        output,
        "Validating cli.py...\n[OK]\nValidating Bad.py...\nFilename is not in snake case: Bad.py\n[FAIL]\n"
    );
}

#[test]
fn negative_min_len_only_checks_pattern() {
    let (result, output) = run(&["--min-len", "-1", "ab.py"]);
    assert_eq!(result.unwrap(), EXIT_SUCCESS);
    assert!(output.is_empty());

    let (result, output) = run(&["--min-len", "-1", "AB.py"]);
    assert_eq!(result.unwrap(), EXIT_VALIDATION_FAILED);
    assert!(!output.contains("too short"));
}
