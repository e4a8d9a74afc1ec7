use std::path::Path;

/// Return the final path component with its last extension removed.
///
/// This follows [`Path::file_stem`]: a leading dot is part of the name rather
/// than an extension separator, and only the final extension is stripped.
///
/// # Examples
///
/// - `"src/cli.py"` yields `"cli"`
/// - `"archive.tar.gz"` yields `"archive.tar"`
/// - `".bashrc"` yields `".bashrc"`
/// - `""` and `".."` have no final component and yield `""`
#[must_use]
pub fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
