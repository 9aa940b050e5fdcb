use std::path::Path;

use crate::error::FileUtilError;

/// Wrap `input` in double quotes iff it contains a space.
///
/// This is a narrow heuristic for handing paths to shells and build tools:
/// it does not escape embedded quote characters, tabs, or other shell
/// metacharacters, and is not a general shell-escaping routine.
pub fn quote(input: &str) -> String {
    if input.contains(' ') {
        format!("\"{}\"", input)
    } else {
        input.to_string()
    }
}

/// Apply [`quote`] to the absolute form of `path`.
///
/// The path is made absolute against the current working directory without
/// resolving symlinks and without requiring it to exist.
pub fn quote_path(path: impl AsRef<Path>) -> Result<String, FileUtilError> {
    let absolute = std::path::absolute(path.as_ref())?;
    Ok(quote(&absolute.to_string_lossy()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_only_when_a_space_is_present() {
        assert_eq!(quote("a b"), "\"a b\"");
        assert_eq!(quote("ab"), "ab");
        assert_eq!(quote(""), "");
        // Other whitespace does not trigger quoting.
        assert_eq!(quote("a\tb"), "a\tb");
    }

    #[test]
    fn quote_path_uses_absolute_form() {
        let quoted = quote_path("some/relative/path").unwrap();
        let unquoted = quoted.trim_matches('"');
        assert!(Path::new(unquoted).is_absolute());
        assert!(unquoted.ends_with("some/relative/path") || cfg!(windows));
    }

    #[test]
    fn quote_path_quotes_spaced_components() {
        let tmp = tempfile::tempdir().unwrap();
        let spaced = tmp.path().join("dir with spaces/file.txt");
        let quoted = quote_path(&spaced).unwrap();
        assert!(quoted.starts_with('"') && quoted.ends_with('"'), "{quoted}");
    }
}
