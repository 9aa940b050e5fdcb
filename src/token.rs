//! Token files: marker files whose existence (and optional UTF-8 payload)
//! signals a flag inside some directory.
//!
//! There is no lifecycle management here; writes, reads and existence
//! checks are all single-shot operations with no caching.

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::FileUtilError;

/// Write a token file named `name` into `dir`, containing `value` as UTF-8.
///
/// Fails with [`FileUtilError::NotADirectory`] before any write if `dir`
/// is not an existing directory. An existing token of the same name is
/// overwritten.
pub fn write_token(dir: impl AsRef<Path>, name: &str, value: &str) -> Result<(), FileUtilError> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(FileUtilError::NotADirectory(dir.to_path_buf()));
    }
    let token = dir.join(name);
    debug!("write_token {}", token.display());
    fs::write(&token, value.as_bytes())?;
    Ok(())
}

/// Write an empty token file named `name` into `dir`.
pub fn write_empty_token(dir: impl AsRef<Path>, name: &str) -> Result<(), FileUtilError> {
    write_token(dir, name, "")
}

/// The contents of token `name` in `dir`, if it exists as a regular file.
///
/// A missing token is `Ok(None)`, not an error; failures reading an
/// existing token propagate.
pub fn read_token(dir: impl AsRef<Path>, name: &str) -> Result<Option<String>, FileUtilError> {
    let token = dir.as_ref().join(name);
    if !token.is_file() {
        return Ok(None);
    }
    Ok(Some(fs::read_to_string(&token)?))
}

/// True iff `dir` holds a token file named `name`.
pub fn has_token(dir: impl AsRef<Path>, name: &str) -> Result<bool, FileUtilError> {
    Ok(read_token(dir, name)?.is_some())
}
