use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the filekit helpers.
///
/// Underlying `std::io::Error` values are wrapped rather than remapped so
/// callers can still inspect the original `ErrorKind`. The remaining
/// variants cover problems detected before any filesystem access is made.
#[derive(Debug, Error)]
pub enum FileUtilError {
    /// Wrapper for underlying IO errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed input rejected before any I/O occurs.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A token write was aimed at something that is not a directory.
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// Flattening met an entry that is neither a regular file nor a
    /// directory (dangling symlink, socket, FIFO, device node).
    #[error("unsupported file type: {}", .0.display())]
    UnsupportedFileType(PathBuf),
}
