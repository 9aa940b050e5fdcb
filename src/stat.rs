use std::path::Path;

/// Classification of whatever currently sits at a filesystem path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathType {
    /// Nothing exists at the path.
    NotFound,
    /// The path is a regular file (or a symlink resolving to one).
    File,
    /// The path is a directory (or a symlink resolving to one).
    Directory,
    /// Something exists but is neither a regular file nor a directory:
    /// a dangling symlink, socket, FIFO, device node, etc.
    Other,
}

impl PathType {
    /// Classify `path`.
    ///
    /// Symlinks are followed, so a link to a live file classifies as
    /// [`PathType::File`]. A link whose target is missing still *exists*
    /// as a directory entry and classifies as [`PathType::Other`].
    pub fn of(path: impl AsRef<Path>) -> Self {
        let p = path.as_ref();
        if p.is_dir() {
            PathType::Directory
        } else if p.is_file() {
            PathType::File
        } else if p.symlink_metadata().is_ok() {
            PathType::Other
        } else {
            PathType::NotFound
        }
    }
}

/// Return `true` if anything exists at `path`, including dangling symlinks.
pub fn exists(path: impl AsRef<Path>) -> bool {
    PathType::of(path) != PathType::NotFound
}

/// Return `true` if `path` is a regular file.
pub fn is_file(path: impl AsRef<Path>) -> bool {
    PathType::of(path) == PathType::File
}

/// Return `true` if `path` is a directory.
pub fn is_dir(path: impl AsRef<Path>) -> bool {
    PathType::of(path) == PathType::Directory
}
