use std::fs;
use std::io;
use std::path::Path;

use fs_extra::dir::{copy as dir_copy, CopyOptions};
use log::debug;

use crate::error::FileUtilError;
use crate::stat::PathType;

/// Flatten a single directory: move its children to be its peers, then
/// delete the directory itself.
///
/// ```text
/// before:
///     root/
///        to_flatten/
///           child1
///           child2
///
/// flatten("root/to_flatten")
///
/// after:
///     root/
///        child1
///        child2
/// ```
///
/// Files move as files and directories move with all their contents. A
/// child that is neither (a dangling symlink, a socket) fails the whole
/// call with [`FileUtilError::UnsupportedFileType`]. If a sibling with a
/// child's name already exists the move fails rather than overwriting.
/// There is no rollback: children relocated before a failure stay where
/// they were moved.
pub fn flatten(dir: impl AsRef<Path>) -> Result<(), FileUtilError> {
    let dir = dir.as_ref();
    let parent = dir.parent().ok_or_else(|| {
        FileUtilError::InvalidArgument(format!(
            "{} has no parent to flatten into",
            dir.display()
        ))
    })?;
    debug!("flatten {} into {}", dir.display(), parent.display());

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let child = entry.path();
        let target = parent.join(entry.file_name());
        if target.symlink_metadata().is_ok() {
            return Err(FileUtilError::Io(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("flatten target already exists: {}", target.display()),
            )));
        }
        match PathType::of(&child) {
            PathType::File => move_file(&child, &target)?,
            PathType::Directory => move_dir(&child, &target)?,
            PathType::NotFound | PathType::Other => {
                return Err(FileUtilError::UnsupportedFileType(child));
            }
        }
    }

    fs::remove_dir(dir)?;
    Ok(())
}

/// Move a regular file, falling back to copy+remove when rename fails
/// (cross-device moves).
fn move_file(src: &Path, dst: &Path) -> io::Result<()> {
    if fs::rename(src, dst).is_ok() {
        return Ok(());
    }
    fs::copy(src, dst)?;
    fs::remove_file(src)
}

/// Move a directory tree, falling back to a recursive copy+remove when
/// rename fails.
fn move_dir(src: &Path, dst: &Path) -> io::Result<()> {
    if fs::rename(src, dst).is_ok() {
        return Ok(());
    }
    let mut options = CopyOptions::new();
    // `copy_inside = true` creates `dst` and copies the contents of `src`
    // into it rather than nesting the `src` folder itself.
    options.copy_inside = true;
    options.buffer_size = 64 * 1024;
    dir_copy(src, dst, &options).map_err(io::Error::other)?;
    fs::remove_dir_all(src)
}
