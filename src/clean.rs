use std::fs;
use std::path::Path;

use log::{debug, warn};

use crate::error::FileUtilError;
use crate::stat::PathType;

/// Delete whatever exists at `path`, then create a fresh empty directory in
/// its place (creating missing parents too).
///
/// An existing regular file is removed directly. An existing directory is
/// removed recursively; if that fails partway (a locked file, a
/// permission-denied entry), the function falls back to deleting each
/// immediate child individually and absorbs per-child failures instead of
/// propagating them. The desired end state is "an existing directory at
/// `path`", and a close-to-empty directory is an acceptable outcome when
/// full deletion is blocked.
///
/// Calling this twice in a row is safe and leaves the same result.
pub fn clean_dir(path: impl AsRef<Path>) -> Result<(), FileUtilError> {
    let dir = path.as_ref();
    debug!("clean_dir {}", dir.display());

    match PathType::of(dir) {
        PathType::File => fs::remove_file(dir)?,
        PathType::Directory => {
            if let Err(e) = fs::remove_dir_all(dir) {
                // We couldn't delete the directory wholesale, but deleting
                // everything inside is just as good.
                warn!(
                    "recursive delete of {} failed ({}), removing children individually",
                    dir.display(),
                    e
                );
                remove_children_best_effort(dir);
            }
        }
        PathType::NotFound | PathType::Other => {}
    }

    fs::create_dir_all(dir)?;
    Ok(())
}

/// Fallback cleanup: delete each direct child of `dir`, files directly and
/// subdirectories recursively. Individual failures are logged and skipped.
fn remove_children_best_effort(dir: &Path) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("could not list {}: {}", dir.display(), e);
            return;
        }
    };
    for entry in entries.flatten() {
        let child = entry.path();
        let removed = if child.is_dir() {
            fs::remove_dir_all(&child)
        } else {
            fs::remove_file(&child)
        };
        if let Err(e) = removed {
            warn!("could not remove {}: {}", child.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn is_empty_dir(p: &Path) -> bool {
        p.is_dir() && fs::read_dir(p).unwrap().next().is_none()
    }

    #[test]
    fn replaces_populated_directory_with_empty_one() {
        let tmp = tempdir().unwrap();
        let dir = tmp.path().join("work");
        fs::create_dir_all(dir.join("sub")).unwrap();
        fs::write(dir.join("a.txt"), b"a").unwrap();
        fs::write(dir.join("sub/b.txt"), b"b").unwrap();

        clean_dir(&dir).unwrap();
        assert!(is_empty_dir(&dir));
    }

    #[test]
    fn replaces_regular_file_with_directory() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("target");
        fs::write(&path, b"i am a file").unwrap();

        clean_dir(&path).unwrap();
        assert!(is_empty_dir(&path));
    }

    #[test]
    fn creates_directory_when_nothing_exists() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("brand/new/dir");
        clean_dir(&path).unwrap();
        assert!(is_empty_dir(&path));
    }

    #[test]
    fn idempotent_when_called_twice() {
        let tmp = tempdir().unwrap();
        let dir = tmp.path().join("work");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("x"), b"x").unwrap();

        clean_dir(&dir).unwrap();
        clean_dir(&dir).unwrap();
        assert!(is_empty_dir(&dir));
    }

    #[cfg(unix)]
    #[test]
    fn survives_read_protected_child() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempdir().unwrap();
        let dir = tmp.path().join("work");
        let locked = dir.join("locked");
        fs::create_dir_all(&locked).unwrap();
        fs::write(locked.join("inner.txt"), b"x").unwrap();
        fs::write(dir.join("free.txt"), b"y").unwrap();

        // Strip the write bit so entries inside `locked` cannot be unlinked
        // (no effect when running as root, in which case deletion simply
        // succeeds and the directory ends up empty).
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o555)).unwrap();

        let result = clean_dir(&dir);

        // Restore so the tempdir can be cleaned up on drop.
        if locked.exists() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        }

        result.expect("clean_dir must not fail on blocked children");
        assert!(dir.is_dir(), "directory must exist after clean_dir");
    }
}
