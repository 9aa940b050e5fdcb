use std::fs::File;
use std::io;
use std::path::Path;

use log::debug;

use crate::error::FileUtilError;

/// Concatenate `files` into `dst`, in order, byte for byte.
///
/// `dst` is created or truncated first; each input's raw contents are then
/// appended with no separators and no text processing. Each source handle
/// is closed before the next one opens. An error partway through leaves
/// `dst` holding the successfully-written prefix.
pub fn concat<P: AsRef<Path>>(files: &[P], dst: impl AsRef<Path>) -> Result<(), FileUtilError> {
    let dst = dst.as_ref();
    debug!("concat {} inputs -> {}", files.len(), dst.display());

    let mut out = File::create(dst)?;
    for file in files {
        // Rebound each iteration, so the previous reader is dropped (and
        // its descriptor released) before the next file opens.
        let mut reader = File::open(file.as_ref())?;
        io::copy(&mut reader, &mut out)?;
    }
    Ok(())
}
