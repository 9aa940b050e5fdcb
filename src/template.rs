use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::debug;

use crate::error::FileUtilError;

/// Copy `src` to `dst`, performing a simple copy-replace templating pass
/// along the way.
///
/// `to_replace` is a flat list of needle/replacement pairs:
///
/// ```no_run
/// # use filekit::template::copy_file;
/// copy_file("in.tmpl", "out.txt", &[
///     "%username%", "lskywalker",
///     "%firstname%", "Luke",
///     "%lastname%", "Skywalker",
/// ]).unwrap();
/// ```
///
/// Replacement is literal substring matching, not regex. If the same needle
/// appears twice in the list the later replacement wins and is applied once.
/// The source's lines are rejoined with `\n`, which normalizes Windows line
/// endings and drops any trailing line terminator. Missing parent
/// directories of `dst` are created; an existing `dst` is overwritten.
///
/// An odd-length `to_replace` is rejected before any filesystem access. A
/// failed write may leave a truncated `dst` behind; no cleanup is attempted.
pub fn copy_file<S: AsRef<str>>(
    src: impl AsRef<Path>,
    dst: impl AsRef<Path>,
    to_replace: &[S],
) -> Result<(), FileUtilError> {
    if to_replace.len() % 2 != 0 {
        return Err(FileUtilError::InvalidArgument(format!(
            "replacement list must have even length, got {}",
            to_replace.len()
        )));
    }
    let src = src.as_ref();
    let dst = dst.as_ref();
    debug!("copy_file {} -> {}", src.display(), dst.display());

    // Last pair wins for duplicate needles.
    let mut replacements: HashMap<&str, &str> = HashMap::with_capacity(to_replace.len() / 2);
    for pair in to_replace.chunks_exact(2) {
        replacements.insert(pair[0].as_ref(), pair[1].as_ref());
    }

    let text = fs::read_to_string(src)?;
    let mut content = text.lines().collect::<Vec<_>>().join("\n");
    for (needle, replacement) in &replacements {
        content = content.replace(needle, replacement);
    }

    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(dst, content.as_bytes())?;
    Ok(())
}
