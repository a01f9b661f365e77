//! Output directory housekeeping

use std::fs;
use std::io;
use std::path::Path;

/// Remove everything inside `dir`, keeping the directory itself.
///
/// A missing directory is not an error. Returns the number of entries removed.
pub fn clear_output_dir(dir: &Path) -> io::Result<usize> {
    if !dir.exists() {
        return Ok(0);
    }

    let mut removed = 0;
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            fs::remove_dir_all(&path)?;
        } else {
            fs::remove_file(&path)?;
        }
        removed += 1;
    }

    tracing::info!(dir = %dir.display(), removed, "output directory cleared");
    Ok(removed)
}
