//! I/O utility functions

use std::fs;
use std::io;
use std::path::Path;

/// Write bytes to a file atomically using write-then-rename pattern.
///
/// The content lands in a sibling `<name>.<ext>.tmp` file first and is then
/// renamed over the target, so a reader never sees a half-written export.
///
/// # Example
/// ```ignore
/// atomic_write_bytes(Path::new("output/condo/year/full.csv"), &bytes)?;
/// ```
pub fn atomic_write_bytes(path: &Path, content: &[u8]) -> io::Result<()> {
    let temp_path = match path.extension() {
        Some(ext) => path.with_extension(format!("{}.tmp", ext.to_string_lossy())),
        None => path.with_extension("tmp"),
    };
    fs::write(&temp_path, content)?;
    fs::rename(&temp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_atomic_write_bytes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("full.csv");

        atomic_write_bytes(&path, b"month,rent\n0,$0.00\n").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "month,rent\n0,$0.00\n");
        assert!(!dir.path().join("full.csv.tmp").exists());
    }

    #[test]
    fn test_atomic_write_bytes_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("full.csv");

        atomic_write_bytes(&path, b"first").unwrap();
        atomic_write_bytes(&path, b"second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }
}
