//! File size lookup.
//!
//! Sizes come from `std::fs::metadata`, which follows symlinks. Only regular
//! files have a meaningful size here; directories and special files are
//! rejected rather than reported as `0`.

use std::fs;
use std::io;
use std::path::Path;

/// Returns the size in bytes of the regular file at `path`.
///
/// Errors from `stat` (missing file, permission denied, …) are returned as-is.
/// A path that exists but is not a regular file yields
/// `io::ErrorKind::InvalidInput`.
pub fn get_file_size(path: &Path) -> io::Result<u64> {
    let meta = fs::metadata(path)?;
    if !meta.file_type().is_file() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{}: not a regular file", path.display()),
        ));
    }
    Ok(meta.len())
}

// ─── Tests ────────────────────────────────────────────────────────────────────
