//! File-metadata provider.
//!
//! [`FileDetails`] is the seam between the argument dispatcher and the file
//! system: the dispatcher only ever asks a `FileDetails` for a version string
//! or a byte count, and passes its errors through unchanged.
//!
//! [`FsFileDetails`] is the implementation used by the binary:
//! - [`file_size`]    — byte size from file-system metadata
//! - [`file_version`] — version from the fixed-file-info block of a version resource

pub mod file_size;
pub mod file_version;

use std::io;
use std::path::Path;

pub use file_size::get_file_size;
pub use file_version::{find_fixed_file_info, get_file_version, scan_fixed_file_info, FileVersion};

/// Source of the two file details the CLI can report.
pub trait FileDetails {
    /// Returns the version of the file at `path` as dot-delimited integers.
    fn version(&self, path: &Path) -> io::Result<String>;

    /// Returns the size in bytes of the file at `path`.
    fn size(&self, path: &Path) -> io::Result<u64>;
}

impl<T: FileDetails + ?Sized> FileDetails for &T {
    fn version(&self, path: &Path) -> io::Result<String> {
        (**self).version(path)
    }

    fn size(&self, path: &Path) -> io::Result<u64> {
        (**self).size(path)
    }
}

/// Reads file details straight from the local file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsFileDetails;

impl FsFileDetails {
    pub fn new() -> Self {
        FsFileDetails
    }
}

impl FileDetails for FsFileDetails {
    fn version(&self, path: &Path) -> io::Result<String> {
        get_file_version(path).map(|v| v.to_string())
    }

    fn size(&self, path: &Path) -> io::Result<u64> {
        get_file_size(path)
    }
}
