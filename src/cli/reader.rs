//! Argument dispatch: turns `(mode, path)` into the requested file detail.
//!
//! [`FileDataReader::get_detail_from_args`] is the single real entry point;
//! [`FileDataReader::get_detail`] adapts the two-argument form onto it.
//! The reader never touches the file system itself. Every lookup goes
//! through its [`FileDetails`] provider, whose errors are returned unchanged.

use std::ffi::OsStr;
use std::path::Path;

use crate::cli::detail_kind::{classify, DetailKind};
use crate::details::FileDetails;
use crate::displaylevel;
use crate::error::FileDataError;

/// Interprets CLI arguments and asks a [`FileDetails`] provider for the detail.
#[derive(Debug, Clone)]
pub struct FileDataReader<D> {
    details: D,
}

impl<D: FileDetails> FileDataReader<D> {
    pub fn new(details: D) -> Self {
        FileDataReader { details }
    }

    /// The provider this reader delegates to.
    pub fn details(&self) -> &D {
        &self.details
    }

    /// Returns the detail selected by `detail_type` for the file at `file_path`.
    ///
    /// Equivalent to `get_detail_from_args(&[detail_type, file_path])`.
    pub fn get_detail(&self, detail_type: &str, file_path: &str) -> Result<String, FileDataError> {
        self.get_detail_from_args(&[detail_type, file_path])
    }

    /// Interprets `args[0]` as the mode and `args[1]` as the file path.
    ///
    /// Fails with [`FileDataError::InvalidArgumentCount`] when fewer than two
    /// arguments are given, and with [`FileDataError::InvalidDetailType`] when
    /// the mode is not recognised. Arguments past the second are ignored.
    ///
    /// Arguments are taken as `OsStr` so that a path which is not valid
    /// UTF-8 still reaches the provider byte for byte.
    pub fn get_detail_from_args<S: AsRef<OsStr>>(&self, args: &[S]) -> Result<String, FileDataError> {
        let (mode, path): (&OsStr, &OsStr) = match args {
            [mode, path, rest @ ..] => {
                for extra in rest {
                    let extra: &OsStr = extra.as_ref();
                    displaylevel!(2, "Warning: {} won't be used !\n", extra.to_string_lossy());
                }
                (mode.as_ref(), path.as_ref())
            }
            _ => return Err(FileDataError::invalid_argument_count(args)),
        };

        // a mode that is not UTF-8 cannot match any synonym
        let kind = match mode.to_str() {
            Some(mode) => classify(Some(mode))?,
            None => return Err(FileDataError::invalid_detail_type(Some(&*mode.to_string_lossy()))),
        };
        displaylevel!(4, "Reading {} of {}\n", kind, Path::new(path).display());
        self.read(kind, Path::new(path))
    }

    fn read(&self, kind: DetailKind, path: &Path) -> Result<String, FileDataError> {
        let detail = match kind {
            DetailKind::Version => self.details.version(path)?,
            DetailKind::Size => self.details.size(path)?.to_string(),
        };
        Ok(detail)
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
