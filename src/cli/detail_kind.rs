//! Mode-token classification.
//!
//! This module provides:
//! - [`DetailKind`] — which file detail the CLI should report.
//! - [`VERSION_ARGUMENTS`] / [`SIZE_ARGUMENTS`] — the recognised spellings of each mode flag.
//! - [`classify`] — maps a mode token onto a [`DetailKind`].

use std::fmt;
use std::str::FromStr;

use crate::error::FileDataError;

/// Recognised spellings of the version flag. Matched exactly and case-sensitively.
pub const VERSION_ARGUMENTS: &[&str] = &["-v", "--v", "/v", "--version"];

/// Recognised spellings of the size flag. Matched exactly and case-sensitively.
pub const SIZE_ARGUMENTS: &[&str] = &["-s", "--s", "/s", "--size"];

/// The file detail selected by the mode token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailKind {
    /// The file's version, as `major.minor.build`.
    Version,
    /// The file's size in bytes.
    Size,
}

impl DetailKind {
    /// All recognised spellings for this kind.
    pub fn synonyms(self) -> &'static [&'static str] {
        match self {
            DetailKind::Version => VERSION_ARGUMENTS,
            DetailKind::Size => SIZE_ARGUMENTS,
        }
    }
}

impl fmt::Display for DetailKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DetailKind::Version => "version",
            DetailKind::Size => "size",
        })
    }
}

/// Classify `token` as a [`DetailKind`].
///
/// The version set is checked before the size set. `None`, the empty string
/// and any other unrecognised token yield
/// [`FileDataError::InvalidDetailType`].
pub fn classify(token: Option<&str>) -> Result<DetailKind, FileDataError> {
    match token {
        Some(t) if VERSION_ARGUMENTS.contains(&t) => Ok(DetailKind::Version),
        Some(t) if SIZE_ARGUMENTS.contains(&t) => Ok(DetailKind::Size),
        _ => Err(FileDataError::invalid_detail_type(token)),
    }
}

impl FromStr for DetailKind {
    type Err = FileDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        classify(Some(s))
    }
}
