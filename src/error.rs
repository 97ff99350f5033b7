//! Error type shared by the classifier, the dispatcher and the entry point.
//!
//! | Variant                  | Raised when |
//! |--------------------------|-------------|
//! | `InvalidArgumentCount`   | fewer than two arguments reach the dispatcher |
//! | `InvalidDetailType`      | the mode token is not a recognised synonym |
//! | `Io`                     | the file-metadata provider fails (passed through untouched) |

use std::ffi::OsStr;
use std::fmt;
use std::io;

use crate::cli::detail_kind::{SIZE_ARGUMENTS, VERSION_ARGUMENTS};

/// Errors returned by [`crate::FileDataReader`].
#[derive(Debug)]
pub enum FileDataError {
    /// Fewer than two arguments were supplied. `received` holds the arguments
    /// that did arrive, joined with `", "` (empty when none).
    InvalidArgumentCount { received: String },
    /// The mode token matched neither synonym set. `None` means no token was given.
    InvalidDetailType { token: Option<String> },
    /// Error raised by the file-metadata provider.
    Io(io::Error),
}

impl FileDataError {
    /// Builds a [`FileDataError::InvalidArgumentCount`] echoing `args`.
    pub fn invalid_argument_count<S: AsRef<OsStr>>(args: &[S]) -> Self {
        let received = args
            .iter()
            .map(|a| AsRef::<OsStr>::as_ref(a).to_string_lossy())
            .collect::<Vec<_>>()
            .join(", ");
        FileDataError::InvalidArgumentCount { received }
    }

    /// Builds a [`FileDataError::InvalidDetailType`] for the rejected `token`.
    pub fn invalid_detail_type(token: Option<&str>) -> Self {
        FileDataError::InvalidDetailType {
            token: token.map(str::to_owned),
        }
    }

    /// `true` for the two argument-validation variants, `false` for provider errors.
    pub fn is_usage_error(&self) -> bool {
        !matches!(self, FileDataError::Io(_))
    }
}

impl fmt::Display for FileDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileDataError::InvalidArgumentCount { received } => write!(
                f,
                "Two arguments must be provided: the first to define the mode, \
                 the second to specify the file.\nArguments received: '{}'",
                received
            ),
            FileDataError::InvalidDetailType { token } => write!(
                f,
                "'{}' is not a valid detail type argument.\n\
                 Please use '{}' or '{}' as the first argument to read the file version \
                 or '{}' or '{}' as the first argument to read the file size.",
                token.as_deref().unwrap_or(""),
                VERSION_ARGUMENTS[0],
                VERSION_ARGUMENTS[VERSION_ARGUMENTS.len() - 1],
                SIZE_ARGUMENTS[0],
                SIZE_ARGUMENTS[SIZE_ARGUMENTS.len() - 1],
            ),
            FileDataError::Io(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for FileDataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FileDataError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for FileDataError {
    fn from(e: io::Error) -> Self {
        FileDataError::Io(e)
    }
}
