// filedata — report the version or byte size of a file

pub mod error;
pub mod details;
pub mod cli;

pub use cli::detail_kind::{classify, DetailKind};
pub use cli::reader::FileDataReader;
pub use details::{FileDetails, FsFileDetails};
pub use error::FileDataError;

// ── Version constants ─────────────────────────────────────────────────────────
pub const FILEDATA_VERSION_STRING: &str = env!("CARGO_PKG_VERSION");

/// Returns the crate version string, e.g. `"0.1.0"`.
pub fn version_string() -> &'static str {
    FILEDATA_VERSION_STRING
}
