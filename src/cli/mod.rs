//! Command-line interface for the `filedata` binary.
//!
//! | Submodule       | Responsibility |
//! |-----------------|---------------|
//! | [`constants`]   | Program identity, the `DISPLAY_LEVEL` atomic and its env override, display macros. |
//! | [`arg_utils`]   | Path basename / program-name helpers and integer parsing. |
//! | [`detail_kind`] | `DetailKind`, the mode-flag synonym tables, and `classify`. |
//! | [`reader`]      | `FileDataReader` — validates arguments and dispatches to a `FileDetails` provider. |
//! | [`help`]        | Usage text. |
//!
//! Typical call sequence: `init_display_level` → `FileDataReader::get_detail_from_args` → print.

pub mod constants;
pub mod arg_utils;
pub mod detail_kind;
pub mod reader;
pub mod help;
