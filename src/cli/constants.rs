// cli/constants.rs — program identity, display level and the display macros

use std::sync::atomic::{AtomicU32, Ordering};

use crate::cli::arg_utils::read_u32_from_str;

// ── String / identity constants ───────────────────────────────────────────────
pub const PROGRAM_NAME: &str = "filedata";

/// Environment variable that overrides the default display level.
pub const ENV_DISPLAY_LEVEL: &str = "FILEDATA_DISPLAY_LEVEL";

// ── Display level global ──────────────────────────────────────────────────────
//
// 0 = no output; 1 = errors only; 2 = normal (warnings, usage); 3 = banner; 4 = verbose
pub const DISPLAY_LEVEL_DEFAULT: u32 = 2;
pub const DISPLAY_LEVEL_MAX: u32 = 4;

pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(DISPLAY_LEVEL_DEFAULT);

/// Returns the current display level.
#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

/// Sets the display level, clamped to [`DISPLAY_LEVEL_MAX`].
#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level.min(DISPLAY_LEVEL_MAX), Ordering::Relaxed);
}

/// Reads the display level from [`ENV_DISPLAY_LEVEL`].
///
/// The value is used when it starts with a decimal digit; anything else
/// (including an unset variable) yields [`DISPLAY_LEVEL_DEFAULT`].
pub fn init_display_level() -> u32 {
    std::env::var(ENV_DISPLAY_LEVEL)
        .ok()
        .and_then(|v| read_u32_from_str(&v).map(|(n, _)| n))
        .map(|n| n.min(DISPLAY_LEVEL_MAX))
        .unwrap_or(DISPLAY_LEVEL_DEFAULT)
}

// ── Display helpers ───────────────────────────────────────────────────────────
//
// stdout is reserved for the detail line; every diagnostic goes to stderr.

/// Print to stderr unconditionally.
#[macro_export]
macro_rules! display {
    ($($arg:tt)*) => { eprint!($($arg)*) };
}

/// Print to stderr when the display level is at least `level`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::cli::constants::display_level() >= $level {
            $crate::display!($($arg)*);
        }
    };
}
