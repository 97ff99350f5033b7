// cli/help.rs — usage text

use crate::cli::detail_kind::{SIZE_ARGUMENTS, VERSION_ARGUMENTS};

/// Builds the usage text for `program`.
pub fn usage(program: &str) -> String {
    format!(
        "Usage : \n      {program} <mode> <file> \n\n\
         Modes : \n {version:<20}: print the file version (major.minor.build) \n \
         {size:<20}: print the file size in bytes \n",
        program = program,
        version = VERSION_ARGUMENTS.join(", "),
        size = SIZE_ARGUMENTS.join(", "),
    )
}

/// Print brief usage to stderr.
pub fn print_usage(program: &str) {
    eprint!("{}", usage(program));
}
