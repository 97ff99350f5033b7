//! Binary entry point for the `filedata` command-line tool.
//!
//! `filedata <mode> <file>` prints either the version or the byte size of
//! `<file>` as a single line on stdout.
//!
//! # Control flow
//!
//! 1. The display level is read from `FILEDATA_DISPLAY_LEVEL`.
//! 2. argv[1..] is handed to [`FileDataReader::get_detail_from_args`].
//! 3. The detail is printed; any error is reported on stderr and the process
//!    exits with status 1.

use std::ffi::OsString;
use std::io::{self, Write};

use filedata::cli::arg_utils::program_name;
use filedata::cli::constants::{display_level, init_display_level, set_display_level, PROGRAM_NAME};
use filedata::cli::help::print_usage;
use filedata::{displaylevel, FileDataError, FileDataReader, FsFileDetails};

fn run(argv: &[OsString]) -> anyhow::Result<()> {
    let reader = FileDataReader::new(FsFileDetails::new());
    let detail = reader.get_detail_from_args(argv)?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", detail)?;
    stdout.flush()?;
    Ok(())
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    set_display_level(init_display_level());

    let mut args = std::env::args_os();
    let argv0 = args.next().unwrap_or_default().to_string_lossy().into_owned();
    let exe_name = program_name(&argv0, PROGRAM_NAME).to_owned();
    let argv: Vec<OsString> = args.collect();

    displaylevel!(3, "*** {} v{} ***\n", PROGRAM_NAME, filedata::version_string());

    if let Err(e) = run(&argv) {
        displaylevel!(1, "{}: {}\n", exe_name, e);
        let usage_error = e
            .downcast_ref::<FileDataError>()
            .is_some_and(FileDataError::is_usage_error);
        if usage_error && display_level() >= 2 {
            print_usage(&exe_name);
        }
        std::process::exit(1);
    }
}
