// Integration tests for cli/arg_utils.rs

use filedata::cli::arg_utils::{last_name_from_path, program_name, read_u32_from_str};

#[test]
fn last_name_from_path_unix() {
    assert_eq!(last_name_from_path("/a/b/c"), "c");
    assert_eq!(last_name_from_path("file.txt"), "file.txt");
}

#[test]
fn last_name_from_path_windows() {
    assert_eq!(last_name_from_path("a\\b\\c"), "c");
    assert_eq!(last_name_from_path("/path/to/dir\\file.exe"), "file.exe");
}

#[test]
fn last_name_from_path_trailing_separator() {
    assert_eq!(last_name_from_path("a/b/"), "");
    assert_eq!(last_name_from_path(""), "");
}

#[test]
fn program_name_from_full_path() {
    assert_eq!(program_name("/usr/local/bin/filedata", "fallback"), "filedata");
    assert_eq!(program_name("C:\\bin\\FileData.exe", "fallback"), "FileData");
}

#[test]
fn read_u32_from_str_stops_at_first_non_digit() {
    assert_eq!(read_u32_from_str("4 "), Some((4, " ")));
    assert_eq!(read_u32_from_str("-1"), None);
}
