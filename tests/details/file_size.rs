// Integration tests for details/file_size.rs
//
//   - regular files report their byte count
//   - missing paths keep the OS error kind
//   - directories are rejected

use std::fs;
use std::io;
use std::path::Path;

use filedata::details::get_file_size;
use filedata::{FileDetails, FsFileDetails};
use tempfile::TempDir;

#[test]
fn regular_file_reports_byte_count() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.bin");
    fs::write(&path, vec![7u8; 4096]).unwrap();
    assert_eq!(get_file_size(&path).unwrap(), 4096);
}

#[test]
fn provider_size_matches_helper() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.bin");
    fs::write(&path, b"0123456789").unwrap();
    assert_eq!(FsFileDetails.size(&path).unwrap(), get_file_size(&path).unwrap());
}

#[test]
fn missing_path_is_not_found() {
    let err = get_file_size(Path::new("/nonexistent/__filedata_missing__.bin")).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::NotFound);
}

#[test]
fn directory_is_invalid_input() {
    let dir = TempDir::new().unwrap();
    let err = get_file_size(dir.path()).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    assert!(err.to_string().contains("not a regular file"));
}

#[cfg(unix)]
#[test]
fn symlink_reports_target_size() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("target.bin");
    let link = dir.path().join("link.bin");
    fs::write(&target, [0u8; 5]).unwrap();
    std::os::unix::fs::symlink(&target, &link).unwrap();
    assert_eq!(get_file_size(&link).unwrap(), 5);
}
