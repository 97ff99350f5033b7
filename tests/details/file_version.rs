// Integration tests for details/file_version.rs
//
// Builds synthetic files carrying a VS_FIXEDFILEINFO block and checks the
// decoded version and the provider's string form.

use std::fs;
use std::io;

use filedata::details::file_version::{
    VS_FIXEDFILEINFO_LEN, VS_FIXEDFILEINFO_SIGNATURE, VS_FIXEDFILEINFO_STRUC_VERSION,
};
use filedata::details::{find_fixed_file_info, get_file_version, FileVersion};
use filedata::{FileDetails, FsFileDetails};
use tempfile::TempDir;

fn fixed_info(major: u16, minor: u16, build: u16, revision: u16) -> Vec<u8> {
    let ms = ((major as u32) << 16) | minor as u32;
    let ls = ((build as u32) << 16) | revision as u32;
    let mut block = Vec::new();
    for dword in [VS_FIXEDFILEINFO_SIGNATURE, VS_FIXEDFILEINFO_STRUC_VERSION, ms, ls] {
        block.extend_from_slice(&dword.to_le_bytes());
    }
    block.resize(VS_FIXEDFILEINFO_LEN, 0);
    block
}

/// A fake PE image: header bytes, some padding, the version block, trailing data.
fn fake_image(block: &[u8]) -> Vec<u8> {
    let mut bytes = b"MZ".to_vec();
    bytes.resize(0x200, 0);
    // VS_VERSION_INFO key in UTF-16, as it precedes the fixed block in real resources
    for unit in "VS_VERSION_INFO\0".encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    bytes.extend_from_slice(block);
    bytes.extend_from_slice(&[0u8; 128]);
    bytes
}

#[test]
fn decodes_version_from_image() {
    let image = fake_image(&fixed_info(1, 2, 3, 4));
    let v = find_fixed_file_info(&image).unwrap();
    assert_eq!(v, FileVersion { major: 1, minor: 2, build: 3, revision: 4 });
}

#[test]
fn provider_version_is_three_integers() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("app.exe");
    fs::write(&path, fake_image(&fixed_info(10, 0, 19041, 1))).unwrap();

    let result = FsFileDetails.version(&path).unwrap();
    assert_eq!(result, "10.0.19041");
    let parts: Vec<&str> = result.split('.').collect();
    assert_eq!(parts.len(), 3);
    assert!(parts.iter().all(|p| p.parse::<u32>().is_ok()));
}

#[test]
fn get_file_version_on_plain_text_is_invalid_data() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("readme.txt");
    fs::write(&path, "just some text").unwrap();
    let err = get_file_version(&path).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    assert!(err.to_string().contains("no version resource found"));
}

#[test]
fn get_file_version_on_empty_file_is_invalid_data() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.dll");
    fs::write(&path, b"").unwrap();
    assert_eq!(get_file_version(&path).unwrap_err().kind(), io::ErrorKind::InvalidData);
}

#[test]
fn versions_order_numerically() {
    let older = FileVersion { major: 1, minor: 9, build: 0, revision: 0 };
    let newer = FileVersion { major: 1, minor: 10, build: 0, revision: 0 };
    assert!(older < newer);
}
