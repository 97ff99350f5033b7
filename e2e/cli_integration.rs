// e2e/cli_integration.rs — black-box tests of the `filedata` binary
//
// Runs the binary with std::process::Command and checks stdout, stderr and
// the exit status for each mode and each error path.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Locate the `filedata` binary produced by Cargo.
fn filedata_bin() -> PathBuf {
    if let Ok(p) = std::env::var("CARGO_BIN_EXE_filedata") {
        return PathBuf::from(p);
    }
    let mut p = std::env::current_exe().unwrap();
    p.pop(); // remove test binary filename
    if p.ends_with("deps") {
        p.pop();
    }
    p.push("filedata");
    p
}

fn run(args: &[&str]) -> Output {
    Command::new(filedata_bin())
        .args(args)
        .env_remove("FILEDATA_DISPLAY_LEVEL")
        .output()
        .expect("failed to run filedata")
}

/// TempDir holding a 42-byte file and a file with a 1.2.3 version resource.
fn make_fixture() -> (TempDir, PathBuf, PathBuf) {
    let dir = TempDir::new().unwrap();

    let sized = dir.path().join("test.txt");
    fs::write(&sized, "a".repeat(42)).unwrap();

    let versioned = dir.path().join("test.dll");
    let mut bytes = b"MZ\0\0".to_vec();
    for dword in [0xFEEF_04BDu32, 0x0001_0000, 0x0001_0002, 0x0003_0000] {
        bytes.extend_from_slice(&dword.to_le_bytes());
    }
    bytes.resize(4 + 52, 0);
    fs::write(&versioned, bytes).unwrap();

    (dir, sized, versioned)
}

fn stdout_of(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr_of(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

// ── 1. Size ──────────────────────────────────────────────────────────────────

#[test]
fn test_cli_size_every_synonym() {
    let (_dir, sized, _) = make_fixture();
    for flag in ["-s", "--s", "/s", "--size"] {
        let out = run(&[flag, sized.to_str().unwrap()]);
        assert!(out.status.success(), "{flag} should exit 0");
        assert_eq!(stdout_of(&out).trim_end(), "42", "{flag}");
    }
}

// ── 2. Version ───────────────────────────────────────────────────────────────

#[test]
fn test_cli_version_every_synonym() {
    let (_dir, _, versioned) = make_fixture();
    for flag in ["-v", "--v", "/v", "--version"] {
        let out = run(&[flag, versioned.to_str().unwrap()]);
        assert!(out.status.success(), "{flag} should exit 0");
        assert_eq!(stdout_of(&out).trim_end(), "1.2.3", "{flag}");
    }
}

#[test]
fn test_cli_output_is_a_single_line() {
    let (_dir, sized, _) = make_fixture();
    let out = run(&["-s", sized.to_str().unwrap()]);
    assert_eq!(stdout_of(&out).lines().count(), 1);
}

// ── 3. Invalid mode ──────────────────────────────────────────────────────────

#[test]
fn test_cli_invalid_mode_fails() {
    let (_dir, sized, _) = make_fixture();
    let out = run(&["blancmange", sized.to_str().unwrap()]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty(), "nothing should reach stdout");
    let err = stderr_of(&out);
    assert!(err.contains("'blancmange' is not a valid detail type argument."), "{err}");
    assert!(err.contains("Usage"), "usage should follow an argument error: {err}");
}

// ── 4. Argument count ────────────────────────────────────────────────────────

#[test]
fn test_cli_no_arguments_fails() {
    let out = run(&[]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr_of(&out).contains("Arguments received: ''"));
}

#[test]
fn test_cli_one_argument_fails() {
    let out = run(&["-v"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr_of(&out).contains("Arguments received: '-v'"));
}

// ── 5. Provider errors ───────────────────────────────────────────────────────

#[test]
fn test_cli_missing_file_fails_without_usage() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.txt");
    let out = run(&["--size", missing.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(!stderr_of(&out).contains("Usage"));
}

#[test]
fn test_cli_version_of_plain_file_fails() {
    let (_dir, sized, _) = make_fixture();
    let out = run(&["--version", sized.to_str().unwrap()]);
    assert!(!out.status.success());
    assert!(stderr_of(&out).contains("no version resource found"));
}

// ── 6. Display level ─────────────────────────────────────────────────────────

#[test]
fn test_cli_display_level_zero_silences_stderr() {
    let out = Command::new(filedata_bin())
        .arg("blancmange")
        .env("FILEDATA_DISPLAY_LEVEL", "0")
        .output()
        .expect("failed to run filedata");
    assert!(!out.status.success());
    assert!(out.stderr.is_empty(), "{}", stderr_of(&out));
}

#[test]
fn test_cli_verbose_keeps_stdout_clean() {
    let (_dir, sized, _) = make_fixture();
    let out = Command::new(filedata_bin())
        .args(["-s", sized.to_str().unwrap()])
        .env("FILEDATA_DISPLAY_LEVEL", "4")
        .output()
        .expect("failed to run filedata");
    assert!(out.status.success());
    assert_eq!(stdout_of(&out), "42\n");
    assert!(stderr_of(&out).contains("*** filedata v"));
    assert!(stderr_of(&out).contains("Reading size of"));
}

#[test]
fn test_cli_extra_arguments_warn_but_succeed() {
    let (_dir, sized, _) = make_fixture();
    let out = run(&["-s", sized.to_str().unwrap(), "extra"]);
    assert!(out.status.success());
    assert_eq!(stdout_of(&out).trim_end(), "42");
    assert!(stderr_of(&out).contains("extra won't be used"));
}

// ── 7. Non-UTF-8 paths ───────────────────────────────────────────────────────

#[cfg(target_os = "linux")]
#[test]
fn test_cli_size_of_non_utf8_path() {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    let dir = TempDir::new().unwrap();
    let name = OsString::from_vec(b"bad\xff.bin".to_vec());
    let path = dir.path().join(&name);
    fs::write(&path, [0u8; 42]).unwrap();

    let out = Command::new(filedata_bin())
        .arg("--size")
        .arg(&path)
        .env_remove("FILEDATA_DISPLAY_LEVEL")
        .output()
        .expect("failed to run filedata");
    assert!(out.status.success(), "{}", stderr_of(&out));
    assert_eq!(stdout_of(&out).trim_end(), "42");
}

// ── 8. Packaging ─────────────────────────────────────────────────────────────

#[test]
fn test_manifest_does_not_exclude_test_targets() {
    let manifest = fs::read_to_string(concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml")).unwrap();
    let exclude = manifest
        .lines()
        .find(|l| l.trim_start().starts_with("exclude"))
        .unwrap_or("");
    let test_paths: Vec<&str> = manifest
        .lines()
        .filter_map(|l| l.trim().strip_prefix("path = \""))
        .filter_map(|p| p.strip_suffix('"'))
        .filter(|p| !p.starts_with("src/"))
        .collect();
    assert!(!test_paths.is_empty());
    for path in test_paths {
        let dir = path.split('/').next().unwrap();
        assert!(
            !exclude.contains(&format!("\"{dir}/\"")),
            "{path} is a test target but {dir}/ is excluded from the package"
        );
    }
}
