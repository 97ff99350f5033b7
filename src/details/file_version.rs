//! File version lookup from an embedded version resource.
//!
//! Executables and libraries built for Windows carry a `VS_VERSIONINFO`
//! resource whose fixed part, `VS_FIXEDFILEINFO`, holds the binary file
//! version as two little-endian DWORDs. Rather than walking the PE resource
//! directory, [`find_fixed_file_info`] scans DWORD-aligned offsets for the
//! block's signature and struct version, which works the same on every host
//! platform.
//!
//! Layout of the fixed block (13 DWORDs):
//!
//! | DWORD | Field              |
//! |-------|--------------------|
//! | 0     | `dwSignature` (`0xFEEF04BD`) |
//! | 1     | `dwStrucVersion` (`0x00010000`) |
//! | 2     | `dwFileVersionMS` (major << 16 \| minor) |
//! | 3     | `dwFileVersionLS` (build << 16 \| revision) |
//! | 4..12 | product version, flags, OS, type, date |

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

pub const VS_FIXEDFILEINFO_SIGNATURE: u32 = 0xFEEF_04BD;
pub const VS_FIXEDFILEINFO_STRUC_VERSION: u32 = 0x0001_0000;
/// Size of `VS_FIXEDFILEINFO` in bytes.
pub const VS_FIXEDFILEINFO_LEN: usize = 13 * 4;
/// Read-buffer capacity used when scanning a file on disk.
pub const SCAN_CHUNK_LEN: usize = 64 * 1024;

// Bytes kept between chunks: a block starting in the carried tail can still
// complete in the next chunk. Multiple of 4 so offsets stay DWORD-aligned.
const SCAN_CARRY_LEN: usize = VS_FIXEDFILEINFO_LEN - 4;

/// Binary file version decoded from `VS_FIXEDFILEINFO`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FileVersion {
    pub major: u16,
    pub minor: u16,
    pub build: u16,
    pub revision: u16,
}

impl FileVersion {
    /// Splits the `dwFileVersionMS` / `dwFileVersionLS` pair into its four parts.
    pub fn from_dwords(ms: u32, ls: u32) -> Self {
        FileVersion {
            major: (ms >> 16) as u16,
            minor: (ms & 0xFFFF) as u16,
            build: (ls >> 16) as u16,
            revision: (ls & 0xFFFF) as u16,
        }
    }
}

/// Formats as `major.minor.build`; the revision is not shown.
impl fmt::Display for FileVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.build)
    }
}

#[inline]
fn read_u32_le(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

/// Returns the file version from the first complete `VS_FIXEDFILEINFO` block
/// in `bytes`, or `None` if there is none.
///
/// Only DWORD-aligned offsets are considered, and the struct version must
/// match as well as the signature. A block cut off by the end of `bytes` is
/// ignored.
pub fn find_fixed_file_info(bytes: &[u8]) -> Option<FileVersion> {
    if bytes.len() < VS_FIXEDFILEINFO_LEN {
        return None;
    }
    (0..=bytes.len() - VS_FIXEDFILEINFO_LEN)
        .step_by(4)
        .find(|&off| {
            read_u32_le(bytes, off) == VS_FIXEDFILEINFO_SIGNATURE
                && read_u32_le(bytes, off + 4) == VS_FIXEDFILEINFO_STRUC_VERSION
        })
        .map(|off| FileVersion::from_dwords(read_u32_le(bytes, off + 8), read_u32_le(bytes, off + 12)))
}

/// Scans `reader` for the first complete `VS_FIXEDFILEINFO` block.
///
/// Offsets are DWORD-aligned relative to the start of the stream, the same
/// as [`find_fixed_file_info`] over the whole content. Memory use is bounded
/// by the reader's buffer plus a small carried tail, whatever the stream length.
pub fn scan_fixed_file_info<R: BufRead>(mut reader: R) -> io::Result<Option<FileVersion>> {
    // window[0] always sits at a DWORD-aligned stream offset
    let mut window: Vec<u8> = Vec::new();
    loop {
        let chunk = match reader.fill_buf() {
            Ok(chunk) => chunk,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if chunk.is_empty() {
            return Ok(None);
        }
        let consumed = chunk.len();
        window.extend_from_slice(chunk);
        reader.consume(consumed);

        if let Some(version) = find_fixed_file_info(&window) {
            return Ok(Some(version));
        }
        if window.len() > SCAN_CARRY_LEN {
            let drop = (window.len() - SCAN_CARRY_LEN) & !3;
            window.drain(..drop);
        }
    }
}

/// Reads the file at `path` and decodes its version resource.
///
/// The file is streamed in [`SCAN_CHUNK_LEN`] chunks rather than loaded
/// whole. I/O errors are returned unchanged. A readable file with no
/// version resource yields `io::ErrorKind::InvalidData`.
pub fn get_file_version(path: &Path) -> io::Result<FileVersion> {
    let file = File::open(path)?;
    let reader = BufReader::with_capacity(SCAN_CHUNK_LEN, file);
    scan_fixed_file_info(reader)?.ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("{}: no version resource found", path.display()),
        )
    })
}

// ─── Tests ────────────────────────────────────────────────────────────────────
