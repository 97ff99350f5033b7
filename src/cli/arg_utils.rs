// arg_utils.rs — small helpers shared by the entry point and configuration

/// Returns the last path component of `path`, handling both `/` and `\` separators.
pub fn last_name_from_path(path: &str) -> &str {
    let after_slash = match path.rfind('/') {
        Some(pos) => &path[pos + 1..],
        None => path,
    };
    match after_slash.rfind('\\') {
        Some(pos) => &after_slash[pos + 1..],
        None => after_slash,
    }
}

/// Returns the program name to show in messages: the basename of `argv0`
/// without a trailing `.exe`, or `fallback` when `argv0` has no basename.
pub fn program_name<'a>(argv0: &'a str, fallback: &'a str) -> &'a str {
    let name = last_name_from_path(argv0);
    let name = name.strip_suffix(".exe").unwrap_or(name);
    if name.is_empty() {
        fallback
    } else {
        name
    }
}

/// Parses an unsigned 32-bit integer from the start of `s`.
///
/// Returns `None` if `s` does not start with a digit, otherwise
/// `Some((value, remainder))`. Overflow saturates at `u32::MAX`.
pub fn read_u32_from_str(s: &str) -> Option<(u32, &str)> {
    let digits = s.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let value = s[..digits].bytes().fold(0u32, |acc, b| {
        acc.saturating_mul(10).saturating_add((b - b'0') as u32)
    });
    Some((value, &s[digits..]))
}
