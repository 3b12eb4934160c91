//! Format checks for customer fields — pure logic, no I/O.
//!
//! Both checks answer with a `bool`. Callers decide whether an empty value
//! needs checking at all.

use std::sync::LazyLock;

use regex::Regex;

/// `local@domain.tld` shape: the TLD must be at least two letters.
const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("valid regex"));

/// Length of a `YYYY-MM-DD` string.
const DATE_LEN: usize = 10;

/// Byte offsets of the two separators in `YYYY-MM-DD`.
const DATE_SEPARATORS: [usize; 2] = [4, 7];

/// Returns `true` if `s` looks like an email address.
pub fn is_valid_email(s: &str) -> bool {
    EMAIL_RE.is_match(s)
}

/// Returns `true` if `s` has the literal shape `YYYY-MM-DD`.
///
/// Only the shape is checked. Month and day ranges are not, so
/// `2024-13-99` passes.
///
/// Digits must be ASCII `0-9`; other Unicode decimal digits are rejected.
pub fn is_valid_date(s: &str) -> bool {
    if s.len() != DATE_LEN || !s.is_ascii() {
        return false;
    }

    let bytes = s.as_bytes();
    if DATE_SEPARATORS.iter().any(|&i| bytes[i] != b'-') {
        return false;
    }

    [&s[0..4], &s[5..7], &s[8..10]]
        .iter()
        .all(|segment| segment.bytes().all(|b| b.is_ascii_digit()))
}
