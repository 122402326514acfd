//! Form-contract checks collaborators run before dates reach the engine.

use crate::calendar::parse_iso;

/// Strict ISO `YYYY-MM-DD`: correct shape and a real calendar date.
pub fn is_valid_iso_date(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return false;
    }
    let digits_ok = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| matches!(i, 4 | 7) || b.is_ascii_digit());
    digits_ok && parse_iso(value).is_ok()
}

/// Both dates parse and the end falls strictly after the start.
pub fn validate_date_range(start: &str, end: &str) -> bool {
    match (parse_iso(start), parse_iso(end)) {
        (Ok(start), Ok(end)) => end > start,
        _ => false,
    }
}

/// Non-empty after trimming.
pub fn is_not_empty(value: &str) -> bool {
    !value.trim().is_empty()
}
