//! Integer policy for delta-seconds directive values.

use std::num::IntErrorKind;

/// Sentinel for a directive that was absent or unparseable.
pub const UNSET: i32 = -1;

/// Parses a delta-seconds value.
///
/// Missing or non-numeric values are [`UNSET`]. Values above `i32::MAX` clamp to
/// `i32::MAX`; negative values clamp to 0, so an explicit value is never unset.
pub fn parse_seconds(value: Option<&str>) -> i32 {
    let Some(value) = value else {
        return UNSET;
    };

    match value.trim().parse::<i64>() {
        Ok(n) => n.clamp(0, i64::from(i32::MAX)) as i32,
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => i32::MAX,
            IntErrorKind::NegOverflow => 0,
            _ => UNSET,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_values() {
        assert_eq!(parse_seconds(Some("0")), 0);
        assert_eq!(parse_seconds(Some("60")), 60);
        assert_eq!(parse_seconds(Some(" 60 ")), 60);
        assert_eq!(parse_seconds(Some("+7")), 7);
    }

    #[test]
    fn missing_or_invalid_is_unset() {
        assert_eq!(parse_seconds(None), UNSET);
        assert_eq!(parse_seconds(Some("")), UNSET);
        assert_eq!(parse_seconds(Some("pi")), UNSET);
        assert_eq!(parse_seconds(Some("6O")), UNSET);
        assert_eq!(parse_seconds(Some("1.5")), UNSET);
    }

    #[test]
    fn clamps() {
        assert_eq!(parse_seconds(Some("2147483647")), i32::MAX);
        assert_eq!(parse_seconds(Some("2147483648")), i32::MAX);
        assert_eq!(parse_seconds(Some("99999999999999999999999")), i32::MAX);
        assert_eq!(parse_seconds(Some("-2")), 0);
        assert_eq!(parse_seconds(Some("-1")), 0);
        assert_eq!(parse_seconds(Some("-99999999999999999999999")), 0);
    }
}
