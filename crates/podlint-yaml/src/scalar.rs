//! Scalar type resolution for untagged plain scalars.
//!
//! Underscores in numbers are ignored. `0x`/`0o`/`0b` prefixes and a bare
//! leading `0` (octal) select the radix. A literal that fits neither a
//! signed nor an unsigned 64-bit integer falls back to a float when it
//! looks like one.

use crate::ScalarType;
use once_cell::sync::Lazy;
use regex::Regex;

static FLOAT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[-+]?(?:\.[0-9]+|[0-9]+(?:\.[0-9]*)?)(?:[eE][-+]?[0-9]+)?$").unwrap()
});

static TIMESTAMP_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^([0-9]{4})-([0-9]{1,2})-([0-9]{1,2})(?:([Tt ])([0-9]{1,2}):([0-9]{1,2}):([0-9]{1,2})(?:\.[0-9]+)?(Z|[-+][0-9]{2}:[0-9]{2})?)?$",
    )
    .unwrap()
});

/// Classify an untagged plain scalar.
///
/// Null, boolean, float, timestamp and merge-key literals resolve to
/// [`ScalarType::Other`]; integer literals to [`ScalarType::Int`];
/// everything else is a string.
pub fn resolve_plain_scalar(value: &str) -> ScalarType {
    match value {
        "" | "~" | "null" | "Null" | "NULL" => return ScalarType::Other,
        "true" | "True" | "TRUE" | "false" | "False" | "FALSE" => return ScalarType::Other,
        ".inf" | ".Inf" | ".INF" | "+.inf" | "+.Inf" | "+.INF" | "-.inf" | "-.Inf" | "-.INF" => {
            return ScalarType::Other;
        }
        ".nan" | ".NaN" | ".NAN" | "<<" => return ScalarType::Other,
        _ => {}
    }

    match value.as_bytes()[0] {
        b'0'..=b'9' | b'+' | b'-' => resolve_number(value),
        b'.' if is_float(value) => ScalarType::Other,
        _ => ScalarType::String,
    }
}

fn resolve_number(value: &str) -> ScalarType {
    if is_timestamp(value) {
        return ScalarType::Other;
    }
    let plain = value.replace('_', "");
    if parse_signed(&plain).is_some() || parse_unsigned(&plain).is_some() {
        ScalarType::Int
    } else if is_float(&plain) {
        ScalarType::Other
    } else {
        ScalarType::String
    }
}

fn is_float(text: &str) -> bool {
    FLOAT_RE.is_match(text) && text.parse::<f64>().is_ok_and(f64::is_finite)
}

fn is_timestamp(value: &str) -> bool {
    let Some(caps) = TIMESTAMP_RE.captures(value) else {
        return false;
    };
    let field = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u32>().ok());
    let (Some(year), Some(month), Some(day)) = (field(1), field(2), field(3)) else {
        return false;
    };
    if !(1..=12).contains(&month) || day == 0 || day > days_in_month(year, month) {
        return false;
    }

    match caps.get(4).map(|m| m.as_str()) {
        None => true,
        Some(separator) => {
            // `T` forms carry a zone, the space form does not.
            let zoned = caps.get(8).is_some();
            if zoned == (separator == " ") {
                return false;
            }
            matches!(
                (field(5), field(6), field(7)),
                (Some(h), Some(m), Some(s)) if h < 24 && m < 60 && s < 60
            )
        }
    }
}

fn days_in_month(year: u32, month: u32) -> u32 {
    match month {
        2 if year % 4 == 0 && (year % 100 != 0 || year % 400 == 0) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Radix selected by the literal's prefix, and the digits after it.
fn split_radix(digits: &str) -> (u32, &str) {
    let bytes = digits.as_bytes();
    if bytes.len() >= 2 && bytes[0] == b'0' {
        match bytes[1] {
            b'x' | b'X' => return (16, &digits[2..]),
            b'o' | b'O' => return (8, &digits[2..]),
            b'b' | b'B' => return (2, &digits[2..]),
            _ => return (8, &digits[1..]),
        }
    }
    (10, digits)
}

fn parse_unsigned(text: &str) -> Option<u64> {
    let (radix, digits) = split_radix(text);
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return None;
    }
    u64::from_str_radix(digits, radix).ok()
}

fn parse_signed(text: &str) -> Option<i64> {
    let (negative, magnitude) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let magnitude = i128::from(parse_unsigned(magnitude)?);
    i64::try_from(if negative { -magnitude } else { magnitude }).ok()
}

/// Read the numeric value of an integer literal.
///
/// Accepts the same forms [`resolve_plain_scalar`] classifies as integers.
/// Returns `None` for anything else, or when the value does not fit an
/// `i64`.
pub fn parse_int_literal(value: &str) -> Option<i64> {
    parse_signed(&value.replace('_', ""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_integers() {
        for value in [
            "0", "8080", "-1", "+12", "0o17", "0x1F", "0X1f", "-0x10", "0b101", "1_000", "0777",
            "70000", "18446744073709551615",
        ] {
            assert_eq!(resolve_plain_scalar(value), ScalarType::Int, "{value}");
        }
    }

    #[test]
    fn test_resolve_other() {
        for value in [
            "", "~", "null", "true", "False", "1.5", ".5", "1e3", ".inf", "-.Inf", "+.INF", ".nan", "<<",
        ] {
            assert_eq!(resolve_plain_scalar(value), ScalarType::Other, "{value}");
        }
    }

    #[test]
    fn test_invalid_octal_and_overflow_resolve_as_float() {
        for value in ["08", "-09", "99999999999999999999", "1_0.5"] {
            assert_eq!(resolve_plain_scalar(value), ScalarType::Other, "{value}");
        }
    }

    #[test]
    fn test_resolve_timestamps() {
        for value in [
            "2001-12-14",
            "2001-1-2",
            "2001-12-14T21:59:43.10Z",
            "2001-12-14t21:59:43-05:00",
            "2001-12-14 21:59:43.10",
        ] {
            assert_eq!(resolve_plain_scalar(value), ScalarType::Other, "{value}");
        }
        // Not a real date, and not a number either.
        assert_eq!(resolve_plain_scalar("2023-02-30"), ScalarType::String);
        assert_eq!(resolve_plain_scalar("2001-12-14T21:59:43"), ScalarType::String);
    }

    #[test]
    fn test_resolve_strings() {
        for value in [
            "v1", "Pod", "512Mi", "0.5Gi", "yes", "on", "_1", "0x", "0b2", "1e400", "1.2.3",
            "registry.bigbrother.io/app:1",
        ] {
            assert_eq!(resolve_plain_scalar(value), ScalarType::String, "{value}");
        }
    }

    #[test]
    fn test_parse_int_literal() {
        assert_eq!(parse_int_literal("8080"), Some(8080));
        assert_eq!(parse_int_literal("-3"), Some(-3));
        assert_eq!(parse_int_literal("+7"), Some(7));
        assert_eq!(parse_int_literal("0o17"), Some(15));
        assert_eq!(parse_int_literal("0x1F"), Some(31));
        assert_eq!(parse_int_literal("0b101"), Some(5));
        assert_eq!(parse_int_literal("010"), Some(8));
        assert_eq!(parse_int_literal("1_000"), Some(1000));
        assert_eq!(parse_int_literal("-9223372036854775808"), Some(i64::MIN));
        assert_eq!(parse_int_literal("18446744073709551615"), None);
        assert_eq!(parse_int_literal("99999999999999999999"), None);
        assert_eq!(parse_int_literal("08"), None);
        assert_eq!(parse_int_literal("abc"), None);
    }
}
