// src/registry/fields.rs
//! Field-level normalization for registry cells.

use chrono::{Datelike, NaiveDate};

const BIRTH_DATE_FORMAT: &str = "%d%b%Y";

/// Cell values that mean "no value" in registry exports.
const MISSING_MARKERS: &[&str] = &["", "nan", "na", "none", "null"];

/// Extracts the year from a `DDMonYYYY` birth date such as `05Feb2019`.
#[must_use]
pub fn birth_year(raw: &str) -> Option<i32> {
    let raw = raw.trim();
    if !is_birth_date_shape(raw) {
        return None;
    }
    NaiveDate::parse_from_str(raw, BIRTH_DATE_FORMAT)
        .ok()
        .map(|d| d.year())
}

/// Two digits, three letters, four digits. `%Y` alone also accepts short
/// and signed years.
fn is_birth_date_shape(raw: &str) -> bool {
    let b = raw.as_bytes();
    b.len() == 9
        && b[..2].iter().all(u8::is_ascii_digit)
        && b[2..5].iter().all(u8::is_ascii_alphabetic)
        && b[5..].iter().all(u8::is_ascii_digit)
}

/// Normalizes an identity reference.
///
/// Integral float renderings (`6110.0`) collapse to their integer form so a
/// parent reference matches the id column regardless of how the export
/// formatted numbers.
#[must_use]
pub fn normalize_id(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if is_missing(trimmed) {
        return None;
    }
    if let Some(int_part) = integral_float(trimmed) {
        return Some(int_part.to_string());
    }
    Some(trimmed.to_string())
}

fn is_missing(value: &str) -> bool {
    MISSING_MARKERS
        .iter()
        .any(|marker| value.eq_ignore_ascii_case(marker))
}

fn integral_float(value: &str) -> Option<&str> {
    let (int_part, frac) = value.split_once('.')?;
    let digits_only = !int_part.is_empty() && int_part.bytes().all(|b| b.is_ascii_digit());
    (digits_only && !frac.is_empty() && frac.bytes().all(|b| b == b'0')).then_some(int_part)
}

/// Display name, falling back to the id.
#[must_use]
pub fn display_name(raw: Option<&str>, id: &str) -> String {
    match raw.map(str::trim) {
        Some(name) if !is_missing(name) => name.to_string(),
        _ => id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_registry_dates() {
        assert_eq!(birth_year("05Feb2019"), Some(2019));
        assert_eq!(birth_year("31DEC1985"), Some(1985));
        assert_eq!(birth_year(" 01jan1990 "), Some(1990));
    }

    #[test]
    fn malformed_dates_are_none() {
        assert_eq!(birth_year(""), None);
        assert_eq!(birth_year("2019-02-05"), None);
        assert_eq!(birth_year("32Feb2019"), None);
        assert_eq!(birth_year("05Foo2019"), None);
        assert_eq!(birth_year("05Feb19"), None);
        assert_eq!(birth_year("05Feb219"), None);
        assert_eq!(birth_year("05Feb-019"), None);
        assert_eq!(birth_year("5Feb2019"), None);
        assert_eq!(birth_year("05Feb20190"), None);
    }

    #[test]
    fn ids_normalize_numeric_forms() {
        assert_eq!(normalize_id("6110.0").as_deref(), Some("6110"));
        assert_eq!(normalize_id(" 6110 ").as_deref(), Some("6110"));
        assert_eq!(normalize_id("6110.5").as_deref(), Some("6110.5"));
        assert_eq!(normalize_id("A12").as_deref(), Some("A12"));
    }

    #[test]
    fn missing_markers_are_none() {
        for raw in ["", "  ", "nan", "NaN", "NA", "None", "null"] {
            assert_eq!(normalize_id(raw), None, "{raw:?} should be missing");
        }
    }

    #[test]
    fn names_fall_back_to_id() {
        assert_eq!(display_name(Some("Hélène"), "42"), "Hélène");
        assert_eq!(display_name(Some("  "), "42"), "42");
        assert_eq!(display_name(None, "42"), "42");
    }
}
