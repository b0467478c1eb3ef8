//! Row-to-entity parsing helpers.
//!
//! Timestamps written by this crate use fixed-width RFC 3339 (microseconds,
//! `Z` suffix) so that TEXT ordering in SQL matches chronological ordering.
//! Column defaults written by `SQLite` itself use `"%Y-%m-%d %H:%M:%S"`; both
//! formats parse.

use chrono::{DateTime, NaiveDate, SecondsFormat, SubsecRound, Utc};

use crate::error::DatabaseError;

/// Current time at storage precision, so values read back compare equal.
#[must_use]
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Format a timestamp for storage.
#[must_use]
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Parse a `YYYY-MM-DD` TEXT column.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string is not a calendar date.
pub fn parse_date(s: &str) -> Result<NaiveDate, DatabaseError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| DatabaseError::Query(format!("Failed to parse date '{s}': {e}")))
}

/// Parse a TEXT column into a serde-deserializable enum.
///
/// Works with every welfare-core enum (`Category` is `snake_case`,
/// `OptionLetter` is uppercase).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string does not match any enum variant.
pub fn parse_enum<T: serde::de::DeserializeOwned>(s: &str) -> Result<T, DatabaseError> {
    serde_json::from_value(serde_json::Value::String(s.to_string()))
        .map_err(|e| DatabaseError::Query(format!("Failed to parse enum from '{s}': {e}")))
}

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty string.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

/// Read an INTEGER column that must fit in a `u8` (points, scores, levels).
///
/// # Errors
///
/// Returns `DatabaseError::InvalidState` if the stored value is out of range.
pub fn get_u8(row: &libsql::Row, idx: i32) -> Result<u8, DatabaseError> {
    let value = row.get::<i64>(idx)?;
    u8::try_from(value)
        .map_err(|_| DatabaseError::InvalidState(format!("column {idx} holds {value}")))
}

/// Nullable variant of [`get_u8`].
///
/// # Errors
///
/// Returns `DatabaseError::InvalidState` if a stored value is out of range.
pub fn get_opt_u8(row: &libsql::Row, idx: i32) -> Result<Option<u8>, DatabaseError> {
    row.get::<Option<i64>>(idx)?
        .map(|value| {
            u8::try_from(value)
                .map_err(|_| DatabaseError::InvalidState(format!("column {idx} holds {value}")))
        })
        .transpose()
}

/// Trim a free-text field; blank becomes `None`.
#[must_use]
pub fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

/// Case-folded form stored next to searchable text columns.
///
/// SQLite's `lower()` only folds ASCII, so both the stored key and the
/// search pattern are folded here.
#[must_use]
pub fn search_key(value: &str) -> String {
    value.to_lowercase()
}

/// Build a `LIKE` pattern matching `needle` anywhere, escaping wildcards with `\`.
#[must_use]
pub fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in search_key(needle).chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use welfare_core::enums::{Category, OptionLetter};

    use super::*;

    #[test]
    fn both_datetime_formats_parse() {
        let expected = Utc.with_ymd_and_hms(2026, 2, 9, 14, 30, 0).unwrap();
        assert_eq!(parse_datetime("2026-02-09 14:30:00").unwrap(), expected);
        assert_eq!(parse_datetime("2026-02-09T14:30:00+00:00").unwrap(), expected);
        assert_eq!(parse_datetime(&format_datetime(&expected)).unwrap(), expected);
        assert!(parse_datetime("yesterday").is_err());
    }

    #[test]
    fn stored_timestamps_sort_chronologically() {
        let a = Utc.with_ymd_and_hms(2026, 2, 9, 14, 30, 0).unwrap();
        let b = a + chrono::Duration::milliseconds(1);
        assert!(format_datetime(&a) < format_datetime(&b));
        assert_eq!(format_datetime(&a).len(), format_datetime(&b).len());
    }

    #[test]
    fn now_survives_storage_roundtrip() {
        let t = now();
        assert_eq!(parse_datetime(&format_datetime(&t)).unwrap(), t);
    }

    #[test]
    fn enums_parse_from_stored_text() {
        assert_eq!(parse_enum::<Category>("emotional").unwrap(), Category::Emotional);
        assert_eq!(parse_enum::<OptionLetter>("C").unwrap(), OptionLetter::C);
        assert!(parse_enum::<Category>("weather").is_err());
    }

    #[test]
    fn dates_parse() {
        assert_eq!(
            parse_date("2019-07-14").unwrap(),
            NaiveDate::from_ymd_opt(2019, 7, 14).unwrap()
        );
        assert!(parse_date("14/07/2019").is_err());
    }

    #[test]
    fn non_blank_trims() {
        assert_eq!(non_blank(Some("  Savannah ")), Some("Savannah".to_string()));
        assert_eq!(non_blank(Some("   ")), None);
        assert_eq!(non_blank(None), None);
    }

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(contains_pattern("Leo"), "%leo%");
        assert_eq!(contains_pattern("50%_x"), "%50\\%\\_x%");
        assert_eq!(contains_pattern("Ñandú"), "%ñandú%");
    }

    #[test]
    fn search_key_folds_non_ascii() {
        assert_eq!(search_key("Águila Real"), "águila real");
        assert_eq!(search_key("ÑANDÚ"), "ñandú");
    }
}
