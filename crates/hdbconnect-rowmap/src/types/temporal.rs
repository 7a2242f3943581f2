//! Temporal conversions.
//!
//! Two concerns live here:
//! - Calendar conversion of a column value towards a date, time or datetime
//!   setter parameter (timestamp -> date truncates, date -> date is identity).
//! - Parsing of HANA temporal values. HANA temporal types expose their values
//!   via Display trait as ISO strings:
//!   - `DayDate`: "YYYY-MM-DD"
//!   - `SecondTime`: "HH:MM:SS"
//!   - `SecondDate`: "YYYY-MM-DDTHH:MM:SS"
//!   - `LongDate`: "YYYY-MM-DDTHH:MM:SS.FFFFFFF" (7 decimal places = 100ns)

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::Result;
use crate::error::MapperError;
use crate::value::ColumnValue;

// ═══════════════════════════════════════════════════════════════════════════
// Calendar conversion
// ═══════════════════════════════════════════════════════════════════════════

/// Convert a non-null column value to a calendar date.
pub(crate) fn to_date(value: &ColumnValue) -> Result<NaiveDate> {
    match value {
        ColumnValue::Date(d) => Ok(*d),
        ColumnValue::Timestamp(ts) => Ok(ts.date()),
        other => Err(MapperError::type_mismatch("NaiveDate", other.describe())),
    }
}

/// Convert a non-null column value to a date-time.
pub(crate) fn to_datetime(value: &ColumnValue) -> Result<NaiveDateTime> {
    match value {
        ColumnValue::Timestamp(ts) => Ok(*ts),
        other => Err(MapperError::type_mismatch("NaiveDateTime", other.describe())),
    }
}

/// Convert a non-null column value to a time of day.
pub(crate) fn to_time(value: &ColumnValue) -> Result<NaiveTime> {
    match value {
        ColumnValue::Time(t) => Ok(*t),
        ColumnValue::Timestamp(ts) => Ok(ts.time()),
        other => Err(MapperError::type_mismatch("NaiveTime", other.describe())),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// HANA display string parsing
// ═══════════════════════════════════════════════════════════════════════════

/// Parse a `DayDate` display string.
pub(crate) fn parse_hana_date(s: &str) -> Result<NaiveDate> {
    s.parse::<NaiveDate>()
        .map_err(|e| MapperError::value_extraction("date", format!("invalid date {s:?}: {e}")))
}

/// Parse a `SecondTime` display string.
pub(crate) fn parse_hana_time(s: &str) -> Result<NaiveTime> {
    s.parse::<NaiveTime>()
        .map_err(|e| MapperError::value_extraction("time", format!("invalid time {s:?}: {e}")))
}

/// Parse a `SecondDate` or `LongDate` display string.
///
/// Fractional seconds are optional; HANA emits seven digits, chrono accepts
/// up to nine.
pub(crate) fn parse_hana_datetime(s: &str) -> Result<NaiveDateTime> {
    s.parse::<NaiveDateTime>().map_err(|e| {
        MapperError::value_extraction("timestamp", format!("invalid datetime {s:?}: {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_timestamp_to_datetime() {
        let ts = ymd(2024, 6, 15).and_hms_opt(12, 30, 45).unwrap();
        assert_eq!(to_datetime(&ColumnValue::Timestamp(ts)).unwrap(), ts);
    }

    #[test]
    fn test_date_to_date() {
        let d = ymd(1970, 1, 1);
        assert_eq!(to_date(&ColumnValue::Date(d)).unwrap(), d);
    }

    #[test]
    fn test_timestamp_truncates_to_date() {
        let ts = ymd(2000, 2, 29).and_hms_opt(23, 59, 59).unwrap();
        assert_eq!(to_date(&ColumnValue::Timestamp(ts)).unwrap(), ymd(2000, 2, 29));
    }

    #[test]
    fn test_date_is_not_a_datetime() {
        let err = to_datetime(&ColumnValue::Date(ymd(2024, 1, 1))).unwrap_err();
        assert!(err.is_type_mismatch());
    }

    #[test]
    fn test_non_temporal_rejected() {
        assert!(to_date(&ColumnValue::from("2024-01-01")).unwrap_err().is_type_mismatch());
        assert!(to_time(&ColumnValue::Int(5)).unwrap_err().is_type_mismatch());
    }

    #[test]
    fn test_parse_hana_date() {
        assert_eq!(parse_hana_date("1970-01-01").unwrap(), ymd(1970, 1, 1));
        assert_eq!(parse_hana_date("2024-06-15").unwrap(), ymd(2024, 6, 15));
        assert!(parse_hana_date("2024-13-01").unwrap_err().is_value_extraction());
    }

    #[test]
    fn test_parse_hana_time() {
        assert_eq!(
            parse_hana_time("12:30:45").unwrap(),
            NaiveTime::from_hms_opt(12, 30, 45).unwrap()
        );
        assert!(parse_hana_time("25:00:00").is_err());
    }

    #[test]
    fn test_parse_hana_datetime() {
        assert_eq!(
            parse_hana_datetime("1970-01-01T00:00:00").unwrap(),
            ymd(1970, 1, 1).and_hms_opt(0, 0, 0).unwrap()
        );
        // LongDate with 100ns precision
        assert_eq!(
            parse_hana_datetime("1970-01-01T00:00:00.1000000").unwrap(),
            ymd(1970, 1, 1).and_hms_milli_opt(0, 0, 0, 100).unwrap()
        );
        assert!(parse_hana_datetime("1970-01-01").is_err());
    }
}
