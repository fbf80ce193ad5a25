// clinic/src/datetime.rs
//! Flexible date/time parsing. User input arrives in several formats;
//! everything written to storage is normalized to `%Y-%m-%d`, and reads
//! tolerate legacy values (epoch numbers, timestamp text).

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

use models::{ClinicError, ClinicResult};

/// Canonical storage format for dates.
pub const STORE_DATE: &str = "%Y-%m-%d";

const INPUT_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d-%m-%Y", "%m/%d/%Y"];

const INPUT_TIME_FORMATS: &[&str] = &["%I:%M %p", "%H:%M"];

// Text formats a stored date column has been observed to contain.
const STORED_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d-%m-%Y", "%m/%d/%Y"];
const STORED_DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Tries `yyyy-MM-dd`, `dd-MM-yyyy`, `MM/dd/yyyy`, then an ISO parse;
/// the first match wins.
pub fn parse_flexible_date(input: &str) -> ClinicResult<NaiveDate> {
    let s = input.trim();
    if s.is_empty() {
        return Err(ClinicError::UnrecognizedDateFormat(input.to_string()));
    }
    for format in INPUT_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Ok(date);
        }
    }
    s.parse::<NaiveDate>()
        .map_err(|_| ClinicError::UnrecognizedDateFormat(s.to_string()))
}

/// Parses times like "10:30 AM", "04:45 PM" or "15:30". `None` when the
/// text is not a recognizable time; time stays free text in storage, so
/// failure here is advisory, not an error.
pub fn parse_flexible_time(input: &str) -> Option<NaiveTime> {
    let s = input.trim();
    if s.is_empty() {
        return None;
    }
    for format in INPUT_TIME_FORMATS {
        if let Ok(time) = NaiveTime::parse_from_str(s, format) {
            return Some(time);
        }
    }
    s.parse::<NaiveTime>().ok()
}

/// Normalizes whatever a stored date column holds into a `%Y-%m-%d`
/// string for display. Numeric values are treated as epoch seconds when
/// below 10^12, epoch milliseconds otherwise (existing datasets contain
/// both). Unparseable text passes through unchanged.
pub fn normalize_stored_date(raw: &str) -> String {
    let s = raw.trim();
    if s.is_empty() {
        return String::new();
    }

    if let Ok(value) = s.parse::<i64>() {
        if let Some(date) = epoch_to_local_date(value) {
            return date.format(STORE_DATE).to_string();
        }
    }

    for format in STORED_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return date.format(STORE_DATE).to_string();
        }
    }
    for format in STORED_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return dt.date().format(STORE_DATE).to_string();
        }
    }
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return dt.date_naive().format(STORE_DATE).to_string();
    }
    if let Ok(date) = s.parse::<NaiveDate>() {
        return date.format(STORE_DATE).to_string();
    }

    s.to_string()
}

fn epoch_to_local_date(value: i64) -> Option<NaiveDate> {
    let millis = if value < 1_000_000_000_000 {
        value.checked_mul(1000)?
    } else {
        value
    };
    Local
        .timestamp_millis_opt(millis)
        .single()
        .map(|dt| dt.date_naive())
}
