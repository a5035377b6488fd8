//! Value classification and lenient parsing
//!
//! Number and date parsing here is shared by type inference, formatting,
//! sorting and edit coercion, so every consumer agrees on what counts as a
//! number or a date.

use std::sync::OnceLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;

use super::types::{CellValue, DataType};

/// How many values are sampled per column when inferring its type
pub const TYPE_SAMPLE_SIZE: usize = 100;

fn iso_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}").expect("valid regex"))
}

fn us_date() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{2,4})$").expect("valid regex"))
}

/// Parse a string that is entirely a finite number (surrounding whitespace allowed)
pub fn parse_number(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Numeric view of a cell, if it has one
pub fn cell_number(value: &CellValue) -> Option<f64> {
    match value {
        CellValue::Number(n) if n.is_finite() => Some(*n),
        CellValue::Text(s) => parse_number(s),
        _ => None,
    }
}

/// Parse a date-like string into a timestamp
///
/// Accepts `YYYY-MM-DD` (optionally followed by a time, or a full RFC 3339
/// timestamp) and `M/D/YYYY` / `M/D/YY`. The value must also be a real
/// calendar date: `2024-02-30` is rejected.
pub fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    if iso_prefix().is_match(s) {
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Some(date.and_time(NaiveTime::MIN));
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.naive_utc());
        }
        const FORMATS: [&str; 4] = [
            "%Y-%m-%dT%H:%M:%S%.f",
            "%Y-%m-%d %H:%M:%S%.f",
            "%Y-%m-%dT%H:%M",
            "%Y-%m-%d %H:%M",
        ];
        return FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok());
    }

    let caps = us_date().captures(s)?;
    let month: u32 = caps[1].parse().ok()?;
    let day: u32 = caps[2].parse().ok()?;
    let year_str = &caps[3];
    let mut year: i32 = year_str.parse().ok()?;
    if year_str.len() == 2 {
        year += if year < 50 { 2000 } else { 1900 };
    }
    NaiveDate::from_ymd_opt(year, month, day).map(|d| d.and_time(NaiveTime::MIN))
}

/// Calendar day of a date-like string
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    parse_datetime(s).map(|dt| dt.date())
}

/// Timestamp view of a cell, if it has one
pub fn cell_timestamp(value: &CellValue) -> Option<NaiveDateTime> {
    match value {
        CellValue::Date(d) => Some(d.and_time(NaiveTime::MIN)),
        CellValue::Text(s) => parse_datetime(s),
        _ => None,
    }
}

/// Classify a single raw value
pub fn infer_data_type(value: &CellValue) -> DataType {
    match value {
        CellValue::Null => DataType::Text,
        CellValue::Number(n) if n.is_finite() => DataType::Number,
        CellValue::Number(_) => DataType::Text,
        CellValue::Date(_) => DataType::Date,
        CellValue::Text(s) => infer_str_type(s),
    }
}

/// Classify a raw string value
pub fn infer_str_type(s: &str) -> DataType {
    if s.trim().is_empty() {
        DataType::Text
    } else if parse_number(s).is_some() {
        DataType::Number
    } else if parse_datetime(s).is_some() {
        DataType::Date
    } else {
        DataType::Text
    }
}

/// Decide a column's type from its first `TYPE_SAMPLE_SIZE` values
///
/// Empty values carry no vote. The first non-empty value proposes a type;
/// any non-empty value that disagrees reverts the column to text.
pub fn infer_column_type<'a, I>(values: I) -> DataType
where
    I: IntoIterator<Item = &'a CellValue>,
{
    let mut leading: Option<DataType> = None;

    for value in values.into_iter().take(TYPE_SAMPLE_SIZE) {
        if value.is_empty() {
            continue;
        }
        let inferred = infer_data_type(value);
        match leading {
            None if inferred == DataType::Text => return DataType::Text,
            None => leading = Some(inferred),
            Some(ty) if ty != inferred => return DataType::Text,
            Some(_) => {}
        }
    }

    leading.unwrap_or(DataType::Text)
}
