//! Display formatting for cell values
//!
//! Numbers use en-US digit grouping with up to three fraction digits, dates
//! use the short `M/D/YYYY` form. Values that do not parse as their column's
//! type are shown as typed.

use chrono::{Datelike, NaiveDate};

use super::infer::{cell_number, cell_timestamp};
use super::types::{CellValue, DataType};

const MAX_FRACTION_DIGITS: usize = 3;

/// Format a cell for display according to its column type
pub fn format_cell_value(value: &CellValue, data_type: DataType) -> String {
    if value.is_null() {
        return String::new();
    }

    match data_type {
        DataType::Number => match cell_number(value) {
            Some(n) => format_number(n),
            None => value.to_text(),
        },
        DataType::Date => match cell_timestamp(value) {
            Some(ts) => format_date(ts.date()),
            None => value.to_text(),
        },
        DataType::Text => value.to_text(),
    }
}

/// `1234567.891` -> `"1,234,567.891"`
pub fn format_number(n: f64) -> String {
    let rendered = format!("{:.*}", MAX_FRACTION_DIGITS, n.abs());
    let (int_part, frac_part) = match rendered.split_once('.') {
        Some((i, f)) => (i, f.trim_end_matches('0')),
        None => (rendered.as_str(), ""),
    };

    let mut out = String::with_capacity(rendered.len() + int_part.len() / 3 + 1);
    let negative = n < 0.0 && (int_part != "0" || !frac_part.is_empty());
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `2024-03-09` -> `"3/9/2024"`
pub fn format_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::infer::{parse_date, parse_number};

    #[test]
    fn test_format_number_grouping() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(999.0), "999");
        assert_eq!(format_number(1000.0), "1,000");
        assert_eq!(format_number(1234567.891), "1,234,567.891");
        assert_eq!(format_number(-1234.5), "-1,234.5");
        assert_eq!(format_number(0.12345), "0.123");
        assert_eq!(format_number(-0.0001), "0");
    }

    #[test]
    fn test_format_cell_value_by_type() {
        assert_eq!(format_cell_value(&CellValue::text("1500"), DataType::Number), "1,500");
        assert_eq!(format_cell_value(&CellValue::Number(42.0), DataType::Number), "42");
        assert_eq!(format_cell_value(&CellValue::text("2024-03-09"), DataType::Date), "3/9/2024");
        assert_eq!(format_cell_value(&CellValue::text("hello"), DataType::Text), "hello");
        assert_eq!(format_cell_value(&CellValue::Null, DataType::Number), "");
    }

    #[test]
    fn test_format_invalid_values_show_raw_text() {
        assert_eq!(format_cell_value(&CellValue::text("abc"), DataType::Number), "abc");
        assert_eq!(format_cell_value(&CellValue::text("soon"), DataType::Date), "soon");
        assert_eq!(format_cell_value(&CellValue::text("2024-02-30"), DataType::Date), "2024-02-30");
    }

    #[test]
    fn test_formatted_values_parse_back() {
        for n in [0.5, 12.0, 1234.25, 987654321.0, -4500.125] {
            let shown = format_number(n);
            assert_eq!(parse_number(&shown.replace(',', "")), Some(n));
        }

        let date = NaiveDate::from_ymd_opt(1999, 12, 31).unwrap();
        assert_eq!(parse_date(&format_date(date)), Some(date));
    }
}
