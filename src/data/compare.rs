//! Sort state and the row comparator

use std::cmp::Ordering;
use std::fmt;
use std::iter::Peekable;
use std::str::Chars;

use serde::{Deserialize, Serialize};

use super::infer::{cell_number, cell_timestamp};
use super::types::{CellValue, DataType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Header arrow shown next to a sorted column
    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => write!(f, "asc"),
            SortDirection::Descending => write!(f, "desc"),
        }
    }
}

/// Active ordering of the view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub column_key: String,
    pub direction: SortDirection,
    pub data_type: DataType,
}

impl SortState {
    pub fn new(column_key: impl Into<String>, direction: SortDirection, data_type: DataType) -> Self {
        Self {
            column_key: column_key.into(),
            direction,
            data_type,
        }
    }
}

/// Total order over two cells of one column
///
/// Missing values (null, empty, or not parseable as the column's type) sort
/// after present ones in ascending order. Descending is the exact reverse.
pub fn compare_cells(
    a: &CellValue,
    b: &CellValue,
    data_type: DataType,
    direction: SortDirection,
) -> Ordering {
    let ordering = match data_type {
        DataType::Number => missing_last(cell_number(a), cell_number(b), |x, y| {
            x.partial_cmp(y).unwrap_or(Ordering::Equal)
        }),
        DataType::Date => missing_last(cell_timestamp(a), cell_timestamp(b), |x, y| x.cmp(y)),
        DataType::Text => {
            let a = (!a.is_empty()).then(|| a.to_text());
            let b = (!b.is_empty()).then(|| b.to_text());
            missing_last(a, b, |x, y| natural_cmp(x, y))
        }
    };

    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

fn missing_last<T>(a: Option<T>, b: Option<T>, cmp: impl FnOnce(&T, &T) -> Ordering) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => cmp(&x, &y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Case-insensitive comparison with embedded digit runs compared by value
///
/// `"row2" < "row10"`, `"Apple" == "apple"`.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut a = a.chars().peekable();
    let mut b = b.chars().peekable();

    loop {
        match (a.peek().copied(), b.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let left = take_digits(&mut a);
                let right = take_digits(&mut b);
                let ord = compare_digit_runs(&left, &right);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            (Some(x), Some(y)) => {
                a.next();
                b.next();
                let ord = x.to_lowercase().cmp(y.to_lowercase());
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}

fn take_digits(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.peek().copied() {
        if !c.is_ascii_digit() {
            break;
        }
        run.push(c);
        chars.next();
    }
    run
}

fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
