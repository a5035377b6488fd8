//! Filter + sort pipeline
//!
//! Derives the view order (indices into the raw row store) from the raw rows,
//! the debounced filter snapshot and the sort state. Pure: raw rows are never
//! touched, and the same inputs always yield the same order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::compare::{compare_cells, SortState};
use super::types::Row;

/// Per-column filter patterns; empty patterns are never stored
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterState {
    patterns: BTreeMap<String, String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pattern for a column; an empty pattern removes the filter
    pub fn set(&mut self, column_key: impl Into<String>, pattern: impl Into<String>) {
        let column_key = column_key.into();
        let pattern = pattern.into();
        if pattern.is_empty() {
            self.patterns.remove(&column_key);
        } else {
            self.patterns.insert(column_key, pattern);
        }
    }

    pub fn get(&self, column_key: &str) -> Option<&str> {
        self.patterns.get(column_key).map(String::as_str)
    }

    /// Whether any filter would restrict the view
    pub fn is_active(&self) -> bool {
        !self.patterns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.patterns.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn clear(&mut self) {
        self.patterns.clear();
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FilterState {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut state = FilterState::new();
        for (k, v) in iter {
            state.set(k, v);
        }
        state
    }
}

/// Lowercased patterns, prepared once per pipeline run
struct PreparedFilters {
    patterns: Vec<(String, String)>,
}

impl PreparedFilters {
    fn new(filters: &FilterState) -> Self {
        Self {
            patterns: filters
                .iter()
                .map(|(key, pattern)| (key.to_string(), pattern.to_lowercase()))
                .collect(),
        }
    }

    fn matches(&self, row: &Row) -> bool {
        self.patterns.iter().all(|(key, needle)| {
            let value = row.get(key);
            !value.is_null() && value.to_text().to_lowercase().contains(needle.as_str())
        })
    }
}

/// Whether a row passes every active filter
pub fn matches_filters(row: &Row, filters: &FilterState) -> bool {
    PreparedFilters::new(filters).matches(row)
}

/// Compute the view order as indices into `rows`
///
/// Filtering preserves raw order; sorting is stable and runs on the filtered
/// subset only.
pub fn run_pipeline(rows: &[Row], filters: &FilterState, sort: Option<&SortState>) -> Vec<usize> {
    let mut order: Vec<usize> = if filters.is_active() {
        let prepared = PreparedFilters::new(filters);
        rows.iter()
            .enumerate()
            .filter(|(_, row)| prepared.matches(row))
            .map(|(i, _)| i)
            .collect()
    } else {
        (0..rows.len()).collect()
    };

    if let Some(sort) = sort {
        let key = sort.column_key.as_str();
        order.sort_by(|&a, &b| {
            compare_cells(rows[a].get(key), rows[b].get(key), sort.data_type, sort.direction)
        });
    }

    tracing::trace!(
        total = rows.len(),
        kept = order.len(),
        sorted = sort.is_some(),
        "pipeline recomputed"
    );

    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::compare::SortDirection;
    use crate::data::types::{CellValue, DataType, RawRow, RowId};

    fn rows(names: &[Option<&str>]) -> Vec<Row> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let mut cells = RawRow::new();
                cells.insert("name".to_string(), CellValue::from(*name));
                Row::new(RowId(i as u64), cells)
            })
            .collect()
    }

    #[test]
    fn test_filter_state_empty_pattern_is_inert() {
        let mut filters = FilterState::new();
        filters.set("name", "");
        assert!(!filters.is_active());
        filters.set("name", "x");
        filters.set("name", "");
        assert!(!filters.is_active());
    }

    #[test]
    fn test_filter_case_insensitive_substring() {
        let rows = rows(&[Some("John"), Some("Mark"), Some("Joanna")]);
        let filters: FilterState = [("name", "JO")].into_iter().collect();
        assert_eq!(run_pipeline(&rows, &filters, None), vec![0, 2]);
    }

    #[test]
    fn test_filter_null_never_matches() {
        let rows = rows(&[None, Some("")]);
        let filters: FilterState = [("name", "a")].into_iter().collect();
        assert!(run_pipeline(&rows, &filters, None).is_empty());
    }

    #[test]
    fn test_filter_on_unknown_column_matches_nothing() {
        let rows = rows(&[Some("a")]);
        let filters: FilterState = [("missing", "a")].into_iter().collect();
        assert!(run_pipeline(&rows, &filters, None).is_empty());
    }

    #[test]
    fn test_pipeline_sorts_filtered_subset() {
        let rows = rows(&[Some("b2"), Some("a"), Some("b10"), Some("b1")]);
        let filters: FilterState = [("name", "b")].into_iter().collect();
        let sort = SortState::new("name", SortDirection::Ascending, DataType::Text);
        assert_eq!(run_pipeline(&rows, &filters, Some(&sort)), vec![3, 0, 2]);
    }

    #[test]
    fn test_pipeline_sort_is_stable() {
        let rows = rows(&[Some("x"), Some("y"), Some("X"), Some("x")]);
        let sort = SortState::new("name", SortDirection::Ascending, DataType::Text);
        assert_eq!(run_pipeline(&rows, &FilterState::new(), Some(&sort)), vec![0, 2, 3, 1]);
    }
}
