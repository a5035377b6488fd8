//! Cell edit state machine
//!
//! `Idle` or `Editing` exactly one cell. The edited cell is addressed in the
//! raw row store, so it stays valid when the view is re-filtered or re-sorted
//! mid-edit.

use crate::data::infer::parse_number;
use crate::data::{CellValue, DataType, RowId};

/// The cell being edited, addressed in the raw row store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditTarget {
    pub raw_index: usize,
    pub row_id: RowId,
    pub column_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditState {
    #[default]
    Idle,
    Editing { target: EditTarget, draft: String },
}

impl EditState {
    pub fn is_editing(&self) -> bool {
        matches!(self, EditState::Editing { .. })
    }

    pub fn target(&self) -> Option<&EditTarget> {
        match self {
            EditState::Editing { target, .. } => Some(target),
            EditState::Idle => None,
        }
    }

    pub fn draft(&self) -> Option<&str> {
        match self {
            EditState::Editing { draft, .. } => Some(draft),
            EditState::Idle => None,
        }
    }

    /// Replace the draft text; ignored when idle
    pub fn set_draft(&mut self, text: impl Into<String>) {
        if let EditState::Editing { draft, .. } = self {
            *draft = text.into();
        }
    }

    /// Enter `Editing`, handing back the previous edit (if any) to be committed
    pub fn begin(&mut self, target: EditTarget, draft: String) -> Option<(EditTarget, String)> {
        std::mem::replace(self, EditState::Editing { target, draft }).into_parts()
    }

    /// Leave `Editing`, returning the target and draft
    pub fn finish(&mut self) -> Option<(EditTarget, String)> {
        std::mem::take(self).into_parts()
    }

    fn into_parts(self) -> Option<(EditTarget, String)> {
        match self {
            EditState::Editing { target, draft } => Some((target, draft)),
            EditState::Idle => None,
        }
    }
}

/// Convert typed text into the value stored for a column
///
/// Empty text clears the cell. Number columns store a number when the text
/// parses as one and the literal text otherwise.
pub fn coerce_input(text: &str, data_type: DataType) -> CellValue {
    if text.is_empty() {
        return CellValue::Null;
    }
    match data_type {
        DataType::Number => parse_number(text)
            .map(CellValue::Number)
            .unwrap_or_else(|| CellValue::text(text)),
        DataType::Text | DataType::Date => CellValue::text(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(raw_index: usize, key: &str) -> EditTarget {
        EditTarget {
            raw_index,
            row_id: RowId(raw_index as u64),
            column_key: key.to_string(),
        }
    }

    #[test]
    fn test_begin_returns_previous_edit() {
        let mut state = EditState::default();
        assert_eq!(state.begin(target(0, "a"), "x".into()), None);
        state.set_draft("changed");
        let previous = state.begin(target(1, "b"), "y".into());
        assert_eq!(previous, Some((target(0, "a"), "changed".to_string())));
        assert_eq!(state.target(), Some(&target(1, "b")));
    }

    #[test]
    fn test_finish_returns_to_idle() {
        let mut state = EditState::default();
        state.begin(target(2, "a"), "v".into());
        assert!(state.finish().is_some());
        assert!(!state.is_editing());
        assert_eq!(state.finish(), None);
    }

    #[test]
    fn test_set_draft_ignored_when_idle() {
        let mut state = EditState::default();
        state.set_draft("nope");
        assert_eq!(state.draft(), None);
    }

    #[test]
    fn test_coerce_input() {
        assert_eq!(coerce_input("42", DataType::Number), CellValue::Number(42.0));
        assert_eq!(coerce_input("abc", DataType::Number), CellValue::text("abc"));
        assert_eq!(coerce_input("42", DataType::Text), CellValue::text("42"));
        assert_eq!(coerce_input("", DataType::Number), CellValue::Null);
    }
}
