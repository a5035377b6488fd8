//! Focused cell and keyboard navigation
//!
//! Positions index the current view: `row` into the filtered/sorted rows,
//! `col` into the visible column order.

use serde::Serialize;

use crate::keymap::GridCommand;

/// Position of a cell in the current view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct CellPosition {
    pub row: usize,
    pub col: usize,
}

impl CellPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Bounds of the current view, for clamping moves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewExtent {
    pub rows: usize,
    pub cols: usize,
    /// Rows moved by PageUp/PageDown
    pub page_rows: usize,
}

impl ViewExtent {
    pub fn contains(&self, pos: CellPosition) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }
}

/// Where a navigation command moves the focus
///
/// Every move is clamped to the view; at an edge the position is unchanged.
/// Non-navigation commands return the position as is.
pub fn navigate(pos: CellPosition, command: GridCommand, extent: ViewExtent) -> CellPosition {
    let last_row = extent.rows.saturating_sub(1);
    let last_col = extent.cols.saturating_sub(1);
    let page = extent.page_rows.max(1);

    let (row, col) = match command {
        GridCommand::MoveUp => (pos.row.saturating_sub(1), pos.col),
        GridCommand::MoveDown => ((pos.row + 1).min(last_row), pos.col),
        GridCommand::MoveLeft => (pos.row, pos.col.saturating_sub(1)),
        GridCommand::MoveRight => (pos.row, (pos.col + 1).min(last_col)),
        GridCommand::PageUp => (pos.row.saturating_sub(page), pos.col),
        GridCommand::PageDown => (pos.row.saturating_add(page).min(last_row), pos.col),
        GridCommand::RowStart => (pos.row, 0),
        GridCommand::RowEnd => (pos.row, last_col),
        GridCommand::FirstCell => (0, 0),
        GridCommand::LastCell => (last_row, last_col),
        GridCommand::StartEdit | GridCommand::ClearFocus => (pos.row, pos.col),
    };

    CellPosition::new(row, col)
}

/// Focus state of the grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Unfocused,
    Focused(CellPosition),
}

impl Focus {
    pub fn position(&self) -> Option<CellPosition> {
        match self {
            Focus::Focused(pos) => Some(*pos),
            Focus::Unfocused => None,
        }
    }

    pub fn is_focused(&self) -> bool {
        matches!(self, Focus::Focused(_))
    }

    pub fn clear(&mut self) -> bool {
        let was_focused = self.is_focused();
        *self = Focus::Unfocused;
        was_focused
    }

    /// Focus a cell if it exists in the view
    pub fn set(&mut self, pos: CellPosition, extent: ViewExtent) -> bool {
        if !extent.contains(pos) {
            return false;
        }
        *self = Focus::Focused(pos);
        true
    }
}
