//! Per-render snapshot handed to the rendering collaborator
//!
//! `GridModel::frame()` resolves everything a painter needs: visible columns
//! with widths and offsets, the rendered row window with absolute offsets,
//! content dimensions, edit/focus targets, sort indicators and the empty
//! state. Painting itself happens behind the `CellRenderer` trait.

mod text;

use serde::Serialize;

use crate::data::{format_cell_value, CellValue, DataType, Row, RowId, SortDirection};
use crate::grid::{CellPosition, RowWindow};
use crate::model::GridModel;

pub use text::TextRenderer;

/// Sort marker shown in a sortable column's header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortIndicator {
    Unsorted,
    Ascending,
    Descending,
}

impl SortIndicator {
    pub fn symbol(self) -> &'static str {
        match self {
            SortIndicator::Unsorted => "↕",
            SortIndicator::Ascending => SortDirection::Ascending.indicator(),
            SortIndicator::Descending => SortDirection::Descending.indicator(),
        }
    }
}

/// Why no rows are shown
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum EmptyState {
    /// Rows are shown
    None,
    /// No columns: nothing loaded
    NoData,
    /// Filters are active and nothing matches; `top` positions the message
    NoMatches { top: f32 },
}

/// A visible column, resolved for layout
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnView<'a> {
    pub key: &'a str,
    pub name: &'a str,
    pub data_type: DataType,
    pub width: f32,
    /// Left edge within the content area
    pub x: f32,
    /// `None` for non-sortable columns
    pub sort: Option<SortIndicator>,
}

/// A materialized row of the window
#[derive(Debug, Clone, Copy)]
pub struct RowView<'a> {
    pub view_index: usize,
    /// Absolute top within the scrollable content
    pub top: f32,
    pub row: &'a Row,
}

impl RowView<'_> {
    pub fn id(&self) -> RowId {
        self.row.id()
    }
}

/// The cell being edited, in view coordinates when it is displayed
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditView<'a> {
    pub row_id: RowId,
    pub column_key: &'a str,
    pub draft: &'a str,
}

/// One cell as handed to a renderer
#[derive(Debug, Clone)]
pub struct CellView<'a> {
    pub view_row: usize,
    pub col_index: usize,
    pub row_id: RowId,
    pub column: &'a ColumnView<'a>,
    pub value: &'a CellValue,
    /// Display text; the draft while the cell is being edited
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub focused: bool,
    pub editing: bool,
}

/// Paints a frame
pub trait CellRenderer {
    fn begin_frame(&mut self, _frame: &GridFrame<'_>) {}

    fn render_header(&mut self, _column: &ColumnView<'_>, _col_index: usize) {}

    fn render_cell(&mut self, cell: &CellView<'_>);

    fn end_row(&mut self, _row: &RowView<'_>) {}

    fn render_empty(&mut self, _state: EmptyState) {}
}

/// Everything needed to paint the grid once
#[derive(Debug, Clone)]
pub struct GridFrame<'a> {
    pub columns: Vec<ColumnView<'a>>,
    pub rows: Vec<RowView<'a>>,
    pub window: RowWindow,
    pub row_count: usize,
    pub row_height: f32,
    pub header_height: f32,
    pub filter_row_height: f32,
    pub total_height: f32,
    pub total_width: f32,
    pub scroll_offset: f32,
    pub focus: Option<CellPosition>,
    pub edit: Option<EditView<'a>>,
    pub empty: EmptyState,
}

impl GridModel {
    /// Snapshot of the current derived state for rendering
    pub fn frame(&self) -> GridFrame<'_> {
        let sort = self.sort();
        let mut x = 0.0;
        let columns: Vec<ColumnView<'_>> = self
            .visible_columns()
            .map(|column| {
                let width = self.layout().width(&column.key);
                let view = ColumnView {
                    key: &column.key,
                    name: &column.name,
                    data_type: column.data_type,
                    width,
                    x,
                    sort: column.sortable.then(|| match sort {
                        Some(s) if s.column_key == column.key => match s.direction {
                            SortDirection::Ascending => SortIndicator::Ascending,
                            SortDirection::Descending => SortIndicator::Descending,
                        },
                        _ => SortIndicator::Unsorted,
                    }),
                };
                x += width;
                view
            })
            .collect();

        let row_height = self.config().row_height;
        let window = self.window();
        let rows = window
            .range()
            .filter_map(|view_index| {
                self.view_row(view_index).map(|row| RowView {
                    view_index,
                    top: view_index as f32 * row_height,
                    row,
                })
            })
            .collect();

        let edit = match self.edit_state() {
            crate::grid::EditState::Editing { target, draft } => Some(EditView {
                row_id: target.row_id,
                column_key: &target.column_key,
                draft,
            }),
            crate::grid::EditState::Idle => None,
        };

        let empty = if columns.is_empty() {
            EmptyState::NoData
        } else if self.view_len() == 0 && self.filters().is_active() {
            EmptyState::NoMatches {
                top: self.config().header_total(),
            }
        } else {
            EmptyState::None
        };

        GridFrame {
            columns,
            rows,
            window,
            row_count: self.view_len(),
            row_height,
            header_height: self.config().header_height,
            filter_row_height: self.config().filter_row_height,
            total_height: self.total_height(),
            total_width: self.total_width(),
            scroll_offset: self.viewport().scroll_offset,
            focus: self.focus().position(),
            edit,
            empty,
        }
    }
}

impl<'a> GridFrame<'a> {
    /// Visible column under a horizontal content offset
    pub fn hit_test_column(&self, x: f32) -> Option<usize> {
        if x < 0.0 {
            return None;
        }
        self.columns
            .iter()
            .position(|c| x >= c.x && x < c.x + c.width)
    }

    /// View row under a vertical content offset (below the sticky header)
    pub fn hit_test_row(&self, y: f32) -> Option<usize> {
        if y < 0.0 || !(self.row_height > 0.0) {
            return None;
        }
        let index = (y / self.row_height).floor() as usize;
        (index < self.row_count).then_some(index)
    }

    pub fn is_editing(&self, row_id: RowId, column_key: &str) -> bool {
        self.edit
            .as_ref()
            .is_some_and(|e| e.row_id == row_id && e.column_key == column_key)
    }

    /// Walk the frame, handing every header and materialized cell to `renderer`
    pub fn render(&self, renderer: &mut impl CellRenderer) {
        renderer.begin_frame(self);

        for (col_index, column) in self.columns.iter().enumerate() {
            renderer.render_header(column, col_index);
        }

        if self.empty != EmptyState::None {
            renderer.render_empty(self.empty);
            return;
        }

        for row in &self.rows {
            for (col_index, column) in self.columns.iter().enumerate() {
                let value = row.row.get(column.key);
                let editing = self.is_editing(row.id(), column.key);
                let text = match (&self.edit, editing) {
                    (Some(edit), true) => edit.draft.to_string(),
                    _ => format_cell_value(value, column.data_type),
                };
                let focused = self.focus == Some(CellPosition::new(row.view_index, col_index));

                renderer.render_cell(&CellView {
                    view_row: row.view_index,
                    col_index,
                    row_id: row.id(),
                    column,
                    value,
                    text,
                    x: column.x,
                    y: row.top,
                    width: column.width,
                    height: self.row_height,
                    focused,
                    editing,
                });
            }
            renderer.end_row(row);
        }
    }

    /// Serializable copy with formatted cell text
    pub fn snapshot(&self) -> FrameSnapshot<'a> {
        FrameSnapshot {
            columns: self.columns.clone(),
            rows: self
                .rows
                .iter()
                .map(|row| RowSnapshot {
                    view_index: row.view_index,
                    row_id: row.id().to_string(),
                    top: row.top,
                    cells: self
                        .columns
                        .iter()
                        .map(|c| format_cell_value(row.row.get(c.key), c.data_type))
                        .collect(),
                })
                .collect(),
            row_count: self.row_count,
            total_height: self.total_height,
            total_width: self.total_width,
            scroll_offset: self.scroll_offset,
            focus: self.focus,
            edit: self.edit.clone(),
            empty: self.empty,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowSnapshot {
    pub view_index: usize,
    pub row_id: String,
    pub top: f32,
    pub cells: Vec<String>,
}

/// JSON-friendly form of a frame
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameSnapshot<'a> {
    pub columns: Vec<ColumnView<'a>>,
    pub rows: Vec<RowSnapshot>,
    pub row_count: usize,
    pub total_height: f32,
    pub total_width: f32,
    pub scroll_offset: f32,
    pub focus: Option<CellPosition>,
    pub edit: Option<EditView<'a>>,
    pub empty: EmptyState,
}
