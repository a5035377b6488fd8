//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types. Each variant is a
//! callback the rendering host can invoke.

use crate::data::Dataset;
use crate::keymap::Keystroke;

/// Dataset, sort and filter messages
#[derive(Debug, Clone)]
pub enum DataMsg {
    /// Replace the dataset; resets filters, sort, scroll, edit and focus
    Load(Dataset),
    /// Drop the dataset ("clear the grid" signal)
    Clear,
    /// Header click: sort by a column, toggling direction on repeat
    SetSort { column_key: String },
    /// Filter input changed for a column
    SetFilter { column_key: String, text: String },
}

/// Cell edit messages
#[derive(Debug, Clone)]
pub enum EditMsg {
    /// Begin editing a displayed cell (row index in the current view)
    StartEdit { view_row: usize, column_key: String },
    /// The edit draft changed
    EditInput(String),
    /// Commit the given value, or the current draft when `None`
    CommitEdit(Option<String>),
    /// Discard the draft
    CancelEdit,
}

/// Focus and keyboard messages
#[derive(Debug, Clone)]
pub enum FocusMsg {
    /// Cell click (row index in the current view, visible column index)
    SetFocus { row: usize, col: usize },
    /// Key pressed while the grid has keyboard focus
    Key(Keystroke),
    /// Pointer pressed outside the grid
    PointerDownOutside,
    /// The grid lost keyboard focus
    FocusLost,
}

/// Scroll container messages
#[derive(Debug, Clone, Copy)]
pub enum ViewportMsg {
    /// Scroll event (throttled)
    SetScrollOffset(f32),
    /// Container measured a new height (debounced)
    SetViewportHeight(f32),
}

/// Column resize and reorder messages
#[derive(Debug, Clone)]
pub enum ColumnMsg {
    /// Pointer down on a column's resize handle
    ResizeStart { column_key: String, pointer_x: f32 },
    /// Pointer moved during a resize drag (throttled)
    ResizeMove { pointer_x: f32 },
    /// Pointer released; flushes the last width
    ResizeEnd,
    /// Header drag started
    ReorderStart { column_key: String },
    /// Header dropped onto another header
    ReorderDrop { target_key: String },
    /// Header drag abandoned
    ReorderCancel,
    /// Move a column directly
    Reorder { source_key: String, target_key: String },
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    Data(DataMsg),
    Edit(EditMsg),
    Focus(FocusMsg),
    Viewport(ViewportMsg),
    Column(ColumnMsg),
    /// A scheduled deadline may be due; release pending debounced/throttled values
    Tick,
}

impl From<DataMsg> for Msg {
    fn from(m: DataMsg) -> Self {
        Msg::Data(m)
    }
}

impl From<EditMsg> for Msg {
    fn from(m: EditMsg) -> Self {
        Msg::Edit(m)
    }
}

impl From<FocusMsg> for Msg {
    fn from(m: FocusMsg) -> Self {
        Msg::Focus(m)
    }
}

impl From<ViewportMsg> for Msg {
    fn from(m: ViewportMsg) -> Self {
        Msg::Viewport(m)
    }
}

impl From<ColumnMsg> for Msg {
    fn from(m: ColumnMsg) -> Self {
        Msg::Column(m)
    }
}
