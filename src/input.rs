//! Host input events and their translation into messages
//!
//! A rendering host reports raw pointer and keyboard activity as `GridEvent`s.
//! `dispatch` hit-tests cell clicks against the current frame and routes
//! pointer moves and releases to whichever drag session (column resize or
//! header reorder) a preceding pointer down opened.

use std::collections::VecDeque;

use crate::commands::Cmd;
use crate::keymap::{parse_key_sequence, KeymapError, Keystroke};
use crate::messages::{ColumnMsg, DataMsg, EditMsg, FocusMsg, Msg, ViewportMsg};
use crate::model::GridModel;
use crate::update::update;

/// A raw event from the host
#[derive(Debug, Clone, PartialEq)]
pub enum GridEvent {
    /// Key pressed while the grid has keyboard focus
    Key(Keystroke),
    /// Pointer pressed on the body, in content coordinates (below the header)
    PointerDownInside { x: f32, y: f32 },
    /// Double click on the body, in content coordinates
    DoubleClick { x: f32, y: f32 },
    /// Pointer pressed anywhere outside the grid
    PointerDownOutside,
    /// Pointer pressed on a column's resize handle
    ResizeHandleDown { column_key: String, x: f32 },
    /// Header clicked without dragging
    HeaderClick { column_key: String },
    /// Header drag started
    HeaderDragStart { column_key: String },
    /// Pointer moved
    PointerMove { x: f32 },
    /// Pointer released, over a header or elsewhere
    PointerUp { over_column: Option<String> },
    /// Keyboard focus left the grid
    FocusLost,
    /// Scroll container reported a new offset
    Scroll { offset: f32 },
    /// Scroll container was resized
    Resize { height: f32 },
    /// Filter input for a column changed
    FilterInput { column_key: String, text: String },
    /// Cell editor text changed
    EditInput(String),
    /// A scheduled tick came due
    Tick,
}

/// Something that produces host events
pub trait InputSource {
    fn next_event(&mut self) -> Option<GridEvent>;
}

/// Replays a fixed list of events
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    events: VecDeque<GridEvent>,
}

impl ScriptedInput {
    pub fn new(events: impl IntoIterator<Item = GridEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    /// Key presses from a comma-separated script such as `"down,down,ctrl+end"`
    pub fn from_keys(script: &str) -> Result<Self, KeymapError> {
        let keys = parse_key_sequence(script)?;
        Ok(Self::new(keys.into_iter().map(GridEvent::Key)))
    }

    pub fn push(&mut self, event: GridEvent) {
        self.events.push_back(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl InputSource for ScriptedInput {
    fn next_event(&mut self) -> Option<GridEvent> {
        self.events.pop_front()
    }
}

/// Translate a host event into a message, given the current drag session
pub fn to_message(model: &GridModel, event: GridEvent) -> Option<Msg> {
    let msg: Msg = match event {
        GridEvent::Key(stroke) => FocusMsg::Key(stroke).into(),
        GridEvent::PointerDownInside { x, y } => {
            // A row click outside every column lands on the first one
            let (row, col) = hit_cell(model, x, y)?;
            FocusMsg::SetFocus {
                row,
                col: col.unwrap_or(0),
            }
            .into()
        }
        GridEvent::DoubleClick { x, y } => {
            let (view_row, col) = hit_cell(model, x, y)?;
            let col = col?;
            let column_key = model.layout().key_at(col)?.to_string();
            EditMsg::StartEdit {
                view_row,
                column_key,
            }
            .into()
        }
        GridEvent::PointerDownOutside => FocusMsg::PointerDownOutside.into(),
        GridEvent::ResizeHandleDown { column_key, x } => ColumnMsg::ResizeStart {
            column_key,
            pointer_x: x,
        }
        .into(),
        GridEvent::HeaderClick { column_key } => DataMsg::SetSort { column_key }.into(),
        GridEvent::HeaderDragStart { column_key } => ColumnMsg::ReorderStart { column_key }.into(),
        GridEvent::PointerMove { x } => {
            if !model.is_resizing() {
                return None;
            }
            ColumnMsg::ResizeMove { pointer_x: x }.into()
        }
        GridEvent::PointerUp { over_column } => {
            if model.is_resizing() {
                ColumnMsg::ResizeEnd.into()
            } else if model.layout().reorder_source().is_some() {
                match over_column {
                    Some(target_key) => ColumnMsg::ReorderDrop { target_key }.into(),
                    None => ColumnMsg::ReorderCancel.into(),
                }
            } else {
                return None;
            }
        }
        GridEvent::FocusLost => FocusMsg::FocusLost.into(),
        GridEvent::Scroll { offset } => ViewportMsg::SetScrollOffset(offset).into(),
        GridEvent::Resize { height } => ViewportMsg::SetViewportHeight(height).into(),
        GridEvent::FilterInput { column_key, text } => {
            DataMsg::SetFilter { column_key, text }.into()
        }
        GridEvent::EditInput(text) => EditMsg::EditInput(text).into(),
        GridEvent::Tick => Msg::Tick,
    };
    Some(msg)
}

/// Feed one host event through the update loop
pub fn dispatch(model: &mut GridModel, event: GridEvent) -> Option<Cmd> {
    let msg = to_message(model, event)?;
    update(model, msg)
}

/// Dispatch every event `source` yields, batching the resulting commands
pub fn drain(model: &mut GridModel, source: &mut impl InputSource) -> Cmd {
    let mut cmds = Vec::new();
    while let Some(event) = source.next_event() {
        if let Some(cmd) = dispatch(model, event) {
            cmds.push(cmd);
        }
    }
    Cmd::batch(cmds)
}

/// View row under a body click, and the visible column if one is hit
fn hit_cell(model: &GridModel, x: f32, y: f32) -> Option<(usize, Option<usize>)> {
    let frame = model.frame();
    let row = frame.hit_test_row(y)?;
    Some((row, frame.hit_test_column(x)))
}
