//! Focus and keyboard navigation handling

use crate::commands::Cmd;
use crate::grid::{navigate, CellPosition};
use crate::keymap::{GridCommand, KeyCode, Keystroke};
use crate::messages::FocusMsg;
use crate::model::GridModel;

use super::edit::{commit_edit, start_edit};

pub fn update_focus(model: &mut GridModel, msg: FocusMsg) -> Option<Cmd> {
    match msg {
        FocusMsg::SetFocus { row, col } => set_focus(model, CellPosition::new(row, col)),
        FocusMsg::Key(stroke) => handle_key(model, stroke),
        FocusMsg::PointerDownOutside | FocusMsg::FocusLost => leave_grid(model),
    }
}

/// Cell click: commits any edit, then focuses the cell
fn set_focus(model: &mut GridModel, pos: CellPosition) -> Option<Cmd> {
    let committed = commit_edit(model, None);
    if committed.is_some() {
        model.refresh();
    }

    let extent = model.extent();
    if model.focus.set(pos, extent) {
        tracing::debug!(row = pos.row, col = pos.col, "focus set");
        Some(Cmd::Redraw)
    } else {
        committed
    }
}

/// Focus left the grid: commit the edit and drop focus
fn leave_grid(model: &mut GridModel) -> Option<Cmd> {
    let committed = commit_edit(model, None);
    if model.focus.clear() || committed.is_some() {
        Some(Cmd::Redraw)
    } else {
        None
    }
}

fn handle_key(model: &mut GridModel, stroke: Keystroke) -> Option<Cmd> {
    if model.edit.is_editing() {
        return handle_edit_key(model, stroke);
    }

    let pos = model.focus.position()?;
    let command = model.keymap.lookup(&stroke)?;

    match command {
        GridCommand::StartEdit => {
            let column_key = model.layout.key_at(pos.col)?.to_string();
            start_edit(model, pos.row, &column_key)
        }
        GridCommand::ClearFocus => {
            model.focus.clear();
            Some(Cmd::Redraw)
        }
        nav => move_focus(model, pos, nav),
    }
}

/// Keys that reach the grid while the cell editor is open
fn handle_edit_key(model: &mut GridModel, stroke: Keystroke) -> Option<Cmd> {
    match stroke.key {
        KeyCode::Enter => commit_edit(model, None),
        KeyCode::Escape => super::update_edit(model, crate::messages::EditMsg::CancelEdit),
        _ => None,
    }
}

/// Move the focus and scroll the minimal amount to keep it visible
fn move_focus(model: &mut GridModel, pos: CellPosition, command: GridCommand) -> Option<Cmd> {
    let extent = model.extent();
    let next = navigate(pos, command, extent);
    if next == pos || !model.focus.set(next, extent) {
        return None;
    }
    tracing::debug!(%command, row = next.row, col = next.col, "focus moved");

    let row_height = model.config.row_height;
    let header = model.config.header_total();
    if model.viewport.ensure_row_visible(next.row, row_height, header) {
        // A queued scroll from before the move would undo the jump
        model.scroll_throttle.cancel();
        let offset = model.viewport.scroll_offset;
        Some(Cmd::batch(vec![Cmd::Redraw, Cmd::ScrollTo { offset }]))
    } else {
        Some(Cmd::Redraw)
    }
}
