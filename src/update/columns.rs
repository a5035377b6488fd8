//! Column resize and reorder handling

use crate::commands::Cmd;
use crate::messages::ColumnMsg;
use crate::model::GridModel;

pub fn update_columns(model: &mut GridModel, msg: ColumnMsg) -> Option<Cmd> {
    match msg {
        ColumnMsg::ResizeStart {
            column_key,
            pointer_x,
        } => {
            model.resize_throttle.cancel();
            if model.layout.begin_resize(&column_key, pointer_x) {
                tracing::debug!(column_key = %column_key, pointer_x, "resize started");
            }
            None
        }
        ColumnMsg::ResizeMove { pointer_x } => resize_move(model, pointer_x),
        ColumnMsg::ResizeEnd => resize_end(model),
        ColumnMsg::ReorderStart { column_key } => {
            model.layout.begin_reorder(&column_key);
            None
        }
        ColumnMsg::ReorderDrop { target_key } => {
            let changed = model.layout.drop_on(&target_key);
            columns_changed(model, changed)
        }
        ColumnMsg::ReorderCancel => {
            model.layout.cancel_reorder();
            None
        }
        ColumnMsg::Reorder {
            source_key,
            target_key,
        } => {
            let changed = model.layout.reorder(&source_key, &target_key);
            columns_changed(model, changed)
        }
    }
}

/// Throttled live width update during a drag
fn resize_move(model: &mut GridModel, pointer_x: f32) -> Option<Cmd> {
    let requested = model.layout.drag_width(pointer_x)?;
    let now = model.now();
    let (column_key, width) = model.resize_throttle.call(requested, now)?;
    apply_resize_width(model, &column_key, width).into_option()
}

/// End the drag and apply the final width right away
fn resize_end(model: &mut GridModel) -> Option<Cmd> {
    let drag = model.layout.end_resize()?;

    let cmd = match model.resize_throttle.cancel() {
        Some((column_key, width)) => apply_resize_width(model, &column_key, width),
        None => Cmd::None,
    };
    tracing::debug!(
        column_key = %drag.column_key,
        width = model.layout.width(&drag.column_key),
        "resize ended"
    );
    cmd.into_option()
}

pub(super) fn apply_resize_width(model: &mut GridModel, column_key: &str, width: f32) -> Cmd {
    if model.layout.apply_width(column_key, width) {
        Cmd::Redraw
    } else {
        Cmd::None
    }
}

/// The column list changed: focus indices no longer mean the same cells
fn columns_changed(model: &mut GridModel, changed: bool) -> Option<Cmd> {
    if !changed {
        return None;
    }
    model.focus.clear();
    Some(Cmd::Redraw)
}
