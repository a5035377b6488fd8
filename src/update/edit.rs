//! Cell edit handling
//!
//! Edits start from a view position but are resolved to the raw row store
//! through the row id index, so re-filtering or re-sorting mid-edit cannot
//! redirect a commit to another row.

use crate::commands::Cmd;
use crate::grid::{coerce_input, EditTarget};
use crate::messages::EditMsg;
use crate::model::GridModel;

pub fn update_edit(model: &mut GridModel, msg: EditMsg) -> Option<Cmd> {
    match msg {
        EditMsg::StartEdit {
            view_row,
            column_key,
        } => start_edit(model, view_row, &column_key),
        EditMsg::EditInput(text) => {
            model.edit.set_draft(text);
            None
        }
        EditMsg::CommitEdit(value) => commit_edit(model, value),
        EditMsg::CancelEdit => cancel_edit(model),
    }
}

/// Resolve a displayed cell to its raw row; `None` if it is no longer shown
fn resolve_target(model: &GridModel, view_row: usize, column_key: &str) -> Option<EditTarget> {
    model.column(column_key)?;
    let row = model.view_row(view_row)?;
    let raw_index = model.store.index_of(row.id())?;
    Some(EditTarget {
        raw_index,
        row_id: row.id(),
        column_key: column_key.to_string(),
    })
}

/// Enter edit mode on a displayed cell, committing any edit in progress
pub(super) fn start_edit(model: &mut GridModel, view_row: usize, column_key: &str) -> Option<Cmd> {
    let Some(target) = resolve_target(model, view_row, column_key) else {
        tracing::debug!(view_row, column_key, "start edit on a cell no longer in view, ignored");
        return None;
    };

    // The previous edit lands first so the new draft sees its value
    if let Some((previous, previous_draft)) = model.edit.finish() {
        write_cell(model, &previous, &previous_draft);
    }

    let draft = model
        .store
        .get(target.raw_index)
        .map(|row| row.get(column_key).to_text())
        .unwrap_or_default();

    tracing::debug!(row_id = %target.row_id, column_key, "edit started");
    model.edit.begin(target, draft);

    Some(Cmd::Redraw)
}

/// Commit the active edit with `value`, or with its draft when `None`
pub(super) fn commit_edit(model: &mut GridModel, value: Option<String>) -> Option<Cmd> {
    let (target, draft) = model.edit.finish()?;
    let text = value.unwrap_or(draft);
    write_cell(model, &target, &text);
    Some(Cmd::Redraw)
}

fn cancel_edit(model: &mut GridModel) -> Option<Cmd> {
    let (target, _) = model.edit.finish()?;
    tracing::debug!(row_id = %target.row_id, column_key = %target.column_key, "edit cancelled");
    Some(Cmd::Redraw)
}

/// Store typed text into the raw row, coerced to the column's type
///
/// A target whose row id no longer maps to its raw index (the dataset was
/// replaced mid-edit) is dropped silently.
fn write_cell(model: &mut GridModel, target: &EditTarget, text: &str) {
    if model.store.index_of(target.row_id) != Some(target.raw_index) {
        tracing::debug!(row_id = %target.row_id, "commit for a stale row, ignored");
        return;
    }
    let Some(column) = model.column(&target.column_key) else {
        return;
    };

    let value = coerce_input(text, column.data_type);
    tracing::debug!(
        row_id = %target.row_id,
        column_key = %target.column_key,
        value = ?value,
        "edit committed"
    );
    model
        .store
        .set_cell(target.raw_index, &target.column_key, value);
}
