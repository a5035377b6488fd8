//! Dataset, sort and filter handling

use crate::commands::Cmd;
use crate::data::{Dataset, FilterState, SortDirection, SortState};
use crate::grid::EditState;
use crate::messages::DataMsg;
use crate::model::GridModel;

use super::viewport::reset_scroll;

pub fn update_data(model: &mut GridModel, msg: DataMsg) -> Option<Cmd> {
    match msg {
        DataMsg::Load(dataset) => Some(load_dataset(model, dataset)),
        DataMsg::Clear => Some(load_dataset(model, Dataset::default())),
        DataMsg::SetSort { column_key } => set_sort(model, &column_key),
        DataMsg::SetFilter { column_key, text } => Some(set_filter(model, column_key, text)),
    }
}

/// Install a new dataset and reset every per-dataset state
///
/// Row ids continue from the store's counter, so ids from the previous
/// dataset never resolve again.
pub fn load_dataset(model: &mut GridModel, dataset: Dataset) -> Cmd {
    let Dataset { mut columns, rows } = dataset;

    let default_width = model.config.default_column_width;
    for column in &mut columns {
        if !(column.width > 0.0) || !column.width.is_finite() {
            column.width = default_width;
        }
    }

    tracing::info!(columns = columns.len(), rows = rows.len(), "dataset loaded");

    model.layout.load(&columns);
    model.columns = columns;
    model.store.load(rows);

    model.filters.clear();
    model.applied_filters.clear();
    model.filters_generation += 1;
    model.filter_debounce.cancel();
    model.sort = None;

    model.edit = EditState::Idle;
    model.focus.clear();
    model.resize_throttle.cancel();

    Cmd::batch(vec![Cmd::Redraw, reset_scroll(model)])
}

/// Sort by a column: ascending, or descending when it is already ascending
fn set_sort(model: &mut GridModel, column_key: &str) -> Option<Cmd> {
    let Some(column) = model.column(column_key) else {
        tracing::debug!(column_key, "sort requested for unknown column");
        return None;
    };
    if !column.sortable {
        return None;
    }
    let data_type = column.data_type;

    let direction = match &model.sort {
        Some(current)
            if current.column_key == column_key && current.direction == SortDirection::Ascending =>
        {
            SortDirection::Descending
        }
        _ => SortDirection::Ascending,
    };

    tracing::debug!(column_key, %direction, %data_type, "sort changed");
    model.sort = Some(SortState::new(column_key, direction, data_type));
    model.focus.clear();

    Some(Cmd::batch(vec![Cmd::Redraw, reset_scroll(model)]))
}

/// Record filter input now; the pipeline picks it up after the debounce
fn set_filter(model: &mut GridModel, column_key: String, text: String) -> Cmd {
    model.filters.set(column_key, text);

    let now = model.now();
    model.filter_debounce.push(model.filters.clone(), now);
    model.focus.clear();

    Cmd::batch(vec![Cmd::Redraw, reset_scroll(model)])
}

/// Swap in a debounced filter snapshot
pub(super) fn apply_filters(model: &mut GridModel, filters: FilterState) -> Cmd {
    if filters == model.applied_filters {
        return Cmd::None;
    }

    tracing::debug!(filters = ?filters, "filters applied");
    model.applied_filters = filters;
    model.filters_generation += 1;
    model.focus.clear();
    Cmd::Redraw
}
