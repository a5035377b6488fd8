//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod columns;
mod data;
mod edit;
mod focus;
mod timers;
mod viewport;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::GridModel;

#[cfg(debug_assertions)]
use crate::tracing::GridSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use columns::update_columns;
pub use data::{load_dataset, update_data};
pub use edit::update_edit;
pub use focus::update_focus;
pub use timers::{pending_tick, update_tick};
pub use viewport::update_viewport;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch.
#[inline]
pub fn update(model: &mut GridModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut GridModel, msg: Msg) -> Option<Cmd> {
    let result = match msg {
        Msg::Data(m) => data::update_data(model, m),
        Msg::Edit(m) => edit::update_edit(model, m),
        Msg::Focus(m) => focus::update_focus(model, m),
        Msg::Viewport(m) => viewport::update_viewport(model, m),
        Msg::Column(m) => columns::update_columns(model, m),
        Msg::Tick => timers::update_tick(model),
    };

    model.refresh();

    Cmd::batch(vec![result.unwrap_or_default(), pending_tick(model)]).into_option()
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after interaction state and logs the difference.
/// Ticks are too frequent to log individually.
#[cfg(debug_assertions)]
fn update_traced(model: &mut GridModel, msg: Msg) -> Option<Cmd> {
    let is_noisy = matches!(&msg, Msg::Tick);

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = GridSnapshot::from_model(model);

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);

    let after = GridSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "state", %diff, "state changed");
    }

    result
}

/// Display name for a message, including its arguments
///
/// Dataset payloads are summarized rather than dumped.
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    use crate::messages::DataMsg;

    match msg {
        Msg::Data(DataMsg::Load(ds)) => format!(
            "Data::Load({} columns, {} rows)",
            ds.columns.len(),
            ds.rows.len()
        ),
        Msg::Data(m) => format!("Data::{:?}", m),
        Msg::Edit(m) => format!("Edit::{:?}", m),
        Msg::Focus(m) => format!("Focus::{:?}", m),
        Msg::Viewport(m) => format!("Viewport::{:?}", m),
        Msg::Column(m) => format!("Column::{:?}", m),
        Msg::Tick => "Tick".to_string(),
    }
}
