//! Cooperative timers: releasing debounced and throttled values
//!
//! The host schedules a `Msg::Tick` after the delay in `Cmd::ScheduleTick`.
//! A tick polls every scheduler against the model clock; anything not yet due
//! stays pending and is rescheduled.

use crate::commands::Cmd;
use crate::model::GridModel;

use super::columns::apply_resize_width;
use super::data::apply_filters;
use super::viewport::{apply_scroll_offset, apply_viewport_height};

/// Release every value whose deadline has passed
pub fn update_tick(model: &mut GridModel) -> Option<Cmd> {
    let now = model.now();
    let mut cmds = Vec::new();

    if let Some(filters) = model.filter_debounce.poll(now) {
        cmds.push(apply_filters(model, filters));
    }

    if let Some(offset) = model.scroll_throttle.poll(now) {
        if !model.is_resizing() {
            cmds.push(apply_scroll_offset(model, offset));
        }
    }

    if let Some((column_key, width)) = model.resize_throttle.poll(now) {
        cmds.push(apply_resize_width(model, &column_key, width));
    }

    if let Some(height) = model.viewport_debounce.poll(now) {
        cmds.push(apply_viewport_height(model, height));
    }

    Cmd::batch(cmds).into_option()
}

/// `ScheduleTick` for the earliest pending deadline, or `Cmd::None`
pub fn pending_tick(model: &GridModel) -> Cmd {
    match model.next_deadline() {
        Some(deadline) => Cmd::ScheduleTick {
            delay_ms: deadline.saturating_sub(model.now()),
        },
        None => Cmd::None,
    }
}
