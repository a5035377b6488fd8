//! Scroll and viewport-height handling

use crate::commands::Cmd;
use crate::messages::ViewportMsg;
use crate::model::GridModel;

pub fn update_viewport(model: &mut GridModel, msg: ViewportMsg) -> Option<Cmd> {
    match msg {
        ViewportMsg::SetScrollOffset(offset) => set_scroll_offset(model, offset),
        ViewportMsg::SetViewportHeight(height) => set_viewport_height(model, height),
    }
}

/// Throttled scroll update, suppressed while a column resize is in progress
fn set_scroll_offset(model: &mut GridModel, offset: f32) -> Option<Cmd> {
    if model.is_resizing() {
        tracing::trace!(offset, "scroll ignored during column resize");
        return None;
    }

    let now = model.now();
    let offset = model.scroll_throttle.call(offset, now)?;
    apply_scroll_offset(model, offset).into_option()
}

/// The first measurement applies at once; later ones are debounced
fn set_viewport_height(model: &mut GridModel, height: f32) -> Option<Cmd> {
    if !model.height_measured {
        model.height_measured = true;
        return apply_viewport_height(model, height).into_option();
    }

    let now = model.now();
    model.viewport_debounce.push(height, now);
    None
}

pub(super) fn apply_scroll_offset(model: &mut GridModel, offset: f32) -> Cmd {
    if model.viewport.set_scroll_offset(offset) {
        Cmd::Redraw
    } else {
        Cmd::None
    }
}

pub(super) fn apply_viewport_height(model: &mut GridModel, height: f32) -> Cmd {
    if model.viewport.set_height(height) {
        tracing::debug!(height, "viewport height changed");
        Cmd::Redraw
    } else {
        Cmd::None
    }
}

/// Jump to the top, dropping any queued scroll, and tell the host
pub(super) fn reset_scroll(model: &mut GridModel) -> Cmd {
    model.scroll_throttle.cancel();
    model.viewport.set_scroll_offset(0.0);
    Cmd::ScrollTo { offset: 0.0 }
}
