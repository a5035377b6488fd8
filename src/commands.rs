//! Command types for the Elm-style architecture
//!
//! Commands represent side effects the host performs after an update.

/// Side effect requested by `update`
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Derived state changed; repaint from `GridModel::frame()`
    Redraw,
    /// Move the host's scroll container (focus auto-scroll)
    ScrollTo { offset: f32 },
    /// A debounce/throttle deadline is pending: send `Msg::Tick` after `delay_ms`
    ScheduleTick { delay_ms: u64 },
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Combine commands, flattening away `None`s
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        let mut flat: Vec<Cmd> = cmds.into_iter().filter(|c| !c.is_none()).collect();
        match flat.len() {
            0 => Cmd::None,
            1 => flat.remove(0),
            _ => Cmd::Batch(flat),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Cmd::None)
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            Cmd::ScrollTo { .. } => true,
            Cmd::ScheduleTick { .. } => false,
            Cmd::Batch(cmds) => cmds.iter().any(Cmd::needs_redraw),
        }
    }

    /// Shortest tick delay requested, if any
    pub fn tick_delay(&self) -> Option<u64> {
        match self {
            Cmd::ScheduleTick { delay_ms } => Some(*delay_ms),
            Cmd::Batch(cmds) => cmds.iter().filter_map(Cmd::tick_delay).min(),
            _ => None,
        }
    }

    /// Scroll target requested, if any (the last one wins)
    pub fn scroll_target(&self) -> Option<f32> {
        match self {
            Cmd::ScrollTo { offset } => Some(*offset),
            Cmd::Batch(cmds) => cmds.iter().filter_map(Cmd::scroll_target).last(),
            _ => None,
        }
    }

    /// Convert to Option, treating `None` as absent
    pub fn into_option(self) -> Option<Cmd> {
        if self.is_none() {
            None
        } else {
            Some(self)
        }
    }
}
