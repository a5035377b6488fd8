//! Keystroke to grid command lookup

use std::collections::HashMap;

use super::command::GridCommand;
use super::types::{KeyCode, Keystroke, Modifiers};

/// Bindings used when no overrides are configured
pub fn default_bindings() -> Vec<(Keystroke, GridCommand)> {
    use GridCommand::*;

    let key = Keystroke::key;
    let with = Keystroke::new;

    vec![
        (key(KeyCode::Up), MoveUp),
        (key(KeyCode::Down), MoveDown),
        (key(KeyCode::Left), MoveLeft),
        (key(KeyCode::Right), MoveRight),
        (key(KeyCode::PageUp), PageUp),
        (key(KeyCode::PageDown), PageDown),
        (key(KeyCode::Home), RowStart),
        (key(KeyCode::End), RowEnd),
        (with(KeyCode::Home, Modifiers::CTRL), FirstCell),
        (with(KeyCode::Home, Modifiers::META), FirstCell),
        (with(KeyCode::End, Modifiers::CTRL), LastCell),
        (with(KeyCode::End, Modifiers::META), LastCell),
        (key(KeyCode::Enter), StartEdit),
        (key(KeyCode::F(2)), StartEdit),
        (key(KeyCode::Escape), ClearFocus),
    ]
}

/// Keystroke lookup table; later bindings replace earlier ones
#[derive(Debug, Clone, Default)]
pub struct Keymap {
    bindings: HashMap<Keystroke, GridCommand>,
}

impl Keymap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bindings(bindings: impl IntoIterator<Item = (Keystroke, GridCommand)>) -> Self {
        let mut keymap = Self::new();
        for (stroke, command) in bindings {
            keymap.bind(stroke, command);
        }
        keymap
    }

    pub fn bind(&mut self, stroke: Keystroke, command: GridCommand) {
        self.bindings.insert(stroke, command);
    }

    /// Command bound to a keystroke
    ///
    /// Home/End fall back when the exact chord is unbound: only the jump
    /// modifier (Ctrl, else Meta) is kept, so Shift+Home behaves like Home
    /// and Ctrl+Shift+End like Ctrl+End.
    pub fn lookup(&self, stroke: &Keystroke) -> Option<GridCommand> {
        if let Some(cmd) = self.bindings.get(stroke) {
            return Some(*cmd);
        }
        match stroke.key {
            KeyCode::Home | KeyCode::End => {
                let mods = if stroke.mods.ctrl() {
                    Modifiers::CTRL
                } else if stroke.mods.meta() {
                    Modifiers::META
                } else {
                    Modifiers::NONE
                };
                self.bindings
                    .get(&Keystroke::new(stroke.key, mods))
                    .copied()
            }
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl From<&[(Keystroke, GridCommand)]> for Keymap {
    fn from(bindings: &[(Keystroke, GridCommand)]) -> Self {
        Keymap::with_bindings(bindings.iter().copied())
    }
}
