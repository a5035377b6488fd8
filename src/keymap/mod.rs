//! Keyboard mapping for grid navigation
//!
//! ```text
//! host key event → Keystroke → Keymap::lookup() → GridCommand → focus/edit
//! ```
//!
//! Bindings can be overridden from the config file:
//!
//! ```yaml
//! bindings:
//!   - key: j
//!     command: MoveDown
//! ```

mod command;
mod config;
#[allow(clippy::module_inception)]
mod keymap;
mod types;

pub use command::GridCommand;
pub use config::{parse_bindings_yaml, parse_key_sequence, parse_key_string, BindingConfig, KeymapError};
pub use keymap::{default_bindings, Keymap};
pub use types::{KeyCode, Keystroke, Modifiers};
