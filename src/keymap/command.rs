//! Grid commands that keystrokes map to

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// What a key does to the focused cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GridCommand {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    PageUp,
    PageDown,
    /// First column of the current row
    RowStart,
    /// Last column of the current row
    RowEnd,
    /// First column of the first row
    FirstCell,
    /// Last column of the last row
    LastCell,
    StartEdit,
    ClearFocus,
}

impl GridCommand {
    pub const ALL: [GridCommand; 12] = [
        GridCommand::MoveUp,
        GridCommand::MoveDown,
        GridCommand::MoveLeft,
        GridCommand::MoveRight,
        GridCommand::PageUp,
        GridCommand::PageDown,
        GridCommand::RowStart,
        GridCommand::RowEnd,
        GridCommand::FirstCell,
        GridCommand::LastCell,
        GridCommand::StartEdit,
        GridCommand::ClearFocus,
    ];

    pub fn name(self) -> &'static str {
        match self {
            GridCommand::MoveUp => "MoveUp",
            GridCommand::MoveDown => "MoveDown",
            GridCommand::MoveLeft => "MoveLeft",
            GridCommand::MoveRight => "MoveRight",
            GridCommand::PageUp => "PageUp",
            GridCommand::PageDown => "PageDown",
            GridCommand::RowStart => "RowStart",
            GridCommand::RowEnd => "RowEnd",
            GridCommand::FirstCell => "FirstCell",
            GridCommand::LastCell => "LastCell",
            GridCommand::StartEdit => "StartEdit",
            GridCommand::ClearFocus => "ClearFocus",
        }
    }

    /// Whether the command moves the focused cell
    pub fn is_navigation(self) -> bool {
        !matches!(self, GridCommand::StartEdit | GridCommand::ClearFocus)
    }
}

impl fmt::Display for GridCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GridCommand {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GridCommand::ALL
            .into_iter()
            .find(|cmd| cmd.name() == s)
            .ok_or(())
    }
}
