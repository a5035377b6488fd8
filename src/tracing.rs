//! Tracing setup and state snapshots for debugging transitions
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=datagrid::update=debug` - message handling only
//! - `RUST_LOG=datagrid::data::pipeline=trace` - pipeline recomputation
//!
//! # Log Files
//!
//! Logs are written to `~/.config/datagrid/logs/datagrid.log` with daily
//! rotation, always at debug level.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::grid::CellPosition;
use crate::model::GridModel;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`) and goes to stderr so
/// it never mixes with rendered output.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender =
                tracing_appender::rolling::daily(logs_dir, crate::config_paths::LOG_FILE_NAME);
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init();
}

/// Interaction state captured before and after a message
#[derive(Debug, Clone, PartialEq)]
pub struct GridSnapshot {
    pub focus: Option<CellPosition>,
    pub editing: Option<(usize, String)>,
    pub scroll_offset: f32,
    pub view_rows: usize,
}

impl GridSnapshot {
    pub fn from_model(model: &GridModel) -> Self {
        Self {
            focus: model.focus().position(),
            editing: model
                .edit_state()
                .target()
                .map(|t| (t.raw_index, t.column_key.clone())),
            scroll_offset: model.viewport().scroll_offset,
            view_rows: model.view_len(),
        }
    }

    /// Describe what changed between two snapshots
    pub fn diff(&self, other: &GridSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.focus != other.focus {
            changes.push(format!(
                "focus: {} → {}",
                describe_focus(self.focus),
                describe_focus(other.focus)
            ));
        }
        if self.editing != other.editing {
            let describe = |e: &Option<(usize, String)>| match e {
                Some((row, key)) => format!("{}[{}]", key, row),
                None => "idle".to_string(),
            };
            changes.push(format!(
                "edit: {} → {}",
                describe(&self.editing),
                describe(&other.editing)
            ));
        }
        if self.scroll_offset != other.scroll_offset {
            changes.push(format!(
                "scroll: {} → {}",
                self.scroll_offset, other.scroll_offset
            ));
        }
        if self.view_rows != other.view_rows {
            changes.push(format!("rows: {} → {}", self.view_rows, other.view_rows));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

fn describe_focus(focus: Option<CellPosition>) -> String {
    match focus {
        Some(pos) => format!("({},{})", pos.row, pos.col),
        None => "none".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_diff() {
        let before = GridSnapshot {
            focus: None,
            editing: None,
            scroll_offset: 0.0,
            view_rows: 10,
        };
        assert_eq!(before.diff(&before.clone()), None);

        let after = GridSnapshot {
            focus: Some(CellPosition::new(2, 1)),
            scroll_offset: 35.0,
            ..before.clone()
        };
        assert_eq!(
            before.diff(&after).as_deref(),
            Some("focus: none → (2,1); scroll: 0 → 35")
        );
    }
}
