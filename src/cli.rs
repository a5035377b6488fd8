//! Command-line argument parsing for the grid driver
//!
//! Supports:
//! - Loading a CSV file
//! - Sorting and filtering before rendering
//! - Replaying a key script against the focused grid
//! - Text table or JSON output

use clap::Parser;
use std::path::PathBuf;

/// Render a CSV file through the data grid engine
#[derive(Parser, Debug)]
#[command(name = "datagrid", version, about = "Headless data grid driver")]
pub struct CliArgs {
    /// CSV file to load
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Viewport height in pixels
    #[arg(long, value_name = "PX")]
    pub height: Option<f32>,

    /// Comma-separated key script, e.g. "down,down,ctrl+end,enter"
    #[arg(long, value_name = "KEYS")]
    pub keys: Option<String>,

    /// Column key to sort by (repeat to toggle direction)
    #[arg(long, value_name = "KEY")]
    pub sort: Vec<String>,

    /// Column filter, as KEY=TEXT
    #[arg(long, value_name = "KEY=TEXT")]
    pub filter: Vec<String>,

    /// Print a JSON snapshot instead of a table
    #[arg(long)]
    pub json: bool,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Driver settings derived from CLI arguments
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub file: PathBuf,
    pub height: Option<f32>,
    pub keys: Option<String>,
    pub sort: Vec<String>,
    pub filters: Vec<(String, String)>,
    pub json: bool,
    pub config: Option<PathBuf>,
}

impl CliArgs {
    /// Validate parsed args into a run configuration
    pub fn into_config(self) -> Result<RunConfig, String> {
        let filters = self
            .filter
            .iter()
            .map(|f| parse_filter(f))
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(height) = self.height {
            if !(height >= 0.0) || !height.is_finite() {
                return Err(format!("Invalid height: {}", height));
            }
        }

        Ok(RunConfig {
            file: self.file,
            height: self.height,
            keys: self.keys,
            sort: self.sort,
            filters,
            json: self.json,
            config: self.config,
        })
    }
}

fn parse_filter(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((key, text)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), text.to_string()))
        }
        _ => Err(format!("Invalid filter '{}', expected KEY=TEXT", arg)),
    }
}
