//! Grid configuration
//!
//! Tunables live in `~/.config/datagrid/config.yaml`. Every field is optional;
//! missing fields take their defaults and a missing or malformed file yields
//! the default configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data::DEFAULT_COLUMN_WIDTH;
use crate::keymap::{default_bindings, BindingConfig, Keymap};

/// Grid configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridConfig {
    pub row_height: f32,
    pub header_height: f32,
    pub filter_row_height: f32,
    pub min_column_width: f32,
    pub max_column_width: f32,
    pub default_column_width: f32,
    pub overscan_rows: usize,
    pub filter_debounce_ms: u64,
    pub scroll_throttle_ms: u64,
    pub resize_throttle_ms: u64,
    pub viewport_debounce_ms: u64,
    /// Viewport height used until the host reports a measured one
    pub initial_viewport_height: f32,
    /// Keybinding overrides, applied on top of the defaults
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bindings: Vec<BindingConfig>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            row_height: 35.0,
            header_height: 40.0,
            filter_row_height: 35.0,
            min_column_width: 50.0,
            max_column_width: 500.0,
            default_column_width: DEFAULT_COLUMN_WIDTH,
            overscan_rows: 5,
            filter_debounce_ms: 300,
            scroll_throttle_ms: 16,
            resize_throttle_ms: 16,
            viewport_debounce_ms: 150,
            initial_viewport_height: 500.0,
            bindings: Vec::new(),
        }
    }
}

impl GridConfig {
    /// Sticky area above the rows: column headers plus the filter row
    pub fn header_total(&self) -> f32 {
        self.header_height + self.filter_row_height
    }

    /// Parse YAML, normalizing inconsistent values
    pub fn from_yaml_str(yaml: &str) -> Result<Self, String> {
        let config: GridConfig =
            serde_yaml::from_str(yaml).map_err(|e| format!("Failed to parse config: {}", e))?;
        Ok(config.normalized())
    }

    /// Load config from the default location, or return defaults
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`, or return defaults if it is missing or broken
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("{} ({}), using defaults", e, path.display());
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Default bindings with the configured overrides applied
    ///
    /// Invalid override entries are skipped with a warning.
    pub fn keymap(&self) -> Keymap {
        let mut keymap = Keymap::with_bindings(default_bindings());
        for entry in &self.bindings {
            match entry.resolve() {
                Ok((stroke, command)) => keymap.bind(stroke, command),
                Err(e) => tracing::warn!("Ignoring key binding {:?}: {}", entry.key, e),
            }
        }
        keymap
    }

    fn normalized(mut self) -> Self {
        let defaults = Self::default();

        for (name, value, fallback) in [
            ("rowHeight", &mut self.row_height, defaults.row_height),
            ("minColumnWidth", &mut self.min_column_width, defaults.min_column_width),
            ("defaultColumnWidth", &mut self.default_column_width, defaults.default_column_width),
        ] {
            if !(*value > 0.0) || !value.is_finite() {
                tracing::warn!("{} must be positive, using {}", name, fallback);
                *value = fallback;
            }
        }

        for (name, value) in [
            ("headerHeight", &mut self.header_height),
            ("filterRowHeight", &mut self.filter_row_height),
            ("initialViewportHeight", &mut self.initial_viewport_height),
        ] {
            if !(*value >= 0.0) || !value.is_finite() {
                tracing::warn!("{} must not be negative, using 0", name);
                *value = 0.0;
            }
        }

        if !(self.max_column_width >= self.min_column_width) {
            tracing::warn!(
                "maxColumnWidth {} is below minColumnWidth {}, raising it",
                self.max_column_width,
                self.min_column_width
            );
            self.max_column_width = self.min_column_width;
        }

        self
    }
}
