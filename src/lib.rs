//! Headless interactive data grid
//!
//! This crate provides the core types and logic for a virtualized, editable
//! data grid implementing the Elm Architecture pattern. A rendering host
//! feeds `Msg`s through `update`, performs the returned `Cmd`s and paints
//! `GridModel::frame()`.

pub mod clock;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod data;
pub mod grid;
pub mod input;
pub mod keymap;
pub mod memo;
pub mod messages;
pub mod model;
pub mod schedule;
pub mod source;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::GridConfig;
pub use messages::Msg;
pub use model::GridModel;
