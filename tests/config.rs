//! Configuration system tests
//!
//! Tests for config paths, grid config files and keybinding overrides.

mod common;

use common::{numbered, TestGrid};
use datagrid::config::GridConfig;
use datagrid::config_paths;
use datagrid::keymap::{
    default_bindings, parse_bindings_yaml, BindingConfig, GridCommand, KeyCode, Keystroke,
    Modifiers,
};
use datagrid::messages::ViewportMsg;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_contains_app_name() {
    if let Some(dir) = config_paths::config_dir() {
        assert!(dir.to_string_lossy().contains("datagrid"));
    }
}

#[test]
fn test_config_file_ends_with_yaml() {
    if let Some(path) = config_paths::config_file() {
        assert!(path.to_string_lossy().ends_with("config.yaml"));
    }
}

#[test]
fn test_logs_dir_under_config_dir() {
    if let (Some(config), Some(logs)) = (config_paths::config_dir(), config_paths::logs_dir()) {
        assert!(logs.starts_with(config));
    }
}

// ========================================================================
// Config File Tests
// ========================================================================

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.yaml");

    let config = GridConfig {
        row_height: 28.0,
        overscan_rows: 8,
        bindings: vec![BindingConfig {
            key: "k".into(),
            command: "MoveUp".into(),
        }],
        ..GridConfig::default()
    };
    config.save_to(&path).unwrap();

    assert_eq!(GridConfig::load_from(&path), config);
}

#[test]
fn test_saved_yaml_uses_camel_case() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    GridConfig::default().save_to(&path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("rowHeight: 35"));
    assert!(content.contains("filterDebounceMs: 300"));
    assert!(!content.contains("bindings"));
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = GridConfig::load_from(&dir.path().join("absent.yaml"));
    assert_eq!(config, GridConfig::default());
}

#[test]
fn test_malformed_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "rowHeight: [unclosed").unwrap();
    assert_eq!(GridConfig::load_from(&path), GridConfig::default());
}

#[test]
fn test_negative_heights_normalized() {
    let config = GridConfig::from_yaml_str("headerHeight: -10\nfilterRowHeight: 12\n").unwrap();
    assert_eq!(config.header_height, 0.0);
    assert_eq!(config.header_total(), 12.0);
}

#[test]
fn test_config_drives_model() {
    let config = GridConfig::from_yaml_str(
        "rowHeight: 20\noverscanRows: 2\nscrollThrottleMs: 100\nmaxColumnWidth: 180\n",
    )
    .unwrap();
    let mut grid = TestGrid::new(config);
    grid.send(datagrid::messages::DataMsg::Load(numbered(1000)));
    grid.send(ViewportMsg::SetViewportHeight(200.0));

    // 200 / 20 = 10 visible + 2 overscan
    assert_eq!(grid.model.window().len(), 13);
    assert_eq!(grid.model.total_height(), 20_000.0);

    grid.send(ViewportMsg::SetScrollOffset(100.0));
    grid.clock.advance(50);
    grid.send(ViewportMsg::SetScrollOffset(400.0));
    assert_eq!(grid.model.viewport().scroll_offset, 100.0);
    grid.advance(50);
    assert_eq!(grid.model.viewport().scroll_offset, 400.0);

    assert_eq!(grid.model.layout().max_width(), 180.0);
}

// ========================================================================
// Keybinding Tests
// ========================================================================

#[test]
fn test_default_bindings_cover_navigation() {
    let bindings = default_bindings();
    let commands: Vec<GridCommand> = bindings.iter().map(|(_, c)| *c).collect();
    for command in GridCommand::ALL {
        assert!(commands.contains(&command), "{} is unbound", command);
    }
}

#[test]
fn test_bindings_yaml() {
    let bindings = parse_bindings_yaml(
        r#"
- key: ctrl+j
  command: PageDown
- key: g
  command: FirstCell
"#,
    )
    .unwrap();
    assert_eq!(
        bindings,
        vec![
            (
                Keystroke::new(KeyCode::Char('j'), Modifiers::CTRL),
                GridCommand::PageDown
            ),
            (Keystroke::key(KeyCode::Char('g')), GridCommand::FirstCell),
        ]
    );
}

#[test]
fn test_invalid_binding_is_skipped() {
    let config = GridConfig::from_yaml_str(
        r#"
bindings:
  - key: ctrl+
    command: MoveDown
  - key: x
    command: Explode
  - key: q
    command: ClearFocus
"#,
    )
    .unwrap();
    let keymap = config.keymap();
    assert_eq!(
        keymap.lookup(&Keystroke::key(KeyCode::Char('q'))),
        Some(GridCommand::ClearFocus)
    );
    assert_eq!(keymap.lookup(&Keystroke::key(KeyCode::Char('x'))), None);
    assert_eq!(keymap.len(), default_bindings().len() + 1);
}
