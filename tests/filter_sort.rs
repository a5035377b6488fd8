//! Filter and sort tests - pipeline behavior through the message loop

mod common;

use common::{numbered, people, row, text, TestGrid};
use datagrid::data::{
    run_pipeline, CellValue, Column, DataType, Dataset, FilterState, Row, RowId, SortDirection,
};
use datagrid::messages::{DataMsg, ViewportMsg};

fn set_filter(grid: &mut TestGrid, key: &str, value: &str) {
    grid.send(DataMsg::SetFilter {
        column_key: key.to_string(),
        text: value.to_string(),
    });
}

fn sort_by(grid: &mut TestGrid, key: &str) {
    grid.send(DataMsg::SetSort {
        column_key: key.to_string(),
    });
}

// ========================================================================
// Sorting
// ========================================================================

#[test]
fn test_numeric_sort_puts_unparseable_last() {
    let columns = vec![
        Column::new("id", DataType::Number),
        Column::new("age", DataType::Number),
    ];
    let rows = vec![
        row(&[("id", CellValue::Number(1.0)), ("age", text("30"))]),
        row(&[("id", CellValue::Number(2.0)), ("age", text("5"))]),
        row(&[("id", CellValue::Number(3.0)), ("age", text("abc"))]),
    ];
    let mut grid = TestGrid::with_dataset(Dataset::new(columns, rows));

    sort_by(&mut grid, "age");

    assert_eq!(grid.column_text("id"), vec!["2", "1", "3"]);
}

#[test]
fn test_sort_toggles_direction() {
    let mut grid = TestGrid::with_dataset(people());

    sort_by(&mut grid, "name");
    assert_eq!(
        grid.model.sort().map(|s| s.direction),
        Some(SortDirection::Ascending)
    );
    assert_eq!(grid.column_text("name"), vec!["alice", "Joanna", "John", "Mark"]);

    sort_by(&mut grid, "name");
    assert_eq!(
        grid.model.sort().map(|s| s.direction),
        Some(SortDirection::Descending)
    );
    assert_eq!(grid.column_text("name"), vec!["Mark", "John", "Joanna", "alice"]);

    // Third click goes back to ascending
    sort_by(&mut grid, "name");
    assert_eq!(
        grid.model.sort().map(|s| s.direction),
        Some(SortDirection::Ascending)
    );
}

#[test]
fn test_sort_other_column_starts_ascending() {
    let mut grid = TestGrid::with_dataset(people());
    sort_by(&mut grid, "name");
    sort_by(&mut grid, "name");
    sort_by(&mut grid, "age");

    let sort = grid.model.sort().unwrap();
    assert_eq!(sort.column_key, "age");
    assert_eq!(sort.direction, SortDirection::Ascending);
    // Null age sorts last ascending
    assert_eq!(grid.column_text("name"), vec!["Mark", "John", "alice", "Joanna"]);
}

#[test]
fn test_descending_is_reverse_of_ascending_for_distinct_keys() {
    let mut grid = TestGrid::with_dataset(people());
    sort_by(&mut grid, "joined");
    let mut ascending = grid.column_text("name");
    sort_by(&mut grid, "joined");
    ascending.reverse();
    assert_eq!(grid.column_text("name"), ascending);
}

#[test]
fn test_sort_is_stable() {
    let mut grid = TestGrid::with_dataset(numbered(30));
    sort_by(&mut grid, "score");

    // Rows sharing a score keep their original (id) order
    let ids: Vec<f64> = grid
        .model
        .view_rows()
        .filter(|r| r.get("score") == &CellValue::Number(3.0))
        .filter_map(|r| match r.get("id") {
            CellValue::Number(n) => Some(*n),
            _ => None,
        })
        .collect();
    assert_eq!(ids, vec![3.0, 10.0, 17.0, 24.0]);
}

#[test]
fn test_non_sortable_column_ignores_sort() {
    let columns = vec![
        Column::new("a", DataType::Text),
        Column::new("b", DataType::Text).sortable(false),
    ];
    let mut grid = TestGrid::with_dataset(Dataset::new(columns, vec![]));
    assert!(grid
        .send(DataMsg::SetSort {
            column_key: "b".into()
        })
        .is_none());
    assert!(grid.model.sort().is_none());
}

#[test]
fn test_unknown_column_ignores_sort() {
    let mut grid = TestGrid::with_dataset(people());
    sort_by(&mut grid, "missing");
    assert!(grid.model.sort().is_none());
}

// ========================================================================
// Filtering
// ========================================================================

#[test]
fn test_filter_is_case_insensitive_substring() {
    let mut grid = TestGrid::with_dataset(people());
    set_filter(&mut grid, "name", "jo");
    grid.settle();

    assert_eq!(grid.column_text("name"), vec!["John", "Joanna"]);
}

#[test]
fn test_filter_waits_for_debounce() {
    let mut grid = TestGrid::with_dataset(people());
    let runs = grid.model.pipeline_runs();

    set_filter(&mut grid, "name", "j");
    grid.advance(100);
    set_filter(&mut grid, "name", "jo");
    grid.advance(100);
    set_filter(&mut grid, "name", "joa");

    // Typing is recorded but the view is untouched
    assert_eq!(grid.model.filters().get("name"), Some("joa"));
    assert_eq!(grid.model.view_len(), 4);
    assert_eq!(grid.model.pipeline_runs(), runs);

    grid.advance(299);
    assert_eq!(grid.model.view_len(), 4);

    grid.advance(1);
    assert_eq!(grid.column_text("name"), vec!["Joanna"]);
    assert_eq!(grid.model.pipeline_runs(), runs + 1);
}

#[test]
fn test_filtering_is_idempotent() {
    let rows: Vec<Row> = numbered(50)
        .rows
        .into_iter()
        .enumerate()
        .map(|(i, cells)| Row::new(RowId(i as u64), cells))
        .collect();
    let filters: FilterState = [("label", "row1")].into_iter().collect();

    let once = run_pipeline(&rows, &filters, None);
    assert_eq!(once.len(), 11);

    let kept: Vec<Row> = once.iter().map(|&i| rows[i].clone()).collect();
    let twice = run_pipeline(&kept, &filters, None);
    assert_eq!(twice, (0..kept.len()).collect::<Vec<_>>());
}

#[test]
fn test_reapplying_same_filter_changes_nothing() {
    let mut grid = TestGrid::with_dataset(people());
    set_filter(&mut grid, "name", "jo");
    grid.settle();
    let names = grid.column_text("name");
    let runs = grid.model.pipeline_runs();

    set_filter(&mut grid, "name", "jo");
    grid.settle();
    assert_eq!(grid.column_text("name"), names);
    assert_eq!(grid.model.pipeline_runs(), runs);
}

#[test]
fn test_filters_combine_with_and() {
    let mut grid = TestGrid::with_dataset(people());
    set_filter(&mut grid, "name", "jo");
    set_filter(&mut grid, "age", "3");
    grid.settle();
    assert_eq!(grid.column_text("name"), vec!["John"]);
}

#[test]
fn test_null_cells_never_match() {
    let mut grid = TestGrid::with_dataset(people());
    set_filter(&mut grid, "age", "");
    grid.settle();
    assert_eq!(grid.model.view_len(), 4);

    set_filter(&mut grid, "age", "4");
    grid.settle();
    // Joanna's null age never matches
    assert_eq!(grid.column_text("name"), vec!["alice"]);
}

#[test]
fn test_clearing_filter_restores_original_order() {
    let mut grid = TestGrid::with_dataset(people());
    set_filter(&mut grid, "name", "a");
    grid.settle();
    set_filter(&mut grid, "name", "");
    grid.settle();
    assert_eq!(grid.column_text("name"), vec!["John", "Mark", "Joanna", "alice"]);
    assert!(!grid.model.filters().is_active());
}

#[test]
fn test_sort_applies_to_filtered_rows() {
    let mut grid = TestGrid::with_dataset(people());
    set_filter(&mut grid, "name", "jo");
    sort_by(&mut grid, "name");
    grid.settle();
    assert_eq!(grid.column_text("name"), vec!["Joanna", "John"]);
}

#[test]
fn test_filter_and_sort_reset_scroll_and_focus() {
    let mut grid = TestGrid::with_dataset(numbered(1000));
    grid.send(ViewportMsg::SetScrollOffset(3500.0));
    grid.focus(100, 0);
    assert_eq!(grid.model.viewport().scroll_offset, 3500.0);

    let cmd = grid
        .send(DataMsg::SetSort {
            column_key: "id".into(),
        })
        .unwrap();
    assert_eq!(cmd.scroll_target(), Some(0.0));
    assert_eq!(grid.model.viewport().scroll_offset, 0.0);
    assert!(grid.focused().is_none());

    grid.advance(50);
    grid.send(ViewportMsg::SetScrollOffset(700.0));
    grid.focus(20, 1);
    set_filter(&mut grid, "label", "row1");
    assert_eq!(grid.model.viewport().scroll_offset, 0.0);
    assert!(grid.focused().is_none());
}

#[test]
fn test_scroll_does_not_rerun_pipeline() {
    let mut grid = TestGrid::with_dataset(numbered(500));
    let runs = grid.model.pipeline_runs();
    for i in 1..20 {
        grid.advance(20);
        grid.send(ViewportMsg::SetScrollOffset(i as f32 * 100.0));
    }
    grid.send(ViewportMsg::SetViewportHeight(800.0));
    grid.settle();
    assert_eq!(grid.model.pipeline_runs(), runs);
}
