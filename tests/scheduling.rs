//! Timer scheduling tests - ScheduleTick commands and tick delivery

mod common;

use common::{numbered, people, TestGrid};
use datagrid::commands::Cmd;
use datagrid::messages::{DataMsg, Msg, ViewportMsg};
use datagrid::schedule::{Debounce, Throttle};

#[test]
fn test_filter_input_schedules_tick() {
    let mut grid = TestGrid::with_dataset(people());
    let cmd = grid
        .send(DataMsg::SetFilter {
            column_key: "name".into(),
            text: "jo".into(),
        })
        .unwrap();

    assert!(cmd.needs_redraw());
    assert_eq!(cmd.tick_delay(), Some(300));
    assert_eq!(grid.model.next_deadline(), Some(300));
}

#[test]
fn test_early_tick_reschedules_remaining_delay() {
    let mut grid = TestGrid::with_dataset(people());
    grid.send(DataMsg::SetFilter {
        column_key: "name".into(),
        text: "jo".into(),
    });

    let cmd = grid.advance(120).unwrap();
    assert_eq!(cmd, Cmd::ScheduleTick { delay_ms: 180 });
}

#[test]
fn test_idle_tick_is_noop() {
    let mut grid = TestGrid::with_dataset(people());
    assert!(grid.send(Msg::Tick).is_none());
}

#[test]
fn test_earliest_deadline_wins() {
    let mut grid = TestGrid::with_dataset(numbered(1000));
    grid.send(DataMsg::SetFilter {
        column_key: "label".into(),
        text: "1".into(),
    });
    grid.send(ViewportMsg::SetScrollOffset(100.0));
    grid.clock.advance(2);
    let cmd = grid.send(ViewportMsg::SetScrollOffset(200.0)).unwrap();

    // Scroll trailing edge at 16ms beats the filter debounce at 300ms
    assert_eq!(cmd.tick_delay(), Some(14));
}

#[test]
fn test_filter_applied_tick_redraws() {
    let mut grid = TestGrid::with_dataset(people());
    grid.send(DataMsg::SetFilter {
        column_key: "name".into(),
        text: "jo".into(),
    });
    let cmd = grid.advance(300).unwrap();
    assert_eq!(cmd, Cmd::Redraw);
    assert_eq!(grid.model.applied_filters().get("name"), Some("jo"));
}

#[test]
fn test_reload_cancels_pending_filter() {
    let mut grid = TestGrid::with_dataset(people());
    grid.send(DataMsg::SetFilter {
        column_key: "name".into(),
        text: "jo".into(),
    });
    grid.send(DataMsg::Load(people()));
    assert_eq!(grid.model.next_deadline(), None);
    grid.advance(1000);
    assert_eq!(grid.model.view_len(), 4);
    assert!(!grid.model.filters().is_active());
}

// ========================================================================
// Primitives
// ========================================================================

#[test]
fn test_debounce_fires_once_after_quiet_period() {
    let mut d = Debounce::new(300);
    for t in [0, 50, 100, 250] {
        d.push(t, t);
    }
    assert_eq!(d.poll(549), None);
    assert_eq!(d.poll(550), Some(250));
    assert_eq!(d.poll(10_000), None);
}

#[test]
fn test_throttle_trailing_fires_exactly_once() {
    let mut t = Throttle::new(16);
    assert_eq!(t.call("a", 0), Some("a"));
    assert_eq!(t.call("b", 1), None);
    assert_eq!(t.call("c", 2), None);
    assert_eq!(t.poll(15), None);
    assert_eq!(t.poll(16), Some("c"));
    assert_eq!(t.poll(100), None);
    assert!(!t.is_pending());
}
