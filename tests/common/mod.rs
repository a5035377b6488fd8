//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use datagrid::clock::ManualClock;
use datagrid::commands::Cmd;
use datagrid::config::GridConfig;
use datagrid::data::{CellValue, Column, DataType, Dataset, RawRow};
use datagrid::keymap::{KeyCode, Keystroke, Modifiers};
use datagrid::messages::{DataMsg, FocusMsg, Msg};
use datagrid::model::GridModel;
use datagrid::update::update;

/// A model driven by a manual clock the test controls
pub struct TestGrid {
    pub model: GridModel,
    pub clock: ManualClock,
}

impl TestGrid {
    pub fn new(config: GridConfig) -> Self {
        let clock = ManualClock::new();
        let model = GridModel::with_clock(config, Box::new(clock.clone()));
        Self { model, clock }
    }

    pub fn with_dataset(dataset: Dataset) -> Self {
        let mut grid = Self::new(GridConfig::default());
        grid.send(DataMsg::Load(dataset));
        grid
    }

    pub fn send(&mut self, msg: impl Into<Msg>) -> Option<Cmd> {
        update(&mut self.model, msg.into())
    }

    /// Advance the clock and deliver a tick
    pub fn advance(&mut self, ms: u64) -> Option<Cmd> {
        self.clock.advance(ms);
        self.send(Msg::Tick)
    }

    /// Run the clock until no debounce or throttle is pending
    pub fn settle(&mut self) {
        while let Some(deadline) = self.model.next_deadline() {
            self.clock.set(deadline);
            self.send(Msg::Tick);
        }
    }

    pub fn key(&mut self, key: KeyCode) -> Option<Cmd> {
        self.send(FocusMsg::Key(Keystroke::key(key)))
    }

    pub fn key_with(&mut self, key: KeyCode, mods: Modifiers) -> Option<Cmd> {
        self.send(FocusMsg::Key(Keystroke::new(key, mods)))
    }

    pub fn focus(&mut self, row: usize, col: usize) -> Option<Cmd> {
        self.send(FocusMsg::SetFocus { row, col })
    }

    pub fn focused(&self) -> Option<(usize, usize)> {
        self.model.focus().position().map(|p| (p.row, p.col))
    }

    /// Values of one column in view order, as display text
    pub fn column_text(&self, key: &str) -> Vec<String> {
        self.model
            .view_rows()
            .map(|row| row.get(key).to_text())
            .collect()
    }
}

pub fn text(s: &str) -> CellValue {
    CellValue::text(s)
}

pub fn row(cells: &[(&str, CellValue)]) -> RawRow {
    cells
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

/// name (text), age (number), joined (date), with one null age
pub fn people() -> Dataset {
    Dataset::from_records(
        vec!["name".into(), "age".into(), "joined".into()],
        vec![
            vec!["John".into(), "30".into(), "2021-03-04".into()],
            vec!["Mark".into(), "5".into(), "2019-11-20".into()],
            vec!["Joanna".into(), "".into(), "2020-01-15".into()],
            vec!["alice".into(), "41".into(), "2018-06-30".into()],
        ],
    )
}

/// `n` rows with a numeric `id` and text `label` column
pub fn numbered(n: usize) -> Dataset {
    let columns = vec![
        Column::new("id", DataType::Number),
        Column::new("label", DataType::Text),
        Column::new("score", DataType::Number),
    ];
    let rows = (0..n)
        .map(|i| {
            row(&[
                ("id", CellValue::Number(i as f64)),
                ("label", text(&format!("row{}", i))),
                ("score", CellValue::Number((i % 7) as f64)),
            ])
        })
        .collect();
    Dataset::new(columns, rows)
}

/// Three sortable text columns A, B, C
pub fn abc() -> Dataset {
    let columns = vec![
        Column::new("A", DataType::Text),
        Column::new("B", DataType::Text),
        Column::new("C", DataType::Text),
    ];
    let rows = vec![row(&[("A", text("a")), ("B", text("b")), ("C", text("c"))])];
    Dataset::new(columns, rows)
}
