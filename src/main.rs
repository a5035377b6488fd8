//! Headless data grid driver
//!
//! Loads a CSV file, replays sort/filter/key interactions through the grid's
//! message loop on a manual clock, and prints the rendered window.

use anyhow::{Context, Result};
use clap::Parser;

use datagrid::clock::ManualClock;
use datagrid::config::GridConfig;
use datagrid::input::{drain, ScriptedInput};
use datagrid::messages::{DataMsg, FocusMsg, Msg, ViewportMsg};
use datagrid::model::GridModel;
use datagrid::update::update;
use datagrid::view::TextRenderer;

mod cli;

/// Upper bound on ticks when settling timers
const MAX_SETTLE_TICKS: usize = 1_000;

/// Advance the clock through every pending debounce/throttle deadline
fn settle(model: &mut GridModel, clock: &ManualClock) {
    for _ in 0..MAX_SETTLE_TICKS {
        let Some(deadline) = model.next_deadline() else {
            return;
        };
        clock.set(deadline);
        update(model, Msg::Tick);
    }
    tracing::warn!("timers did not settle");
}

fn main() -> Result<()> {
    datagrid::tracing::init();

    let run = cli::CliArgs::parse()
        .into_config()
        .map_err(anyhow::Error::msg)?;

    let config = match &run.config {
        Some(path) => GridConfig::load_from(path),
        None => GridConfig::load(),
    };

    let dataset = datagrid::source::load_csv(&run.file)
        .with_context(|| format!("Failed to load {}", run.file.display()))?;

    let clock = ManualClock::new();
    let mut model = GridModel::with_clock(config, Box::new(clock.clone()));

    update(&mut model, DataMsg::Load(dataset).into());
    if let Some(height) = run.height {
        update(&mut model, ViewportMsg::SetViewportHeight(height).into());
    }
    for column_key in run.sort {
        update(&mut model, DataMsg::SetSort { column_key }.into());
    }
    for (column_key, text) in run.filters {
        update(&mut model, DataMsg::SetFilter { column_key, text }.into());
    }
    settle(&mut model, &clock);

    if let Some(keys) = &run.keys {
        let mut input = ScriptedInput::from_keys(keys).context("Invalid --keys script")?;
        update(&mut model, FocusMsg::SetFocus { row: 0, col: 0 }.into());
        drain(&mut model, &mut input);
        settle(&mut model, &clock);
    }

    let frame = model.frame();
    if run.json {
        let json = serde_json::to_string_pretty(&frame.snapshot())
            .context("Failed to serialize frame")?;
        println!("{}", json);
    } else {
        print!("{}", TextRenderer::default().render(&frame));
    }

    Ok(())
}
