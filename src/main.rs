#![warn(clippy::all)]

use anyhow::anyhow;
use lifelike::{App, DisplaySink, Grid, LiveFrame, RunConfig};
use std::thread;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = RunConfig {
        nsteps: 100,
        print_steps: true,
        live_view: true,
        ..Default::default()
    };
    let cells = Grid::random(100, 100, 0.5, None)?;

    if !config.live_view {
        lifelike::run(cells, &config)?;
        return Ok(());
    }

    let frame = LiveFrame::default();
    let display = DisplaySink::new(frame.clone(), config.frame_delay);
    let evolution = config.evolution(cells, Some(display))?;
    let worker = thread::spawn(move || evolution.run());

    let nsteps = config.nsteps;
    lifelike::launch(move |ctx| App::live(ctx, frame, worker, nsteps))
        .map_err(|e| anyhow!("viewer failed: {e}"))
}
