use anyhow::anyhow;
use lifelike::{read_log_file, App, Boundary, Pattern, Rule, RunConfig};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let data_output = PathBuf::from("conway_pulsar.out");
    let anim_output = PathBuf::from("conway_pulsar.gif");
    let config = RunConfig {
        rule: Rule::named("Conway's Life")?,
        boundary: Boundary::Periodic,
        nsteps: 16,
        print_steps: true,
        data_output: Some(data_output.clone()),
        anim_output: Some(anim_output.clone()),
        anim_fps: 4,
        ..Default::default()
    };
    lifelike::run(Pattern::Pulsar.grid(), &config)?;
    log::info!("Data saved to {}", data_output.display());
    log::info!("Animation saved to {}", anim_output.display());

    let frames = read_log_file(&data_output)?;
    lifelike::launch(move |ctx| App::replay(ctx, frames)).map_err(|e| anyhow!("viewer failed: {e}"))
}
