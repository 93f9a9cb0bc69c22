use lifelike::{Boundary, Evolution, Grid, Rule};
use std::time::Instant;

const SIDE: usize = 512;
const STEPS: usize = 100;
const SEED: u64 = 42;

fn main() -> anyhow::Result<()> {
    for boundary in [Boundary::Periodic, Boundary::Solid] {
        let timer = Instant::now();
        let grid = Grid::random(SIDE, SIDE, 0.5, Some(SEED))?;
        println!("Time on building field: {:?}", timer.elapsed());

        let timer = Instant::now();
        let last = Evolution::new(grid, Rule::CONWAY, boundary, STEPS)?.run()?;
        println!(
            "{} boundary, {} steps: {:?}, population {}",
            boundary,
            STEPS,
            timer.elapsed(),
            last.population()
        );
    }
    Ok(())
}
