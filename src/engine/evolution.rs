use super::step;
use crate::{utils::format_duration, Boundary, Error, Grid, Result, Rule, RunConfig};
use std::time::Instant;

/// Collaborator receiving every generation the evolution produces.
pub trait StepSink {
    /// `step` counts from 1; the initial grid is step 1.
    fn accept(&mut self, step: usize, grid: &Grid) -> Result<()>;
}

impl<F> StepSink for F
where
    F: FnMut(usize, &Grid) -> Result<()>,
{
    fn accept(&mut self, step: usize, grid: &Grid) -> Result<()> {
        self(step, grid)
    }
}

pub type BoxedSink<'a> = Box<dyn StepSink + Send + 'a>;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum State {
    /// Nothing produced yet.
    Idle,
    /// The given step has been produced and handed to the sinks.
    Running(usize),
    /// All steps have been produced.
    Done,
}

/// Drives a grid through `nsteps` generations, one at a time.
pub struct Evolution<'a> {
    grid: Grid,
    rule: Rule,
    boundary: Boundary,
    nsteps: usize,
    state: State,
    sinks: Vec<BoxedSink<'a>>,
}

impl<'a> Evolution<'a> {
    pub fn new(initial: Grid, rule: Rule, boundary: Boundary, nsteps: usize) -> Result<Self> {
        if nsteps == 0 {
            return Err(Error::NoSteps);
        }
        if boundary == Boundary::Periodic && (initial.rows() == 1 || initial.cols() == 1) {
            log::warn!(
                "periodic boundary on a {}x{} grid: wrapped neighbours include the cells themselves",
                initial.rows(),
                initial.cols()
            );
        }
        Ok(Self {
            grid: initial,
            rule,
            boundary,
            nsteps,
            state: State::Idle,
            sinks: vec![],
        })
    }

    /// Appends a sink; sinks are called in the order they were added.
    pub fn with_sink(mut self, sink: impl StepSink + Send + 'a) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    pub fn with_sinks(mut self, sinks: impl IntoIterator<Item = BoxedSink<'a>>) -> Self {
        self.sinks.extend(sinks);
        self
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// The most recently produced generation (the initial grid while idle).
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    pub fn nsteps(&self) -> usize {
        self.nsteps
    }

    /// Produces the next generation and offers it to every sink.
    ///
    /// Returns `None` once all generations have been produced. The first sink
    /// error is returned as is and ends the evolution; whatever the sinks
    /// already wrote stays written.
    pub fn advance(&mut self) -> Result<Option<&Grid>> {
        let index = match self.state {
            State::Idle => 1,
            State::Running(i) => {
                self.grid = step(&self.grid, &self.rule, self.boundary);
                i + 1
            }
            State::Done => return Ok(None),
        };
        self.state = State::Running(index);
        log::debug!(
            "step {}/{}: population {}",
            index,
            self.nsteps,
            self.grid.population()
        );

        for sink in self.sinks.iter_mut() {
            if let Err(e) = sink.accept(index, &self.grid) {
                self.state = State::Done;
                return Err(e);
            }
        }

        if index == self.nsteps {
            self.state = State::Done;
        }
        Ok(Some(&self.grid))
    }

    /// Runs the remaining steps and returns the last generation.
    pub fn run(mut self) -> Result<Grid> {
        log::info!(
            "Running automaton: {}x{} grid, rule {}, {} boundary, {} steps",
            self.grid.rows(),
            self.grid.cols(),
            self.rule,
            self.boundary,
            self.nsteps
        );
        let timer = Instant::now();
        while self.advance()?.is_some() {}
        log::info!("Automaton run in {}", format_duration(timer.elapsed()));
        Ok(self.grid)
    }
}

/// Evolves `initial` with the sinks enabled in `config`.
///
/// Live view needs a window, see [`crate::App`]; here it is skipped.
pub fn run(initial: Grid, config: &RunConfig) -> Result<Grid> {
    if config.live_view {
        log::warn!("live view is not available without a window, skipping it");
    }
    config.evolution(initial, None)?.run()
}
