mod config;
mod engine;
mod error;
mod grid;
mod gui;
mod patterns;
mod rule;
mod sinks;
mod utils;

pub use config::RunConfig;
pub use engine::{run, step, BoxedSink, Evolution, State, StepSink};
pub use error::{Error, Result};
pub use grid::{periodic_neighbours, solid_neighbours, Grid};
pub use gui::{launch, App, Config};
pub use patterns::Pattern;
pub use rule::{Rule, MAX_NEIGHBOURS, RULES};
pub use sinks::{
    read_log, read_log_file, DisplaySink, GifSink, LiveFrame, PersistSink, PrintSink, SEPARATOR,
};
pub use utils::{format_duration, parse_rle, Boundary, FpsLimiter};
