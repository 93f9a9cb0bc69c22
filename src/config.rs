use crate::{
    BoxedSink, Boundary, DisplaySink, Evolution, GifSink, Grid, PersistSink, PrintSink, Result,
    Rule,
};
use std::{io::stdout, path::PathBuf, time::Duration};

/// Parameters of a single automaton run.
#[derive(Clone, Debug)]
pub struct RunConfig {
    pub rule: Rule,
    pub boundary: Boundary,
    pub nsteps: usize,
    /// Print every generation to stdout.
    pub print_steps: bool,
    /// Show the generations in a window while the automaton runs.
    pub live_view: bool,
    /// File the generations are written to.
    pub data_output: Option<PathBuf>,
    /// Pause after every generation shown in the live view.
    pub frame_delay: Duration,
    /// GIF file the generations are rendered to.
    pub anim_output: Option<PathBuf>,
    /// Side of a cell in the animation, in pixels.
    pub anim_scale: u16,
    pub anim_fps: u16,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            rule: Rule::CONWAY,
            boundary: Boundary::Periodic,
            nsteps: 100,
            print_steps: true,
            live_view: false,
            data_output: None,
            frame_delay: Duration::from_millis(100),
            anim_output: None,
            anim_scale: 8,
            anim_fps: 10,
        }
    }
}

impl RunConfig {
    /// Enabled sinks in calling order: print, display, persist, animate.
    ///
    /// Output files are created here, before any step runs.
    pub fn sinks<'a>(
        &self,
        rows: usize,
        cols: usize,
        display: Option<DisplaySink>,
    ) -> Result<Vec<BoxedSink<'a>>> {
        let mut sinks: Vec<BoxedSink<'a>> = vec![];
        if self.print_steps {
            sinks.push(Box::new(PrintSink::new(stdout())));
        }
        if let Some(display) = display {
            sinks.push(Box::new(display));
        }
        if let Some(path) = &self.data_output {
            sinks.push(Box::new(PersistSink::create(path)?));
        }
        if let Some(path) = &self.anim_output {
            let gif = GifSink::create(path, rows, cols, self.anim_scale, self.anim_fps)?;
            sinks.push(Box::new(gif));
        }
        Ok(sinks)
    }

    pub fn evolution<'a>(
        &self,
        initial: Grid,
        display: Option<DisplaySink>,
    ) -> Result<Evolution<'a>> {
        let (rows, cols) = (initial.rows(), initial.cols());
        let evolution = Evolution::new(initial, self.rule, self.boundary, self.nsteps)?;
        Ok(evolution.with_sinks(self.sinks(rows, cols, display)?))
    }
}
