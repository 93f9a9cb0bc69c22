use crate::{Grid, Result, StepSink};
use std::io::Write;

/// Writes every generation as text, headed by its step number.
pub struct PrintSink<W: Write> {
    out: W,
}

impl<W: Write> PrintSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> StepSink for PrintSink<W> {
    fn accept(&mut self, step: usize, grid: &Grid) -> Result<()> {
        writeln!(self.out, "Step {step}")?;
        writeln!(self.out, "{grid}")?;
        self.out.flush()?;
        Ok(())
    }
}
