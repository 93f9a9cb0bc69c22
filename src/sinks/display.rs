use crate::{Grid, Result, StepSink};
use std::{
    sync::{Arc, Mutex, PoisonError},
    thread::sleep,
    time::Duration,
};

/// Latest generation handed over to the viewer, with its step number.
#[derive(Clone, Default)]
pub struct LiveFrame(Arc<Mutex<Option<(usize, Grid)>>>);

impl LiveFrame {
    pub fn publish(&self, step: usize, grid: &Grid) {
        let mut frame = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        *frame = Some((step, grid.clone()));
    }

    /// Takes the frame published since the last call, if any.
    pub fn take(&self) -> Option<(usize, Grid)> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).take()
    }
}

/// Publishes every generation to a [`LiveFrame`], then waits `delay`.
pub struct DisplaySink {
    frame: LiveFrame,
    delay: Duration,
}

impl DisplaySink {
    pub fn new(frame: LiveFrame, delay: Duration) -> Self {
        Self { frame, delay }
    }
}

impl StepSink for DisplaySink {
    fn accept(&mut self, step: usize, grid: &Grid) -> Result<()> {
        self.frame.publish(step, grid);
        if !self.delay.is_zero() {
            sleep(self.delay);
        }
        Ok(())
    }
}
