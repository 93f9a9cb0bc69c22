use crate::{Error, Grid, Result, StepSink};
use gif::{Encoder, Frame, Repeat};
use std::{
    borrow::Cow,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// Global palette: dead cells, then alive cells.
const PALETTE: [u8; 6] = [0x00, 0x00, 0x04, 0xfc, 0xff, 0xa4];

/// Renders every generation as one frame of a looping GIF.
pub struct GifSink<W: Write> {
    encoder: Encoder<W>,
    rows: usize,
    cols: usize,
    scale: usize,
    width: u16,
    height: u16,
    delay: u16,
    pixels: Vec<u8>,
}

impl GifSink<BufWriter<File>> {
    /// Creates (or truncates) the animation file.
    pub fn create(
        path: impl AsRef<Path>,
        rows: usize,
        cols: usize,
        scale: u16,
        fps: u16,
    ) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path)?;
        log::info!("Rendering animation to {}", path.display());
        Self::new(BufWriter::new(file), rows, cols, scale, fps)
    }
}

impl<W: Write> GifSink<W> {
    /// `scale` is the side of a cell in pixels.
    pub fn new(out: W, rows: usize, cols: usize, scale: u16, fps: u16) -> Result<Self> {
        if scale == 0 || fps == 0 {
            return Err(Error::InvalidAnimation(
                "scale and fps must be positive".to_string(),
            ));
        }
        let pixels = |cells: usize| {
            cells
                .checked_mul(scale as usize)
                .and_then(|px| u16::try_from(px).ok())
                .ok_or_else(|| {
                    Error::InvalidAnimation(format!(
                        "{rows}x{cols} grid at {scale} px per cell exceeds the GIF size limit"
                    ))
                })
        };
        let (width, height) = (pixels(cols)?, pixels(rows)?);

        let mut encoder = Encoder::new(out, width, height, &PALETTE)?;
        encoder.set_repeat(Repeat::Infinite)?;
        Ok(Self {
            encoder,
            rows,
            cols,
            scale: scale as usize,
            width,
            height,
            // frame delay is counted in hundredths of a second
            delay: (100 / fps).max(1),
            pixels: vec![],
        })
    }

    /// Finishes the animation and returns the writer.
    pub fn into_inner(self) -> Result<W> {
        Ok(self.encoder.into_inner()?)
    }
}

impl<W: Write> StepSink for GifSink<W> {
    fn accept(&mut self, _step: usize, grid: &Grid) -> Result<()> {
        if (grid.rows(), grid.cols()) != (self.rows, self.cols) {
            return Err(Error::InvalidAnimation(format!(
                "got a {}x{} grid, the animation is {}x{}",
                grid.rows(),
                grid.cols(),
                self.rows,
                self.cols
            )));
        }

        self.pixels.clear();
        for py in 0..self.height as usize {
            let row = py / self.scale;
            self.pixels
                .extend((0..self.width as usize).map(|px| grid.value(row, px / self.scale)));
        }
        let frame = Frame {
            width: self.width,
            height: self.height,
            delay: self.delay,
            buffer: Cow::Borrowed(&self.pixels),
            ..Frame::default()
        };
        self.encoder.write_frame(&frame)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(data: &[u8]) -> (u16, u16, Vec<(u16, Vec<u8>)>) {
        let mut decoder = gif::DecodeOptions::new().read_info(data).unwrap();
        let (width, height) = (decoder.width(), decoder.height());
        let mut frames = vec![];
        while let Some(frame) = decoder.read_next_frame().unwrap() {
            frames.push((frame.delay, frame.buffer.to_vec()));
        }
        (width, height, frames)
    }

    #[test]
    fn test_frames() {
        let a = Grid::from_rows(&[[1u8, 0, 0], [0, 0, 1]]).unwrap();
        let b = Grid::from_rows(&[[0u8, 1, 0], [0, 1, 0]]).unwrap();
        let mut sink = GifSink::new(Vec::<u8>::new(), 2, 3, 2, 4).unwrap();
        sink.accept(1, &a).unwrap();
        sink.accept(2, &b).unwrap();
        let data = sink.into_inner().unwrap();

        let (width, height, frames) = decode(&data);
        assert_eq!((width, height), (6, 4));
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].0, 25);
        #[rustfmt::skip]
        assert_eq!(
            frames[1].1,
            [
                0, 0, 1, 1, 0, 0,
                0, 0, 1, 1, 0, 0,
                0, 0, 1, 1, 0, 0,
                0, 0, 1, 1, 0, 0,
            ]
        );
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(matches!(
            GifSink::new(Vec::<u8>::new(), 4, 4, 0, 10),
            Err(Error::InvalidAnimation(_))
        ));
        assert!(matches!(
            GifSink::new(Vec::<u8>::new(), 4, 4, 1, 0),
            Err(Error::InvalidAnimation(_))
        ));
        assert!(matches!(
            GifSink::new(Vec::<u8>::new(), 10_000, 10, 8, 10),
            Err(Error::InvalidAnimation(_))
        ));

        let mut sink = GifSink::new(Vec::<u8>::new(), 2, 2, 1, 10).unwrap();
        let grid = Grid::new(3, 2).unwrap();
        assert!(matches!(sink.accept(1, &grid), Err(Error::InvalidAnimation(_))));
    }
}
