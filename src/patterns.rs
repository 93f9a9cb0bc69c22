use crate::{parse_rle, Error, Grid, Result};

/// Fixed starting patterns.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Pattern {
    Blinker,
    Glider,
    Pulsar,
}

impl Pattern {
    pub const MARGIN: usize = 2;

    fn rle(self) -> &'static [u8] {
        match self {
            Self::Blinker => b"x = 3, y = 1, rule = B3/S23\n3o!",
            Self::Glider => b"x = 3, y = 3, rule = B3/S23\nbo$2bo$3o!",
            Self::Pulsar => b"#N Pulsar\nx = 13, y = 13, rule = B3/S23\n\
                2b3o3b3o2b2$o4bobo4bo$o4bobo4bo$o4bobo4bo$2b3o3b3o2b2$2b3o3b3o2b$\n\
                o4bobo4bo$o4bobo4bo$o4bobo4bo2$2b3o3b3o!",
        }
    }

    /// The pattern without any surrounding dead cells.
    pub fn cells(self) -> Grid {
        match parse_rle(self.rle()) {
            Ok((grid, _)) => grid,
            Err(e) => unreachable!("built-in pattern {:?} is malformed: {}", self, e),
        }
    }

    /// The pattern surrounded by [`Self::MARGIN`] dead cells on each side.
    pub fn grid(self) -> Grid {
        let cells = self.cells();
        let (rows, cols) = (
            cells.rows() + 2 * Self::MARGIN,
            cells.cols() + 2 * Self::MARGIN,
        );
        let mut grid = match Grid::new(rows, cols) {
            Ok(grid) => grid,
            Err(e) => unreachable!("{}", e),
        };
        stamp(&mut grid, &cells, Self::MARGIN, Self::MARGIN);
        grid
    }

    /// Places the pattern at the centre of a blank `rows x cols` grid.
    pub fn place(self, rows: usize, cols: usize) -> Result<Grid> {
        let cells = self.cells();
        if rows < cells.rows() || cols < cells.cols() {
            return Err(Error::PatternTooLarge {
                pattern_rows: cells.rows(),
                pattern_cols: cells.cols(),
                rows,
                cols,
            });
        }
        let mut grid = Grid::new(rows, cols)?;
        stamp(
            &mut grid,
            &cells,
            (rows - cells.rows()) / 2,
            (cols - cells.cols()) / 2,
        );
        Ok(grid)
    }
}

fn stamp(dst: &mut Grid, src: &Grid, row: usize, col: usize) {
    for r in 0..src.rows() {
        for c in 0..src.cols() {
            dst.set(row + r, col + c, src.get(r, c));
        }
    }
}
