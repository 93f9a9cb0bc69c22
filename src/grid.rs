use crate::{Error, Result};
use std::fmt;

/// Fixed-size two-state field stored in row-major order.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    cells: Vec<bool>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Creates a grid of dead cells.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let len = match rows.checked_mul(cols) {
            Some(len) if len > 0 => len,
            _ => return Err(Error::InvalidDimensions { rows, cols }),
        };
        Ok(Self {
            cells: vec![false; len],
            rows,
            cols,
        })
    }

    /// Builds a grid from rows of `0`/`1` values.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut grid = Self::new(height, width)?;
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(Error::RaggedRows {
                    row: r,
                    expected: width,
                    found: row.len(),
                });
            }
            for (c, &value) in row.iter().enumerate() {
                match value {
                    0 => {}
                    1 => grid.set(r, c, true),
                    _ => return Err(Error::InvalidCell { row: r, col: c, value }),
                }
            }
        }
        Ok(grid)
    }

    /// Creates a grid with random cells
    ///
    /// `fill_rate` - probability of cell being alive
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn random(rows: usize, cols: usize, fill_rate: f64, seed: Option<u64>) -> Result<Self> {
        use rand::{Rng, SeedableRng};
        use rand_chacha::ChaCha8Rng;

        if fill_rate.is_nan() {
            return Err(Error::InvalidFillRate(fill_rate));
        }
        let mut rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        let fill_rate = fill_rate.clamp(0., 1.);
        let mut result = Self::new(rows, cols)?;
        for cell in result.cells.iter_mut() {
            *cell = rng.gen_bool(fill_rate);
        }
        Ok(result)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[col + row * self.cols]
    }

    /// Cell state as `0` or `1`.
    pub fn value(&self, row: usize, col: usize) -> u8 {
        self.get(row, col) as u8
    }

    pub fn set(&mut self, row: usize, col: usize, state: bool) {
        self.cells[col + row * self.cols] = state;
    }

    /// Number of alive cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.cells.iter().any(|&c| c)
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks_exact(self.cols)
    }

    /// Same-shaped grid of dead cells.
    pub(crate) fn blank_like(&self) -> Self {
        Self {
            cells: vec![false; self.cells.len()],
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Fills an RGBA buffer, one pixel per cell.
    pub fn draw(&self, screen: &mut [u8]) {
        const BYTES_IN_PIXEL: usize = 4;

        assert_eq!(screen.len(), BYTES_IN_PIXEL * self.cells.len());
        for (pixel, &alive) in screen.chunks_exact_mut(BYTES_IN_PIXEL).zip(&self.cells) {
            let color = if alive {
                [0, 0xff, 0xff, 0xff]
            } else {
                [0, 0, 0, 0xff]
            };
            pixel.copy_from_slice(&color);
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            for (c, &alive) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", alive as u8)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Alive cells among the 8 neighbours, with the edges stitched together.
///
/// On a grid with a single row (or column) the wrapped neighbours land back on
/// the cell's own row (or column), so those cells are counted more than once.
pub fn periodic_neighbours(grid: &Grid, row: usize, col: usize) -> u8 {
    let (rows, cols) = (grid.rows, grid.cols);
    let n = (row + 1) % rows;
    let s = if row == 0 { rows - 1 } else { row - 1 };
    let e = (col + 1) % cols;
    let w = if col == 0 { cols - 1 } else { col - 1 };
    grid.value(s, col)
        + grid.value(n, col)
        + grid.value(row, w)
        + grid.value(row, e)
        + grid.value(s, w)
        + grid.value(s, e)
        + grid.value(n, w)
        + grid.value(n, e)
}

/// Alive cells among the neighbours that lie inside the grid.
pub fn solid_neighbours(grid: &Grid, row: usize, col: usize) -> u8 {
    let (r1, r2) = (row.saturating_sub(1), (row + 2).min(grid.rows));
    let (c1, c2) = (col.saturating_sub(1), (col + 2).min(grid.cols));
    let mut n = 0;
    for r in r1..r2 {
        n += grid.cells[c1 + r * grid.cols..c2 + r * grid.cols]
            .iter()
            .filter(|&&c| c)
            .count() as u8;
    }
    n - grid.value(row, col)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};

    const SEED: u64 = 42;

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            Grid::new(0, 5),
            Err(Error::InvalidDimensions { rows: 0, cols: 5 })
        ));
        assert!(matches!(
            Grid::new(3, 0),
            Err(Error::InvalidDimensions { .. })
        ));
        assert!(Grid::from_rows::<Vec<u8>>(&[]).is_err());
    }

    #[test]
    fn test_oversized_dimensions_rejected() {
        assert!(matches!(
            Grid::new(usize::MAX, 2),
            Err(Error::InvalidDimensions { rows: usize::MAX, cols: 2 })
        ));
        assert!(Grid::random(2, usize::MAX, 0.5, Some(SEED)).is_err());
    }

    #[test]
    fn test_nan_fill_rate_rejected() {
        assert!(matches!(
            Grid::random(4, 4, f64::NAN, Some(SEED)),
            Err(Error::InvalidFillRate(_))
        ));
        // out-of-range rates are clamped
        assert_eq!(Grid::random(4, 4, 7., Some(SEED)).unwrap().population(), 16);
        assert!(Grid::random(4, 4, -1., Some(SEED)).unwrap().is_empty());
    }

    #[test]
    fn test_from_rows_validation() {
        assert!(matches!(
            Grid::from_rows(&[vec![0u8, 1], vec![0]]),
            Err(Error::RaggedRows { row: 1, expected: 2, found: 1 })
        ));
        assert!(matches!(
            Grid::from_rows(&[vec![0u8, 2]]),
            Err(Error::InvalidCell { row: 0, col: 1, value: 2 })
        ));
        let grid = Grid::from_rows(&[[0u8, 1, 0], [1, 1, 0]]).unwrap();
        assert_eq!((grid.rows(), grid.cols()), (2, 3));
        assert_eq!(grid.population(), 3);
        assert!(grid.get(1, 0));
        assert!(!grid.get(1, 2));
    }

    #[test]
    fn test_random_is_reproducible() {
        let a = Grid::random(20, 30, 0.5, Some(SEED)).unwrap();
        let b = Grid::random(20, 30, 0.5, Some(SEED)).unwrap();
        assert_eq!(a, b);
        assert!(Grid::random(20, 30, 0., Some(SEED)).unwrap().is_empty());
        assert_eq!(
            Grid::random(20, 30, 1., Some(SEED)).unwrap().population(),
            600
        );
    }

    #[test]
    fn test_display() {
        let grid = Grid::from_rows(&[[0u8, 1], [1, 0]]).unwrap();
        assert_eq!(grid.to_string(), "0 1\n1 0\n");
    }

    #[test]
    fn test_counts_in_range() {
        for (rows, cols) in [(1, 1), (1, 7), (6, 1), (2, 2), (9, 13)] {
            let grid = Grid::random(rows, cols, 0.7, Some(SEED)).unwrap();
            for r in 0..rows {
                for c in 0..cols {
                    assert!(periodic_neighbours(&grid, r, c) <= 8);
                    assert!(solid_neighbours(&grid, r, c) <= 8);
                }
            }
        }
    }

    #[test]
    fn test_full_grid_counts() {
        let grid = Grid::random(5, 6, 1., None).unwrap();
        assert_eq!(periodic_neighbours(&grid, 0, 0), 8);
        assert_eq!(periodic_neighbours(&grid, 4, 5), 8);
        assert_eq!(solid_neighbours(&grid, 0, 0), 3);
        assert_eq!(solid_neighbours(&grid, 4, 5), 3);
        assert_eq!(solid_neighbours(&grid, 0, 3), 5);
        assert_eq!(solid_neighbours(&grid, 2, 3), 8);
    }

    #[test]
    fn test_solid_corner_at_most_three() {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(SEED);
        for _ in 0..50 {
            let (rows, cols) = (rng.gen_range(2..10), rng.gen_range(2..10));
            let grid = Grid::random(rows, cols, rng.gen(), Some(rng.gen())).unwrap();
            for (r, c) in [(0, 0), (0, cols - 1), (rows - 1, 0), (rows - 1, cols - 1)] {
                assert!(solid_neighbours(&grid, r, c) <= 3);
            }
        }
    }

    #[test]
    fn test_periodic_wraps_corners() {
        // only the opposite corner is alive
        let mut grid = Grid::new(4, 5).unwrap();
        grid.set(3, 4, true);
        assert_eq!(periodic_neighbours(&grid, 0, 0), 1);
        assert_eq!(solid_neighbours(&grid, 0, 0), 0);
        assert_eq!(periodic_neighbours(&grid, 3, 0), 1);
        assert_eq!(periodic_neighbours(&grid, 0, 4), 1);
        assert_eq!(periodic_neighbours(&grid, 1, 1), 0);
    }

    #[test]
    fn test_periodic_invariant_under_rotation() {
        let (rows, cols) = (7, 9);
        let grid = Grid::random(rows, cols, 0.4, Some(SEED)).unwrap();
        for (dr, dc) in [(1, 0), (0, 1), (3, 5), (6, 8)] {
            let mut rotated = Grid::new(rows, cols).unwrap();
            for r in 0..rows {
                for c in 0..cols {
                    rotated.set((r + dr) % rows, (c + dc) % cols, grid.get(r, c));
                }
            }
            for r in 0..rows {
                for c in 0..cols {
                    assert_eq!(
                        periodic_neighbours(&grid, r, c),
                        periodic_neighbours(&rotated, (r + dr) % rows, (c + dc) % cols)
                    );
                }
            }
        }
    }

    #[test]
    fn test_single_row_wraps_onto_itself() {
        let grid = Grid::from_rows(&[[1u8, 0, 1]]).unwrap();
        // north and south both wrap onto row 0
        assert_eq!(periodic_neighbours(&grid, 0, 1), 6);
        assert_eq!(periodic_neighbours(&grid, 0, 0), 5);
        assert_eq!(solid_neighbours(&grid, 0, 1), 2);

        let single = Grid::from_rows(&[[1u8]]).unwrap();
        assert_eq!(periodic_neighbours(&single, 0, 0), 8);
        assert_eq!(solid_neighbours(&single, 0, 0), 0);
    }
}
