use crate::{periodic_neighbours, solid_neighbours, Error, Grid};
use std::{fmt, str::FromStr};

/// Describes how neighbours are counted at the edges of the field.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Boundary {
    /// Bounds of the field are stitched together.
    #[default]
    Periodic,
    /// Cells outside the field do not exist.
    Solid,
}

impl Boundary {
    pub fn count(self, grid: &Grid, row: usize, col: usize) -> u8 {
        match self {
            Self::Periodic => periodic_neighbours(grid, row, col),
            Self::Solid => solid_neighbours(grid, row, col),
        }
    }
}

impl FromStr for Boundary {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "periodic" => Ok(Self::Periodic),
            "solid" => Ok(Self::Solid),
            _ => Err(Error::UnknownBoundary(s.to_string())),
        }
    }
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Periodic => "periodic",
            Self::Solid => "solid",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("periodic".parse::<Boundary>().unwrap(), Boundary::Periodic);
        assert_eq!(" Solid ".parse::<Boundary>().unwrap(), Boundary::Solid);
        assert!(matches!(
            "torus".parse::<Boundary>(),
            Err(Error::UnknownBoundary(s)) if s == "torus"
        ));
        assert_eq!(Boundary::Solid.to_string().parse::<Boundary>().unwrap(), Boundary::Solid);
    }

    #[test]
    fn test_count_dispatch() {
        let grid = Grid::from_rows(&[[1u8, 0, 0], [0, 0, 0], [0, 0, 1]]).unwrap();
        assert_eq!(Boundary::Periodic.count(&grid, 0, 0), 1);
        assert_eq!(Boundary::Solid.count(&grid, 0, 0), 0);
        assert_eq!(Boundary::Solid.count(&grid, 1, 1), 2);
    }
}
