mod evolution;

pub use evolution::{run, BoxedSink, Evolution, State, StepSink};

use crate::{periodic_neighbours, solid_neighbours, Boundary, Grid, Rule};

/// Computes the next generation of `grid`.
///
/// Every neighbour count is taken from `grid` itself and the result goes to a
/// fresh grid, so cells updated earlier in the pass never affect later ones.
pub fn step(grid: &Grid, rule: &Rule, boundary: Boundary) -> Grid {
    match boundary {
        Boundary::Periodic => apply(grid, rule, periodic_neighbours),
        Boundary::Solid => apply(grid, rule, solid_neighbours),
    }
}

#[inline(always)]
fn apply<F>(grid: &Grid, rule: &Rule, count_neighbours: F) -> Grid
where
    F: Fn(&Grid, usize, usize) -> u8,
{
    let mut next = grid.blank_like();
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let neighbours = count_neighbours(grid, row, col);
            if rule.next_state(grid.get(row, col), neighbours) {
                next.set(row, col, true);
            }
        }
    }
    next
}
