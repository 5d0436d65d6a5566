//! Generation stepper - advances the automaton one step at a time.

use log::debug;

use crate::schema::{ConfigError, GridConfig};

use super::grid::LifeGrid;
use super::rule::{neighbor_count, transition};

/// Advances a [`LifeGrid`] by whole generations.
///
/// The stepper owns the scratch buffer for the next generation, allocated
/// once up front and reused on every step. Each step writes every scratch
/// cell from current-generation values only, then commits by swapping the
/// buffers, so the caller observes the generation change as a single
/// atomic replacement and no stale cell can leak across generations.
///
/// The stepper never schedules itself; the caller decides the cadence
/// (a UI timer in the original application, a plain loop in the CLI).
pub struct Stepper {
    /// Pre-allocated buffer for the next generation (reused each step).
    next: Vec<bool>,
}

impl Stepper {
    /// Create a stepper sized for grids of the given configuration.
    pub fn new(config: &GridConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            next: vec![false; config.grid_size()],
        })
    }

    /// Create a stepper sized for an existing grid.
    pub fn for_grid(grid: &LifeGrid) -> Self {
        Self {
            next: vec![false; grid.grid_size()],
        }
    }

    /// Advance the grid by one generation.
    pub fn step(&mut self, grid: &mut LifeGrid) {
        debug_assert_eq!(self.next.len(), grid.grid_size());

        for row in 0..grid.height() {
            for col in 0..grid.width() {
                let i = grid.idx(row, col);
                let alive = grid.cells[i];
                let neighbors = neighbor_count(grid, row as i32, col as i32);
                self.next[i] = transition(alive, neighbors);
            }
        }

        // Commit: swap buffers instead of copying rows back and forth.
        std::mem::swap(&mut grid.cells, &mut self.next);
        grid.generation += 1;

        debug!(
            "generation {} committed, population {}",
            grid.generation,
            grid.population()
        );
    }

    /// Advance the grid by the specified number of generations.
    pub fn run(&mut self, grid: &mut LifeGrid, steps: u64) {
        for _ in 0..steps {
            self.step(grid);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(width: i32, height: i32, cells: &[(i32, i32)]) -> LifeGrid {
        let mut grid = LifeGrid::new(width, height).unwrap();
        for &(row, col) in cells {
            grid.set_alive(row, col, true);
        }
        grid
    }

    fn live(grid: &LifeGrid) -> Vec<(i32, i32)> {
        grid.live_cells().collect()
    }

    #[test]
    fn glider_advances_one_step() {
        let mut grid = grid_with(6, 6, &[(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)]);
        let mut stepper = Stepper::for_grid(&grid);

        stepper.step(&mut grid);

        assert_eq!(live(&grid), vec![(2, 1), (2, 3), (3, 2), (3, 3), (4, 2)]);
        assert_eq!(grid.generation(), 1);
    }

    #[test]
    fn block_is_a_still_life() {
        let block = [(1, 1), (1, 2), (2, 1), (2, 2)];
        let mut grid = grid_with(6, 6, &block);
        let mut stepper = Stepper::for_grid(&grid);

        stepper.run(&mut grid, 5);

        assert_eq!(live(&grid), block.to_vec());
        assert_eq!(grid.generation(), 5);
    }

    #[test]
    fn blinker_oscillates_with_period_two() {
        let horizontal = [(2, 1), (2, 2), (2, 3)];
        let mut grid = grid_with(5, 5, &horizontal);
        let mut stepper = Stepper::for_grid(&grid);

        stepper.step(&mut grid);
        assert_eq!(live(&grid), vec![(1, 2), (2, 2), (3, 2)]);

        stepper.step(&mut grid);
        assert_eq!(live(&grid), horizontal.to_vec());
    }

    #[test]
    fn lone_corner_cell_dies() {
        for (width, height) in [(3, 3), (6, 6), (50, 30)] {
            let mut grid = grid_with(width, height, &[(0, 0)]);
            let mut stepper = Stepper::for_grid(&grid);
            stepper.step(&mut grid);
            assert_eq!(grid.population(), 0, "{width}x{height}");
        }
    }

    #[test]
    fn empty_grid_stays_empty() {
        let mut grid = LifeGrid::new(50, 30).unwrap();
        let mut stepper = Stepper::new(&GridConfig::default()).unwrap();
        stepper.run(&mut grid, 10);
        assert_eq!(grid.population(), 0);
        assert_eq!(grid.generation(), 10);
    }

    #[test]
    fn scratch_is_fully_overwritten_each_step() {
        // After one step the scratch buffer holds the previous generation.
        // Kill everything and step again: stale scratch cells must not
        // resurface in the committed state.
        let block = [(1, 1), (1, 2), (2, 1), (2, 2)];
        let mut grid = grid_with(8, 8, &block);
        let mut stepper = Stepper::for_grid(&grid);

        stepper.step(&mut grid);
        for &(row, col) in &block {
            grid.set_alive(row, col, false);
        }
        stepper.step(&mut grid);

        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn overcrowded_cell_dies() {
        // Center of a full 3x3 square has 8 neighbors.
        let mut grid = grid_with(5, 5, &[
            (1, 1), (1, 2), (1, 3),
            (2, 1), (2, 2), (2, 3),
            (3, 1), (3, 2), (3, 3),
        ]);
        let mut stepper = Stepper::for_grid(&grid);

        stepper.step(&mut grid);

        assert!(!grid.is_alive(2, 2).unwrap());
        // The square's corners survive with 3 neighbors each.
        assert!(grid.is_alive(1, 1).unwrap());
    }
}
