//! Grid state container.

use crate::schema::{ConfigError, GridConfig};

/// Current-generation state of the automaton.
///
/// Cells are stored as a flat boolean buffer with row-major indexing:
/// `row * width + col`. Both buffers of the simulation (this one and the
/// stepper's scratch) are allocated once at construction and never resized.
///
/// Coordinates on the public API are signed: callers map pointer positions
/// to cells with a floor division, which can produce negative values, and
/// the mutation path is expected to absorb those silently. Queries are
/// strict instead (see [`LifeGrid::is_alive`]).
pub struct LifeGrid {
    /// Live/dead flags, row-major.
    pub(crate) cells: Vec<bool>,
    /// Committed generation count, advanced by the stepper.
    pub(crate) generation: u64,
    width: usize,
    height: usize,
}

/// Cell query errors.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    #[error("cell ({row}, {col}) is outside the grid")]
    OutOfRange { row: i32, col: i32 },
}

impl LifeGrid {
    /// Create a grid with every cell dead.
    ///
    /// Fails with [`ConfigError::InvalidDimensions`] unless both dimensions
    /// are positive.
    pub fn new(width: i32, height: i32) -> Result<Self, ConfigError> {
        Self::from_config(&GridConfig { width, height })
    }

    /// Create a grid with every cell dead from a configuration.
    pub fn from_config(config: &GridConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            cells: vec![false; config.grid_size()],
            generation: 0,
            width: config.width as usize,
            height: config.height as usize,
        })
    }

    /// Grid width in cells (columns).
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells (rows).
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get total grid size (width * height).
    #[inline]
    pub fn grid_size(&self) -> usize {
        self.width * self.height
    }

    /// Number of generations committed so far.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Convert (row, col) coordinates to flat index.
    #[inline]
    pub(crate) fn idx(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    #[inline]
    fn checked_idx(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(self.idx(row, col))
    }

    /// Get the cell state, or `None` outside the grid.
    #[inline]
    pub(crate) fn get(&self, row: i32, col: i32) -> Option<bool> {
        self.checked_idx(row, col).map(|i| self.cells[i])
    }

    /// Flip the state of a cell.
    ///
    /// Out-of-range coordinates are a no-op: clicks near the canvas border
    /// can floor-divide to a cell that does not exist, and those are
    /// harmless rather than an error.
    pub fn toggle(&mut self, row: i32, col: i32) {
        if let Some(i) = self.checked_idx(row, col) {
            self.cells[i] = !self.cells[i];
        }
    }

    /// Set a cell to the given state, ignoring out-of-range coordinates.
    pub fn set_alive(&mut self, row: i32, col: i32, alive: bool) {
        if let Some(i) = self.checked_idx(row, col) {
            self.cells[i] = alive;
        }
    }

    /// Query the state of a cell.
    ///
    /// Unlike the mutation path, queries outside the grid are an error:
    /// a renderer asking for a cell that does not exist is a bug, not
    /// pointer noise.
    pub fn is_alive(&self, row: i32, col: i32) -> Result<bool, GridError> {
        self.get(row, col)
            .ok_or(GridError::OutOfRange { row, col })
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Iterate live cells as (row, col), in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(|(i, _)| ((i / self.width) as i32, (i % self.width) as i32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn fresh_grid_is_all_dead() {
        let grid = LifeGrid::new(5, 4).unwrap();
        assert_eq!(grid.population(), 0);
        for row in 0..4 {
            for col in 0..5 {
                assert!(!grid.is_alive(row, col).unwrap());
            }
        }
    }

    #[test]
    fn non_positive_dimensions_are_rejected() {
        for (w, h) in [(0, 5), (5, 0), (-1, 5), (5, -3), (0, 0)] {
            assert!(matches!(
                LifeGrid::new(w, h),
                Err(ConfigError::InvalidDimensions { .. })
            ));
        }
    }

    #[test]
    fn toggle_twice_restores_the_cell() {
        let mut grid = LifeGrid::new(10, 10).unwrap();
        grid.toggle(3, 7);
        assert!(grid.is_alive(3, 7).unwrap());
        grid.toggle(3, 7);
        assert!(!grid.is_alive(3, 7).unwrap());
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn out_of_range_query_is_an_error() {
        let grid = LifeGrid::new(10, 8).unwrap();
        for (row, col) in [(-1, 0), (0, -1), (8, 0), (0, 10), (100, 100)] {
            assert!(matches!(
                grid.is_alive(row, col),
                Err(GridError::OutOfRange { .. })
            ));
        }
    }

    #[test]
    fn live_cells_iterates_in_row_major_order() {
        let mut grid = LifeGrid::new(4, 4).unwrap();
        grid.toggle(2, 1);
        grid.toggle(0, 3);
        grid.toggle(2, 0);
        assert_eq!(
            grid.live_cells().collect::<Vec<_>>(),
            vec![(0, 3), (2, 0), (2, 1)]
        );
    }

    proptest! {
        #[test]
        fn any_valid_dimensions_start_all_dead(w in 1i32..64, h in 1i32..64) {
            let grid = LifeGrid::new(w, h).unwrap();
            prop_assert_eq!(grid.population(), 0);
            prop_assert_eq!(grid.grid_size(), (w * h) as usize);
        }

        #[test]
        fn toggle_is_an_involution(
            w in 1i32..32,
            h in 1i32..32,
            row in 0i32..32,
            col in 0i32..32,
        ) {
            let mut grid = LifeGrid::new(w, h).unwrap();
            grid.toggle(row % h, col % w);
            grid.toggle(row % h, col % w);
            prop_assert_eq!(grid.population(), 0);
        }

        #[test]
        fn out_of_range_toggle_changes_nothing(row in -100i32..200, col in -100i32..200) {
            prop_assume!(row < 0 || row >= 8 || col < 0 || col >= 10);

            let mut grid = LifeGrid::new(10, 8).unwrap();
            grid.toggle(2, 3);
            grid.toggle(7, 9);
            let before: Vec<_> = grid.live_cells().collect();

            grid.toggle(row, col);
            prop_assert_eq!(grid.live_cells().collect::<Vec<_>>(), before);
        }
    }
}
