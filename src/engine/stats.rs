//! Grid statistics for monitoring.

use super::grid::LifeGrid;

/// Snapshot of the grid for progress output and tests.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct GridStats {
    pub generation: u64,
    pub population: usize,
    /// Fraction of the grid that is alive.
    pub density: f32,
}

impl GridStats {
    /// Compute statistics from the current generation.
    pub fn from_grid(grid: &LifeGrid) -> Self {
        let population = grid.population();
        Self {
            generation: grid.generation(),
            population,
            density: population as f32 / grid.grid_size() as f32,
        }
    }
}
