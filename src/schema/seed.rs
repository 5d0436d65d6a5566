//! Seed types for initializing the grid state.
//!
//! The original application seeded the board with mouse clicks; a seed file
//! is the headless equivalent. All patterns are deterministic.

use serde::{Deserialize, Serialize};

use crate::engine::LifeGrid;

/// Complete seed specification for grid initialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Seed {
    /// Pattern to use for seeding.
    pub pattern: Pattern,
}

/// Predefined patterns for initialization.
///
/// Placement coordinates are the top-left corner of the pattern's bounding
/// box. Cells falling outside the grid are silently dropped, matching the
/// lenient mutation path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Pattern {
    /// All cells dead.
    #[default]
    Empty,
    /// Explicit live cells as (row, col) pairs.
    Cells { cells: Vec<(i32, i32)> },
    /// 5-cell glider, translates diagonally by one cell every 4 generations.
    Glider { row: i32, col: i32 },
    /// Period-2 blinker: a horizontal row of 3 live cells.
    Blinker { row: i32, col: i32 },
    /// 2x2 still-life block.
    Block { row: i32, col: i32 },
}

const GLIDER: &[(i32, i32)] = &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];
const BLINKER: &[(i32, i32)] = &[(0, 0), (0, 1), (0, 2)];
const BLOCK: &[(i32, i32)] = &[(0, 0), (0, 1), (1, 0), (1, 1)];

impl Seed {
    /// Apply the seed to a freshly constructed grid.
    pub fn apply(&self, grid: &mut LifeGrid) {
        match &self.pattern {
            Pattern::Empty => {}
            Pattern::Cells { cells } => {
                for &(row, col) in cells {
                    grid.set_alive(row, col, true);
                }
            }
            Pattern::Glider { row, col } => place(grid, *row, *col, GLIDER),
            Pattern::Blinker { row, col } => place(grid, *row, *col, BLINKER),
            Pattern::Block { row, col } => place(grid, *row, *col, BLOCK),
        }
    }
}

fn place(grid: &mut LifeGrid, row: i32, col: i32, offsets: &[(i32, i32)]) {
    for &(dr, dc) in offsets {
        grid.set_alive(row + dr, col + dc, true);
    }
}
