//! Neighbor counting and the Game of Life transition rule.
//!
//! The rule is fixed B3/S23; there are no configurable rule sets.

use super::grid::LifeGrid;

/// Count live cells among the up to 8 neighbors of (row, col).
///
/// Neighbors falling outside the grid are omitted; the topology is a plain
/// bounded rectangle, not a torus.
pub fn neighbor_count(grid: &LifeGrid, row: i32, col: i32) -> u8 {
    let mut count = 0;
    for dr in -1..=1 {
        for dc in -1..=1 {
            if dr == 0 && dc == 0 {
                continue;
            }
            if grid.get(row + dr, col + dc) == Some(true) {
                count += 1;
            }
        }
    }
    count
}

/// Next state of a single cell given its current state and live-neighbor
/// count. Live cells survive on 2 or 3 neighbors; dead cells become alive
/// on exactly 3.
#[inline]
pub fn transition(alive: bool, neighbors: u8) -> bool {
    if alive {
        neighbors == 2 || neighbors == 3
    } else {
        neighbors == 3
    }
}
