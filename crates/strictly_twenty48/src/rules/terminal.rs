//! Terminal-state detection.

use crate::types::{GRID_N, Grid};
use tracing::instrument;

/// Checks whether at least one further move is possible.
///
/// A move is possible if any cell is empty, or any two horizontally or
/// vertically adjacent cells hold equal tiles. Read-only scan; "game
/// over" is this returning false, not a stored flag.
#[instrument]
pub fn can_move(grid: &Grid) -> bool {
    for row in 0..GRID_N {
        for column in 0..GRID_N {
            if grid.is_empty(row, column) {
                return true;
            }
        }
    }

    // Full grid: a move remains only if an adjacent equal pair can merge.
    for row in 0..GRID_N {
        for column in 0..GRID_N - 1 {
            if grid.get(row, column) == grid.get(row, column + 1) {
                return true;
            }
        }
    }

    for column in 0..GRID_N {
        for row in 0..GRID_N - 1 {
            if grid.get(row, column) == grid.get(row + 1, column) {
                return true;
            }
        }
    }

    false
}
