//! Core domain types for the sliding-tile game.

use serde::{Deserialize, Serialize};

/// Side length of the square grid.
///
/// The rest of the crate is written against this constant; changing it is
/// the only edit required to play on a different board size.
pub const GRID_N: usize = 4;

/// One row or column, normalized so index 0 faces the direction of travel.
///
/// Lines exist only for the duration of a single move; they are extracted
/// from the [`Grid`], transformed, and written back.
pub type Line = [u32; GRID_N];

/// Direction of a move, toward one edge of the grid.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Direction {
    /// Toward the start of each row.
    Left,
    /// Toward the end of each row.
    Right,
    /// Toward the start of each column.
    Up,
    /// Toward the end of each column.
    Down,
}

/// The square grid of tile values.
///
/// Each cell is either 0 (empty) or a positive power of two starting at 2.
/// Cells are mutated only by the move orchestrator and the spawner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    /// Cells in row-major order.
    cells: [[u32; GRID_N]; GRID_N],
}

impl Grid {
    /// Creates a fully empty grid.
    pub fn new() -> Self {
        Self {
            cells: [[0; GRID_N]; GRID_N],
        }
    }

    /// Creates a grid from explicit row contents.
    pub fn from_rows(cells: [[u32; GRID_N]; GRID_N]) -> Self {
        Self { cells }
    }

    /// Gets the value at the given cell.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `column` is outside the grid; an out-of-range
    /// coordinate is a defect in the calling layer.
    pub fn get(&self, row: usize, column: usize) -> u32 {
        self.cells[row][column]
    }

    /// Sets the value at the given cell.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `column` is outside the grid.
    pub fn set(&mut self, row: usize, column: usize, value: u32) {
        self.cells[row][column] = value;
    }

    /// Checks whether a cell is empty.
    pub fn is_empty(&self, row: usize, column: usize) -> bool {
        self.get(row, column) == 0
    }

    /// Returns the coordinates of all empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        let mut empties = Vec::new();
        for row in 0..GRID_N {
            for column in 0..GRID_N {
                if self.is_empty(row, column) {
                    empties.push((row, column));
                }
            }
        }
        empties
    }

    /// Returns all rows as a read-only snapshot.
    pub fn rows(&self) -> &[[u32; GRID_N]; GRID_N] {
        &self.cells
    }

    /// Sum of all tile values on the grid.
    ///
    /// Slides and merges conserve this total; only the spawner raises it.
    pub fn total_value(&self) -> u32 {
        self.cells.iter().flatten().sum()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of applying one move: a first-class domain event.
///
/// Outcomes can be logged, asserted against in tests, and reasoned about
/// by invariants independently of the state they were produced from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// The direction that was applied.
    pub direction: Direction,
    /// Whether any tile slid or merged.
    pub moved: bool,
    /// Score gained from merges during this move.
    pub gain: u32,
}

impl std::fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.moved {
            write!(f, "{} -> moved, +{}", self.direction, self.gain)
        } else {
            write!(f, "{} -> no change", self.direction)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new();
        assert_eq!(grid.empty_cells().len(), GRID_N * GRID_N);
        assert_eq!(grid.total_value(), 0);
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = Grid::new();
        grid.set(1, 2, 8);
        assert_eq!(grid.get(1, 2), 8);
        assert!(!grid.is_empty(1, 2));
        assert!(grid.is_empty(0, 0));
    }

    #[test]
    fn test_empty_cells_row_major() {
        let mut grid = Grid::from_rows([[2; GRID_N]; GRID_N]);
        grid.set(3, 1, 0);
        grid.set(0, 2, 0);
        assert_eq!(grid.empty_cells(), vec![(0, 2), (3, 1)]);
    }

    #[test]
    fn test_total_value() {
        let grid = Grid::from_rows([
            [2, 0, 0, 4],
            [0, 8, 0, 0],
            [0, 0, 0, 0],
            [16, 0, 0, 2],
        ]);
        assert_eq!(grid.total_value(), 32);
    }
}
