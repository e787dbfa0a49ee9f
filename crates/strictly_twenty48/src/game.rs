//! Game state and the move orchestrator.
//!
//! One direction-agnostic line transform serves all four directions: each
//! move extracts N lines from the grid in a direction-normalized
//! orientation, transforms them, and writes them back undoing exactly the
//! same orientation.

use crate::rules;
use crate::spawn;
use crate::types::{Direction, GRID_N, Grid, Line, MoveOutcome};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Complete persistent game state: the grid plus the accumulated score.
///
/// The score is monotonically non-decreasing within a game; it increases
/// only by the merge gains of moves that changed the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    grid: Grid,
    score: u32,
}

impl Game {
    /// Starts a new game: empty grid, two spawned tiles, score zero.
    #[instrument(skip(rng))]
    pub fn new(rng: &mut impl Rng) -> Self {
        let mut grid = Grid::new();
        spawn::spawn_tile(&mut grid, rng);
        spawn::spawn_tile(&mut grid, rng);
        Self { grid, score: 0 }
    }

    /// Reconstructs a game from previously captured state.
    pub fn from_parts(grid: Grid, score: u32) -> Self {
        Self { grid, score }
    }

    /// Returns the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the accumulated score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Applies a move in the given direction, mutating the grid in place.
    ///
    /// Each of the N lines is transformed independently; the outcome
    /// aggregates whether any line changed and the total merge gain. The
    /// score is credited only when at least one line moved: a move that
    /// changes nothing never touches score.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        #[cfg(debug_assertions)]
        let before = self.clone();

        let mut moved = false;
        let mut gain = 0;

        for lane in 0..GRID_N {
            let line = read_line(&self.grid, direction, lane);
            let (line, line_moved, line_gain) = rules::line::transform(line);
            write_line(&mut self.grid, direction, lane, line);
            moved |= line_moved;
            gain += line_gain;
        }

        if moved {
            self.score += gain;
        }

        let outcome = MoveOutcome {
            direction,
            moved,
            gain,
        };
        debug!(%outcome, score = self.score, "applied move");

        #[cfg(debug_assertions)]
        {
            use crate::invariants::{InvariantSet, MoveTransition, Twenty48Invariants};
            let transition = MoveTransition::new(before, self.clone(), outcome);
            if let Err(violations) = Twenty48Invariants::check_all(&transition) {
                panic!("move violated engine invariants: {violations:?}");
            }
        }

        outcome
    }

    /// Spawns a new tile; see [`crate::spawn_tile`].
    pub fn spawn_tile(&mut self, rng: &mut impl Rng) -> bool {
        spawn::spawn_tile(&mut self.grid, rng)
    }

    /// Checks whether any legal move remains; see [`rules::terminal::can_move`].
    pub fn can_move(&self) -> bool {
        rules::terminal::can_move(&self.grid)
    }
}

/// Extracts one line in the direction-normalized orientation, so that
/// index 0 always faces the direction of travel.
///
/// Left reads rows as-is, Right reads rows reversed, Up reads columns top
/// to bottom, Down reads columns bottom to top.
fn read_line(grid: &Grid, direction: Direction, lane: usize) -> Line {
    let mut line = [0; GRID_N];
    for (i, cell) in line.iter_mut().enumerate() {
        *cell = match direction {
            Direction::Left => grid.get(lane, i),
            Direction::Right => grid.get(lane, GRID_N - 1 - i),
            Direction::Up => grid.get(i, lane),
            Direction::Down => grid.get(GRID_N - 1 - i, lane),
        };
    }
    line
}

/// Writes a transformed line back, undoing exactly the orientation used
/// by [`read_line`].
fn write_line(grid: &mut Grid, direction: Direction, lane: usize, line: Line) {
    for (i, &value) in line.iter().enumerate() {
        match direction {
            Direction::Left => grid.set(lane, i, value),
            Direction::Right => grid.set(lane, GRID_N - 1 - i, value),
            Direction::Up => grid.set(i, lane, value),
            Direction::Down => grid.set(GRID_N - 1 - i, lane, value),
        }
    }
}
