//! Tile spawning.
//!
//! The spawner is the single source of non-determinism in the engine, so
//! the random source is injected by the caller rather than pulled from a
//! hidden global generator. Tests drive it with a seeded [`rand::rngs::StdRng`].

use crate::types::Grid;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Probability that a spawned tile is a 4 rather than a 2.
pub const FOUR_TILE_CHANCE: f64 = 0.1;

/// Places a new tile on a uniformly chosen empty cell.
///
/// The tile is a 4 with probability [`FOUR_TILE_CHANCE`], otherwise a 2.
/// Returns false without mutating the grid when no cell is empty; a full
/// grid is an expected outcome, not an error.
#[instrument(skip(grid, rng))]
pub fn spawn_tile(grid: &mut Grid, rng: &mut impl Rng) -> bool {
    let empties = grid.empty_cells();
    let Some(&(row, column)) = empties.choose(rng) else {
        return false;
    };

    let value = if rng.gen_bool(FOUR_TILE_CHANCE) { 4 } else { 2 };
    grid.set(row, column, value);
    debug!(row, column, value, "spawned tile");

    true
}
