//! Tile conservation invariant: moves never create or destroy value.

use super::{Invariant, MoveTransition};

/// Invariant: the total tile value is conserved by a move.
///
/// A slide relocates tiles and a merge replaces two equal tiles with one
/// doubled tile plus an empty cell, so the multiset sum is unchanged.
/// Only the spawner, which runs outside the move, adds value.
pub struct TileConservationInvariant;

impl Invariant<MoveTransition> for TileConservationInvariant {
    fn holds(transition: &MoveTransition) -> bool {
        transition.after().grid().total_value() == transition.before().grid().total_value()
    }

    fn description() -> &'static str {
        "Total tile value is conserved by a move"
    }
}
