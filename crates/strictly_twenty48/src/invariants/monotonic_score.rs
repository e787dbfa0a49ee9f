//! Monotonic score invariant: score only grows, and only by merge gains.

use super::{Invariant, MoveTransition};

/// Invariant: the score after a move is the score before plus the
/// reported gain when the move changed the grid, and unchanged otherwise.
///
/// Monotonicity follows because gains are non-negative.
pub struct MonotonicScoreInvariant;

impl Invariant<MoveTransition> for MonotonicScoreInvariant {
    fn holds(transition: &MoveTransition) -> bool {
        let before = transition.before().score();
        let after = transition.after().score();
        let outcome = transition.outcome();

        let credited = if outcome.moved { outcome.gain } else { 0 };
        after == before + credited
    }

    fn description() -> &'static str {
        "Score increases exactly by the gain of a move that changed the grid"
    }
}
