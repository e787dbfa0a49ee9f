//! No-op stability invariant: an unmoved move is a complete no-op.

use super::{Invariant, MoveTransition};

/// Invariant: when the outcome reports no movement, the gain is zero and
/// the grid and score are bit-for-bit unchanged.
///
/// This is a defensive guarantee, not an optimization: the caller's
/// move-then-spawn cycle keys off `moved`, so a "didn't move" report must
/// imply nothing happened at all.
pub struct NoopStabilityInvariant;

impl Invariant<MoveTransition> for NoopStabilityInvariant {
    fn holds(transition: &MoveTransition) -> bool {
        let outcome = transition.outcome();
        if outcome.moved {
            return true;
        }

        outcome.gain == 0
            && transition.after().grid() == transition.before().grid()
            && transition.after().score() == transition.before().score()
    }

    fn description() -> &'static str {
        "A move that reports no change leaves grid and score untouched"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Game;
    use crate::types::{Direction, Grid};

    #[test]
    fn test_noop_move_holds() {
        let before = Game::from_parts(
            Grid::from_rows([
                [2, 4, 8, 16],
                [0, 0, 0, 0],
                [0, 0, 0, 0],
                [0, 0, 0, 0],
            ]),
            12,
        );
        let mut after = before.clone();
        // Everything is already packed left; no tile can slide or merge.
        let outcome = after.apply_move(Direction::Left);
        assert!(!outcome.moved);

        let transition = MoveTransition::new(before, after, outcome);
        assert!(NoopStabilityInvariant::holds(&transition));
    }

    #[test]
    fn test_moved_outcome_is_vacuously_fine() {
        let before = Game::from_parts(
            Grid::from_rows([
                [0, 2, 0, 0],
                [0, 0, 0, 0],
                [0, 0, 0, 0],
                [0, 0, 0, 0],
            ]),
            0,
        );
        let mut after = before.clone();
        let outcome = after.apply_move(Direction::Left);
        assert!(outcome.moved);

        let transition = MoveTransition::new(before, after, outcome);
        assert!(NoopStabilityInvariant::holds(&transition));
    }

    #[test]
    fn test_silent_mutation_violates() {
        let before = Game::from_parts(
            Grid::from_rows([
                [2, 4, 8, 16],
                [0, 0, 0, 0],
                [0, 0, 0, 0],
                [0, 0, 0, 0],
            ]),
            0,
        );
        let mut after = before.clone();
        let outcome = after.apply_move(Direction::Left);
        assert!(!outcome.moved);

        // Corrupt the after-state behind the outcome's back.
        let mut grid = *after.grid();
        grid.set(3, 3, 2);
        let after = Game::from_parts(grid, after.score());

        let transition = MoveTransition::new(before, after, outcome);
        assert!(!NoopStabilityInvariant::holds(&transition));
    }
}
