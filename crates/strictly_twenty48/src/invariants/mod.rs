//! First-class invariants for the sliding-tile engine.
//!
//! Invariants are logical properties that must hold across every applied
//! move. They are testable independently and serve as documentation of
//! system guarantees; the orchestrator checks the full set in debug
//! builds and panics on violation.

use crate::types::MoveOutcome;
use crate::Game;

/// One applied move: the state before, the state after, and the outcome
/// the orchestrator reported for it.
///
/// Invariants are stated over transitions rather than single states
/// because the engine's guarantees (conservation, score monotonicity)
/// relate consecutive states.
#[derive(Debug, Clone)]
pub struct MoveTransition {
    before: Game,
    after: Game,
    outcome: MoveOutcome,
}

impl MoveTransition {
    /// Creates a transition record.
    pub fn new(before: Game, after: Game, outcome: MoveOutcome) -> Self {
        Self {
            before,
            after,
            outcome,
        }
    }

    /// The state before the move.
    pub fn before(&self) -> &Game {
        &self.before
    }

    /// The state after the move.
    pub fn after(&self) -> &Game {
        &self.after
    }

    /// The outcome the orchestrator reported.
    pub fn outcome(&self) -> MoveOutcome {
        self.outcome
    }
}

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples, so related invariants compose
/// into a single verification step.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod monotonic_score;
pub mod noop_stability;
pub mod tile_conservation;

pub use monotonic_score::MonotonicScoreInvariant;
pub use noop_stability::NoopStabilityInvariant;
pub use tile_conservation::TileConservationInvariant;

/// All engine invariants as a composable set.
pub type Twenty48Invariants = (
    TileConservationInvariant,
    MonotonicScoreInvariant,
    NoopStabilityInvariant,
);
