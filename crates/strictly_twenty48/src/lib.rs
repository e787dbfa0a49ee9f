//! Strictly Twenty48 - the deterministic rule engine of a sliding-tile puzzle.
//!
//! This crate owns the complete game rules and nothing else: rendering,
//! input handling, and scene switching live in a separate presentation
//! layer that drives the engine through five operations.
//!
//! # Architecture
//!
//! - **Line engine** ([`rules::line`]): pure slide/merge/slide transform
//!   over a single direction-normalized line
//! - **Move orchestrator** ([`Game::apply_move`]): maps a direction onto N
//!   oriented lines and aggregates the result
//! - **Spawner** ([`spawn_tile`]): places a 2 or 4 on a random empty cell,
//!   driven by a caller-injected random source
//! - **Terminal detector** ([`rules::can_move`]): reports whether any
//!   legal move remains
//! - **Invariants** ([`invariants`]): first-class transition properties,
//!   checked after every move in debug builds
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use strictly_twenty48::{Direction, Game};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut game = Game::new(&mut rng);
//!
//! let outcome = game.apply_move(Direction::Left);
//! if outcome.moved {
//!     game.spawn_tile(&mut rng);
//! }
//! if !game.can_move() {
//!     println!("game over at {}", game.score());
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod game;
mod spawn;
mod types;

// Public rule and invariant surfaces
pub mod invariants;
pub mod rules;

// Crate-level exports - game state and orchestrator
pub use game::Game;

// Crate-level exports - spawner
pub use spawn::{FOUR_TILE_CHANCE, spawn_tile};

// Crate-level exports - domain types
pub use types::{Direction, GRID_N, Grid, Line, MoveOutcome};

// Crate-level exports - invariants
pub use invariants::{
    Invariant, InvariantSet, InvariantViolation, MonotonicScoreInvariant, MoveTransition,
    NoopStabilityInvariant, TileConservationInvariant, Twenty48Invariants,
};
