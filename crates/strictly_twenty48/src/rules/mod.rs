//! Game rules for the sliding-tile puzzle.
//!
//! This module contains pure functions for transforming and evaluating
//! game state. Rules are separated from board storage so that the line
//! engine stays direction-agnostic and trivially testable.

pub mod line;
pub mod terminal;

pub use line::{merge, slide, transform};
pub use terminal::can_move;
