//! Bowling game model and scoring engine.
//!
//! - [`entities`]: frames, roll marks, game state, and player records,
//!   including the exact wire tokens of the exchange format.
//! - [`scoring`]: roll validation and the score-cascade state machine.

pub mod entities;
pub mod scoring;

pub use entities::{FRAMES_PER_GAME, Frame, GameState, PINS_PER_RACK, Player, RollMark};
pub use scoring::RollError;
