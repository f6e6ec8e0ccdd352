//! # Ten Pin
//!
//! A ten-pin bowling scoring library.
//!
//! The core is a per-player scoring state machine: [`GameState`] accepts one
//! roll at a time through an explicit two-step contract —
//! [`GameState::validate_roll`] is pure and total, and
//! [`GameState::apply_roll`] records the roll, cascades pending strike and
//! spare bonuses back across up to two frames, and ends the game after the
//! tenth frame resolves. Invalid rolls never mutate state.
//!
//! [`PlayerStore`] is an in-memory registry of player records for a serving
//! layer to front; the engine itself performs no I/O and never touches the
//! store.
//!
//! ## Example
//!
//! ```
//! use ten_pin::GameState;
//!
//! let mut game = GameState::new();
//! for _ in 0..12 {
//!     game.apply_roll(10).unwrap();
//! }
//! assert_eq!(game.total_score(), 300);
//! assert!(game.is_over());
//! ```

/// Game model and scoring engine.
pub mod game;
pub use game::{
    FRAMES_PER_GAME, Frame, GameState, PINS_PER_RACK, Player, RollError, RollMark,
    entities::{self, Pins, PlayerId, Score},
};

/// In-memory player registry.
pub mod store;
pub use store::{PlayerStore, StoreError};
