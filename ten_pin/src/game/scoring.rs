//! Roll validation and the score-cascade state machine.
//!
//! The two operations form an explicit contract: [`GameState::validate_roll`]
//! is pure and total, and [`GameState::apply_roll`] requires it to hold. An
//! invalid roll never mutates state.
//!
//! Frame scores are running cumulative totals, so a bonus landing in an
//! earlier frame also raises every later frame's running total. That makes
//! the cascade a multiplicity: roll `r` counts `m` times into the current
//! frame, `m - 1` times into the previous frame, and `m - 2` times into the
//! one before that, where `m` is 1, 2, or 3 depending on the pending strike
//! and spare bonuses.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::entities::{FRAMES_PER_GAME, GameState, PINS_PER_RACK, Pins, RollMark, Score};

/// Errors surfaced by the scoring engine.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Error, PartialEq, Serialize)]
pub enum RollError {
    #[error("roll must knock down between 0 and 10 pins, counting pins already down this frame")]
    InvalidRoll,
    #[error("game is already over")]
    GameAlreadyOver,
}

impl GameState {
    /// Whether `roll` could legally be applied to the current frame.
    ///
    /// Pure: never mutates state. Out-of-range pin counts are rejected here
    /// as well, even though callers are expected to range-check first.
    #[must_use]
    pub fn validate_roll(&self, roll: Pins) -> bool {
        if roll > PINS_PER_RACK {
            return false;
        }
        match self.frames[self.current_frame - 1].rolls() {
            // First ball of a fresh rack takes anything.
            [] => true,
            [RollMark::Number(first)] => first + roll <= PINS_PER_RACK,
            // A lone strike only stays open in the tenth; the bonus ball
            // comes off a fresh rack.
            [_] => true,
            // Third ball of the tenth. A plain second ball means the first
            // was a strike, so the second ball's rack is still standing.
            [_, RollMark::Number(second)] => second + roll <= PINS_PER_RACK,
            [_, _] => true,
            _ => false,
        }
    }

    /// Record one roll: append the mark, cascade pending bonuses, advance
    /// the frame, and flip `game_over` when the game ends.
    ///
    /// Fails with [`RollError::GameAlreadyOver`] or [`RollError::InvalidRoll`]
    /// without touching state.
    pub fn apply_roll(&mut self, roll: Pins) -> Result<(), RollError> {
        if self.game_over {
            return Err(RollError::GameAlreadyOver);
        }
        if !self.validate_roll(roll) {
            return Err(RollError::InvalidRoll);
        }

        let idx = self.current_frame - 1;
        if self.frames[idx].is_empty() {
            // Lazy frame creation: the running score starts from the total.
            self.frames[idx].score = self.total_score;
        }

        self.cascade(idx, roll);
        self.total_score = self.frames[idx].score;

        if self.current_frame == FRAMES_PER_GAME {
            self.mark_tenth(roll);
        } else {
            self.mark_open_frame(idx, roll);
        }
        Ok(())
    }

    /// Add this roll's pins to every frame still awaiting it as a bonus.
    fn cascade(&mut self, idx: usize, roll: Pins) {
        let credit: Score = if self.frames[idx].is_empty() {
            if idx >= 1 && self.frames[idx - 1].is_strike() {
                // First roll after two consecutive strikes pays three ways.
                if idx >= 2 && self.frames[idx - 2].is_strike() {
                    3
                } else {
                    2
                }
            } else if idx >= 1 && self.frames[idx - 1].is_spare() {
                2
            } else {
                1
            }
        } else if self.frames[idx].rolls().len() == 1 {
            // A strike's bonus spans two rolls; a spare's only one.
            if idx >= 1 && self.frames[idx - 1].is_strike() {
                2
            } else {
                1
            }
        } else {
            // Third ball of the tenth is terminal and never cascades.
            1
        };

        let pins = Score::from(roll);
        self.frames[idx].score += credit * pins;
        if credit >= 2 {
            self.frames[idx - 1].score += (credit - 1) * pins;
        }
        if credit == 3 {
            self.frames[idx - 2].score += pins;
        }
    }

    /// Record the mark for frames 1-9 and advance when the frame completes.
    fn mark_open_frame(&mut self, idx: usize, roll: Pins) {
        match self.frames[idx].open_first_roll() {
            Some(first) => {
                let mark = if first + roll == PINS_PER_RACK {
                    RollMark::Spare
                } else {
                    RollMark::Number(roll)
                };
                self.frames[idx].push(mark);
                self.current_frame += 1;
            }
            None if roll == PINS_PER_RACK => {
                self.frames[idx].push(RollMark::Strike);
                self.current_frame += 1;
            }
            None => self.frames[idx].push(RollMark::Number(roll)),
        }
    }

    /// Record a tenth-frame mark. The frame never advances; instead the game
    /// ends after two balls with no strike or spare, or after any third ball.
    fn mark_tenth(&mut self, roll: Pins) {
        let tenth = &self.frames[FRAMES_PER_GAME - 1];
        let recorded = (tenth.rolls().first().copied(), tenth.rolls().get(1).copied());
        let tenth = &mut self.frames[FRAMES_PER_GAME - 1];

        match recorded {
            (None, _) => {
                let mark = if roll == PINS_PER_RACK {
                    RollMark::Strike
                } else {
                    RollMark::Number(roll)
                };
                tenth.push(mark);
            }
            (Some(first), None) => {
                let mark = match first {
                    RollMark::Number(pins) if pins + roll == PINS_PER_RACK => RollMark::Spare,
                    // Remaining full racks only follow a strike.
                    _ if roll == PINS_PER_RACK => RollMark::Strike,
                    _ => RollMark::Number(roll),
                };
                // A plain pair under ten earns no bonus ball.
                self.game_over =
                    matches!((first, mark), (RollMark::Number(_), RollMark::Number(_)));
                tenth.push(mark);
            }
            (Some(_), Some(second)) => {
                let mark = match second {
                    RollMark::Number(pins) if pins + roll == PINS_PER_RACK => RollMark::Spare,
                    RollMark::Number(_) => RollMark::Number(roll),
                    _ if roll == PINS_PER_RACK => RollMark::Strike,
                    _ => RollMark::Number(roll),
                };
                tenth.push(mark);
                self.game_over = true;
            }
        }
    }
}
