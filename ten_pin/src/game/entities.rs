//! Entities for a single ten-pin bowling game.
//!
//! The exchange format matches the historical REST fixtures exactly: a strike
//! serializes as the literal `"X"`, a spare as `"/"`, and an open roll as its
//! numeric pin count. A player record flattens its game state so it reads as
//! `{id, name, score, frames, onFrame, gameOver}` on the wire.

use serde::de::{self, Visitor};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Frames in a regulation game.
pub const FRAMES_PER_GAME: usize = 10;
/// Pins standing on a freshly racked lane.
pub const PINS_PER_RACK: Pins = 10;

/// Pin count of a single roll.
pub type Pins = u8;
/// Cumulative score. A perfect game tops out at 300.
pub type Score = u32;
/// Autoincrement id assigned by the player store.
pub type PlayerId = u64;

/// How a single roll is recorded on the score sheet.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RollMark {
    /// All ten pins on the first ball of a rack.
    Strike,
    /// The remaining pins on the second ball of a rack.
    Spare,
    /// A plain pin count, 0..=10.
    Number(Pins),
}

impl RollMark {
    #[must_use]
    pub const fn is_strike(&self) -> bool {
        matches!(self, Self::Strike)
    }

    #[must_use]
    pub const fn is_spare(&self) -> bool {
        matches!(self, Self::Spare)
    }
}

impl fmt::Display for RollMark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strike => write!(f, "X"),
            Self::Spare => write!(f, "/"),
            Self::Number(pins) => write!(f, "{pins}"),
        }
    }
}

impl Serialize for RollMark {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Strike => serializer.serialize_str("X"),
            Self::Spare => serializer.serialize_str("/"),
            Self::Number(pins) => serializer.serialize_u8(*pins),
        }
    }
}

struct RollMarkVisitor;

impl Visitor<'_> for RollMarkVisitor {
    type Value = RollMark;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(r#""X", "/", or a pin count between 0 and 10"#)
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        match value {
            "X" => Ok(RollMark::Strike),
            "/" => Ok(RollMark::Spare),
            other => Err(E::invalid_value(de::Unexpected::Str(other), &self)),
        }
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        if value <= u64::from(PINS_PER_RACK) {
            Ok(RollMark::Number(value as Pins))
        } else {
            Err(E::invalid_value(de::Unexpected::Unsigned(value), &self))
        }
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        u64::try_from(value)
            .map_err(|_| E::invalid_value(de::Unexpected::Signed(value), &self))
            .and_then(|v| self.visit_u64(v))
    }
}

impl<'de> Deserialize<'de> for RollMark {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(RollMarkVisitor)
    }
}

/// One of the ten scoring units of a game.
///
/// `score` is the running cumulative total as of this frame (the progressive
/// display convention), not the frame's own pinfall.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Frame {
    pub(crate) rolls: Vec<RollMark>,
    pub(crate) score: Score,
}

impl Frame {
    /// Marks recorded so far, in roll order.
    #[must_use]
    pub fn rolls(&self) -> &[RollMark] {
        &self.rolls
    }

    /// Running cumulative total as of this frame.
    #[must_use]
    pub const fn score(&self) -> Score {
        self.score
    }

    /// A frame slot is empty until its first roll lands.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rolls.is_empty()
    }

    /// True when the frame opened with a strike.
    #[must_use]
    pub fn is_strike(&self) -> bool {
        matches!(self.rolls.first(), Some(RollMark::Strike))
    }

    /// True when the frame's last recorded mark is a spare.
    #[must_use]
    pub fn is_spare(&self) -> bool {
        matches!(self.rolls.last(), Some(RollMark::Spare))
    }

    pub(crate) fn push(&mut self, mark: RollMark) {
        self.rolls.push(mark);
    }

    /// The first roll's pin count when the frame is still an open single roll.
    pub(crate) fn open_first_roll(&self) -> Option<Pins> {
        match self.rolls.as_slice() {
            [RollMark::Number(pins)] => Some(*pins),
            _ => None,
        }
    }
}

const FRAME_ROLL_KEYS: [&str; 3] = ["roll1", "roll2", "roll3"];

impl Serialize for Frame {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Frame", self.rolls.len() + 1)?;
        for (key, mark) in FRAME_ROLL_KEYS.into_iter().zip(&self.rolls) {
            state.serialize_field(key, mark)?;
        }
        state.serialize_field("score", &self.score)?;
        state.end()
    }
}

#[derive(Deserialize)]
struct FrameRepr {
    roll1: Option<RollMark>,
    roll2: Option<RollMark>,
    roll3: Option<RollMark>,
    #[serde(default)]
    score: Score,
}

impl<'de> Deserialize<'de> for Frame {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let repr = FrameRepr::deserialize(deserializer)?;
        let rolls = [repr.roll1, repr.roll2, repr.roll3]
            .into_iter()
            .flatten()
            .collect();
        Ok(Self {
            rolls,
            score: repr.score,
        })
    }
}

/// The full scoring state of one player's game.
///
/// Frames live in a fixed array of ten slots addressed by `current_frame`;
/// a slot counts as created once its first roll lands. Only created frames
/// appear in the serialized form, so the wire shape is the familiar growing
/// `frames` list.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct GameState {
    #[serde(rename = "score")]
    pub(crate) total_score: Score,
    #[serde(with = "frame_slots")]
    pub(crate) frames: [Frame; FRAMES_PER_GAME],
    #[serde(rename = "onFrame")]
    pub(crate) current_frame: usize,
    #[serde(rename = "gameOver")]
    pub(crate) game_over: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// A fresh game: no frames, frame one up next, nothing scored.
    #[must_use]
    pub fn new() -> Self {
        Self {
            total_score: 0,
            frames: Default::default(),
            current_frame: 1,
            game_over: false,
        }
    }

    /// Restore the empty starting values. Only the transport layer calls
    /// this; the engine never resets a game on its own.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Cumulative score across all frames.
    #[must_use]
    pub const fn total_score(&self) -> Score {
        self.total_score
    }

    /// The frame currently accepting rolls, 1..=10.
    #[must_use]
    pub const fn current_frame(&self) -> usize {
        self.current_frame
    }

    /// True once no further rolls may be accepted.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.game_over
    }

    /// Frames created so far, in frame order.
    #[must_use]
    pub fn frames(&self) -> &[Frame] {
        let created = self
            .frames
            .iter()
            .take_while(|frame| !frame.is_empty())
            .count();
        &self.frames[..created]
    }
}

/// Serialize the fixed frame array as the created prefix only, and accept
/// the growing-list form back.
mod frame_slots {
    use super::{FRAMES_PER_GAME, Frame};
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(frames: &[Frame; FRAMES_PER_GAME], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(frames.iter().take_while(|frame| !frame.is_empty()))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<[Frame; FRAMES_PER_GAME], D::Error>
    where
        D: Deserializer<'de>,
    {
        let list = Vec::<Frame>::deserialize(deserializer)?;
        if list.len() > FRAMES_PER_GAME {
            return Err(D::Error::invalid_length(
                list.len(),
                &"at most ten frames in a game",
            ));
        }
        let mut frames: [Frame; FRAMES_PER_GAME] = Default::default();
        for (slot, frame) in frames.iter_mut().zip(list) {
            *slot = frame;
        }
        Ok(frames)
    }
}

/// A stored player record: identity plus their current game.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    #[serde(flatten)]
    pub game: GameState,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn roll_marks_serialize_to_sheet_tokens() {
        assert_eq!(serde_json::to_value(RollMark::Strike).unwrap(), json!("X"));
        assert_eq!(serde_json::to_value(RollMark::Spare).unwrap(), json!("/"));
        assert_eq!(serde_json::to_value(RollMark::Number(7)).unwrap(), json!(7));
    }

    #[test]
    fn roll_marks_deserialize_from_sheet_tokens() {
        assert_eq!(
            serde_json::from_value::<RollMark>(json!("X")).unwrap(),
            RollMark::Strike
        );
        assert_eq!(
            serde_json::from_value::<RollMark>(json!("/")).unwrap(),
            RollMark::Spare
        );
        assert_eq!(
            serde_json::from_value::<RollMark>(json!(0)).unwrap(),
            RollMark::Number(0)
        );
        assert!(serde_json::from_value::<RollMark>(json!(11)).is_err());
        assert!(serde_json::from_value::<RollMark>(json!("Y")).is_err());
    }

    #[test]
    fn frame_serializes_only_recorded_rolls() {
        let frame = Frame {
            rolls: vec![RollMark::Number(3), RollMark::Spare],
            score: 18,
        };
        let value = serde_json::to_value(&frame).unwrap();
        assert_eq!(value, json!({"roll1": 3, "roll2": "/", "score": 18}));
    }

    #[test]
    fn frame_round_trips_through_json() {
        let frame = Frame {
            rolls: vec![
                RollMark::Strike,
                RollMark::Number(7),
                RollMark::Spare,
            ],
            score: 267,
        };
        let text = serde_json::to_string(&frame).unwrap();
        let back: Frame = serde_json::from_str(&text).unwrap();
        assert_eq!(back, frame);
    }

    #[test]
    fn fresh_game_has_original_record_shape() {
        let state = GameState::new();
        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(
            value,
            json!({"score": 0, "frames": [], "onFrame": 1, "gameOver": false})
        );
    }

    #[test]
    fn player_record_flattens_game_fields() {
        let player = Player {
            id: 1,
            name: "Jane Doe".to_string(),
            game: GameState::new(),
        };
        let value = serde_json::to_value(&player).unwrap();
        let Value::Object(map) = value else {
            panic!("player must serialize to an object");
        };
        assert_eq!(map["id"], json!(1));
        assert_eq!(map["name"], json!("Jane Doe"));
        assert_eq!(map["score"], json!(0));
        assert_eq!(map["onFrame"], json!(1));
        assert_eq!(map["gameOver"], json!(false));
        assert_eq!(map["frames"], json!([]));
    }

    #[test]
    fn game_state_round_trips_through_json() {
        let mut state = GameState::new();
        state.apply_roll(10).unwrap();
        state.apply_roll(3).unwrap();
        state.apply_roll(7).unwrap();
        let text = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&text).unwrap();
        assert_eq!(back, state);
    }
}
