//! Robot models: starting placement and turning rules.

use crate::direction::Direction;
use crate::input::InputError;
use crate::random::RandomSource;
use glam::I64Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four robot models. The discriminant is the model's integer tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Model {
    /// Starts at the origin facing `+Y`; turns along the fixed cycle.
    Cyclic = 0,
    /// Starts at a random `x` in `[-5, 5)`; turns depending on the sign of `x`.
    SignSteered = 1,
    /// Starts at a random `y` in `[-10, 10)` with a random facing; turns along the fixed cycle.
    RandomStart = 2,
    /// Starts anywhere in `[-5, 5)²` with a random facing; turns to a random different facing.
    RandomTurn = 3,
}

impl Model {
    pub const ALL: [Model; 4] = [
        Model::Cyclic,
        Model::SignSteered,
        Model::RandomStart,
        Model::RandomTurn,
    ];

    pub fn tag(self) -> u8 {
        self as u8
    }

    /// Initial position and facing for a freshly built robot.
    ///
    /// Random draws happen in the order `x`, `y`, facing, skipping whatever the model fixes.
    pub fn initial_state(self, rng: &mut impl RandomSource) -> (I64Vec2, Direction) {
        match self {
            Model::Cyclic => (I64Vec2::ZERO, Direction::PositiveY),
            Model::SignSteered => {
                let x = rng.draw_range(-5, 5);
                (I64Vec2::new(x, 0), Direction::PositiveY)
            }
            Model::RandomStart => {
                let y = rng.draw_range(-10, 10);
                (I64Vec2::new(0, y), Direction::random(rng))
            }
            Model::RandomTurn => {
                let x = rng.draw_range(-5, 5);
                let y = rng.draw_range(-5, 5);
                (I64Vec2::new(x, y), Direction::random(rng))
            }
        }
    }

    /// Facing after a step taken while facing `facing`, which ended at `position`.
    pub fn turn(
        self,
        facing: Direction,
        position: I64Vec2,
        rng: &mut impl RandomSource,
    ) -> Direction {
        match self {
            Model::Cyclic | Model::RandomStart => facing.next_clockwise(),
            Model::SignSteered => sign_steered_turn(facing, position.x > 0),
            Model::RandomTurn => Direction::random_excluding(facing, rng),
        }
    }

    /// One-line greeting logged when a robot of this model is built.
    pub fn announcement(self) -> &'static str {
        match self {
            Model::Cyclic => "standard unit online, walking the fixed turning cycle",
            Model::SignSteered => "sign-sensing unit online, steering by which side of the Y axis it stands on",
            Model::RandomStart => "scrambled unit online, woke up facing who knows where",
            Model::RandomTurn => "erratic unit online, every turn is a surprise",
        }
    }
}

// Non-positive x after a -X/+X step turns to +Y.
fn sign_steered_turn(facing: Direction, x_positive: bool) -> Direction {
    use Direction::*;
    match (facing, x_positive) {
        (PositiveY, true) => NegativeY,
        (PositiveY, false) => NegativeX,
        (NegativeX, true) => PositiveX,
        (NegativeX, false) => PositiveY,
        (NegativeY, true) => NegativeX,
        (NegativeY, false) => PositiveX,
        (PositiveX, true) => NegativeX,
        (PositiveX, false) => PositiveY,
    }
}

impl TryFrom<u8> for Model {
    type Error = InputError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(tag as usize)
            .copied()
            .ok_or(InputError::ModelOutOfRange(tag.into()))
    }
}

impl TryFrom<i64> for Model {
    type Error = InputError;

    fn try_from(tag: i64) -> Result<Self, Self::Error> {
        u8::try_from(tag)
            .map_err(|_| InputError::ModelOutOfRange(tag))
            .and_then(Model::try_from)
    }
}

impl From<Model> for u8 {
    fn from(model: Model) -> u8 {
        model.tag()
    }
}

impl FromStr for Model {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let tag: i64 = s
            .parse()
            .map_err(|_| InputError::NotANumber(s.to_string()))?;
        Model::try_from(tag)
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}
