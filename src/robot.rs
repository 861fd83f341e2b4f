//! Robot state and the movement fold.

use crate::direction::Direction;
use crate::input::InputError;
use crate::model::Model;
use crate::random::RandomSource;
use crate::status::RobotStatus;
use glam::I64Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A robot name, guaranteed non-blank.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RobotName(String);

impl RobotName {
    /// Trims surrounding whitespace and rejects an empty result.
    pub fn new(name: &str) -> Result<Self, InputError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(InputError::EmptyName);
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RobotName {
    type Error = InputError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::new(&name)
    }
}

impl From<RobotName> for String {
    fn from(name: RobotName) -> String {
        name.0
    }
}

impl fmt::Display for RobotName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A robot on the integer grid.
///
/// Position and facing change only through [`step`](Self::step) and [`travel`](Self::travel).
#[derive(Clone, Debug)]
pub struct Robot {
    name: RobotName,
    model: Model,
    position: I64Vec2,
    facing: Direction,
}

impl Robot {
    /// Builds a robot, placing it according to `model`.
    pub fn new(name: RobotName, model: Model, rng: &mut impl RandomSource) -> Self {
        let (position, facing) = model.initial_state(rng);
        tracing::info!(
            name = name.as_str(),
            model = model.tag(),
            x = position.x,
            y = position.y,
            %facing,
            "{}",
            model.announcement()
        );
        Self {
            name,
            model,
            position,
            facing,
        }
    }

    pub fn name(&self) -> &RobotName {
        &self.name
    }

    pub fn model(&self) -> Model {
        self.model
    }

    pub fn position(&self) -> I64Vec2 {
        self.position
    }

    pub fn facing(&self) -> Direction {
        self.facing
    }

    /// Advances `movement` units along the current facing, then turns.
    ///
    /// Negative movements go backwards. The position saturates instead of overflowing.
    pub fn step(&mut self, movement: i32, rng: &mut impl RandomSource) {
        let delta = self.facing.unit() * i64::from(movement);
        self.position = self.position.saturating_add(delta);
        self.facing = self.model.turn(self.facing, self.position, rng);
        tracing::trace!(
            name = self.name.as_str(),
            movement,
            x = self.position.x,
            y = self.position.y,
            facing = %self.facing,
            "robot stepped"
        );
    }

    /// Applies every movement in order. An empty slice leaves the robot untouched.
    pub fn travel(&mut self, movements: &[i32], rng: &mut impl RandomSource) {
        for &movement in movements {
            self.step(movement, rng);
        }
    }

    pub fn describe(&self) -> RobotStatus {
        RobotStatus {
            name: self.name.clone(),
            model: self.model,
            position: self.position,
            facing: self.facing,
        }
    }
}

impl fmt::Display for Robot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.describe(), f)
    }
}
