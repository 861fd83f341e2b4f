//! Cardinal facings and their turning relations.

use crate::random::RandomSource;
use glam::I64Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four facings a robot can move along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// `+Y` (north).
    PositiveY,
    /// `-X` (west).
    NegativeX,
    /// `-Y` (south).
    NegativeY,
    /// `+X` (east).
    PositiveX,
}

impl Direction {
    /// All facings, in the order of the fixed turning cycle.
    pub const ALL: [Direction; 4] = [
        Direction::PositiveY,
        Direction::NegativeX,
        Direction::NegativeY,
        Direction::PositiveX,
    ];

    /// The next facing in the cycle `+Y -> -X -> -Y -> +X -> +Y`.
    pub fn next_clockwise(self) -> Direction {
        match self {
            Direction::PositiveY => Direction::NegativeX,
            Direction::NegativeX => Direction::NegativeY,
            Direction::NegativeY => Direction::PositiveX,
            Direction::PositiveX => Direction::PositiveY,
        }
    }

    /// Draws one of the four facings uniformly.
    pub fn random(rng: &mut impl RandomSource) -> Direction {
        Self::ALL[rng.draw(Self::ALL.len())]
    }

    /// Draws uniformly among the three facings other than `current`.
    ///
    /// Picks directly from the complement, so exactly one draw is consumed.
    pub fn random_excluding(current: Direction, rng: &mut impl RandomSource) -> Direction {
        let mut others = [Direction::PositiveY; 3];
        let mut len = 0;
        for d in Self::ALL {
            if d != current {
                others[len] = d;
                len += 1;
            }
        }
        others[rng.draw(len)]
    }

    /// Unit step along this facing.
    pub fn unit(self) -> I64Vec2 {
        match self {
            Direction::PositiveY => I64Vec2::Y,
            Direction::NegativeX => I64Vec2::NEG_X,
            Direction::NegativeY => I64Vec2::NEG_Y,
            Direction::PositiveX => I64Vec2::X,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Direction::PositiveY => "+Y",
            Direction::NegativeX => "-X",
            Direction::NegativeY => "-Y",
            Direction::PositiveX => "+X",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
