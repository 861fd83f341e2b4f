//! Read-only snapshots of a robot's state.

use crate::direction::Direction;
use crate::model::Model;
use crate::robot::RobotName;
use glam::I64Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What a robot looks like after its latest moves.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotStatus {
    pub name: RobotName,
    pub model: Model,
    pub position: I64Vec2,
    pub facing: Direction,
}

impl fmt::Display for RobotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} is at ({}, {}) facing {}",
            self.name, self.position.x, self.position.y, self.facing
        )
    }
}
