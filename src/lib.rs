//! # symbios-rover
//!
//! Grid robots that walk along one of four cardinal facings.
//!
//! Each [`Robot`] takes signed integer movement commands: it advances along its
//! current [`Direction`] by the given amount, then turns according to its [`Model`].
//! All randomness flows through a [`RandomSource`], so runs can be replayed exactly
//! from a seed. Snapshots come out as [`RobotStatus`] values for rendering.

pub mod direction;
pub mod input;
pub mod model;
pub mod random;
pub mod robot;
pub mod status;

pub use direction::*;
pub use input::*;
pub use model::*;
pub use random::*;
pub use robot::*;
pub use status::*;
