//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Frame delta is the only source of time
//! - Stable iteration order (row-major bricks)
//! - No rendering or platform dependencies

pub mod ball;
pub mod brick;
pub mod field;
pub mod paddle;
pub mod state;
pub mod tick;

pub use ball::Ball;
pub use brick::{Brick, BrickCollision, Bricks, HitAxis};
pub use field::{Field, WallHits};
pub use paddle::Paddle;
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{FrameInput, tick};
