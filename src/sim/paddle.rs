//! The player's paddle

use glam::Vec2;

use super::ball::Ball;
use crate::consts::*;
use crate::geom::Rect;

#[derive(Debug, Clone)]
pub struct Paddle {
    pub bounds: Rect,
}

impl Default for Paddle {
    fn default() -> Self {
        Self::centered_at(FIELD_WIDTH / 2.0)
    }
}

impl Paddle {
    /// Paddle centred horizontally on `x` at the fixed paddle row
    pub fn centered_at(x: f32) -> Self {
        Self {
            bounds: Rect::from_center(Vec2::new(x, PADDLE_Y), PADDLE_SIZE),
        }
    }

    /// Follow the pointer. Only the left edge moves.
    pub fn update(&mut self, pointer_x: f32) {
        self.bounds.pos.x = pointer_x - self.bounds.size.x / 2.0;
    }

    /// Bounce a descending ball, angled by where it struck.
    ///
    /// Returns the hit offset from the paddle centre when a bounce happened.
    /// A ball moving up through the paddle passes untouched.
    pub fn test_and_resolve(&self, ball: &mut Ball) -> Option<f32> {
        if ball.velocity.y <= 0.0 || !self.bounds.intersects_circle(&ball.circle) {
            return None;
        }

        let offset = ball.pos().x - self.bounds.center().x;
        ball.set_velocity(Vec2::new(offset * PADDLE_DEFLECTION, -ball.velocity.y));
        Some(offset)
    }
}
