//! Play field boundary
//!
//! Top, left and right edges reflect. The bottom edge is open: a ball that
//! drops below it is reported as lost.

use super::ball::Ball;
use crate::consts::*;

/// Walls that reflected the ball this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallHits {
    /// Ceiling (Y flipped)
    pub ceiling: bool,
    /// Left or right wall (X flipped)
    pub side: bool,
}

impl WallHits {
    pub fn any(&self) -> bool {
        self.ceiling || self.side
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Default for Field {
    fn default() -> Self {
        Self::new(FIELD_WIDTH, FIELD_HEIGHT)
    }
}

impl Field {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Reflect the ball off the ceiling and side walls.
    ///
    /// Each wall only reflects a ball still heading out of the field, so a
    /// ball that is already turned around is left alone. The ceiling and a
    /// side wall can both fire in the same frame (corner).
    pub fn test_and_resolve(&self, ball: &mut Ball) -> WallHits {
        let mut hits = WallHits::default();
        let pos = ball.pos();

        if pos.y < 0.0 && ball.velocity.y < 0.0 {
            ball.reflect(REFLECT_VERTICAL);
            hits.ceiling = true;
        }

        let vx = ball.velocity.x;
        if (pos.x < 0.0 && vx < 0.0) || (pos.x > self.width && vx > 0.0) {
            ball.reflect(REFLECT_HORIZONTAL);
            hits.side = true;
        }

        hits
    }

    /// Whether the whole ball has dropped past the bottom edge
    pub fn is_out_of_bounds(&self, ball: &Ball) -> bool {
        ball.pos().y - ball.circle.radius > self.height
    }
}
