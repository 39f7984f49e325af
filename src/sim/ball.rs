//! The ball: a circle moving at constant speed

use glam::Vec2;

use crate::consts::*;
use crate::geom::Circle;

#[derive(Debug, Clone)]
pub struct Ball {
    pub circle: Circle,
    /// Pixels per second. Length stays at `BALL_SPEED`.
    pub velocity: Vec2,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            circle: Circle::new(BALL_SPAWN, BALL_RADIUS),
            velocity: Vec2::new(0.0, -BALL_SPEED),
        }
    }
}

impl Ball {
    pub fn new(center: Vec2, velocity: Vec2) -> Self {
        Self {
            circle: Circle::new(center, BALL_RADIUS),
            velocity,
        }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.circle.center
    }

    /// Integrate position over `dt` seconds. No bounds handling.
    pub fn update(&mut self, dt: f32) {
        self.circle.move_by(self.velocity * dt);
    }

    /// Point the ball along `direction` at `BALL_SPEED`.
    /// A zero direction leaves the velocity unchanged.
    pub fn set_velocity(&mut self, direction: Vec2) {
        if let Some(dir) = direction.try_normalize() {
            self.velocity = dir * BALL_SPEED;
        }
    }

    /// Component-wise multiply by an axis-flip vector
    #[inline]
    pub fn reflect(&mut self, flip: Vec2) {
        self.velocity *= flip;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn() {
        let ball = Ball::default();
        assert_eq!(ball.pos(), Vec2::new(400.0, 400.0));
        assert_eq!(ball.circle.radius, 8.0);
        assert_eq!(ball.velocity, Vec2::new(0.0, -480.0));
    }

    #[test]
    fn test_update_integrates_velocity() {
        let mut ball = Ball::new(Vec2::new(100.0, 200.0), Vec2::new(30.0, -60.0));
        ball.update(0.5);
        assert_eq!(ball.pos(), Vec2::new(115.0, 170.0));

        // Zero dt is a no-op
        ball.update(0.0);
        assert_eq!(ball.pos(), Vec2::new(115.0, 170.0));
    }

    #[test]
    fn test_set_velocity_normalizes_to_speed() {
        let mut ball = Ball::default();
        ball.set_velocity(Vec2::new(3.0, -4.0));
        assert!((ball.velocity.length() - BALL_SPEED).abs() < 0.01);
        assert!((ball.velocity.x - 288.0).abs() < 0.01);
        assert!((ball.velocity.y + 384.0).abs() < 0.01);
    }

    #[test]
    fn test_set_velocity_ignores_zero_direction() {
        let mut ball = Ball::default();
        ball.set_velocity(Vec2::ZERO);
        assert_eq!(ball.velocity, Vec2::new(0.0, -BALL_SPEED));
    }

    #[test]
    fn test_reflect_flips_one_axis() {
        let mut ball = Ball::new(Vec2::ZERO, Vec2::new(120.0, -300.0));
        ball.reflect(REFLECT_VERTICAL);
        assert_eq!(ball.velocity, Vec2::new(120.0, 300.0));
        ball.reflect(REFLECT_HORIZONTAL);
        assert_eq!(ball.velocity, Vec2::new(-120.0, 300.0));
    }
}
