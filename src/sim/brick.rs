//! Brick grid and its collision policy
//!
//! The grid resolves at most one brick per frame. The first live brick in
//! row-major order that overlaps the ball loses a life and decides the
//! reflection axis; the scan stops there even if the ball overlaps more
//! bricks. This avoids double reflections from the edge heuristic at the
//! cost of occasionally skipping a simultaneous hit.

use glam::Vec2;

use super::ball::Ball;
use crate::consts::*;
use crate::geom::Rect;

/// Which velocity component a brick hit flips
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitAxis {
    /// Top or bottom edge: flip Y
    Vertical,
    /// Left or right edge: flip X
    Horizontal,
}

impl HitAxis {
    /// Axis-flip vector for this hit
    pub fn flip(self) -> Vec2 {
        match self {
            HitAxis::Vertical => REFLECT_VERTICAL,
            HitAxis::Horizontal => REFLECT_HORIZONTAL,
        }
    }
}

/// A single brick. `life == 0` means gone: never drawn, never hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brick {
    pub bounds: Rect,
    pub life: u32,
}

impl Brick {
    /// Brick at grid cell (`column`, `row`)
    pub fn at_cell(column: usize, row: usize, life: u32) -> Self {
        Self {
            bounds: Rect::new(
                Vec2::new(
                    column as f32 * BRICK_SIZE.x,
                    BRICK_TOP + row as f32 * BRICK_SIZE.y,
                ),
                BRICK_SIZE,
            ),
            life,
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.life > 0
    }

    /// Test against the ball; on overlap take one life and classify the hit.
    ///
    /// Touching the top or bottom edge wins over the sides, so a corner hit
    /// is treated as vertical.
    pub fn hit(&mut self, ball: &Ball) -> Option<HitAxis> {
        if !self.is_alive() || !self.bounds.intersects_circle(&ball.circle) {
            return None;
        }

        self.life -= 1;

        if self.bounds.bottom().intersects_circle(&ball.circle)
            || self.bounds.top().intersects_circle(&ball.circle)
        {
            Some(HitAxis::Vertical)
        } else {
            Some(HitAxis::Horizontal)
        }
    }

    /// Hue in degrees, derived from the brick's vertical position
    pub fn hue(&self) -> f32 {
        self.bounds.pos.y - 40.0
    }
}

/// Result of a resolved brick collision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrickCollision {
    /// Row-major index into the grid
    pub index: usize,
    pub axis: HitAxis,
}

/// The fixed 20x5 grid, stored row-major
#[derive(Debug, Clone)]
pub struct Bricks {
    cells: [Brick; BRICK_COUNT],
}

impl Default for Bricks {
    fn default() -> Self {
        Self::new()
    }
}

impl Bricks {
    pub fn new() -> Self {
        Self {
            cells: std::array::from_fn(|i| {
                Brick::at_cell(i % BRICK_COLUMNS, i / BRICK_COLUMNS, BRICK_LIFE)
            }),
        }
    }

    /// Row-major index of a grid cell
    #[inline]
    pub const fn index(column: usize, row: usize) -> usize {
        row * BRICK_COLUMNS + column
    }

    pub fn get(&self, index: usize) -> Option<&Brick> {
        self.cells.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Brick> {
        self.cells.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Brick> {
        self.cells.iter()
    }

    /// Number of bricks with life left
    pub fn remaining(&self) -> usize {
        self.cells.iter().filter(|b| b.is_alive()).count()
    }

    pub fn is_cleared(&self) -> bool {
        self.cells.iter().all(|b| !b.is_alive())
    }

    /// Resolve at most one brick hit and reflect the ball accordingly
    pub fn test_and_resolve(&mut self, ball: &mut Ball) -> Option<BrickCollision> {
        let target: &Ball = ball;
        let collision = self
            .cells
            .iter_mut()
            .enumerate()
            .find_map(|(index, brick)| {
                brick.hit(target).map(|axis| BrickCollision { index, axis })
            })?;

        ball.reflect(collision.axis.flip());
        Some(collision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_layout() {
        let bricks = Bricks::new();
        assert_eq!(bricks.iter().count(), 100);
        assert_eq!(bricks.remaining(), 100);

        let first = bricks.get(0).unwrap();
        assert_eq!(first.bounds.pos, Vec2::new(0.0, 60.0));
        assert_eq!(first.bounds.size, Vec2::new(40.0, 20.0));
        assert_eq!(first.life, 1);

        // Row-major: index 20 starts the second row
        let second_row = bricks.get(Bricks::index(0, 1)).unwrap();
        assert_eq!(second_row.bounds.pos, Vec2::new(0.0, 80.0));

        let last = bricks.get(99).unwrap();
        assert_eq!(last.bounds.pos, Vec2::new(760.0, 140.0));
        assert!(bricks.get(100).is_none());
    }

    #[test]
    fn test_hue_by_row() {
        let bricks = Bricks::new();
        assert_eq!(bricks.get(Bricks::index(3, 0)).unwrap().hue(), 20.0);
        assert_eq!(bricks.get(Bricks::index(3, 4)).unwrap().hue(), 100.0);
    }

    #[test]
    fn test_hit_from_below_is_vertical() {
        // Bottom row spans y 140..160; ball just under brick (5, 4)
        let mut bricks = Bricks::new();
        let mut ball = Ball::new(Vec2::new(220.0, 165.0), Vec2::new(0.0, -480.0));

        let hit = bricks.test_and_resolve(&mut ball).unwrap();
        assert_eq!(hit.index, Bricks::index(5, 4));
        assert_eq!(hit.axis, HitAxis::Vertical);
        assert_eq!(bricks.get(hit.index).unwrap().life, 0);
        assert_eq!(ball.velocity, Vec2::new(0.0, 480.0));
    }

    #[test]
    fn test_side_hit_is_horizontal() {
        // Clear cell (4, 2) (x 160..200, y 100..120) and put the ball in the gap,
        // touching only the left side of (5, 2)
        let mut bricks = Bricks::new();
        bricks.cells[Bricks::index(4, 2)].life = 0;
        let mut ball = Ball::new(Vec2::new(194.0, 110.0), Vec2::new(300.0, 0.0));

        let hit = bricks.test_and_resolve(&mut ball).unwrap();
        assert_eq!(hit.index, Bricks::index(5, 2));
        assert_eq!(hit.axis, HitAxis::Horizontal);
        assert_eq!(ball.velocity, Vec2::new(-300.0, 0.0));
    }

    #[test]
    fn test_corner_overlap_prefers_vertical() {
        let mut brick = Brick::at_cell(0, 0, 1);
        // Overlaps the right side and the bottom edge of (0, 0)
        let ball = Ball::new(Vec2::new(44.0, 84.0), Vec2::new(-200.0, -200.0));
        assert_eq!(brick.hit(&ball), Some(HitAxis::Vertical));
    }

    #[test]
    fn test_only_first_brick_resolved() {
        // Straddles the boundary between (2, 4) and (3, 4) from below
        let mut bricks = Bricks::new();
        let mut ball = Ball::new(Vec2::new(120.0, 165.0), Vec2::new(0.0, -480.0));

        let hit = bricks.test_and_resolve(&mut ball).unwrap();
        assert_eq!(hit.index, Bricks::index(2, 4));
        assert_eq!(bricks.remaining(), 99);
        assert_eq!(bricks.get(Bricks::index(3, 4)).unwrap().life, 1);
        assert_eq!(ball.velocity, Vec2::new(0.0, 480.0));
    }

    #[test]
    fn test_dead_brick_is_inert() {
        let mut bricks = Bricks::new();
        let mut ball = Ball::new(Vec2::new(220.0, 165.0), Vec2::new(0.0, -480.0));
        bricks.test_and_resolve(&mut ball).unwrap();

        // Same spot again: brick (5, 4) is gone, nothing else is in reach
        let mut ball = Ball::new(Vec2::new(220.0, 165.0), Vec2::new(0.0, -480.0));
        assert!(bricks.test_and_resolve(&mut ball).is_none());
        assert_eq!(ball.velocity, Vec2::new(0.0, -480.0));
    }

    #[test]
    fn test_miss_changes_nothing() {
        let mut bricks = Bricks::new();
        let mut ball = Ball::default();
        assert!(bricks.test_and_resolve(&mut ball).is_none());
        assert_eq!(bricks.remaining(), 100);
        assert!(!bricks.is_cleared());
    }
}
