//! Draw list: the surface every entity draws itself onto
//!
//! The entity set is closed (bricks, ball, paddle) so each one gets a plain
//! `draw` method and the frame calls them in a fixed order. No trait objects.

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::geom::{Circle, Rect};
use crate::settings::Settings;
use crate::sim::{Ball, Brick, Bricks, GameState, Paddle};

/// Segments used for the ball outline
const CIRCLE_SEGMENTS: u32 = 24;
/// Segments per rounded corner
const CORNER_SEGMENTS: u32 = 4;

/// Triangle list for one frame, in field coordinates
#[derive(Debug, Default, Clone)]
pub struct DrawList {
    vertices: Vec<Vertex>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fill_circle(&mut self, circle: &Circle, color: [f32; 4]) {
        self.vertices
            .extend(shapes::circle(circle.center, circle.radius, color, CIRCLE_SEGMENTS));
    }

    pub fn fill_rect(&mut self, rect: &Rect, color: [f32; 4]) {
        self.vertices.extend(shapes::rect(rect, color));
    }

    pub fn fill_rounded_rect(&mut self, rect: &Rect, radius: f32, color: [f32; 4]) {
        self.vertices
            .extend(shapes::rounded_rect(rect, radius, color, CORNER_SEGMENTS));
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }
}

impl Brick {
    /// Inset by one pixel so neighbours read as separate bricks
    pub fn draw(&self, list: &mut DrawList, settings: &Settings) {
        if !self.is_alive() {
            return;
        }
        let value = if settings.high_contrast {
            colors::BRICK_VALUE
        } else {
            colors::BRICK_VALUE_SOFT
        };
        list.fill_rect(
            &self.bounds.stretched(-1.0),
            shapes::hsv(self.hue(), colors::BRICK_SATURATION, value),
        );
    }
}

impl Bricks {
    pub fn draw(&self, list: &mut DrawList, settings: &Settings) {
        for brick in self.iter() {
            brick.draw(list, settings);
        }
    }
}

impl Ball {
    pub fn draw(&self, list: &mut DrawList) {
        list.fill_circle(&self.circle, colors::BALL);
    }
}

impl Paddle {
    pub fn draw(&self, list: &mut DrawList, settings: &Settings) {
        let color = if settings.high_contrast {
            colors::PADDLE_HIGH_CONTRAST
        } else {
            colors::PADDLE
        };
        list.fill_rounded_rect(&self.bounds, settings.paddle_rounding, color);
    }
}

/// Build the frame: bricks, then ball, then paddle
pub fn draw_game(state: &GameState, settings: &Settings, list: &mut DrawList) {
    list.clear();
    state.bricks.draw(list, settings);
    state.ball.draw(list);
    state.paddle.draw(list, settings);
}
