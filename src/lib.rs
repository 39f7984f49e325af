//! Brick Breaker - the classic paddle-and-bricks arcade game
//!
//! Core modules:
//! - `geom`: Axis-aligned rectangles, circles and edge segments
//! - `sim`: Deterministic simulation (ball, bricks, paddle, field walls)
//! - `renderer`: Draw list and WebGPU pipeline
//! - `platform`: Frame clock, FPS counter and pointer mapping
//! - `settings`: Persisted preferences
//! - `demo`: Headless autopilot run for native builds

pub mod demo;
pub mod geom;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Play field dimensions (pixels)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Longest frame delta fed to the simulation (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;
    /// Nominal frame delta used when no timestamp is known yet
    pub const NOMINAL_FRAME_DT: f32 = 1.0 / 60.0;

    /// Ball speed, pixels/s. Every reflection keeps it.
    pub const BALL_SPEED: f32 = 480.0;
    pub const BALL_RADIUS: f32 = 8.0;
    pub const BALL_SPAWN: Vec2 = Vec2::new(400.0, 400.0);

    /// Brick cell size
    pub const BRICK_SIZE: Vec2 = Vec2::new(40.0, 20.0);
    /// Bricks per row
    pub const BRICK_COLUMNS: usize = 20;
    /// Brick rows
    pub const BRICK_ROWS: usize = 5;
    pub const BRICK_COUNT: usize = BRICK_COLUMNS * BRICK_ROWS;
    /// Top edge of the first brick row
    pub const BRICK_TOP: f32 = 60.0;
    /// Hit points a brick starts with
    pub const BRICK_LIFE: u32 = 1;

    pub const PADDLE_SIZE: Vec2 = Vec2::new(60.0, 10.0);
    /// Vertical centre of the paddle
    pub const PADDLE_Y: f32 = 500.0;
    /// Horizontal bias per pixel of hit offset from paddle centre
    pub const PADDLE_DEFLECTION: f32 = 10.0;

    /// Flip Y: ceiling and brick top/bottom hits
    pub const REFLECT_VERTICAL: Vec2 = Vec2::new(1.0, -1.0);
    /// Flip X: side walls and brick left/right hits
    pub const REFLECT_HORIZONTAL: Vec2 = Vec2::new(-1.0, 1.0);
}
