//! Brick Sweep - a breakout game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (swept collisions, resolution, game state)
//! - `settings`: Data-driven canvas, ball, paddle and brick layout

pub mod settings;
pub mod sim;

pub use settings::{ConfigError, GameConfig};

/// Game configuration constants
pub mod consts {
    /// Canvas dimensions (pixels)
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Per-tick speed on each axis
    pub const BALL_SPEED: f32 = 3.0;
    /// Ball spawn height above the bottom of the canvas
    pub const BALL_SPAWN_OFFSET: f32 = 100.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 150.0;
    pub const PADDLE_HEIGHT: f32 = 12.0;
    /// Pixels per tick
    pub const PADDLE_SPEED: f32 = 8.0;
    /// Paddle top edge sits this far above the bottom of the canvas
    pub const PADDLE_BOTTOM_OFFSET: f32 = 40.0;
    /// Paddle spawns this far left of the canvas center
    pub const PADDLE_SPAWN_SHIFT: f32 = 50.0;

    /// Brick grid defaults
    pub const BRICK_ROWS: usize = 4;
    pub const BRICK_COLS: usize = 8;
    pub const BRICK_WIDTH: f32 = 60.0;
    pub const BRICK_HEIGHT: f32 = 12.0;
    pub const BRICK_SPACING_X: f32 = 10.0;
    pub const BRICK_SPACING_Y: f32 = 10.0;
    pub const BRICK_START_Y: f32 = 50.0;

    /// Flat score for every destroyed brick
    pub const POINTS_PER_BRICK: u32 = 10;
    /// Lives at the start of a round
    pub const START_LIVES: u8 = 3;
}
