//! Game configuration
//!
//! Canvas bounds, ball, paddle and brick layout. Loaded from a JSON file;
//! any field missing from the file keeps its default.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::{StaticRect, rects_intersect};

/// Config loading/validation error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// File is not valid JSON for `GameConfig`
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A dimension that must be positive is not
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    /// Brick grid has no rows or no columns
    #[error("brick grid must have at least one row and column ({rows}x{cols})")]
    EmptyGrid { rows: usize, cols: usize },

    /// Paddle is wider than the canvas
    #[error("paddle width {paddle} exceeds canvas width {canvas}")]
    PaddleTooWide { paddle: f32, canvas: f32 },

    /// Brick spacing must not be negative
    #[error("{field} must not be negative, got {value}")]
    NegativeSpacing { field: &'static str, value: f32 },

    /// Brick grid reaches down into the paddle's lane
    #[error("brick grid overlaps the paddle lane")]
    BricksOverlapPaddle,
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Canvas ===
    pub canvas_width: f32,
    pub canvas_height: f32,

    // === Ball ===
    pub ball_radius: f32,
    /// Per-tick speed on each axis at launch
    pub ball_speed: f32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,

    // === Bricks ===
    pub brick_rows: usize,
    pub brick_cols: usize,
    pub brick_width: f32,
    pub brick_height: f32,
    pub brick_spacing_x: f32,
    pub brick_spacing_y: f32,
    pub brick_start_y: f32,

    // === Rules ===
    pub lives: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,

            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,

            brick_rows: BRICK_ROWS,
            brick_cols: BRICK_COLS,
            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            brick_spacing_x: BRICK_SPACING_X,
            brick_spacing_y: BRICK_SPACING_Y,
            brick_start_y: BRICK_START_Y,

            lives: START_LIVES,
        }
    }
}

impl GameConfig {
    /// Parse a config from JSON and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load a config file, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{e}; using default config");
                Self::default()
            }
        }
    }

    /// Reject layouts the collision engine cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("ball_radius", self.ball_radius),
            ("ball_speed", self.ball_speed),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("brick_width", self.brick_width),
            ("brick_height", self.brick_height),
        ];
        for (field, value) in positive {
            // NaN fails this too
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        if self.brick_rows == 0 || self.brick_cols == 0 {
            return Err(ConfigError::EmptyGrid {
                rows: self.brick_rows,
                cols: self.brick_cols,
            });
        }

        if self.paddle_width > self.canvas_width {
            return Err(ConfigError::PaddleTooWide {
                paddle: self.paddle_width,
                canvas: self.canvas_width,
            });
        }

        for (field, value) in [
            ("brick_spacing_x", self.brick_spacing_x),
            ("brick_spacing_y", self.brick_spacing_y),
        ] {
            if !(value >= 0.0) {
                return Err(ConfigError::NegativeSpacing { field, value });
            }
        }

        if rects_intersect(&self.brick_area(), &self.paddle_lane()) {
            return Err(ConfigError::BricksOverlapPaddle);
        }

        Ok(())
    }

    /// Bounding box of the full brick grid
    pub fn brick_area(&self) -> StaticRect {
        let width = self.brick_cols as f32 * (self.brick_width + self.brick_spacing_x)
            - self.brick_spacing_x;
        let height = self.brick_rows as f32 * (self.brick_height + self.brick_spacing_y)
            - self.brick_spacing_y;
        StaticRect::new(self.brick_spacing_x, self.brick_start_y, width, height)
    }

    /// Full-width strip the paddle slides along
    pub fn paddle_lane(&self) -> StaticRect {
        StaticRect::new(
            0.0,
            self.canvas_height - PADDLE_BOTTOM_OFFSET,
            self.canvas_width,
            self.paddle_height,
        )
    }
}
