//! Game state and core simulation types
//!
//! Every entity owns its position outright; a renderer only reads this state.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::WallBounds;
use super::rect::StaticRect;
use crate::consts::*;
use crate::settings::GameConfig;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for a restart
    Menu,
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// Out of lives
    GameOver,
    /// Every brick destroyed
    Win,
}

/// Observable results of a tick, for the HUD/presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    BrickDestroyed { index: usize, score: u64 },
    LifeLost { lives_left: u8 },
    Won { score: u64 },
    GameOver { score: u64 },
    Paused,
    Resumed,
    Restarted,
}

/// The ball: a circle moving a fixed displacement per tick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Center at the start of the current tick
    pub prev: Vec2,
    /// Center at the end of the current tick
    pub pos: Vec2,
    /// Displacement per tick
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Ball at `start`, launched up and to the right
    pub fn new(start: Vec2, radius: f32, speed: f32) -> Self {
        debug_assert!(radius > 0.0, "ball radius must be positive");
        Self {
            prev: start,
            pos: start,
            vel: Vec2::new(speed, -speed),
            radius,
        }
    }

    /// Move one tick. `prev` is captured first so collision tests see the
    /// true before/after pair.
    pub fn advance(&mut self) {
        self.prev = self.pos;
        self.pos = self.prev + self.vel;
    }
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: StaticRect,
    /// Pixels per tick
    pub speed: f32,
}

impl Paddle {
    pub fn new(x: f32, y: f32, width: f32, height: f32, speed: f32) -> Self {
        Self {
            rect: StaticRect::new(x, y, width, height),
            speed,
        }
    }

    /// Move left, stopping at the left edge of the canvas
    pub fn move_left(&mut self) {
        self.rect.origin.x = (self.rect.origin.x - self.speed).max(0.0);
    }

    /// Move right, stopping at the right edge of the canvas
    pub fn move_right(&mut self, canvas_width: f32) {
        let limit = canvas_width - self.rect.width;
        self.rect.origin.x = (self.rect.origin.x + self.speed).min(limit);
    }
}

/// Row-major grid of bricks with a live count of survivors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrickGrid {
    pub rows: usize,
    pub cols: usize,
    bricks: Vec<StaticRect>,
    active_count: usize,
}

impl BrickGrid {
    /// Lay out a full grid from the config
    pub fn new(config: &GameConfig) -> Self {
        let (rows, cols) = (config.brick_rows, config.brick_cols);
        let mut bricks = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                let x = col as f32 * (config.brick_width + config.brick_spacing_x)
                    + config.brick_spacing_x;
                let y = config.brick_start_y
                    + row as f32 * (config.brick_height + config.brick_spacing_y);
                bricks.push(StaticRect::new(x, y, config.brick_width, config.brick_height));
            }
        }
        Self::from_bricks(rows, cols, bricks)
    }

    /// Grid from explicit rects (row-major, `rows * cols` long)
    pub fn from_bricks(rows: usize, cols: usize, bricks: Vec<StaticRect>) -> Self {
        debug_assert_eq!(bricks.len(), rows * cols, "brick count must match grid size");
        let active_count = bricks.iter().filter(|b| b.active).count();
        Self {
            rows,
            cols,
            bricks,
            active_count,
        }
    }

    /// Bricks in scan order (row-major)
    pub fn bricks(&self) -> &[StaticRect] {
        &self.bricks
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&StaticRect> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.bricks.get(row * self.cols + col)
    }

    /// Number of bricks still standing
    pub fn active_count(&self) -> usize {
        self.active_count
    }

    /// Deactivate the brick at `index`. Returns false if it was already gone.
    pub fn destroy(&mut self, index: usize) -> bool {
        match self.bricks.get_mut(index) {
            Some(brick) if brick.active => {
                brick.active = false;
                self.active_count -= 1;
                true
            }
            _ => false,
        }
    }

    /// Bring every brick back (round restart)
    pub fn reset(&mut self) {
        for brick in &mut self.bricks {
            brick.active = true;
        }
        self.active_count = self.bricks.len();
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub config: GameConfig,
    pub phase: GamePhase,
    pub score: u64,
    pub lives: u8,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub ball: Ball,
    pub paddle: Paddle,
    pub bricks: BrickGrid,
}

impl GameState {
    /// Fresh round, already in play
    pub fn new(config: GameConfig) -> Self {
        let ball = Self::spawn_ball(&config);
        let paddle = Paddle::new(
            config.canvas_width / 2.0 - PADDLE_SPAWN_SHIFT,
            config.canvas_height - PADDLE_BOTTOM_OFFSET,
            config.paddle_width,
            config.paddle_height,
            config.paddle_speed,
        );
        let bricks = BrickGrid::new(&config);
        Self {
            phase: GamePhase::Playing,
            score: 0,
            lives: config.lives,
            time_ticks: 0,
            ball,
            paddle,
            bricks,
            config,
        }
    }

    /// Fresh round waiting on the title screen
    pub fn at_menu(config: GameConfig) -> Self {
        let mut state = Self::new(config);
        state.phase = GamePhase::Menu;
        state
    }

    /// Ball at its serve position
    pub fn spawn_ball(config: &GameConfig) -> Ball {
        let start = Vec2::new(
            config.canvas_width / 2.0,
            config.canvas_height - BALL_SPAWN_OFFSET,
        );
        Ball::new(start, config.ball_radius, config.ball_speed)
    }

    pub fn wall_bounds(&self) -> WallBounds {
        WallBounds::new(self.config.canvas_width, self.config.canvas_height)
    }

    /// Start over with the same config
    pub fn restart(&mut self) {
        *self = Self::new(self.config.clone());
    }
}
