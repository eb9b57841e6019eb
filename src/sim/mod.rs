//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one ball displacement per tick)
//! - Stable iteration order (bricks in row-major grid order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod resolve;
pub mod state;
pub mod tick;

pub use collision::{
    Edge, SweptHit, WallBounds, circle_intersects_rect, hits_bottom_wall, hits_left_wall,
    hits_right_wall, hits_top_wall, rects_intersect, swept_circle_vs_rect,
};
pub use rect::StaticRect;
pub use resolve::{TickOutcome, resolve_tick};
pub use state::{Ball, BrickGrid, GameEvent, GamePhase, GameState, Paddle};
pub use tick::{TickInput, tick};
