//! Per-tick collision resolution
//!
//! Runs once per tick after the ball has advanced:
//! 1. Paddle (swept)
//! 2. Walls (discrete; the bottom wall is a loss, not a bounce)
//! 3. Bricks (swept; only the earliest hit is resolved)
//!
//! Win and life loss are reported in the outcome; the caller decides what
//! they mean for the game phase.

use serde::{Deserialize, Serialize};

use super::collision::{
    SweptHit, WallBounds, hits_bottom_wall, hits_left_wall, hits_right_wall, hits_top_wall,
    swept_circle_vs_rect,
};
use super::rect::StaticRect;
use super::state::{Ball, BrickGrid};
use crate::consts::POINTS_PER_BRICK;

/// What happened during one tick's resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TickOutcome {
    /// Points earned this tick
    pub score_delta: u32,
    /// Grid index of the brick destroyed this tick
    pub destroyed_obstacle_index: Option<usize>,
    /// Ball reached the bottom of the canvas
    pub hit_bottom_wall: bool,
    /// Bricks still standing after this tick
    pub remaining_obstacles: usize,
}

impl TickOutcome {
    /// No bricks left
    pub fn is_win(&self) -> bool {
        self.remaining_obstacles == 0
    }
}

/// Resolve all collisions for the ball's `prev -> pos` step
pub fn resolve_tick(
    ball: &mut Ball,
    paddle: &StaticRect,
    bounds: WallBounds,
    bricks: &mut BrickGrid,
) -> TickOutcome {
    let mut outcome = TickOutcome::default();

    let paddle_hit = swept_circle_vs_rect(ball.prev, ball.pos, ball.radius, paddle);
    if paddle_hit.collided {
        log::debug!(
            "paddle hit: edge={:?} t={:.3} at ({:.1}, {:.1})",
            paddle_hit.edge,
            paddle_hit.time,
            paddle_hit.point.x,
            paddle_hit.point.y
        );
        if paddle_hit.time > 0.0 {
            bounce(ball, &paddle_hit);
        } else {
            // Paddle moved into the ball: knock it upward from where it is.
            // Snapping to a time-zero contact would pin the ball in place.
            ball.vel.y = -ball.vel.y.abs();
        }
    }

    bounce_off_walls(ball, bounds);

    if let Some((index, hit)) = earliest_brick_hit(ball, bricks) {
        log::debug!(
            "brick {index} hit: edge={:?} t={:.3} at ({:.1}, {:.1})",
            hit.edge,
            hit.time,
            hit.point.x,
            hit.point.y
        );
        bounce(ball, &hit);
        if bricks.destroy(index) {
            outcome.destroyed_obstacle_index = Some(index);
            outcome.score_delta = POINTS_PER_BRICK;
        }
    }

    outcome.remaining_obstacles = bricks.active_count();
    outcome.hit_bottom_wall = hits_bottom_wall(ball.pos.y, ball.radius, bounds.height);
    outcome
}

/// Snap to the contact point and turn away from the struck edge
fn bounce(ball: &mut Ball, hit: &SweptHit) {
    ball.pos = hit.point;
    ball.vel = hit.edge.reflect(ball.vel);
}

/// Side and top walls. Each sets the velocity component to point back into
/// the canvas, so a ball still overlapping a wall next tick is not turned
/// around again.
fn bounce_off_walls(ball: &mut Ball, bounds: WallBounds) {
    if hits_left_wall(ball.pos.x, ball.radius) {
        ball.vel.x = ball.vel.x.abs();
    } else if hits_right_wall(ball.pos.x, ball.radius, bounds.width) {
        ball.vel.x = -ball.vel.x.abs();
    }
    if hits_top_wall(ball.pos.y, ball.radius) {
        ball.vel.y = ball.vel.y.abs();
    }
}

/// Earliest brick struck along the ball's path
///
/// Ordered by contact time, then by grid index (row-major scan order), so two
/// bricks struck at the same instant always resolve to the upper-left one.
fn earliest_brick_hit(ball: &Ball, bricks: &BrickGrid) -> Option<(usize, SweptHit)> {
    bricks
        .bricks()
        .iter()
        .enumerate()
        .filter(|(_, brick)| brick.active)
        .map(|(index, brick)| (index, swept_circle_vs_rect(ball.prev, ball.pos, ball.radius, brick)))
        .filter(|(_, hit)| hit.collided)
        .min_by(|(ia, a), (ib, b)| a.time.total_cmp(&b.time).then(ia.cmp(ib)))
}
