//! Collision detection for a circular ball against axis-aligned rectangles
//!
//! The tricky part of Brick Sweep: a ball that moves several pixels per tick
//! can pass straight through a thin brick if we only test where it ends up.
//! `swept_circle_vs_rect` tests the whole path instead. The rect is inflated
//! by the ball radius so the ball reduces to a point, then the point's path is
//! clipped against the inflated rect one axis at a time (slab test).
//!
//! ```text
//!   prev ●
//!         \
//!    ┌─────\──────────┐  <- rect inflated by radius
//!    │  ┌───●──────┐  │     ● = center at first contact (time)
//!    │  │  brick   │  │
//! ```

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::StaticRect;

/// Side of a rectangle struck by the ball
///
/// Named relative to the rectangle: a ball travelling right strikes the
/// rect's `Left` edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Edge {
    /// No edge (miss, or overlap with no motion)
    #[default]
    None,
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    /// Bounce off this edge: the velocity component orthogonal to it ends up
    /// pointing away from the rect.
    ///
    /// For a ball that struck the edge this is a plain sign flip. A component
    /// already pointing away (a wall turned it earlier in the same tick) is
    /// left alone.
    #[inline]
    pub fn reflect(self, vel: Vec2) -> Vec2 {
        match self {
            Edge::Top => Vec2::new(vel.x, -vel.y.abs()),
            Edge::Bottom => Vec2::new(vel.x, vel.y.abs()),
            Edge::Left => Vec2::new(-vel.x.abs(), vel.y),
            Edge::Right => Vec2::new(vel.x.abs(), vel.y),
            Edge::None => vel,
        }
    }
}

/// Result of a swept collision check
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweptHit {
    /// Whether the path touches the rect during this tick
    pub collided: bool,
    /// Fraction of the tick's displacement at first contact, in [0, 1] (1.0 on miss)
    pub time: f32,
    /// Ball center at first contact (end of the path on miss)
    pub point: Vec2,
    /// Which side of the rect was struck
    pub edge: Edge,
}

impl SweptHit {
    pub fn miss(end: Vec2) -> Self {
        Self {
            collided: false,
            time: 1.0,
            point: end,
            edge: Edge::None,
        }
    }
}

/// AABB overlap test; touching edges do not count
pub fn rects_intersect(a: &StaticRect, b: &StaticRect) -> bool {
    let (a_min, a_max) = (a.min(), a.max());
    let (b_min, b_max) = (b.min(), b.max());
    a_min.x < b_max.x && a_max.x > b_min.x && a_min.y < b_max.y && a_max.y > b_min.y
}

/// Static circle/rect overlap using the closest point on the rect
pub fn circle_intersects_rect(center: Vec2, radius: f32, rect: &StaticRect) -> bool {
    debug_assert!(radius > 0.0, "radius must be positive");
    let closest = rect.clamp_point(center);
    center.distance_squared(closest) < radius * radius
}

/// Entry/exit time of a moving coordinate through the slab `[min, max]`
///
/// A stationary coordinate puts no limit on time, but it has to be inside the
/// slab already or the path can never reach the rect.
fn axis_slab(start: f32, delta: f32, min: f32, max: f32) -> Option<(f32, f32)> {
    if delta == 0.0 {
        return (start > min && start < max).then_some((f32::NEG_INFINITY, f32::INFINITY));
    }
    let t_min = (min - start) / delta;
    let t_max = (max - start) / delta;
    if delta > 0.0 {
        Some((t_min, t_max))
    } else {
        Some((t_max, t_min))
    }
}

/// Swept circle vs rect over one tick's displacement from `prev` to `curr`
///
/// Reports the earliest contact time in [0, 1]. A ball already overlapping the
/// rect at the start of the tick reports `time = 0`. A ball leaving a rect it
/// is exactly touching (e.g. after being snapped to a contact point) is a miss.
///
/// When both axes enter at exactly the same time the Y axis wins, so a
/// perfect corner hit bounces vertically.
pub fn swept_circle_vs_rect(prev: Vec2, curr: Vec2, radius: f32, rect: &StaticRect) -> SweptHit {
    debug_assert!(radius > 0.0, "radius must be positive");

    if prev == curr {
        if circle_intersects_rect(prev, radius, rect) {
            return SweptHit {
                collided: true,
                time: 0.0,
                point: prev,
                edge: Edge::None,
            };
        }
        return SweptHit::miss(curr);
    }

    let inflated = rect.expanded(radius);
    let (min, max) = (inflated.min(), inflated.max());
    let delta = curr - prev;

    let Some((entry_x, exit_x)) = axis_slab(prev.x, delta.x, min.x, max.x) else {
        return SweptHit::miss(curr);
    };
    let Some((entry_y, exit_y)) = axis_slab(prev.y, delta.y, min.y, max.y) else {
        return SweptHit::miss(curr);
    };

    let entry = entry_x.max(entry_y);
    let exit = exit_x.min(exit_y);

    // Slabs never overlap in time, overlap ends at or before the tick starts,
    // or starts after the tick ends
    if entry > exit || exit <= 0.0 || entry > 1.0 {
        return SweptHit::miss(curr);
    }

    let time = entry.clamp(0.0, 1.0);

    let edge = if entry_x > entry_y {
        if delta.x > 0.0 { Edge::Left } else { Edge::Right }
    } else if delta.y > 0.0 {
        Edge::Top
    } else {
        Edge::Bottom
    };

    SweptHit {
        collided: true,
        time,
        point: prev + delta * time,
        edge,
    }
}

/// Canvas walls (left/top at 0, right at `width`, bottom at `height`)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallBounds {
    pub width: f32,
    pub height: f32,
}

impl WallBounds {
    pub fn new(width: f32, height: f32) -> Self {
        debug_assert!(width > 0.0 && height > 0.0, "canvas must have positive size");
        Self { width, height }
    }
}

/// Ball touches or crosses the left wall
#[inline]
pub fn hits_left_wall(x: f32, radius: f32) -> bool {
    x - radius <= 0.0
}

/// Ball touches or crosses the right wall
#[inline]
pub fn hits_right_wall(x: f32, radius: f32, canvas_width: f32) -> bool {
    x + radius >= canvas_width
}

/// Ball touches or crosses the top wall
#[inline]
pub fn hits_top_wall(y: f32, radius: f32) -> bool {
    y - radius <= 0.0
}

/// Ball has reached the bottom of the canvas (lost)
#[inline]
pub fn hits_bottom_wall(y: f32, radius: f32, canvas_height: f32) -> bool {
    y + radius >= canvas_height
}
