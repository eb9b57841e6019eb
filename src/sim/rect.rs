//! Axis-aligned rectangle geometry for bricks and the paddle
//!
//! Screen coordinates: origin is the top-left corner, y grows downward.
//! - min = origin, max = origin + (width, height)

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A static axis-aligned rectangle (paddle or brick)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StaticRect {
    /// Top-left corner
    pub origin: Vec2,
    pub width: f32,
    pub height: f32,
    /// Inactive rects are skipped by collision tests (destroyed bricks)
    pub active: bool,
}

impl StaticRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        debug_assert!(width > 0.0 && height > 0.0, "rect dimensions must be positive");
        Self {
            origin: Vec2::new(x, y),
            width,
            height,
            active: true,
        }
    }

    /// Top-left corner
    #[inline]
    pub fn min(&self) -> Vec2 {
        self.origin
    }

    /// Bottom-right corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.origin + Vec2::new(self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        self.origin + Vec2::new(self.width, self.height) * 0.5
    }

    /// Inflate by `amount` on every side (Minkowski sum with a square of half-size `amount`)
    pub fn expanded(&self, amount: f32) -> Self {
        Self {
            origin: self.origin - Vec2::splat(amount),
            width: self.width + 2.0 * amount,
            height: self.height + 2.0 * amount,
            active: self.active,
        }
    }

    /// Closest point inside the rect to `p`
    #[inline]
    pub fn clamp_point(&self, p: Vec2) -> Vec2 {
        p.clamp(self.min(), self.max())
    }
}
