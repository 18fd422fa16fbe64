//! Axis-aligned rectangle collision
//!
//! Every contact in the game (player/ball, player/platform, player/target,
//! clicks on buttons and on the ball) goes through the same half-open AABB
//! test. Rectangles touching along an edge do not collide.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in screen pixels (top-left origin, y down)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle at `pos` with the given size
    pub fn at(pos: IVec2, w: i32, h: i32) -> Self {
        Self::new(pos.x, pos.y, w, h)
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Integer center (halves truncate)
    #[inline]
    pub fn center(&self) -> IVec2 {
        IVec2::new(self.x + self.w / 2, self.y + self.h / 2)
    }

    /// Half-open point containment, used for button hits
    pub fn contains_point(&self, p: IVec2) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }
}

/// True iff `a` and `b` overlap on both axes
pub fn aabb_intersect(a: &Rect, b: &Rect) -> bool {
    if a.bottom() <= b.y {
        return false;
    }
    if a.y >= b.bottom() {
        return false;
    }
    if a.right() <= b.x {
        return false;
    }
    if a.x >= b.right() {
        return false;
    }
    true
}
