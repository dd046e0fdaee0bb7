//! Axis-aligned geometry for overworld entities.
//!
//! Positions are the top-left corner of an entity's bounding box in world
//! pixels. All operations here are pure and total.

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Strict AABB overlap test.
    ///
    /// Returns true iff the boxes intersect with non-zero overlap on both
    /// axes. Boxes that merely touch along an edge do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }

    /// Clamp the box so it stays fully inside a world of the given size.
    ///
    /// After clamping, `x` lies in `[0, width - w]` and `y` in
    /// `[0, height - h]`.
    #[inline]
    pub fn clamp_to(&mut self, width: f32, height: f32) {
        self.x = self.x.min(width - self.w).max(0.0);
        self.y = self.y.min(height - self.h).max(0.0);
    }
}
