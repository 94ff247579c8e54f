//! Axis-aligned rectangles in world space.

use glam::Vec2;

/// An axis-aligned rectangle described by its top-left corner and size.
///
/// The Y axis points down, so `top < bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub position: Vec2,
    pub size: Vec2,
}

impl Bounds {
    pub const fn new(position: Vec2, size: Vec2) -> Self {
        Self { position, size }
    }

    pub fn left(&self) -> f32 {
        self.position.x
    }

    pub fn right(&self) -> f32 {
        self.position.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.position.y
    }

    pub fn bottom(&self) -> f32 {
        self.position.y + self.size.y
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Moves the rectangle vertically so that its bottom edge sits at `y`.
    pub fn set_bottom(&mut self, y: f32) {
        self.position.y = y - self.size.y;
    }

    /// Returns true if the two rectangles share any interior area.
    ///
    /// Rectangles that only touch along an edge do not overlap, and a rectangle with no area overlaps nothing.
    pub fn overlaps(&self, other: &Bounds) -> bool {
        if self.size.x <= 0.0 || self.size.y <= 0.0 || other.size.x <= 0.0 || other.size.y <= 0.0 {
            return false;
        }

        self.left() < other.right() && other.left() < self.right() && self.top() < other.bottom() && other.top() < self.bottom()
    }

    /// Returns a copy shifted left by `offset`, used to project world space onto the screen.
    pub fn translated_x(&self, offset: f32) -> Bounds {
        Bounds::new(Vec2::new(self.position.x - offset, self.position.y), self.size)
    }
}
