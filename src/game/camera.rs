use crate::constants::CAMERA_DEAD_ZONE;
use crate::geometry::Bounds;

/// Horizontal dead-zone camera.
///
/// The scroll only changes when the tracked X leaves the dead zone between a quarter and three quarters of the
/// viewport width, and then snaps so that it sits exactly on the crossed border. It never scrolls below zero.
#[derive(Debug, Default, PartialEq, Clone, Copy)]
pub struct Camera {
    pub scroll: f32,
}

impl Camera {
    pub fn follow(&mut self, x: f32) {
        let (left_border, right_border) = (CAMERA_DEAD_ZONE.x, CAMERA_DEAD_ZONE.y);
        let screen_x = x - self.scroll;

        if screen_x < left_border {
            self.scroll = (x - left_border).max(0.0);
        } else if screen_x > right_border {
            self.scroll = x - right_border;
        }
    }

    pub fn reset(&mut self) {
        self.scroll = 0.0;
    }

    /// Projects world-space bounds into screen space. Only X is affected.
    pub fn to_screen(&self, bounds: Bounds) -> Bounds {
        bounds.translated_x(self.scroll)
    }
}
