//! The drawing surface the game paints onto.

use glam::Vec2;
use sdl2::gfx::primitives::DrawRenderer;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Canvas};
use sdl2::video::Window;

use crate::error::RenderError;
use crate::geometry::Bounds;

/// Width and height of a glyph in the SDL2_gfx bitmap font, before scaling.
pub const GLYPH_SIZE: f32 = 8.0;

/// A 2D surface accepting screen-space draw calls.
pub trait DrawSurface {
    /// Fills the entire surface with an opaque color.
    fn fill_background(&mut self, color: Color) -> Result<(), RenderError>;

    /// Fills a screen-space rectangle.
    fn fill_bounds(&mut self, bounds: Bounds, color: Color) -> Result<(), RenderError>;

    /// Blends a translucent color over the entire surface.
    fn fill_overlay(&mut self, color: Color, alpha: u8) -> Result<(), RenderError>;

    /// Draws text with its top-left corner at `position`, magnified by `scale`.
    fn draw_text(&mut self, text: &str, position: Vec2, scale: f32, color: Color) -> Result<(), RenderError>;

    /// Measures text as [`DrawSurface::draw_text`] would lay it out.
    fn text_size(&self, text: &str, scale: f32) -> Vec2 {
        Vec2::new(text.chars().count() as f32, 1.0) * GLYPH_SIZE * scale
    }
}

fn to_sdl_rect(bounds: Bounds) -> Rect {
    Rect::new(
        bounds.left().round() as i32,
        bounds.top().round() as i32,
        bounds.width().round().max(0.0) as u32,
        bounds.height().round().max(0.0) as u32,
    )
}

impl DrawSurface for Canvas<Window> {
    fn fill_background(&mut self, color: Color) -> Result<(), RenderError> {
        self.set_draw_color(color);
        self.clear();
        Ok(())
    }

    fn fill_bounds(&mut self, bounds: Bounds, color: Color) -> Result<(), RenderError> {
        self.set_draw_color(color);
        self.fill_rect(to_sdl_rect(bounds)).map_err(RenderError::FillFailed)
    }

    fn fill_overlay(&mut self, color: Color, alpha: u8) -> Result<(), RenderError> {
        self.set_blend_mode(BlendMode::Blend);
        self.set_draw_color(Color::RGBA(color.r, color.g, color.b, alpha));
        let result = self.fill_rect(None).map_err(RenderError::FillFailed);
        self.set_blend_mode(BlendMode::None);
        result
    }

    fn draw_text(&mut self, text: &str, position: Vec2, scale: f32, color: Color) -> Result<(), RenderError> {
        // The gfx font has a fixed glyph size, so magnify through the renderer scale and divide the position back out
        let (scale_x, scale_y) = self.scale();
        self.set_scale(scale_x * scale, scale_y * scale)
            .map_err(RenderError::ScaleFailed)?;

        let result = self
            .string(
                (position.x / scale).round() as i16,
                (position.y / scale).round() as i16,
                text,
                color,
            )
            .map_err(|reason| RenderError::TextFailed {
                text: text.to_string(),
                reason,
            });

        self.set_scale(scale_x, scale_y).map_err(RenderError::ScaleFailed)?;
        result
    }
}
