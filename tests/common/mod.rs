#![allow(dead_code)]

use glam::Vec2;
use platformer::error::RenderError;
use platformer::game::state::GameStage;
use platformer::game::Game;
use platformer::geometry::Bounds;
use platformer::render::DrawSurface;
use sdl2::pixels::Color;

/// A draw call captured by [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Background(Color),
    Rect(Bounds, Color),
    Overlay(Color, u8),
    Text { text: String, position: Vec2, color: Color },
}

/// A surface that records draw calls instead of rendering them.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn rects_with(&self, color: Color) -> Vec<Bounds> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Rect(bounds, c) if *c == color => Some(*bounds),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl DrawSurface for RecordingSurface {
    fn fill_background(&mut self, color: Color) -> Result<(), RenderError> {
        self.calls.push(DrawCall::Background(color));
        Ok(())
    }

    fn fill_bounds(&mut self, bounds: Bounds, color: Color) -> Result<(), RenderError> {
        self.calls.push(DrawCall::Rect(bounds, color));
        Ok(())
    }

    fn fill_overlay(&mut self, color: Color, alpha: u8) -> Result<(), RenderError> {
        self.calls.push(DrawCall::Overlay(color, alpha));
        Ok(())
    }

    fn draw_text(&mut self, text: &str, position: Vec2, _scale: f32, color: Color) -> Result<(), RenderError> {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            position,
            color,
        });
        Ok(())
    }
}

/// Creates a game that has already left the main menu.
pub fn playing_game() -> Game {
    let mut game = Game::new();
    game.stage = GameStage::Playing;
    game
}

pub fn rect(x: f32, y: f32, w: f32, h: f32) -> Bounds {
    Bounds::new(Vec2::new(x, y), Vec2::new(w, h))
}
