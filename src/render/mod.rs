//! Frame painting.
//!
//! Everything here is expressed against [`DrawSurface`], so the same painter drives the SDL canvas in the game and a
//! recording surface in tests. World-space rectangles are shifted by the camera scroll on X only.

use glam::Vec2;
use sdl2::pixels::Color;

use crate::constants::layout::{
    BANNER_TEXT_SCALE, HUD_LIVES, HUD_SCORE, HUD_TEXT_SCALE, MENU_SPACING, MENU_TEXT_SCALE, MENU_TOP, OVERLAY_ALPHA,
};
use crate::constants::{VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
use crate::entity::{Enemy, Player};
use crate::error::RenderError;
use crate::game::camera::Camera;
use crate::game::state::{GameStage, Menu};
use crate::game::Game;
use crate::level::Level;

pub mod surface;

pub use self::surface::{DrawSurface, GLYPH_SIZE};

pub mod palette {
    use sdl2::pixels::Color;

    pub const SKY: Color = Color::RGB(200, 200, 255);
    pub const PLATFORM: Color = Color::RGB(0, 200, 100);
    pub const PLAYER: Color = Color::RGB(0, 128, 255);
    pub const ENEMY: Color = Color::RGB(200, 0, 0);
    pub const PORTAL: Color = Color::RGB(255, 255, 0);
    pub const ARTIFACT: Color = Color::RGB(255, 0, 255);
    pub const FINISH_DOOR: Color = Color::RGB(100, 100, 100);
    pub const TEXT: Color = Color::RGB(0, 0, 0);
    pub const MENU_BACKGROUND: Color = Color::RGB(0, 0, 0);
    pub const MENU_OPTION: Color = Color::RGB(255, 255, 255);
    pub const MENU_SELECTED: Color = Color::RGB(255, 255, 0);
    pub const WIN_OVERLAY: Color = SKY;
    pub const LOSE_OVERLAY: Color = ENEMY;
}

pub const WIN_MESSAGE: &str = "YOU WIN! Press Enter";
pub const LOSE_MESSAGE: &str = "YOU LOSE! Press Enter";

/// Paints a complete frame for the current stage.
pub fn draw_frame<S: DrawSurface + ?Sized>(surface: &mut S, game: &Game) -> Result<(), RenderError> {
    if game.stage == GameStage::MainMenu {
        return draw_menu(surface, &game.menu);
    }

    draw_level(surface, &game.level, &game.camera)?;
    draw_player(surface, &game.player, &game.camera)?;
    draw_hud(surface, game.lives, game.score)?;

    match game.stage {
        GameStage::Win => draw_banner(surface, WIN_MESSAGE, palette::WIN_OVERLAY),
        GameStage::GameOver => draw_banner(surface, LOSE_MESSAGE, palette::LOSE_OVERLAY),
        _ => Ok(()),
    }
}

/// Draws the background, platforms, markers and enemies of a level.
pub fn draw_level<S: DrawSurface + ?Sized>(surface: &mut S, level: &Level, camera: &Camera) -> Result<(), RenderError> {
    surface.fill_background(palette::SKY)?;

    for platform in level.platforms() {
        surface.fill_bounds(camera.to_screen(*platform), palette::PLATFORM)?;
    }

    let markers = [
        (level.portal, palette::PORTAL),
        (level.return_portal, palette::PORTAL),
        (level.artifact, palette::ARTIFACT),
        (level.finish_door, palette::FINISH_DOOR),
    ];
    for (bounds, color) in markers {
        if let Some(bounds) = bounds {
            surface.fill_bounds(camera.to_screen(bounds), color)?;
        }
    }

    for enemy in level.enemies.iter() {
        draw_enemy(surface, enemy, camera)?;
    }

    Ok(())
}

fn draw_enemy<S: DrawSurface + ?Sized>(surface: &mut S, enemy: &Enemy, camera: &Camera) -> Result<(), RenderError> {
    surface.fill_bounds(camera.to_screen(enemy.bounds), palette::ENEMY)
}

pub fn draw_player<S: DrawSurface + ?Sized>(surface: &mut S, player: &Player, camera: &Camera) -> Result<(), RenderError> {
    surface.fill_bounds(camera.to_screen(player.bounds), palette::PLAYER)
}

/// Draws the lives and score counters in the top-left corner.
pub fn draw_hud<S: DrawSurface + ?Sized>(surface: &mut S, lives: i32, score: u32) -> Result<(), RenderError> {
    surface.draw_text(&format!("Lives: {lives}"), HUD_LIVES, HUD_TEXT_SCALE, palette::TEXT)?;
    surface.draw_text(&format!("Score: {score}"), HUD_SCORE, HUD_TEXT_SCALE, palette::TEXT)
}

/// Draws the main menu with the selected option highlighted.
pub fn draw_menu<S: DrawSurface + ?Sized>(surface: &mut S, menu: &Menu) -> Result<(), RenderError> {
    surface.fill_background(palette::MENU_BACKGROUND)?;

    for (i, (option, selected)) in menu.options().enumerate() {
        let color = if selected { palette::MENU_SELECTED } else { palette::MENU_OPTION };
        let center = Vec2::new(VIEWPORT_WIDTH / 2.0, MENU_TOP + i as f32 * MENU_SPACING);
        draw_text_centered(surface, option.label(), center, MENU_TEXT_SCALE, color)?;
    }

    Ok(())
}

/// Covers the playfield with a translucent overlay and a centered message.
pub fn draw_banner<S: DrawSurface + ?Sized>(surface: &mut S, message: &str, overlay: Color) -> Result<(), RenderError> {
    surface.fill_overlay(overlay, OVERLAY_ALPHA)?;
    let center = Vec2::new(VIEWPORT_WIDTH / 2.0, VIEWPORT_HEIGHT / 2.0);
    draw_text_centered(surface, message, center, BANNER_TEXT_SCALE, palette::TEXT)
}

fn draw_text_centered<S: DrawSurface + ?Sized>(
    surface: &mut S,
    text: &str,
    center: Vec2,
    scale: f32,
    color: Color,
) -> Result<(), RenderError> {
    let size = surface.text_size(text, scale);
    surface.draw_text(text, center - size / 2.0, scale, color)
}
