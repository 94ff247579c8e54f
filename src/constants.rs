//! This module contains all the constants used in the game.

use std::time::Duration;

use glam::{UVec2, Vec2};

/// Target frame rate of the main loop.
pub const FPS: u32 = 60;

pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / FPS as f64) as u64);

/// The title of the game window.
pub const WINDOW_TITLE: &str = "Platformer";

/// The logical size of the viewport, in world units.
pub const VIEWPORT_SIZE: UVec2 = UVec2::new(800, 600);
pub const VIEWPORT_WIDTH: f32 = VIEWPORT_SIZE.x as f32;
pub const VIEWPORT_HEIGHT: f32 = VIEWPORT_SIZE.y as f32;

/// Player tuning, in world units per frame.
pub mod player {
    use glam::Vec2;

    pub const SIZE: Vec2 = Vec2::new(40.0, 40.0);
    pub const SPAWN: Vec2 = Vec2::new(100.0, 400.0);
    pub const SPEED: f32 = 5.0;
    pub const GRAVITY: f32 = 0.5;
    pub const JUMP_STRENGTH: f32 = 10.0;
    /// Upward impulse applied after landing on an enemy.
    pub const STOMP_BOUNCE: f32 = 10.0;
    pub const STARTING_LIVES: i32 = 3;
}

/// Enemy tuning and patrol limits.
pub mod enemy {
    use glam::Vec2;

    pub const SIZE: Vec2 = Vec2::new(40.0, 40.0);
    pub const SPEED: f32 = 2.0;
    /// World-space X range enemies patrol within before turning around.
    pub const PATROL_MIN_X: f32 = 0.0;
    pub const PATROL_MAX_X: f32 = 2000.0;
    /// Points awarded for stomping an enemy.
    pub const STOMP_SCORE: u32 = 100;
}

/// Static level geometry and marker placement.
pub mod level {
    use glam::Vec2;

    pub const PLATFORM_COUNT: usize = 10;
    pub const PLATFORM_SPACING: f32 = 250.0;
    pub const PLATFORM_Y: f32 = 500.0;
    pub const PLATFORM_SIZE: Vec2 = Vec2::new(150.0, 20.0);

    pub const MARKER_SIZE: Vec2 = Vec2::new(40.0, 40.0);
    pub const PORTAL: Vec2 = Vec2::new(1800.0, 460.0);
    pub const FINISH_DOOR: Vec2 = Vec2::new(2000.0, 460.0);
    pub const RETURN_PORTAL: Vec2 = Vec2::new(50.0, 460.0);

    pub const ARTIFACT: Vec2 = Vec2::new(1950.0, 450.0);
    pub const ARTIFACT_SIZE: Vec2 = Vec2::new(30.0, 30.0);

    pub const FIRST_LEVEL_ENEMIES: [Vec2; 2] = [Vec2::new(500.0, 460.0), Vec2::new(900.0, 460.0)];

    /// Horizontal gap left between the player and a portal after travelling through one.
    pub const PORTAL_EXIT_GAP: f32 = 10.0;
}

/// Screen layout for the menu, HUD and banners.
pub mod layout {
    use glam::Vec2;

    pub const MENU_TOP: f32 = 250.0;
    pub const MENU_SPACING: f32 = 50.0;
    pub const HUD_LIVES: Vec2 = Vec2::new(10.0, 10.0);
    pub const HUD_SCORE: Vec2 = Vec2::new(10.0, 40.0);
    /// Alpha of the full-screen overlay behind win/lose banners.
    pub const OVERLAY_ALPHA: u8 = 220;

    /// Integer scale factors for the 8x8 bitmap font.
    pub const HUD_TEXT_SCALE: f32 = 2.0;
    pub const MENU_TEXT_SCALE: f32 = 3.0;
    pub const BANNER_TEXT_SCALE: f32 = 3.0;
}

/// Left and right edges of the camera dead zone, in screen space.
pub const CAMERA_DEAD_ZONE: Vec2 = Vec2::new(VIEWPORT_WIDTH / 4.0, VIEWPORT_WIDTH * 3.0 / 4.0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loop_time() {
        // 60 FPS = 16.67ms per frame
        let expected_nanos = (1_000_000_000.0 / 60.0) as u64;
        assert_eq!(LOOP_TIME.as_nanos() as u64, expected_nanos);
    }

    #[test]
    fn test_viewport_size() {
        assert_eq!(VIEWPORT_SIZE, UVec2::new(800, 600));
        assert_eq!(VIEWPORT_WIDTH, 800.0);
        assert_eq!(VIEWPORT_HEIGHT, 600.0);
    }

    #[test]
    fn test_camera_dead_zone() {
        assert_eq!(CAMERA_DEAD_ZONE.x, 200.0);
        assert_eq!(CAMERA_DEAD_ZONE.y, 600.0);
    }

    #[test]
    fn test_platforms_span_world() {
        let last_right = (level::PLATFORM_COUNT - 1) as f32 * level::PLATFORM_SPACING + level::PLATFORM_SIZE.x;
        assert_eq!(last_right, 2400.0);
        assert!(last_right > enemy::PATROL_MAX_X);
    }

    #[test]
    fn test_enemies_spawn_inside_patrol_bounds() {
        for spawn in level::FIRST_LEVEL_ENEMIES {
            assert!(spawn.x >= enemy::PATROL_MIN_X);
            assert!(spawn.x + enemy::SIZE.x <= enemy::PATROL_MAX_X);
        }
    }

    #[test]
    fn test_markers_rest_on_platform_height() {
        // Portals, the door and enemies sit directly on top of the platform row
        for marker in [level::PORTAL, level::FINISH_DOOR, level::RETURN_PORTAL] {
            assert_eq!(marker.y + level::MARKER_SIZE.y, level::PLATFORM_Y);
        }
    }

    #[test]
    fn test_stomp_bounce_matches_jump() {
        assert_eq!(player::STOMP_BOUNCE, player::JUMP_STRENGTH);
    }
}
