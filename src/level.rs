//! Level construction.
//!
//! Levels are built fresh from their number every time they are entered. Every level shares the same row of
//! platforms; the markers and enemies depend on the level number, and numbers without dedicated content produce a
//! level with platforms only.

use std::fmt;

use glam::Vec2;
use smallvec::SmallVec;

use crate::constants::level::{
    ARTIFACT, ARTIFACT_SIZE, FINISH_DOOR, FIRST_LEVEL_ENEMIES, MARKER_SIZE, PLATFORM_COUNT, PLATFORM_SIZE, PLATFORM_SPACING,
    PLATFORM_Y, PORTAL, RETURN_PORTAL,
};
use crate::entity::Enemy;
use crate::geometry::Bounds;

/// Identifies a level by its number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LevelId(pub u32);

impl LevelId {
    pub const FIRST: LevelId = LevelId(1);
    pub const SECOND: LevelId = LevelId(2);
}

impl fmt::Display for LevelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The contents of a single level: static platforms plus the interactive markers and enemies.
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    pub id: LevelId,
    platforms: Vec<Bounds>,
    /// Leads forward into the second level.
    pub portal: Option<Bounds>,
    /// Leads back to the first level.
    pub return_portal: Option<Bounds>,
    /// Grants an extra life; cleared once collected.
    pub artifact: Option<Bounds>,
    /// Touching this wins the game.
    pub finish_door: Option<Bounds>,
    pub enemies: SmallVec<[Enemy; 2]>,
}

impl Level {
    pub fn new(id: LevelId) -> Self {
        let platforms = (0..PLATFORM_COUNT)
            .map(|i| Bounds::new(Vec2::new(i as f32 * PLATFORM_SPACING, PLATFORM_Y), PLATFORM_SIZE))
            .collect();

        let mut level = Self {
            id,
            platforms,
            portal: None,
            return_portal: None,
            artifact: None,
            finish_door: None,
            enemies: SmallVec::new(),
        };

        match id {
            LevelId::FIRST => {
                level.portal = Some(Bounds::new(PORTAL, MARKER_SIZE));
                level.finish_door = Some(Bounds::new(FINISH_DOOR, MARKER_SIZE));
                level.enemies = FIRST_LEVEL_ENEMIES.iter().copied().map(Enemy::new).collect();
            }
            LevelId::SECOND => {
                level.return_portal = Some(Bounds::new(RETURN_PORTAL, MARKER_SIZE));
                level.artifact = Some(Bounds::new(ARTIFACT, ARTIFACT_SIZE));
            }
            _ => {}
        }

        level
    }

    pub fn platforms(&self) -> &[Bounds] {
        &self.platforms
    }

    /// Advances every enemy by one frame.
    pub fn update(&mut self) {
        for enemy in self.enemies.iter_mut() {
            enemy.update();
        }
    }
}
