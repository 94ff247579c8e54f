//! Player entity implementation.
//!
//! The player walks left and right at a fixed speed, jumps with a single impulse while grounded, and is pulled down
//! by constant gravity. Platforms only stop the player while falling; they can be passed through from below or from
//! the side.

use glam::Vec2;
use tracing::trace;

use crate::constants::player::{GRAVITY, JUMP_STRENGTH, SIZE, SPAWN, SPEED};
use crate::entity::Entity;
use crate::events::HeldActions;
use crate::geometry::Bounds;

/// The player-controlled character.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub bounds: Bounds,
    pub speed: f32,
    /// Positive values move the player down the screen.
    pub velocity_y: f32,
    pub gravity: f32,
    pub jump_strength: f32,
    /// Set only when the last collision pass landed the player on a platform.
    pub on_ground: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self::new(SPAWN)
    }
}

impl Player {
    pub fn new(position: Vec2) -> Self {
        Self {
            bounds: Bounds::new(position, SIZE),
            speed: SPEED,
            velocity_y: 0.0,
            gravity: GRAVITY,
            jump_strength: JUMP_STRENGTH,
            on_ground: false,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.bounds.position
    }

    /// Places the player's top-left corner at `position` without touching its velocity.
    pub fn set_position(&mut self, position: Vec2) {
        self.bounds.position = position;
    }

    /// Advances the player by one frame: horizontal input, jump impulse, gravity, then landing on platforms.
    pub fn update(&mut self, held: HeldActions, platforms: &[Bounds]) {
        if held.contains(HeldActions::LEFT) {
            self.bounds.position.x -= self.speed;
        }
        if held.contains(HeldActions::RIGHT) {
            self.bounds.position.x += self.speed;
        }
        if held.contains(HeldActions::JUMP) && self.on_ground {
            self.velocity_y = -self.jump_strength;
            trace!("Player jumped");
        }

        self.velocity_y += self.gravity;
        self.bounds.position.y += self.velocity_y;

        self.land_on(platforms);
    }

    /// Resolves downward collisions against the platforms, recomputing `on_ground`.
    fn land_on(&mut self, platforms: &[Bounds]) {
        self.on_ground = false;
        for platform in platforms {
            if self.bounds.overlaps(platform) && self.velocity_y > 0.0 {
                self.bounds.set_bottom(platform.top());
                self.velocity_y = 0.0;
                self.on_ground = true;
            }
        }
    }
}

impl Entity for Player {
    fn bounds(&self) -> Bounds {
        self.bounds
    }
}
