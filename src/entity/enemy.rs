//! Patrolling enemy.

use glam::Vec2;

use crate::constants::enemy::{PATROL_MAX_X, PATROL_MIN_X, SIZE, SPEED};
use crate::entity::Entity;
use crate::geometry::Bounds;

/// An enemy walking back and forth between the world patrol bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub bounds: Bounds,
    /// Signed horizontal speed; positive walks right.
    pub speed: f32,
}

impl Enemy {
    pub fn new(position: Vec2) -> Self {
        Self {
            bounds: Bounds::new(position, SIZE),
            speed: SPEED,
        }
    }

    /// Moves one step and reverses direction once past either patrol bound.
    ///
    /// The position is not clamped, so the enemy may sit slightly outside the bound for a frame before walking back.
    pub fn update(&mut self) {
        self.bounds.position.x += self.speed;
        if self.bounds.left() < PATROL_MIN_X || self.bounds.right() > PATROL_MAX_X {
            self.speed = -self.speed;
        }
    }
}

impl Entity for Enemy {
    fn bounds(&self) -> Bounds {
        self.bounds
    }
}
