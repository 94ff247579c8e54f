//! Moving actors of the game world.

pub mod enemy;
pub mod player;

pub use self::enemy::Enemy;
pub use self::player::Player;

use crate::geometry::Bounds;

/// A trait for game objects that occupy a rectangle in the world.
pub trait Entity {
    /// Returns the current world-space bounds of the entity.
    fn bounds(&self) -> Bounds;

    /// Returns true if the entity overlaps the given rectangle.
    fn collides_with(&self, other: &Bounds) -> bool {
        self.bounds().overlaps(other)
    }
}
