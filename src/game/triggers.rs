//! Per-frame trigger resolution.
//!
//! Triggers run one after another against the live game state. A step may replace the level or move the player, and
//! every later step sees that change, so the order of [`TriggerStep`] variants is part of the game's behaviour.

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};
use tracing::{debug, info};

use crate::constants::enemy::STOMP_SCORE;
use crate::constants::player::STOMP_BOUNCE;
use crate::constants::VIEWPORT_HEIGHT;
use crate::entity::Entity;
use crate::game::state::GameStage;
use crate::game::Game;
use crate::level::LevelId;

/// A single predicate-and-effect step of the trigger pipeline, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, Display)]
#[strum(serialize_all = "snake_case")]
pub enum TriggerStep {
    /// Touching the forward portal moves to the second level.
    ForwardPortal,
    /// Touching the return portal moves back to the first level.
    ReturnPortal,
    /// Touching the artifact grants a life and removes it.
    Artifact,
    /// Touching the finish door wins the game.
    FinishDoor,
    /// Landing on an enemy defeats it; any other contact costs a life.
    Enemies,
    /// Dropping below the viewport costs a life.
    FallOff,
}

impl TriggerStep {
    /// Checks this step's condition and applies its effect to the game.
    pub fn apply(self, game: &mut Game) {
        match self {
            TriggerStep::ForwardPortal => {
                if game.level.portal.is_some_and(|portal| game.player.collides_with(&portal)) {
                    game.travel_to(LevelId::SECOND);
                }
            }
            TriggerStep::ReturnPortal => {
                if game.level.return_portal.is_some_and(|portal| game.player.collides_with(&portal)) {
                    game.travel_to(LevelId::FIRST);
                }
            }
            TriggerStep::Artifact => {
                if game.level.artifact.is_some_and(|artifact| game.player.collides_with(&artifact)) {
                    game.level.artifact = None;
                    game.lives += 1;
                    info!(lives = game.lives, "Artifact collected");
                }
            }
            TriggerStep::FinishDoor => {
                if game.level.finish_door.is_some_and(|door| game.player.collides_with(&door)) {
                    game.set_stage(GameStage::Win);
                }
            }
            TriggerStep::Enemies => resolve_enemy_contacts(game),
            TriggerStep::FallOff => {
                if game.player.bounds.top() > VIEWPORT_HEIGHT {
                    debug!(y = game.player.bounds.top(), "Player fell out of the world");
                    game.lose_life();
                }
            }
        }
    }
}

/// Checks every enemy present at the start of the step against the player.
///
/// The enemy list is snapshotted first so defeated enemies can be removed while iterating. The player is re-read for
/// each enemy, since a stomp or a lost life changes the player's state for the enemies that follow.
fn resolve_enemy_contacts(game: &mut Game) {
    let snapshot = game.level.enemies.clone();

    for enemy in snapshot.iter() {
        if !game.player.collides_with(&enemy.bounds()) {
            continue;
        }

        if game.player.velocity_y > 0.0 {
            if let Some(index) = game.level.enemies.iter().position(|e| e == enemy) {
                game.level.enemies.remove(index);
            }
            game.score += STOMP_SCORE;
            game.player.velocity_y = -STOMP_BOUNCE;
            debug!(score = game.score, "Enemy stomped");
        } else {
            debug!("Player hit by enemy");
            game.lose_life();
        }
    }
}

impl Game {
    /// Evaluates every trigger step in order.
    pub fn resolve_triggers(&mut self) {
        for step in TriggerStep::iter() {
            step.apply(self);
        }
    }
}
