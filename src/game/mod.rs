//! This module contains the main game logic and state.

use glam::Vec2;
use tracing::{debug, info};

use crate::constants::level::PORTAL_EXIT_GAP;
use crate::constants::player::{SPAWN, STARTING_LIVES};
use crate::entity::Player;
use crate::events::{GameCommand, HeldActions};
use crate::input::FrameInput;
use crate::level::{Level, LevelId};

use self::camera::Camera;
use self::state::{GameStage, Menu, MenuOption};

pub mod camera;
pub mod state;
pub mod triggers;

/// The `Game` struct owns the whole simulation: the player, the current level, the camera and the session counters.
///
/// It is driven once per frame through [`Game::tick`], which applies the frame's commands and, while playing,
/// advances the world in a fixed order: player, enemies, triggers, camera.
#[derive(Debug, Clone)]
pub struct Game {
    pub player: Player,
    pub level: Level,
    pub camera: Camera,
    pub lives: i32,
    pub score: u32,
    pub stage: GameStage,
    pub menu: Menu,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a fresh session sitting at the main menu.
    pub fn new() -> Self {
        Self {
            player: Player::default(),
            level: Level::new(LevelId::FIRST),
            camera: Camera::default(),
            lives: STARTING_LIVES,
            score: 0,
            stage: GameStage::MainMenu,
            menu: Menu::default(),
        }
    }

    /// Restores the player, level, camera, lives and score to their starting values.
    ///
    /// The stage and menu selection are left untouched.
    pub fn reset(&mut self) {
        info!("Resetting game session");
        self.player = Player::default();
        self.level = Level::new(LevelId::FIRST);
        self.camera.reset();
        self.lives = STARTING_LIVES;
        self.score = 0;
    }

    pub fn current_level(&self) -> LevelId {
        self.level.id
    }

    /// Runs one frame of game logic.
    ///
    /// # Returns
    ///
    /// `true` if the game should terminate (exit command received), `false` to continue
    pub fn tick(&mut self, input: &FrameInput) -> bool {
        for &command in input.commands.iter() {
            if self.handle_command(command) {
                info!("Exit requested. Exiting...");
                return true;
            }
        }

        if self.stage == GameStage::Playing {
            self.update(input.held);
        }

        false
    }

    /// Applies a single command to the stage machine, returning true if it asks the process to exit.
    pub fn handle_command(&mut self, command: GameCommand) -> bool {
        match (self.stage, command) {
            (_, GameCommand::Exit) => return true,
            (GameStage::MainMenu, GameCommand::MenuUp) => {
                self.menu.previous();
                debug!(selected = self.menu.selected(), "Menu selection moved up");
            }
            (GameStage::MainMenu, GameCommand::MenuDown) => {
                self.menu.next();
                debug!(selected = self.menu.selected(), "Menu selection moved down");
            }
            (GameStage::MainMenu, GameCommand::Confirm) => match self.menu.selected_option() {
                MenuOption::Start => self.set_stage(GameStage::Playing),
                MenuOption::Exit => return true,
            },
            (GameStage::Win | GameStage::GameOver, GameCommand::Confirm) => {
                self.set_stage(GameStage::MainMenu);
                self.reset();
            }
            _ => {}
        }

        false
    }

    /// Advances the world by one frame. Only meaningful while playing.
    pub fn update(&mut self, held: HeldActions) {
        self.player.update(held, self.level.platforms());
        self.level.update();
        self.resolve_triggers();
        self.camera.follow(self.player.position().x);
    }

    pub fn set_stage(&mut self, stage: GameStage) {
        if self.stage != stage {
            info!(from = %self.stage, to = %stage, "Game stage changed");
            self.stage = stage;
        }
    }

    /// Takes a life away, ending the game when none remain.
    ///
    /// Otherwise the player respawns at the start of the world with the camera reset. The current level, its
    /// remaining enemies and a collected artifact are all kept as they are.
    pub fn lose_life(&mut self) {
        self.lives -= 1;
        debug!(lives = self.lives, "Player lost a life");

        if self.lives <= 0 {
            self.set_stage(GameStage::GameOver);
        } else {
            self.player.set_position(SPAWN);
            self.player.velocity_y = 0.0;
            self.camera.reset();
        }
    }

    /// Replaces the current level with a freshly built one and places the player next to the portal that leads back.
    pub fn travel_to(&mut self, id: LevelId) {
        info!(from = %self.level.id, to = %id, "Switching level");
        self.level = Level::new(id);

        let size = self.player.bounds.size;
        let arrival = match id {
            LevelId::SECOND => self
                .level
                .return_portal
                .map(|portal| Vec2::new(portal.right() + PORTAL_EXIT_GAP, portal.top() - size.y)),
            LevelId::FIRST => self
                .level
                .portal
                .map(|portal| Vec2::new(portal.left() - PORTAL_EXIT_GAP - size.x, portal.top() - size.y)),
            _ => None,
        };

        self.player.set_position(arrival.unwrap_or(SPAWN));
    }
}
