use glam::Vec2;
use platformer::constants::player::{SPAWN, STARTING_LIVES};
use platformer::events::{GameCommand, HeldActions};
use platformer::game::state::{GameStage, MenuOption};
use platformer::game::Game;
use platformer::input::FrameInput;
use platformer::level::LevelId;
use pretty_assertions::assert_eq;
use speculoos::prelude::*;
use strum::EnumCount;

mod common;
use common::playing_game;

#[test]
fn test_new_game_starts_at_menu() {
    let game = Game::new();

    assert_eq!(game.stage, GameStage::MainMenu);
    assert_eq!(game.lives, STARTING_LIVES);
    assert_eq!(game.score, 0);
    assert_eq!(game.current_level(), LevelId::FIRST);
    assert_eq!(game.camera.scroll, 0.0);
    assert_eq!(game.player.position(), SPAWN);
    assert_eq!(game.menu.selected(), 0);
}

#[test]
fn test_stage_names_for_logging() {
    assert_eq!(GameStage::MainMenu.to_string(), "main_menu");
    assert_eq!(GameStage::GameOver.to_string(), "game_over");
}

mod menu_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn menu_up_wraps_to_last_option() {
        let mut game = Game::new();
        game.tick(&FrameInput::command(GameCommand::MenuUp));
        assert_eq!(game.menu.selected(), MenuOption::COUNT - 1);
        assert_eq!(game.menu.selected_option(), MenuOption::Exit);
    }

    #[test]
    fn menu_down_wraps_to_first_option() {
        let mut game = Game::new();
        game.tick(&FrameInput::command(GameCommand::MenuDown));
        assert_eq!(game.menu.selected_option(), MenuOption::Exit);

        game.tick(&FrameInput::command(GameCommand::MenuDown));
        assert_eq!(game.menu.selected(), 0);
        assert_eq!(game.menu.selected_option(), MenuOption::Start);
    }

    #[test]
    fn selection_always_in_range() {
        let mut game = Game::new();
        let sequence = [
            GameCommand::MenuUp,
            GameCommand::MenuUp,
            GameCommand::MenuDown,
            GameCommand::MenuUp,
            GameCommand::MenuDown,
            GameCommand::MenuDown,
            GameCommand::MenuDown,
        ];

        for command in sequence {
            game.tick(&FrameInput::command(command));
            assert_that(&game.menu.selected()).is_less_than(MenuOption::COUNT);
        }
    }

    #[test]
    fn confirm_start_begins_playing_in_the_same_frame() {
        let mut game = Game::new();
        let exit = game.tick(&FrameInput::command(GameCommand::Confirm));

        assert!(!exit);
        assert_eq!(game.stage, GameStage::Playing);
        // The world already advanced by one frame of gravity
        assert_eq!(game.player.position(), Vec2::new(SPAWN.x, SPAWN.y + 0.5));
    }

    #[test]
    fn confirm_exit_quits() {
        let mut game = Game::new();
        game.tick(&FrameInput::command(GameCommand::MenuDown));
        assert!(game.tick(&FrameInput::command(GameCommand::Confirm)));
    }

    #[test]
    fn labels() {
        assert_eq!(MenuOption::Start.label(), "Start Game");
        assert_eq!(MenuOption::Exit.label(), "Exit");
    }
}

mod stage_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn exit_command_quits_from_any_stage() {
        for stage in [GameStage::MainMenu, GameStage::Playing, GameStage::Win, GameStage::GameOver] {
            let mut game = Game::new();
            game.stage = stage;
            assert!(game.tick(&FrameInput::command(GameCommand::Exit)));
        }
    }

    #[test]
    fn world_is_frozen_outside_playing() {
        for stage in [GameStage::MainMenu, GameStage::Win, GameStage::GameOver] {
            let mut game = Game::new();
            game.stage = stage;
            game.tick(&FrameInput::held(HeldActions::RIGHT));

            assert_eq!(game.player.position(), SPAWN);
            assert_eq!(game.level.enemies[0].bounds.left(), 500.0);
        }
    }

    #[test]
    fn menu_commands_ignored_while_playing() {
        let mut game = playing_game();
        game.tick(&FrameInput::command(GameCommand::MenuDown));
        game.tick(&FrameInput::command(GameCommand::Confirm));

        assert_eq!(game.menu.selected(), 0);
        assert_eq!(game.stage, GameStage::Playing);
    }

    #[test]
    fn confirm_after_win_returns_to_menu_and_resets() {
        let mut game = playing_game();
        game.travel_to(LevelId::SECOND);
        game.score = 300;
        game.lives = 1;
        game.camera.scroll = 900.0;
        game.stage = GameStage::Win;

        game.tick(&FrameInput::command(GameCommand::Confirm));

        assert_eq!(game.stage, GameStage::MainMenu);
        assert_eq!(game.current_level(), LevelId::FIRST);
        assert_eq!(game.lives, STARTING_LIVES);
        assert_eq!(game.score, 0);
        assert_eq!(game.camera.scroll, 0.0);
        assert_eq!(game.player.position(), SPAWN);
        assert_eq!(game.level.enemies.len(), 2);
    }

    #[test]
    fn confirm_after_game_over_returns_to_menu_and_resets() {
        let mut game = playing_game();
        game.lives = 0;
        game.stage = GameStage::GameOver;

        game.tick(&FrameInput::command(GameCommand::Confirm));

        assert_eq!(game.stage, GameStage::MainMenu);
        assert_eq!(game.lives, STARTING_LIVES);
    }

    #[test]
    fn held_input_drives_player_while_playing() {
        let mut game = playing_game();
        game.tick(&FrameInput::held(HeldActions::RIGHT));
        assert_eq!(game.player.position().x, SPAWN.x + 5.0);
    }
}

mod lives_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn losing_last_life_ends_the_game() {
        let mut game = playing_game();
        game.lives = 1;
        game.lose_life();

        assert_eq!(game.lives, 0);
        assert_eq!(game.stage, GameStage::GameOver);
    }

    #[test]
    fn losing_a_life_respawns_without_resetting_progress() {
        let mut game = playing_game();
        game.travel_to(LevelId::SECOND);
        game.level.artifact = None;
        game.player.set_position(Vec2::new(1500.0, 300.0));
        game.player.velocity_y = 7.5;
        game.camera.scroll = 1000.0;

        game.lose_life();

        assert_eq!(game.lives, STARTING_LIVES - 1);
        assert_eq!(game.stage, GameStage::Playing);
        assert_eq!(game.player.position(), SPAWN);
        assert_eq!(game.player.velocity_y, 0.0);
        assert_eq!(game.camera.scroll, 0.0);
        assert_eq!(game.current_level(), LevelId::SECOND);
        assert_eq!(game.level.artifact, None);
    }

    #[test]
    fn defeated_enemies_stay_defeated_after_losing_a_life() {
        let mut game = playing_game();
        game.level.enemies.remove(0);

        game.lose_life();

        assert_eq!(game.level.enemies.len(), 1);
        assert_eq!(game.level.enemies[0].bounds.left(), 900.0);
    }

    #[test]
    fn three_falls_end_the_game_only_on_the_third() {
        let mut game = playing_game();

        for expected_lives in [2, 1] {
            game.player.set_position(Vec2::new(200.0, 700.0));
            game.update(HeldActions::empty());
            assert_eq!(game.lives, expected_lives);
            assert_eq!(game.stage, GameStage::Playing);
        }

        game.player.set_position(Vec2::new(200.0, 700.0));
        game.update(HeldActions::empty());
        assert_eq!(game.lives, 0);
        assert_eq!(game.stage, GameStage::GameOver);
    }
}
