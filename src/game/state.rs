use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{Display, EnumCount, EnumIter};

/// The overall stage of the game; it alone decides which update and draw logic runs each frame.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Display)]
#[strum(serialize_all = "snake_case")]
pub enum GameStage {
    /// The title menu is shown and gameplay is frozen.
    #[default]
    MainMenu,
    /// The main gameplay loop is active.
    Playing,
    /// The player reached the finish door.
    Win,
    /// The player ran out of lives.
    GameOver,
}

/// An entry of the main menu, in display order.
#[derive(Debug, PartialEq, Eq, Clone, Copy, EnumIter, EnumCount)]
pub enum MenuOption {
    Start,
    Exit,
}

impl MenuOption {
    pub fn label(self) -> &'static str {
        match self {
            MenuOption::Start => "Start Game",
            MenuOption::Exit => "Exit",
        }
    }
}

/// Selection state of the main menu. The selected index always stays within the option count.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct Menu {
    selected: usize,
}

impl Menu {
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_option(&self) -> MenuOption {
        MenuOption::iter().nth(self.selected).unwrap_or(MenuOption::Start)
    }

    /// Moves the selection up, wrapping from the first option to the last.
    pub fn previous(&mut self) {
        self.selected = (self.selected + MenuOption::COUNT - 1) % MenuOption::COUNT;
    }

    /// Moves the selection down, wrapping from the last option to the first.
    pub fn next(&mut self) {
        self.selected = (self.selected + 1) % MenuOption::COUNT;
    }

    /// Iterates over every option alongside whether it is currently selected.
    pub fn options(&self) -> impl Iterator<Item = (MenuOption, bool)> + '_ {
        MenuOption::iter().enumerate().map(|(i, option)| (option, i == self.selected))
    }
}
