// Menu state management

use crate::game::Difficulty;

/// Top-level screen the host is showing
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppState {
    /// Difficulty selection
    Menu,
    /// A match (serving, rallying or showing its result)
    Playing,
    /// Graceful shutdown
    Exiting,
}

/// Menu items
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuItem {
    Play(Difficulty),
    Quit,
}

impl MenuItem {
    pub fn display_text(&self) -> &str {
        match self {
            MenuItem::Play(difficulty) => difficulty.display_name(),
            MenuItem::Quit => "QUIT",
        }
    }

    pub fn description(&self) -> &str {
        match self {
            MenuItem::Play(difficulty) => difficulty.description(),
            MenuItem::Quit => "Leave the game",
        }
    }

    /// Get all menu items in order
    pub fn all() -> Vec<MenuItem> {
        Difficulty::all()
            .into_iter()
            .map(MenuItem::Play)
            .chain(std::iter::once(MenuItem::Quit))
            .collect()
    }
}

/// Menu state
pub struct MenuState {
    /// Currently selected menu item index
    pub selected_index: usize,
    /// All menu items
    pub items: Vec<MenuItem>,
}

impl MenuState {
    /// Menu with `preselected` highlighted
    pub fn new(preselected: Difficulty) -> Self {
        let items = MenuItem::all();
        let selected_index = items
            .iter()
            .position(|item| *item == MenuItem::Play(preselected))
            .unwrap_or(0);
        Self {
            selected_index,
            items,
        }
    }

    pub fn selected_item(&self) -> MenuItem {
        self.items[self.selected_index]
    }

    /// Move selection up, wrapping to the bottom
    pub fn select_previous(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        } else {
            self.selected_index = self.items.len() - 1;
        }
    }

    /// Move selection down, wrapping to the top
    pub fn select_next(&mut self) {
        if self.selected_index < self.items.len() - 1 {
            self.selected_index += 1;
        } else {
            self.selected_index = 0;
        }
    }

    /// Highlight the difficulty that was just played
    pub fn remember(&mut self, difficulty: Difficulty) {
        if let Some(index) = self
            .items
            .iter()
            .position(|item| *item == MenuItem::Play(difficulty))
        {
            self.selected_index = index;
        }
    }
}

impl Default for MenuState {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}
