// Menu input handling

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use std::io;
use std::time::Duration;

use super::state::{MenuItem, MenuState};
use crate::game::{Difficulty, KeyMap};

/// Menu action result
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuAction {
    /// Continue in menu
    None,
    /// Start a match at this difficulty
    StartGame(Difficulty),
    /// Exit application
    Quit,
}

/// Handle menu input and return the next action
pub fn handle_menu_input(menu_state: &mut MenuState, keymap: &KeyMap) -> Result<MenuAction, io::Error> {
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(handle_key_press(menu_state, keymap, key.code));
            }
        }
    }

    Ok(MenuAction::None)
}

pub fn handle_key_press(menu_state: &mut MenuState, keymap: &KeyMap, key_code: KeyCode) -> MenuAction {
    if keymap.is_menu_up(key_code) {
        menu_state.select_previous();
        MenuAction::None
    } else if keymap.is_menu_down(key_code) {
        menu_state.select_next();
        MenuAction::None
    } else if keymap.is_menu_select(key_code) {
        match menu_state.selected_item() {
            MenuItem::Play(difficulty) => MenuAction::StartGame(difficulty),
            MenuItem::Quit => MenuAction::Quit,
        }
    } else if keymap.is_quit(key_code) || keymap.is_menu_back(key_code) {
        MenuAction::Quit
    } else {
        // Number keys pick a difficulty directly
        match key_code {
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                MenuAction::StartGame(Difficulty::all()[index])
            }
            _ => MenuAction::None,
        }
    }
}
