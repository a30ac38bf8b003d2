use crossterm::event::{self, Event, KeyCode, KeyEventKind, MouseEventKind};
use std::io;
use std::time::Duration;

use crate::config::KeyBindings;
use crate::error::{GameError, GameResult};

/// Convert a view-space height into field space.
///
/// `displayed_height` is how tall the field is drawn in the view; the result
/// is `display_y * field_height / displayed_height`.
pub fn scale_to_field(display_y: f32, displayed_height: f32, field_height: f32) -> GameResult<f32> {
    if !displayed_height.is_finite() || displayed_height <= 0.0 {
        return Err(GameError::InvalidDisplaySize(displayed_height));
    }
    Ok(display_y * (field_height / displayed_height))
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputAction {
    Quit,
    Restart,
    MainMenu,
    PaddleUp,
    PaddleDown,
    /// Mouse moved over the terminal, in cell coordinates
    Pointer { column: u16, row: u16 },
}

/// Parse a key name from the config file ("Up", "Enter", "W", ...)
pub fn parse_key(name: &str) -> Option<KeyCode> {
    let trimmed = name.trim();
    let code = match trimmed.to_ascii_lowercase().as_str() {
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "space" => KeyCode::Char(' '),
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        _ => {
            let mut chars = trimmed.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c.to_ascii_lowercase()),
                _ => return None,
            }
        }
    };
    Some(code)
}

/// Key bindings resolved to key codes
#[derive(Debug, Clone)]
pub struct KeyMap {
    pub paddle_up: Vec<KeyCode>,
    pub paddle_down: Vec<KeyCode>,
    pub restart: Vec<KeyCode>,
    pub main_menu: Vec<KeyCode>,
    pub quit: Vec<KeyCode>,
    pub menu_up: Vec<KeyCode>,
    pub menu_down: Vec<KeyCode>,
    pub menu_select: Vec<KeyCode>,
    pub menu_back: Vec<KeyCode>,
}

impl KeyMap {
    /// Resolve the configured bindings. Arrow keys always move the paddle and
    /// Esc always quits, whatever the file says.
    pub fn from_bindings(bindings: &KeyBindings) -> Self {
        let resolve = |name: &str, extra: &[KeyCode]| {
            let mut codes: Vec<KeyCode> = parse_key(name).into_iter().collect();
            if codes.is_empty() {
                tracing::warn!(key = name, "unrecognized key binding");
            }
            for code in extra {
                if !codes.contains(code) {
                    codes.push(*code);
                }
            }
            codes
        };

        Self {
            paddle_up: resolve(&bindings.paddle_up, &[KeyCode::Up]),
            paddle_down: resolve(&bindings.paddle_down, &[KeyCode::Down]),
            restart: resolve(&bindings.restart, &[]),
            main_menu: resolve(&bindings.main_menu, &[]),
            quit: resolve(&bindings.quit, &[KeyCode::Esc]),
            menu_up: resolve(&bindings.menu_up, &[KeyCode::Char('k')]),
            menu_down: resolve(&bindings.menu_down, &[KeyCode::Char('j')]),
            menu_select: resolve(&bindings.menu_select, &[KeyCode::Char(' ')]),
            menu_back: resolve(&bindings.menu_back, &[]),
        }
    }

    fn matches(codes: &[KeyCode], code: KeyCode) -> bool {
        let code = match code {
            KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
            other => other,
        };
        codes.contains(&code)
    }

    /// Map a key press during a match to an action
    pub fn game_action(&self, code: KeyCode) -> Option<InputAction> {
        if Self::matches(&self.quit, code) {
            Some(InputAction::Quit)
        } else if Self::matches(&self.restart, code) {
            Some(InputAction::Restart)
        } else if Self::matches(&self.main_menu, code) {
            Some(InputAction::MainMenu)
        } else if Self::matches(&self.paddle_up, code) {
            Some(InputAction::PaddleUp)
        } else if Self::matches(&self.paddle_down, code) {
            Some(InputAction::PaddleDown)
        } else {
            None
        }
    }

    pub fn is_menu_up(&self, code: KeyCode) -> bool {
        Self::matches(&self.menu_up, code)
    }

    pub fn is_menu_down(&self, code: KeyCode) -> bool {
        Self::matches(&self.menu_down, code)
    }

    pub fn is_menu_select(&self, code: KeyCode) -> bool {
        Self::matches(&self.menu_select, code)
    }

    pub fn is_menu_back(&self, code: KeyCode) -> bool {
        Self::matches(&self.menu_back, code)
    }

    pub fn is_quit(&self, code: KeyCode) -> bool {
        Self::matches(&self.quit, code)
    }
}

/// Drain pending terminal events and return match actions.
/// Only the most recent pointer position is kept.
pub fn poll_input(keymap: &KeyMap) -> Result<Vec<InputAction>, io::Error> {
    let mut actions = Vec::new();
    let mut pointer = None;

    while event::poll(Duration::from_millis(0))? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let Some(action) = keymap.game_action(key.code) {
                    actions.push(action);
                }
            }
            Event::Mouse(mouse) => {
                if matches!(
                    mouse.kind,
                    MouseEventKind::Moved | MouseEventKind::Drag(_) | MouseEventKind::Down(_)
                ) {
                    pointer = Some(InputAction::Pointer {
                        column: mouse.column,
                        row: mouse.row,
                    });
                }
            }
            _ => {}
        }
    }

    actions.extend(pointer);
    Ok(actions)
}
