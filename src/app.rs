//! Terminal host: switches between the difficulty menu and a running match.
//!
//! The host owns the only [`Session`] and drives it once per frame with the
//! measured frame delta. Everything game-related goes through the session's
//! commands, so this loop only translates terminal events and draws.

use std::io;
use std::time::Instant;

use anyhow::Result;
use ratatui::{backend::Backend, layout::Rect, Terminal};
use tracing::{debug, info};

use crate::clock::FrameClock;
use crate::config::Config;
use crate::game::{poll_input, InputAction, KeyMap, MatchPhase, Session};
use crate::menu::{self, AppState, MenuAction, MenuState};
use crate::ui::{self, OverlayMessage};

/// How a match ended from the host's point of view
#[derive(Debug, Clone, Copy, PartialEq)]
enum MatchExit {
    Menu,
    Quit,
}

/// Run the menu/match loop until the user quits
pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, config: &Config) -> Result<()> {
    let keymap = KeyMap::from_bindings(&config.keybindings);
    let mut session = Session::new(config);
    let mut menu_state = MenuState::new(config.ai.difficulty);
    let mut app_state = AppState::Menu;

    loop {
        match app_state {
            AppState::Menu => {
                terminal.draw(|f| menu::render_menu(f, &menu_state))?;
                match menu::handle_menu_input(&mut menu_state, &keymap)? {
                    MenuAction::None => {}
                    MenuAction::StartGame(difficulty) => {
                        menu_state.remember(difficulty);
                        session.start_match(difficulty);
                        app_state = AppState::Playing;
                    }
                    MenuAction::Quit => app_state = AppState::Exiting,
                }
            }
            AppState::Playing => {
                app_state = match run_match(terminal, config, &keymap, &mut session)? {
                    MatchExit::Menu => AppState::Menu,
                    MatchExit::Quit => AppState::Exiting,
                };
            }
            AppState::Exiting => {
                info!("exiting");
                return Ok(());
            }
        }
    }
}

/// Drive an already started match until the user leaves it
fn run_match<B: Backend>(
    terminal: &mut Terminal<B>,
    config: &Config,
    keymap: &KeyMap,
    session: &mut Session,
) -> Result<MatchExit> {
    let mut clock = FrameClock::new(config.display.target_fps);
    let mut last_area = Rect::default();
    let key_step = config.physics.paddle_key_step;

    loop {
        let frame_start = Instant::now();

        let area = terminal_area(terminal)?;
        if area != last_area {
            last_area = area;
            sync_field_size(session, area, config.physics.field_height);
        }

        for action in poll_input(keymap)? {
            match action {
                InputAction::Quit => {
                    session.return_to_menu();
                    return Ok(MatchExit::Quit);
                }
                InputAction::MainMenu => {
                    session.return_to_menu();
                    return Ok(MatchExit::Menu);
                }
                InputAction::Restart => {
                    if matches!(session.phase(), MatchPhase::GameOver { .. }) {
                        session.restart_match();
                        clock.restart();
                    }
                }
                InputAction::PaddleUp => session.nudge_player_target(-key_step),
                InputAction::PaddleDown => session.nudge_player_target(key_step),
                InputAction::Pointer { column, row } => {
                    if let Some((display_y, displayed_height)) =
                        ui::pointer_to_display(area, column, row)
                    {
                        if let Err(e) = session.pointer_moved(display_y, displayed_height) {
                            debug!(error = %e, "ignored pointer event");
                        }
                    }
                }
            }
        }

        let events = session.tick(clock.tick());
        if events.any() {
            debug!(?events, score = ?session.score(), "tick events");
        }

        let overlay = overlay_for(session, area);
        terminal.draw(|f| ui::render(f, session, &config.display, overlay.as_ref()))?;

        clock.limit_frame_rate(frame_start);
    }
}

fn terminal_area<B: Backend>(terminal: &Terminal<B>) -> io::Result<Rect> {
    let size = terminal.size()?;
    Ok(Rect::new(0, 0, size.width, size.height))
}

/// Keep the field's aspect ratio in step with the terminal
fn sync_field_size(session: &mut Session, area: Rect, field_height: f32) {
    let Some((width, height)) = ui::field_size_for(area, field_height) else {
        return;
    };
    let field = session.field();
    if field.width == width && field.height == height {
        return;
    }
    if let Err(e) = session.set_field_size(width, height) {
        debug!(error = %e, "kept previous field size");
    }
}

fn overlay_for(session: &Session, area: Rect) -> Option<OverlayMessage> {
    if ui::playfield_area(area).height == 0 {
        return Some(
            OverlayMessage::info(vec!["Enlarge the terminal to play".to_string()])
                .with_title("TOO SMALL".to_string()),
        );
    }
    let winner = session.winner()?;
    let score = session.score();
    Some(OverlayMessage::game_over(winner, score.player, score.opponent))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::create_bot;
    use crate::game::{Difficulty, FixedServe, Horizontal, Serve, Side, Vertical};

    fn session_with_right_serve(config: &Config) -> Session {
        let serve = Serve {
            horizontal: Horizontal::Right,
            vertical: Vertical::Up,
        };
        Session::with_parts(config, Box::new(FixedServe(serve)), create_bot(&config.ai))
    }

    #[test]
    fn test_sync_field_size_follows_terminal_aspect() {
        let config = Config::default();
        let mut session = Session::new(&config);
        // 100x24 cells: play area 100x20 = 200x80 dots
        sync_field_size(&mut session, Rect::new(0, 0, 100, 24), 400.0);
        assert_eq!(session.field().width, 1000.0);
        assert_eq!(session.field().height, 400.0);

        // Too small to play: field unchanged
        sync_field_size(&mut session, Rect::new(0, 0, 100, 3), 400.0);
        assert_eq!(session.field().width, 1000.0);
    }

    #[test]
    fn test_overlay_only_after_game_over() {
        let config = Config::default();
        let mut session = session_with_right_serve(&config);
        session.start_match(Difficulty::Normal);
        let area = Rect::new(0, 0, 80, 24);
        assert!(overlay_for(&session, area).is_none());
        assert!(overlay_for(&session, Rect::new(0, 0, 80, 2)).is_some());

        session.return_to_menu();
        assert_eq!(session.winner(), None::<Side>);
        assert!(overlay_for(&session, area).is_none());
    }
}
