//! Rally Pong: a single-player paddle game against a computer opponent.
//!
//! The simulation core ([`game::Session`]) has no terminal dependencies; the
//! [`app`], [`menu`] and [`ui`] modules host it in a ratatui terminal.

pub mod ai;
pub mod app;
pub mod clock;
pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod menu;
pub mod ui;

pub use error::{GameError, GameResult};
pub use game::{Difficulty, Session, TickEvents};
