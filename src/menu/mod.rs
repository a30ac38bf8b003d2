// Menu module for Rally Pong
// Handles the difficulty menu: navigation, selection and rendering

pub mod input;
pub mod render;
pub mod state;

pub use input::{handle_menu_input, MenuAction};
pub use render::render_menu;
pub use state::{AppState, MenuItem, MenuState};
