pub mod braille;
pub mod overlay;
pub mod render;

pub use overlay::{OverlayMessage, OverlayStyle};
pub use render::{field_size_for, playfield_area, pointer_to_display, render};

use ratatui::style::Color;

/// Config colors are plain RGB triples
pub fn rgb(color: [u8; 3]) -> Color {
    Color::Rgb(color[0], color[1], color[2])
}
