// Overlay messages drawn centered over the field (game over, notices)

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::game::Side;

/// A message to display as an overlay in the center of the screen
#[derive(Debug, Clone)]
pub struct OverlayMessage {
    /// Lines of text to display
    pub lines: Vec<String>,
    /// Optional title for the overlay box
    pub title: Option<String>,
    /// Style preset for the overlay
    pub style: OverlayStyle,
}

/// Predefined styles for overlay messages
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OverlayStyle {
    /// Neutral message (cyan border)
    Info,
    /// The human won (green)
    Success,
    /// The computer won (red)
    Defeat,
}

impl OverlayMessage {
    pub fn info(lines: Vec<String>) -> Self {
        Self {
            lines,
            title: None,
            style: OverlayStyle::Info,
        }
    }

    /// Game-over box for `winner`, with the keys to continue
    pub fn game_over(winner: Side, player_score: u32, opponent_score: u32) -> Self {
        let (headline, style) = match winner {
            Side::Player => ("PLAYER WINS!", OverlayStyle::Success),
            Side::Opponent => ("COMPUTER WINS!", OverlayStyle::Defeat),
        };
        Self {
            lines: vec![
                headline.to_string(),
                format!("{} - {}", player_score, opponent_score),
                String::new(),
                "R Restart  |  M Menu  |  Q Quit".to_string(),
            ],
            title: Some("GAME OVER".to_string()),
            style,
        }
    }

    pub fn with_title(mut self, title: String) -> Self {
        self.title = Some(title);
        self
    }

    fn border_color(&self) -> Color {
        match self.style {
            OverlayStyle::Info => Color::Cyan,
            OverlayStyle::Success => Color::Green,
            OverlayStyle::Defeat => Color::Red,
        }
    }

    fn text_color(&self) -> Color {
        match self.style {
            OverlayStyle::Info => Color::White,
            OverlayStyle::Success => Color::LightGreen,
            OverlayStyle::Defeat => Color::LightRed,
        }
    }
}

/// Render an overlay message in the center of `area`
pub fn render_overlay(frame: &mut Frame, message: &OverlayMessage, area: Rect) {
    let max_line_length = message
        .lines
        .iter()
        .map(|line| line.chars().count())
        .chain(message.title.iter().map(|t| t.chars().count() + 2))
        .max()
        .unwrap_or(0);

    // Padding for borders and spacing; never larger than the screen
    let overlay_width = (max_line_length as u16 + 6).min(area.width.saturating_sub(4));
    let overlay_height = (message.lines.len() as u16 + 2).min(area.height.saturating_sub(2));
    if overlay_width < 3 || overlay_height < 3 {
        return;
    }

    let overlay_area = Rect {
        x: area.x + (area.width.saturating_sub(overlay_width)) / 2,
        y: area.y + (area.height.saturating_sub(overlay_height)) / 2,
        width: overlay_width,
        height: overlay_height,
    };

    frame.render_widget(Clear, overlay_area);

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(message.border_color()))
        .style(Style::default().bg(Color::Rgb(20, 20, 20)));

    if let Some(ref title) = message.title {
        block = block.title(format!(" {} ", title));
    }

    let text_lines: Vec<Line> = message
        .lines
        .iter()
        .map(|line| {
            Line::from(Span::styled(
                line.clone(),
                Style::default().fg(message.text_color()),
            ))
        })
        .collect();

    let paragraph = Paragraph::new(text_lines)
        .alignment(Alignment::Center)
        .block(block);

    frame.render_widget(paragraph, overlay_area);
}
