// Menu rendering with Ratatui

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use super::state::MenuState;

/// Render the difficulty menu
pub fn render_menu(frame: &mut Frame, menu_state: &MenuState) {
    let area = frame.area();

    // Draw background
    let bg = Block::default().style(Style::default().bg(Color::Rgb(0, 0, 0)));
    frame.render_widget(bg, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Title area
            Constraint::Min(6),    // Menu items
            Constraint::Length(3), // Controls hint
        ])
        .split(area);

    let title_style = Style::default()
        .fg(Color::Rgb(0, 255, 102))
        .add_modifier(Modifier::BOLD);
    let title_text = vec![
        Line::from(""),
        Line::from(Span::styled("R A L L Y   P O N G", title_style)),
        Line::from(Span::styled(
            "first to ten against the computer",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let title = Paragraph::new(title_text).alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    // Each item is its name plus a dim one-line description
    let mut menu_items: Vec<Line> = Vec::new();
    for (i, item) in menu_state.items.iter().enumerate() {
        let is_selected = i == menu_state.selected_index;
        let prefix = if is_selected { "> " } else { "  " };
        let name_style = if is_selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        menu_items.push(Line::from(vec![
            Span::styled(format!("{}{:<8}", prefix, item.display_text()), name_style),
            Span::styled(
                format!("  {}", item.description()),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    let menu = Paragraph::new(menu_items).alignment(Alignment::Center);
    frame.render_widget(menu, chunks[1]);

    // Draw controls hint
    let controls = vec![Line::from(vec![
        Span::styled("↑/↓", Style::default().fg(Color::Gray)),
        Span::styled(": Navigate  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Enter", Style::default().fg(Color::Gray)),
        Span::styled(": Play  ", Style::default().fg(Color::DarkGray)),
        Span::styled("1-4", Style::default().fg(Color::Gray)),
        Span::styled(": Quick start  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Q/Esc", Style::default().fg(Color::Gray)),
        Span::styled(": Quit", Style::default().fg(Color::DarkGray)),
    ])];

    let controls_widget = Paragraph::new(controls).alignment(Alignment::Center);
    frame.render_widget(controls_widget, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Difficulty;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_menu_lists_difficulties() {
        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let menu = MenuState::new(Difficulty::Hard);
        terminal.draw(|f| render_menu(f, &menu)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = (0..20u16)
            .flat_map(|y| (0..80u16).map(move |x| (x, y)))
            .map(|pos| buffer[pos].symbol().to_string())
            .collect();
        for name in ["EASY", "NORMAL", "HARD", "EXPERT", "QUIT"] {
            assert!(text.contains(name), "missing {name}");
        }
        assert!(text.contains("> HARD"));
    }
}
