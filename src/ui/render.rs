use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use super::braille::BrailleCanvas;
use super::overlay::{render_overlay, OverlayMessage};
use super::rgb;
use crate::config::DisplayConfig;
use crate::game::{MatchPhase, Paddle, Session, Side};

// Layout: score line, status line, top border, playable area, bottom border
const UI_HEADER_ROWS: u16 = 3;
const UI_FOOTER_ROWS: u16 = 1;

/// Terminal cells the field is drawn into
pub fn playfield_area(area: Rect) -> Rect {
    let chrome = UI_HEADER_ROWS + UI_FOOTER_ROWS;
    Rect {
        x: area.x,
        y: area.y + UI_HEADER_ROWS.min(area.height),
        width: area.width,
        height: area.height.saturating_sub(chrome),
    }
}

/// Field size that fills the play area without distortion.
///
/// Braille dots are roughly square, so the field keeps `field_height` and takes
/// the play area's dot aspect ratio for its width.
pub fn field_size_for(area: Rect, field_height: f32) -> Option<(f32, f32)> {
    let play = playfield_area(area);
    if play.width == 0 || play.height == 0 {
        return None;
    }
    let pixel_width = f32::from(play.width) * 2.0;
    let pixel_height = f32::from(play.height) * 4.0;
    Some((field_height * pixel_width / pixel_height, field_height))
}

/// Translate a mouse position into `(display_y, displayed_height)` in cells,
/// or `None` when the pointer is outside the play area
pub fn pointer_to_display(area: Rect, column: u16, row: u16) -> Option<(f32, f32)> {
    let play = playfield_area(area);
    let inside_x = column >= play.x && column < play.x + play.width;
    let inside_y = row >= play.y && row < play.y + play.height;
    if !inside_x || !inside_y {
        return None;
    }
    Some((f32::from(row - play.y) + 0.5, f32::from(play.height)))
}

pub fn render(
    frame: &mut Frame,
    session: &Session,
    display: &DisplayConfig,
    overlay: Option<&OverlayMessage>,
) {
    let area = frame.area();

    let bg = Block::default().style(Style::default().bg(Color::Rgb(0, 0, 0)));
    frame.render_widget(bg, area);

    draw_scores(frame, session, display, area);
    draw_status(frame, session, area);

    let play = playfield_area(area);
    if play.height > 0 && play.width > 0 {
        draw_border(frame, display, area.y + UI_HEADER_ROWS - 1, area);
        draw_border(frame, display, play.y + play.height, area);
        draw_field(frame, session, display, play);
    }

    if let Some(message) = overlay {
        render_overlay(frame, message, area);
    }
}

fn draw_field(frame: &mut Frame, session: &Session, display: &DisplayConfig, play: Rect) {
    let mut canvas = BrailleCanvas::new(play.width as usize, play.height as usize);
    let field = session.field();
    let scale_x = canvas.pixel_width() as f32 / field.width;
    let scale_y = canvas.pixel_height() as f32 / field.height;

    draw_center_line(&mut canvas, rgb(display.center_line_color));

    draw_paddle(
        &mut canvas,
        session.paddle(Side::Player),
        scale_x,
        scale_y,
        rgb(display.player_paddle_color),
    );
    draw_paddle(
        &mut canvas,
        session.paddle(Side::Opponent),
        scale_x,
        scale_y,
        rgb(display.opponent_paddle_color),
    );

    // Ball drawn as its bounding square, centered on its position
    let ball = session.ball();
    let size_x = ((ball.radius * 2.0 * scale_x) as usize).max(1);
    let size_y = ((ball.radius * 2.0 * scale_y) as usize).max(1);
    let left = ((ball.x * scale_x) as usize).saturating_sub(size_x / 2);
    let top = ((ball.y * scale_y) as usize).saturating_sub(size_y / 2);
    canvas.fill_rect(left, top, size_x, size_y, rgb(ball.color));

    render_braille_canvas(frame, &canvas, play, rgb(display.field_color));
}

fn draw_paddle(canvas: &mut BrailleCanvas, paddle: &Paddle, scale_x: f32, scale_y: f32, color: Color) {
    let x = (paddle.x * scale_x) as usize;
    let y = (paddle.y * scale_y) as usize;
    let width = ((paddle.width * scale_x) as usize).max(1);
    let height = ((paddle.height * scale_y) as usize).max(1);
    canvas.fill_rect(x, y, width, height, color);
}

fn draw_center_line(canvas: &mut BrailleCanvas, color: Color) {
    let center_x = canvas.pixel_width() / 2;
    // 2 dots on, 2 dots off
    for y in (0..canvas.pixel_height()).step_by(4) {
        canvas.set_pixel_colored(center_x, y, color);
        canvas.set_pixel_colored(center_x, y + 1, color);
    }
}

fn render_braille_canvas(frame: &mut Frame, canvas: &BrailleCanvas, area: Rect, background: Color) {
    for y in 0..canvas.height() {
        // Group runs of equally colored cells into one span
        let mut spans: Vec<Span> = Vec::new();
        let mut run = String::new();
        let mut run_color = None;

        for x in 0..canvas.width() {
            let color = canvas.color_at(x, y).unwrap_or(Color::White);
            if run_color != Some(color) && !run.is_empty() {
                spans.push(Span::styled(
                    std::mem::take(&mut run),
                    Style::default().fg(run_color.unwrap_or(Color::White)),
                ));
            }
            run_color = Some(color);
            run.push(canvas.to_char(x, y));
        }
        if !run.is_empty() {
            spans.push(Span::styled(
                run,
                Style::default().fg(run_color.unwrap_or(Color::White)),
            ));
        }

        let row_area = Rect {
            x: area.x,
            y: area.y + y as u16,
            width: area.width,
            height: 1,
        };
        let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(background));
        frame.render_widget(paragraph, row_area);
    }
}

fn draw_border(frame: &mut Frame, display: &DisplayConfig, row: u16, area: Rect) {
    if row >= area.y + area.height {
        return;
    }
    let line = "─".repeat(area.width as usize);
    let border = Paragraph::new(line).style(Style::default().fg(rgb(display.center_line_color)));
    frame.render_widget(
        border,
        Rect {
            x: area.x,
            y: row,
            width: area.width,
            height: 1,
        },
    );
}

fn draw_scores(frame: &mut Frame, session: &Session, display: &DisplayConfig, area: Rect) {
    let score = session.score();
    let style = Style::default()
        .fg(rgb(display.score_color))
        .add_modifier(Modifier::BOLD);

    let line = Line::from(vec![
        Span::styled("PLAYER ", Style::default().fg(rgb(display.player_paddle_color))),
        Span::styled(format!("{:>2}", score.player), style),
        Span::styled("  :  ", Style::default().fg(Color::DarkGray)),
        Span::styled(format!("{:<2}", score.opponent), style),
        Span::styled(" COMPUTER", Style::default().fg(rgb(display.opponent_paddle_color))),
    ]);

    let scores = Paragraph::new(line).alignment(Alignment::Center);
    frame.render_widget(scores, row_rect(area, 0));
}

fn draw_status(frame: &mut Frame, session: &Session, area: Rect) {
    let status = match session.phase() {
        MatchPhase::Serving(timer) => format!(
            "{}  |  first to {}  |  serve in {:.1}s",
            session.difficulty(),
            session.winning_score(),
            timer.remaining()
        ),
        MatchPhase::Rallying => format!(
            "{}  |  first to {}  |  mouse or W/S to move, Q to quit",
            session.difficulty(),
            session.winning_score()
        ),
        MatchPhase::GameOver { .. } => "R to restart  |  M for menu  |  Q to quit".to_string(),
        MatchPhase::Idle => String::new(),
    };

    let widget = Paragraph::new(status)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(widget, row_rect(area, 1));
}

fn row_rect(area: Rect, row: u16) -> Rect {
    Rect {
        x: area.x,
        y: area.y + row.min(area.height.saturating_sub(1)),
        width: area.width,
        height: 1.min(area.height),
    }
}
