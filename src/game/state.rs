// Match entities: field, paddles, ball and score
//
// Coordinates are field units with the origin at the top-left corner and y
// growing downwards. Paddles are positioned by their top-left corner, the ball
// by its center.

use serde::{Deserialize, Serialize};

use super::serve::ServeTimer;

/// Which paddle something belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Human-controlled paddle on the left wall
    Player,
    /// Computer-controlled paddle on the right wall
    Opponent,
}

impl Side {
    /// Lowercase label the view uses for the winner
    pub fn label(&self) -> &'static str {
        match self {
            Side::Player => "player",
            Side::Opponent => "opponent",
        }
    }
}

/// The rectangular playing area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Field {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> (f32, f32) {
        (self.width / 2.0, self.height / 2.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    /// Build a paddle vertically centered against its wall
    pub fn new(side: Side, field: &Field, width: f32, height: f32, margin: f32) -> Self {
        let mut paddle = Self {
            side,
            x: 0.0,
            y: 0.0,
            width,
            height,
        };
        paddle.align_to_wall(field, margin);
        paddle.center_vertically(field);
        paddle
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Lowest valid top edge for this paddle in a field of the given height
    pub fn max_y(&self, field_height: f32) -> f32 {
        (field_height - self.height).max(0.0)
    }

    /// Move the top edge to `y`, clamped into `[0, field_height - height]`
    pub fn set_y(&mut self, y: f32, field_height: f32) {
        self.y = y.min(self.max_y(field_height)).max(0.0);
    }

    pub fn shift(&mut self, dy: f32, field_height: f32) {
        self.set_y(self.y + dy, field_height);
    }

    pub fn center_vertically(&mut self, field: &Field) {
        self.set_y(field.height / 2.0 - self.height / 2.0, field.height);
    }

    /// Recompute x for the current field width and re-clamp y
    pub fn align_to_wall(&mut self, field: &Field, margin: f32) {
        self.x = match self.side {
            Side::Player => margin,
            Side::Opponent => field.width - self.width - margin,
        };
        self.set_y(self.y, field.height);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub vx: f32,
    pub vy: f32,
    pub color: [u8; 3],
}

impl Ball {
    pub fn new(radius: f32, color: [u8; 3]) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            radius,
            vx: 0.0,
            vy: 0.0,
            color,
        }
    }

    pub fn center_on(&mut self, field: &Field) {
        let (x, y) = field.center();
        self.x = x;
        self.y = y;
    }

    pub fn stop(&mut self) {
        self.vx = 0.0;
        self.vy = 0.0;
    }

    pub fn is_moving(&self) -> bool {
        self.vx != 0.0 || self.vy != 0.0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub player: u32,
    pub opponent: u32,
}

impl Score {
    pub fn add_point(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Opponent => self.opponent += 1,
        }
    }

    /// The side with the higher score once either side reaches `win_score`
    pub fn winner(&self, win_score: u32) -> Option<Side> {
        if self.player < win_score && self.opponent < win_score {
            return None;
        }
        if self.player >= self.opponent {
            Some(Side::Player)
        } else {
            Some(Side::Opponent)
        }
    }
}

/// Where the match currently is
///
/// A scored point is not a resting phase: the judge increments the score and
/// runs the win check inside the same tick, reporting it through
/// `TickEvents::point_scored`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatchPhase {
    /// No match running (startup, or back at the menu)
    Idle,
    /// Ball parked at center until the serve timer fires
    Serving(ServeTimer),
    /// Ball in play
    Rallying,
    /// A side reached the win score
    GameOver { winner: Side },
}

impl MatchPhase {
    pub fn is_running(&self) -> bool {
        matches!(self, MatchPhase::Serving(_) | MatchPhase::Rallying)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paddles_start_centered_against_their_walls() {
        let field = Field::new(800.0, 400.0);
        let player = Paddle::new(Side::Player, &field, 15.0, 100.0, 20.0);
        let opponent = Paddle::new(Side::Opponent, &field, 15.0, 100.0, 20.0);

        assert_eq!(player.x, 20.0);
        assert_eq!(opponent.x, 765.0);
        assert_eq!(player.y, 150.0);
        assert_eq!(opponent.center_y(), 200.0);
    }

    #[test]
    fn test_paddle_set_y_clamps() {
        let field = Field::new(800.0, 400.0);
        let mut paddle = Paddle::new(Side::Player, &field, 15.0, 100.0, 20.0);

        paddle.set_y(-50.0, field.height);
        assert_eq!(paddle.y, 0.0);

        paddle.set_y(1000.0, field.height);
        assert_eq!(paddle.y, 300.0);
    }

    #[test]
    fn test_paddle_taller_than_field_sticks_to_top() {
        let field = Field::new(800.0, 60.0);
        let paddle = Paddle::new(Side::Player, &field, 15.0, 100.0, 20.0);
        assert_eq!(paddle.y, 0.0);
    }

    #[test]
    fn test_score_winner() {
        let mut score = Score::default();
        assert_eq!(score.winner(10), None);

        score.player = 9;
        score.opponent = 3;
        assert_eq!(score.winner(10), None);

        score.add_point(Side::Player);
        assert_eq!(score.winner(10), Some(Side::Player));

        let score = Score {
            player: 4,
            opponent: 10,
        };
        assert_eq!(score.winner(10), Some(Side::Opponent));
    }

    #[test]
    fn test_running_phases() {
        assert!(!MatchPhase::Idle.is_running());
        assert!(MatchPhase::Rallying.is_running());
        assert!(MatchPhase::Serving(ServeTimer::new(1.0)).is_running());
        assert!(!MatchPhase::GameOver {
            winner: Side::Player
        }
        .is_running());
    }
}
