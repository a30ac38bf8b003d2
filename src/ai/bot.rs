// Bot trait for the computer paddle

use crate::game::{Ball, DifficultyProfile, Paddle};

/// Which way the computer paddle should move this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleMove {
    Up,
    Down,
}

/// Trait for opponent controllers
///
/// A bot only decides a direction. The session moves the paddle at the
/// difficulty's tracking speed and keeps it inside the field, so no bot can
/// outrun its difficulty or leave the field.
pub trait Bot: Send {
    /// Decide what the paddle should do this tick
    ///
    /// # Returns
    /// * `Some(PaddleMove)` - move one speed-step in that direction
    /// * `None` - hold position
    fn get_action(&mut self, ball: &Ball, paddle: &Paddle) -> Option<PaddleMove>;

    /// The ball just came off a paddle
    fn on_paddle_hit(&mut self) {}

    /// Called when a match starts and after every point
    fn reset(&mut self, profile: &DifficultyProfile, paddle_height: f32);

    /// Bot name for logs and display
    fn name(&self) -> &str;
}
