// Reactive tracking bot: chases the ball's current height

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

use super::bot::{Bot, PaddleMove};
use crate::game::{Ball, DifficultyProfile, Paddle};

/// Follows the ball's vertical position with a dead-zone.
///
/// There is no trajectory prediction: the paddle center is compared with the
/// ball's current y every tick. With imperfect tracking enabled the bot aims
/// at `ball.y + offset`, where the offset is redrawn on every reset and every
/// paddle hit from a normal distribution whose standard deviation is the
/// difficulty's error percentage of the paddle height.
pub struct TrackingBot {
    name: String,
    dead_zone: f32,
    imperfect: bool,
    error_stddev: f32,
    aim_offset: f32,
    rng: StdRng,
}

impl TrackingBot {
    pub fn new(dead_zone: f32) -> Self {
        Self {
            name: "Tracker".to_string(),
            dead_zone: dead_zone.abs(),
            imperfect: false,
            error_stddev: 0.0,
            aim_offset: 0.0,
            rng: StdRng::from_entropy(),
        }
    }

    /// A tracker that misjudges the ball by the difficulty's error percentage
    pub fn imperfect(dead_zone: f32) -> Self {
        Self {
            name: "Imperfect tracker".to_string(),
            imperfect: true,
            ..Self::new(dead_zone)
        }
    }

    /// Fix the RNG seed (tests and reproducible demos)
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn aim_offset(&self) -> f32 {
        self.aim_offset
    }

    fn reroll_offset(&mut self) {
        if !self.imperfect || self.error_stddev <= 0.0 {
            self.aim_offset = 0.0;
            return;
        }
        self.aim_offset = match Normal::new(0.0, self.error_stddev) {
            Ok(normal) => normal.sample(&mut self.rng),
            Err(_) => 0.0,
        };
    }
}

impl Bot for TrackingBot {
    fn get_action(&mut self, ball: &Ball, paddle: &Paddle) -> Option<PaddleMove> {
        let target_y = ball.y + self.aim_offset;
        let paddle_center_y = paddle.center_y();

        if paddle_center_y < target_y - self.dead_zone {
            Some(PaddleMove::Down)
        } else if paddle_center_y > target_y + self.dead_zone {
            Some(PaddleMove::Up)
        } else {
            None
        }
    }

    fn on_paddle_hit(&mut self) {
        self.reroll_offset();
    }

    fn reset(&mut self, profile: &DifficultyProfile, paddle_height: f32) {
        self.error_stddev = f32::from(profile.error_percent) / 100.0 * paddle_height;
        self.reroll_offset();
    }

    fn name(&self) -> &str {
        &self.name
    }
}
