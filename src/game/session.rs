// The match session: one self-contained game instance
//
// All state lives here and all mutation happens through `&mut self`, so a host
// that shares a session between threads only has to put it behind one mutex.
// Input is recorded in a single pending slot and consumed once per tick.

use tracing::{debug, info, warn};

use super::difficulty::{Difficulty, DifficultyProfile};
use super::physics;
use super::serve::{RandomServe, ServePicker, ServeTimer};
use super::state::{Ball, Field, MatchPhase, Paddle, Score, Side};
use crate::ai::{self, Bot, PaddleMove};
use crate::clock;
use crate::config::{Config, PhysicsConfig};
use crate::error::{GameError, GameResult};
use crate::game::input;

/// What happened during one tick, for the view to react to
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct TickEvents {
    pub serve_launched: bool,
    pub wall_bounce: bool,
    pub paddle_hit: Option<Side>,
    pub point_scored: Option<Side>,
    pub game_over: Option<Side>,
}

impl TickEvents {
    pub fn any(&self) -> bool {
        self.serve_launched
            || self.wall_bounce
            || self.paddle_hit.is_some()
            || self.point_scored.is_some()
            || self.game_over.is_some()
    }
}

pub struct Session {
    physics: PhysicsConfig,
    field: Field,
    ball: Ball,
    player: Paddle,
    opponent: Paddle,
    score: Score,
    difficulty: Difficulty,
    profile: DifficultyProfile,
    phase: MatchPhase,
    pending_target: Option<f32>,
    serve_picker: Box<dyn ServePicker>,
    bot: Box<dyn Bot>,
}

impl Session {
    /// Idle session with random serves and the configured opponent
    pub fn new(config: &Config) -> Self {
        Self::with_parts(
            config,
            Box::new(RandomServe::new()),
            ai::create_bot(&config.ai),
        )
    }

    pub fn with_parts(
        config: &Config,
        serve_picker: Box<dyn ServePicker>,
        bot: Box<dyn Bot>,
    ) -> Self {
        let mut physics = config.physics.clone();
        if let Some(cap) = physics.max_ball_speed {
            if !valid_dimension(cap) {
                warn!(cap, "configured max ball speed is invalid, leaving speed unbounded");
                physics.max_ball_speed = None;
            }
        }
        // Fall back to the default field if the configured one is unusable
        let field = if valid_dimension(physics.field_width) && valid_dimension(physics.field_height)
        {
            Field::new(physics.field_width, physics.field_height)
        } else {
            warn!(
                width = physics.field_width,
                height = physics.field_height,
                "configured field size is invalid, using defaults"
            );
            let defaults = PhysicsConfig::default();
            Field::new(defaults.field_width, defaults.field_height)
        };

        let mut ball = Ball::new(physics.ball_radius, config.display.ball_color);
        ball.center_on(&field);

        let player = Paddle::new(
            Side::Player,
            &field,
            physics.paddle_width,
            physics.paddle_height,
            physics.paddle_margin,
        );
        let opponent = Paddle::new(
            Side::Opponent,
            &field,
            physics.paddle_width,
            physics.paddle_height,
            physics.paddle_margin,
        );

        let difficulty = config.ai.difficulty;
        let profile = difficulty.profile(physics.time_model);

        Self {
            physics,
            field,
            ball,
            player,
            opponent,
            score: Score::default(),
            difficulty,
            profile,
            phase: MatchPhase::Idle,
            pending_target: None,
            serve_picker,
            bot,
        }
    }

    // ---- commands ---------------------------------------------------------

    /// Reset scores and paddles, select `difficulty` and begin serving
    pub fn start_match(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.profile = difficulty.profile(self.physics.time_model);
        self.score = Score::default();
        self.pending_target = None;

        self.player.center_vertically(&self.field);
        self.opponent.center_vertically(&self.field);
        self.bot.reset(&self.profile, self.opponent.height);

        info!(
            difficulty = %difficulty,
            bot = self.bot.name(),
            field_width = self.field.width,
            field_height = self.field.height,
            "match started"
        );
        self.begin_serve();
    }

    /// String-keyed form of `start_match`; unknown keys leave the session untouched
    pub fn start_match_by_name(&mut self, key: &str) -> GameResult<()> {
        let difficulty = key.parse::<Difficulty>().map_err(|e| {
            warn!(key, "rejected unknown difficulty");
            e
        })?;
        self.start_match(difficulty);
        Ok(())
    }

    /// Start over with the difficulty of the last match
    pub fn restart_match(&mut self) {
        self.start_match(self.difficulty);
    }

    /// Abandon the match and go back to the menu
    pub fn return_to_menu(&mut self) {
        self.phase = MatchPhase::Idle;
        self.pending_target = None;
        self.ball.stop();
        self.ball.center_on(&self.field);
        debug!("returned to menu");
    }

    /// Resize the field and re-place everything that depends on it.
    ///
    /// Paddles are re-aligned to their walls and clamped. A ball that is not in
    /// play is re-centered; a ball in play keeps its position.
    pub fn set_field_size(&mut self, width: f32, height: f32) -> GameResult<()> {
        if !valid_dimension(width) || !valid_dimension(height) {
            warn!(width, height, "rejected field size");
            return Err(GameError::InvalidFieldSize { width, height });
        }

        self.field = Field::new(width, height);
        self.player.align_to_wall(&self.field, self.physics.paddle_margin);
        self.opponent.align_to_wall(&self.field, self.physics.paddle_margin);
        if self.phase != MatchPhase::Rallying {
            self.ball.center_on(&self.field);
        }
        debug!(width, height, "field resized");
        Ok(())
    }

    /// Aim the player paddle's center at field-space height `y`.
    ///
    /// Ignored while no match is running. Applied at the start of the next
    /// tick; a newer target replaces an unapplied one.
    pub fn set_player_target_y(&mut self, y: f32) {
        if !self.phase.is_running() {
            return;
        }
        if !y.is_finite() {
            warn!(y, "ignored non-finite paddle target");
            return;
        }
        self.pending_target = Some(y);
    }

    /// Pointer or touch moved to `display_y` on a view `displayed_height` tall
    pub fn pointer_moved(&mut self, display_y: f32, displayed_height: f32) -> GameResult<()> {
        let y = input::scale_to_field(display_y, displayed_height, self.field.height)?;
        self.set_player_target_y(y);
        Ok(())
    }

    /// Move the player target by `dy` from wherever it currently is (keyboard)
    pub fn nudge_player_target(&mut self, dy: f32) {
        let base = self.pending_target.unwrap_or_else(|| self.player.center_y());
        let half = self.player.height / 2.0;
        let target = (base + dy).min(self.field.height - half).max(half);
        self.set_player_target_y(target);
    }

    /// Advance the match by `dt` seconds of wall-clock time.
    ///
    /// Physics integrates the clamped delta; the serve countdown uses the real
    /// elapsed time.
    pub fn tick(&mut self, dt: f32) -> TickEvents {
        let elapsed = clock::wall_elapsed(dt);
        let dt = clock::sanitize_dt(dt);
        let step = self.physics.time_model.integration_step(dt);
        let mut events = TickEvents::default();

        match self.phase {
            MatchPhase::Idle | MatchPhase::GameOver { .. } => events,
            MatchPhase::Serving(mut timer) => {
                self.apply_pending_target();
                self.drive_opponent(step);
                let due = timer.advance(elapsed);
                self.phase = MatchPhase::Serving(timer);
                if due {
                    events.serve_launched = self.on_serve_timer_fired();
                }
                events
            }
            MatchPhase::Rallying => {
                self.apply_pending_target();
                self.rally_step(step, &mut events);
                events
            }
        }
    }

    /// Launch the serve if the match is still waiting for one.
    ///
    /// Safe to call at any time: it does nothing unless the session is in the
    /// Serving phase, so a timer that outlives its match is harmless.
    pub fn on_serve_timer_fired(&mut self) -> bool {
        if !matches!(self.phase, MatchPhase::Serving(_)) {
            return false;
        }

        let serve = self.serve_picker.pick();
        let (vx, vy) = serve.velocity(self.profile.ball_speed);
        self.ball.vx = vx;
        self.ball.vy = vy;
        self.phase = MatchPhase::Rallying;
        debug!(?serve, vx, vy, "serve launched");
        true
    }

    // ---- read-only view ---------------------------------------------------

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    pub fn player_paddle(&self) -> &Paddle {
        &self.player
    }

    pub fn opponent_paddle(&self) -> &Paddle {
        &self.opponent
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase.is_running()
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn profile(&self) -> &DifficultyProfile {
        &self.profile
    }

    pub fn winning_score(&self) -> u32 {
        self.physics.winning_score
    }

    /// Seconds left before the serve, while serving
    pub fn serve_countdown(&self) -> Option<f32> {
        match self.phase {
            MatchPhase::Serving(timer) => Some(timer.remaining()),
            _ => None,
        }
    }

    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            MatchPhase::GameOver { winner } => Some(winner),
            _ => None,
        }
    }

    /// "player" or "opponent" once the match is over
    pub fn winner_label(&self) -> Option<&'static str> {
        self.winner().map(|side| side.label())
    }

    // ---- internals --------------------------------------------------------

    fn begin_serve(&mut self) {
        self.ball.stop();
        self.ball.center_on(&self.field);
        self.phase = MatchPhase::Serving(ServeTimer::new(self.physics.serve_delay_secs));
    }

    fn apply_pending_target(&mut self) {
        if let Some(y) = self.pending_target.take() {
            let top = y - self.player.height / 2.0;
            self.player.set_y(top, self.field.height);
        }
    }

    fn drive_opponent(&mut self, step: f32) {
        let distance = self.profile.ai_speed * step;
        match self.bot.get_action(&self.ball, &self.opponent) {
            Some(PaddleMove::Down) => self.opponent.shift(distance, self.field.height),
            Some(PaddleMove::Up) => self.opponent.shift(-distance, self.field.height),
            None => {}
        }
    }

    fn rally_step(&mut self, step: f32, events: &mut TickEvents) {
        physics::advance(&mut self.ball, step);
        events.wall_bounce = physics::reflect_off_walls(&mut self.ball, self.field.height);

        self.drive_opponent(step);

        let side = physics::approaching_side(&self.ball);
        if physics::overlaps(&self.ball, self.paddle(side)) {
            physics::bounce_off_paddle(
                &mut self.ball,
                self.physics.ball_speed_multiplier,
                self.physics.max_ball_speed,
            );
            self.bot.on_paddle_hit();
            events.paddle_hit = Some(side);
            debug!(?side, vx = self.ball.vx, "paddle hit");
        }

        if let Some(scorer) = physics::exit_scorer(&self.ball, self.field.width) {
            self.score_point(scorer, events);
        }
    }

    fn score_point(&mut self, scorer: Side, events: &mut TickEvents) {
        self.score.add_point(scorer);
        events.point_scored = Some(scorer);
        debug!(
            ?scorer,
            player = self.score.player,
            opponent = self.score.opponent,
            "point scored"
        );
        self.check_win(events);
    }

    fn check_win(&mut self, events: &mut TickEvents) {
        match self.score.winner(self.physics.winning_score) {
            Some(winner) => {
                self.ball.stop();
                self.pending_target = None;
                self.phase = MatchPhase::GameOver { winner };
                events.game_over = Some(winner);
                info!(
                    winner = winner.label(),
                    player = self.score.player,
                    opponent = self.score.opponent,
                    "match over"
                );
            }
            None => {
                self.bot.reset(&self.profile, self.opponent.height);
                self.begin_serve();
            }
        }
    }
}

fn valid_dimension(value: f32) -> bool {
    value.is_finite() && value > 0.0
}
