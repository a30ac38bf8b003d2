// Serve timing and direction
//
// The serve delay is a one-shot alarm owned by the Serving phase. The session
// counts it down from sanitized frame deltas and re-checks that the match is
// still serving before launching, so a match that ended or was abandoned
// during the delay never gets a ball.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Slack for accumulated float error when summing frame deltas
const TIMER_EPSILON: f32 = 1e-4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ServeTimer {
    remaining: f32,
}

impl ServeTimer {
    pub fn new(delay_secs: f32) -> Self {
        Self {
            remaining: delay_secs.max(0.0),
        }
    }

    /// Count down by `dt` seconds; true once the delay has elapsed
    pub fn advance(&mut self, dt: f32) -> bool {
        self.remaining = (self.remaining - dt).max(0.0);
        self.is_due()
    }

    pub fn is_due(&self) -> bool {
        self.remaining <= TIMER_EPSILON
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Horizontal {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vertical {
    Up,
    Down,
}

/// Launch direction for one serve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Serve {
    pub horizontal: Horizontal,
    pub vertical: Vertical,
}

impl Serve {
    /// Velocity for this serve with `speed` on each axis (y grows downwards)
    pub fn velocity(&self, speed: f32) -> (f32, f32) {
        let vx = match self.horizontal {
            Horizontal::Left => -speed,
            Horizontal::Right => speed,
        };
        let vy = match self.vertical {
            Vertical::Up => -speed,
            Vertical::Down => speed,
        };
        (vx, vy)
    }
}

/// Source of serve directions
pub trait ServePicker: Send {
    fn pick(&mut self) -> Serve;
}

/// Uniform coin flips on both axes
pub struct RandomServe {
    rng: StdRng,
}

impl RandomServe {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomServe {
    fn default() -> Self {
        Self::new()
    }
}

impl ServePicker for RandomServe {
    fn pick(&mut self) -> Serve {
        let horizontal = if self.rng.gen_bool(0.5) {
            Horizontal::Left
        } else {
            Horizontal::Right
        };
        let vertical = if self.rng.gen_bool(0.5) {
            Vertical::Up
        } else {
            Vertical::Down
        };
        Serve {
            horizontal,
            vertical,
        }
    }
}

/// Always serves the same way; for tests and demos
pub struct FixedServe(pub Serve);

impl ServePicker for FixedServe {
    fn pick(&mut self) -> Serve {
        self.0
    }
}
