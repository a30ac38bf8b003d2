// Frame clock: measures elapsed time between ticks and keeps it sane
//
// The host calls `FrameClock::tick` once per frame. Whatever it measures is
// passed through `sanitize_dt`, so a stall (a suspended terminal, a debugger
// break) never turns into one giant integration step.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Largest delta accepted as a real frame
pub const MAX_FRAME_DT: f32 = 0.1;

/// Delta substituted when a frame exceeds `MAX_FRAME_DT`
pub const STALL_FALLBACK_DT: f32 = 1.0 / 60.0;

/// How speeds are interpreted by the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeModel {
    /// Speeds are units per second and each tick integrates the measured dt
    #[default]
    DeltaTime,
    /// Speeds are units per tick and each tick integrates exactly one step
    FixedStep,
}

impl TimeModel {
    /// Integration step for one tick, given an already sanitized dt
    pub fn integration_step(self, dt: f32) -> f32 {
        match self {
            TimeModel::DeltaTime => dt,
            TimeModel::FixedStep => 1.0,
        }
    }
}

/// Clamp a raw frame delta into `[0, MAX_FRAME_DT]`.
///
/// Negative or non-finite deltas become zero. Anything above the maximum is
/// treated as a stall and replaced by the nominal 60 Hz frame.
pub fn sanitize_dt(raw: f32) -> f32 {
    if !raw.is_finite() || raw <= 0.0 {
        0.0
    } else if raw > MAX_FRAME_DT {
        STALL_FALLBACK_DT
    } else {
        raw
    }
}

/// Real elapsed time for wall-clock timers such as the serve delay.
///
/// Negative or non-finite deltas become zero; long frames are kept as they
/// are, so a stall still counts toward the countdown.
pub fn wall_elapsed(raw: f32) -> f32 {
    if !raw.is_finite() || raw <= 0.0 {
        0.0
    } else {
        raw
    }
}

/// Wall-clock frame driver for the terminal host
pub struct FrameClock {
    last_tick: Instant,
    frame_duration: Duration,
}

impl FrameClock {
    pub fn new(target_fps: u64) -> Self {
        let fps = target_fps.max(1);
        Self {
            last_tick: Instant::now(),
            frame_duration: Duration::from_micros(1_000_000 / fps),
        }
    }

    /// Seconds since the previous call.
    ///
    /// Not clamped: the session clamps it for physics and keeps the real value
    /// for the serve countdown.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let raw = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        wall_elapsed(raw)
    }

    /// Forget the time spent outside the loop (menus, blocking prompts)
    pub fn restart(&mut self) {
        self.last_tick = Instant::now();
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    /// Sleep for whatever is left of the current frame.
    ///
    /// Call at the end of each loop iteration with the `Instant` taken when
    /// the frame began.
    pub fn limit_frame_rate(&self, frame_start: Instant) {
        let elapsed = frame_start.elapsed();
        if elapsed < self.frame_duration {
            std::thread::sleep(self.frame_duration - elapsed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_passes_normal_frames() {
        assert_eq!(sanitize_dt(0.016), 0.016);
        assert_eq!(sanitize_dt(MAX_FRAME_DT), MAX_FRAME_DT);
    }

    #[test]
    fn test_sanitize_replaces_stalls_with_nominal_frame() {
        assert_eq!(sanitize_dt(0.5), STALL_FALLBACK_DT);
        assert_eq!(sanitize_dt(30.0), STALL_FALLBACK_DT);
    }

    #[test]
    fn test_sanitize_rejects_garbage() {
        assert_eq!(sanitize_dt(-0.2), 0.0);
        assert_eq!(sanitize_dt(f32::NAN), 0.0);
        assert_eq!(sanitize_dt(f32::INFINITY), 0.0);
    }

    #[test]
    fn test_wall_elapsed_keeps_long_frames() {
        assert_eq!(wall_elapsed(0.2), 0.2);
        assert_eq!(wall_elapsed(3.0), 3.0);
        assert_eq!(wall_elapsed(-1.0), 0.0);
        assert_eq!(wall_elapsed(f32::NAN), 0.0);
        assert_eq!(wall_elapsed(f32::INFINITY), 0.0);
    }

    #[test]
    fn test_fixed_step_ignores_dt() {
        assert_eq!(TimeModel::FixedStep.integration_step(0.016), 1.0);
        assert_eq!(TimeModel::FixedStep.integration_step(0.0), 1.0);
        assert_eq!(TimeModel::DeltaTime.integration_step(0.016), 0.016);
    }

    #[test]
    fn test_frame_duration_from_fps() {
        assert_eq!(FrameClock::new(50).frame_duration(), Duration::from_millis(20));
        // zero fps must not divide by zero
        assert_eq!(FrameClock::new(0).frame_duration(), Duration::from_secs(1));
    }
}
