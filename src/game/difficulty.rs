// Difficulty presets
//
// A profile is picked when a match starts and never changes until the next
// start. The table has one row set per time model: units per second for
// delta-time integration, units per tick for the fixed-step model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::clock::TimeModel;
use crate::error::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
    Expert,
}

/// Speeds and imperfection for one difficulty
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyProfile {
    /// Serve speed on each axis
    pub ball_speed: f32,
    /// Opponent paddle tracking speed
    pub ai_speed: f32,
    /// Opponent aim error as a percentage of paddle height (0 = perfect)
    pub error_percent: u8,
}

impl Difficulty {
    pub fn all() -> [Difficulty; 4] {
        [
            Difficulty::Easy,
            Difficulty::Normal,
            Difficulty::Hard,
            Difficulty::Expert,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Normal => "NORMAL",
            Difficulty::Hard => "HARD",
            Difficulty::Expert => "EXPERT",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Slow serves, sluggish computer paddle",
            Difficulty::Normal => "A fair game",
            Difficulty::Hard => "Fast serves, quick computer paddle",
            Difficulty::Expert => "The computer paddle keeps up with everything",
        }
    }

    pub fn profile(&self, time_model: TimeModel) -> DifficultyProfile {
        let (ball_speed, ai_speed) = match (time_model, self) {
            (TimeModel::DeltaTime, Difficulty::Easy) => (350.0, 300.0),
            (TimeModel::DeltaTime, Difficulty::Normal) => (450.0, 400.0),
            (TimeModel::DeltaTime, Difficulty::Hard) => (700.0, 600.0),
            (TimeModel::DeltaTime, Difficulty::Expert) => (900.0, 900.0),
            (TimeModel::FixedStep, Difficulty::Easy) => (5.0, 3.0),
            (TimeModel::FixedStep, Difficulty::Normal) => (7.0, 5.0),
            (TimeModel::FixedStep, Difficulty::Hard) => (10.0, 8.0),
            (TimeModel::FixedStep, Difficulty::Expert) => (12.0, 12.0),
        };
        let error_percent = match self {
            Difficulty::Easy => 50,
            Difficulty::Normal => 25,
            Difficulty::Hard => 10,
            Difficulty::Expert => 0,
        };

        DifficultyProfile {
            ball_speed,
            ai_speed,
            error_percent,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        match key.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "normal" => Ok(Difficulty::Normal),
            "hard" => Ok(Difficulty::Hard),
            "expert" => Ok(Difficulty::Expert),
            _ => Err(GameError::UnknownDifficulty(key.to_string())),
        }
    }
}
