// Rally Pong configuration types
// Every section and field falls back to its default, so partial files work

use serde::{Deserialize, Serialize};

use crate::clock::TimeModel;
use crate::game::Difficulty;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub keybindings: KeyBindings,
    #[serde(default)]
    pub physics: PhysicsConfig,
    #[serde(default)]
    pub ai: AIConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct KeyBindings {
    // Player paddle (the mouse works too)
    pub paddle_up: String,
    pub paddle_down: String,

    // Match controls
    pub restart: String,
    pub main_menu: String,
    pub quit: String,

    // Menu controls
    pub menu_up: String,
    pub menu_down: String,
    pub menu_select: String,
    pub menu_back: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            paddle_up: "W".to_string(),
            paddle_down: "S".to_string(),
            restart: "R".to_string(),
            main_menu: "M".to_string(),
            quit: "Q".to_string(),
            menu_up: "Up".to_string(),
            menu_down: "Down".to_string(),
            menu_select: "Enter".to_string(),
            menu_back: "Esc".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PhysicsConfig {
    // Field dimensions the match starts with (the terminal host adjusts the width)
    pub field_width: f32,
    pub field_height: f32,

    // Paddle geometry in field units
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,

    // Ball radius in field units
    pub ball_radius: f32,

    // Score required to win
    pub winning_score: u32,

    // Horizontal speed multiplier on each paddle hit (1.1 = 10% increase)
    pub ball_speed_multiplier: f32,

    // Optional cap on horizontal ball speed; unbounded when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_ball_speed: Option<f32>,

    // Wall-clock delay before each serve
    pub serve_delay_secs: f32,

    // "delta_time" (units per second) or "fixed_step" (units per tick)
    pub time_model: TimeModel,

    // Paddle movement per key press
    pub paddle_key_step: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            field_width: 800.0,
            field_height: 400.0,
            paddle_width: 15.0,
            paddle_height: 100.0,
            paddle_margin: 20.0,
            ball_radius: 10.0,
            winning_score: 10,
            ball_speed_multiplier: 1.1,
            max_ball_speed: None,
            serve_delay_secs: 1.0,
            time_model: TimeModel::DeltaTime,
            paddle_key_step: 40.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AIConfig {
    // Difficulty highlighted when the menu opens
    pub difficulty: Difficulty,

    // Vertical distance within which the computer paddle holds still
    pub dead_zone: f32,

    // Aim off target by the difficulty's error percentage
    pub imperfect_tracking: bool,
}

impl Default for AIConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Normal,
            dead_zone: 10.0,
            imperfect_tracking: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    // Target frames per second
    pub target_fps: u64,

    // Colors (RGB values 0-255)
    pub score_color: [u8; 3],
    pub player_paddle_color: [u8; 3],
    pub opponent_paddle_color: [u8; 3],
    pub ball_color: [u8; 3],
    pub center_line_color: [u8; 3],
    pub field_color: [u8; 3],
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            target_fps: 60,
            score_color: [255, 255, 255],         // White
            player_paddle_color: [0, 255, 102],   // Green
            opponent_paddle_color: [255, 0, 102], // Pink
            ball_color: [255, 255, 255],          // White
            center_line_color: [0, 255, 102],     // Green
            field_color: [0, 68, 17],             // Dark green
        }
    }
}
