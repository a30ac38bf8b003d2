// AI module for the computer paddle

mod bot;
mod tracking_bot;

pub use bot::{Bot, PaddleMove};
pub use tracking_bot::TrackingBot;

use crate::config::AIConfig;

/// Create the opponent controller described by the configuration
pub fn create_bot(config: &AIConfig) -> Box<dyn Bot> {
    if config.imperfect_tracking {
        Box::new(TrackingBot::imperfect(config.dead_zone))
    } else {
        Box::new(TrackingBot::new(config.dead_zone))
    }
}
