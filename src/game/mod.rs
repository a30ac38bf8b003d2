pub mod difficulty;
pub mod input;
pub mod physics;
pub mod serve;
pub mod session;
pub mod state;

pub use difficulty::{Difficulty, DifficultyProfile};
pub use input::{poll_input, InputAction, KeyMap};
pub use serve::{FixedServe, Horizontal, RandomServe, Serve, ServePicker, ServeTimer, Vertical};
pub use session::{Session, TickEvents};
pub use state::{Ball, Field, MatchPhase, Paddle, Score, Side};
