// Errors raised by the match core
//
// Every variant is an input-validation failure: the call that raised it is
// rejected and the session stays exactly as it was.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GameError {
    #[error("unknown difficulty '{0}' (expected easy, normal, hard or expert)")]
    UnknownDifficulty(String),

    #[error("invalid field size {width}x{height}: both dimensions must be positive")]
    InvalidFieldSize { width: f32, height: f32 },

    #[error("invalid display height {0}: must be positive")]
    InvalidDisplaySize(f32),
}

pub type GameResult<T> = Result<T, GameError>;
