use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board size must be at least 2")]
    BoardTooSmall,
    #[error("Board rows do not form a square grid")]
    NotSquare,
    #[error("Game already over, no new moves are accepted")]
    GameOver,
}

pub type Result<T> = core::result::Result<T, GameError>;
