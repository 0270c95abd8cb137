use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Cell index outside the board")]
    InvalidCell,
    #[error("Move number outside recorded history")]
    InvalidMoveNumber,
}

pub type Result<T> = core::result::Result<T, GameError>;
