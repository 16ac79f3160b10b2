use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Mine count must be positive and leave at least one safe cell")]
    InvalidConfig,
    #[error("Mines do not fit outside the protected start zone")]
    TooManyMines,
}

pub type Result<T> = core::result::Result<T, GameError>;
