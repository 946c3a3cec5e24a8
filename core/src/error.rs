use thiserror::Error;

use crate::Coord;

#[derive(Error, Debug, Copy, Clone, PartialEq)]
pub enum GameError {
    #[error("board size must be at least 1x1, got {0}x{1}")]
    InvalidSize(Coord, Coord),
    #[error("light chance must be within 0.0..=1.0, got {0}")]
    InvalidChance(f64),
}

pub type Result<T> = core::result::Result<T, GameError>;
