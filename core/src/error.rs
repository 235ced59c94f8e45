use alloc::string::String;
use thiserror::Error;

use crate::Coord;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Mount element with id=\"{id}\" not found")]
    Mount { id: String },
    #[error("Board size must be positive, got {rows}x{cols}")]
    Config { rows: Coord, cols: Coord },
}

pub type Result<T> = core::result::Result<T, GameError>;
