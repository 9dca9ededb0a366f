use thiserror::Error;

use crate::Coord;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Cannot create a mine field with that many rows and/or columns!")]
    InvalidDimensions { rows: i32, cols: i32 },
    #[error("Invalid mine count")]
    InvalidMineCount { mines: i32 },
    #[error("mine is out of bounds")]
    MineOutOfBounds { row: i32, col: i32 },
    #[error("mine declared twice at ({row}, {col})")]
    DuplicateMine { row: Coord, col: Coord },
    #[error("Invalid Command: ({row}, {col}) is out of bounds for a {rows}x{cols} mine field")]
    OutOfBounds {
        row: i32,
        col: i32,
        rows: Coord,
        cols: Coord,
    },
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

impl GameError {
    /// Whether the error comes from seed data rather than from a player command.
    pub const fn is_config(&self) -> bool {
        matches!(
            self,
            Self::InvalidDimensions { .. }
                | Self::InvalidMineCount { .. }
                | Self::MineOutOfBounds { .. }
                | Self::DuplicateMine { .. }
        )
    }
}

/// Why a command line could not be interpreted.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid Command: command not recognized!")]
    Unrecognized,
    #[error("Input Error: command not recognized!")]
    TooManyArguments,
    #[error("Invalid Command: malformed coordinate")]
    MalformedCoordinate,
}

/// Why seed content could not be turned into a board.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum SeedError {
    #[error("expected {expected} but the seed ended")]
    MissingToken { expected: &'static str },
    #[error("expected {expected} but found a non-integer token")]
    InvalidToken { expected: &'static str },
    #[error(transparent)]
    Config(#[from] GameError),
}

pub type Result<T> = core::result::Result<T, GameError>;
