//! Error types shared by the grid and the turn controller.
//!
//! Configuration problems ([`ConfigError`]) reject a game before it starts.
//! Refused moves ([`MoveError`]) are routine outcomes that leave the game as it was.

use crate::board::Color;
use crate::constants::{MAX_SIZE, MIN_SIZE};

/// A game could not be configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Board size is outside [`MIN_SIZE`]..=[`MAX_SIZE`].
    InvalidSize(usize),
    /// Both players were given the same color.
    SameColors(Color),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidSize(size) => {
                write!(f, "board size must be between {MIN_SIZE} and {MAX_SIZE} (got {size})")
            }
            ConfigError::SameColors(color) => {
                write!(f, "both players cannot play {color}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// A move was refused. The game state is unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// No game is running.
    NotActive,
    /// It is the other color's turn.
    NotYourTurn { color: Color, mover: Color },
    /// Cell is off the board or already taken.
    IllegalPlacement { x: usize, y: usize },
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveError::NotActive => write!(f, "no game in progress"),
            MoveError::NotYourTurn { color, mover } => {
                write!(f, "{color} cannot move, it is {mover}'s turn")
            }
            MoveError::IllegalPlacement { x, y } => {
                write!(f, "cell ({x}, {y}) is off the board or not empty")
            }
        }
    }
}

impl std::error::Error for MoveError {}
