//! Common types: board and move errors, and move results.

use super::player::{Player, Symbol};

/// Errors returned by Board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Slot index is outside `0..BOARD_CELLS`.
    InvalidIndex { index: usize },
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::InvalidIndex { index } => {
                write!(f, "Index {} is out of range (must be 0-8)", index)
            }
        }
    }
}

/// Reasons a move was rejected. None of them change game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Index is outside `0..BOARD_CELLS`.
    InvalidIndex { index: usize },
    /// The slot already holds a symbol.
    CellOccupied { index: usize },
    /// The game has been won or tied; restart before moving again.
    GameAlreadyOver,
}

impl From<BoardError> for MoveError {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::InvalidIndex { index } => MoveError::InvalidIndex { index },
        }
    }
}

impl core::fmt::Display for MoveError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MoveError::InvalidIndex { index } => {
                write!(f, "Index {} is out of range (must be 0-8)", index)
            }
            MoveError::CellOccupied { index } => write!(f, "Cell {} is already taken", index),
            MoveError::GameAlreadyOver => write!(f, "Game is already over"),
        }
    }
}

/// Rejected engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupError {
    /// Both players were given the same mark.
    DuplicateSymbol(Symbol),
}

impl core::fmt::Display for SetupError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SetupError::DuplicateSymbol(symbol) => {
                write!(f, "Both players use symbol {}", symbol)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

#[cfg(feature = "std")]
impl std::error::Error for SetupError {}

#[cfg(feature = "std")]
impl std::error::Error for MoveError {}

/// Result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Game continues; carries the player whose turn it now is.
    Continue(Player),
    /// The mover completed a line.
    Won(Player),
    /// The board filled up without a line.
    Tie,
}

impl MoveOutcome {
    /// `true` when the move ended the game.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, MoveOutcome::Continue(_))
    }
}
