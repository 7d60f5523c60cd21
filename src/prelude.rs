//! Commonly used types and utilities for ease of import.

pub use crate::{
    Board, GameEngine, GameEvents, GameStatus, MoveError, MoveOutcome, NoEvents, Outcome, Player,
    RecordedEvents, Symbol,
};

#[cfg(feature = "std")]
pub use crate::{play, TerminalView};
