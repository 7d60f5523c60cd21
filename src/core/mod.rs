//! Core tic-tac-toe engine (no_std compatible)
//!
//! Pure game logic plus the notification trait the engine reports through.
//! Needs only `alloc` for status strings.

pub mod board;
pub mod common;
pub mod config;
pub mod events;
pub mod game;
pub mod player;
pub mod rules;

// Re-export commonly used types
pub use board::{Board, BoardState, Cell};
pub use common::{BoardError, MoveError, MoveOutcome, SetupError};
pub use config::*;
pub use events::{Event, GameEvents, NoEvents, RecordedEvents};
pub use game::{GameEngine, GameStatus, Outcome, Snapshot};
pub use player::{Player, Symbol};
pub use rules::{evaluate, winner, winning_line, Verdict};
