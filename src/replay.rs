#![cfg(feature = "std")]

//! Apply a fixed list of moves to a fresh engine and summarize the result.

use std::fmt;

use serde::Serialize;

use crate::core::{GameEngine, GameStatus, Outcome, RecordedEvents, Snapshot, Symbol};

/// A move the engine refused, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    pub index: usize,
    pub error: String,
}

/// Where a replayed game ended up.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    /// Cell contents, `""` for empty.
    pub board: Vec<String>,
    pub accepted: usize,
    pub rejected: Vec<Rejection>,
    pub status: String,
    pub over: bool,
    pub winner: Option<Symbol>,
    pub renders: usize,
    pub snapshot: Snapshot,
}

/// Feed `moves` to a new engine with the default players. Rejected moves are
/// recorded and skipped.
pub fn replay(moves: &[usize]) -> ReplayReport {
    let mut engine = GameEngine::with_events(RecordedEvents::new());
    let mut accepted = 0usize;
    let mut rejected = Vec::new();
    for &index in moves {
        match engine.make_move(index) {
            Ok(_) => accepted += 1,
            Err(e) => rejected.push(Rejection {
                index,
                error: e.to_string(),
            }),
        }
    }
    log::info!(
        "replayed {} moves: {} accepted, {} rejected",
        moves.len(),
        accepted,
        rejected.len()
    );

    let winner = match engine.status() {
        GameStatus::Terminal(Outcome::Win(p)) => Some(p.symbol()),
        _ => None,
    };
    let board = engine
        .board()
        .slots()
        .iter()
        .map(|c| c.map_or_else(String::new, |s| s.to_string()))
        .collect();

    ReplayReport {
        board,
        accepted,
        rejected,
        status: engine.status().message(),
        over: engine.is_over(),
        winner,
        renders: engine.events().render_count(),
        snapshot: engine.snapshot(),
    }
}

/// Rejections, then the grid, then the status line.
impl fmt::Display for ReplayReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in &self.rejected {
            writeln!(f, "move {} rejected: {}", r.index, r.error)?;
        }
        writeln!(f, "{}", crate::core::Board::from(self.snapshot.board))?;
        write!(f, "{}", self.status)
    }
}
