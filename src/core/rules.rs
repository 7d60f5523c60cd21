//! Pure win/tie evaluation over a board.
//!
//! Everything here is recomputed from the board contents on each call; no
//! state is carried between moves.

use super::board::Board;
use super::config::WIN_LINES;
use super::player::Symbol;

/// Terminal result of a board, by symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Win(Symbol),
    Tie,
}

/// First completed triple in `WIN_LINES` order, if any.
pub fn winning_line(board: &Board) -> Option<[usize; 3]> {
    let cells = board.slots();
    WIN_LINES.iter().copied().find(|&[a, b, c]| {
        cells[a].is_some() && cells[a] == cells[b] && cells[a] == cells[c]
    })
}

/// Symbol occupying the first completed triple.
pub fn winner(board: &Board) -> Option<Symbol> {
    winning_line(board).and_then(|[a, _, _]| board.slots()[a])
}

/// `Some(Win)` for a completed line, `Some(Tie)` for a full board without
/// one, `None` while the game can continue.
pub fn evaluate(board: &Board) -> Option<Verdict> {
    if let Some(symbol) = winner(board) {
        Some(Verdict::Win(symbol))
    } else if board.is_full() {
        Some(Verdict::Tie)
    } else {
        None
    }
}
