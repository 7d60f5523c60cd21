use super::player::{Player, Symbol};

pub const BOARD_WIDTH: usize = 3;
pub const BOARD_CELLS: usize = BOARD_WIDTH * BOARD_WIDTH;

/// The eight triples checked for a win, in evaluation order:
/// rows, then columns, then the two diagonals.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub const PLAYER_ONE: Player = Player::new("Player X", Symbol::X);
pub const PLAYER_TWO: Player = Player::new("Player O", Symbol::O);

/// Status shown when a game ends with a full board and no line.
pub const TIE_MESSAGE: &str = "It's a Tie!";

/// Convert a (row, col) pair into a slot index. Returns `None` when either
/// coordinate falls outside the grid.
pub fn cell_index(row: usize, col: usize) -> Option<usize> {
    if row < BOARD_WIDTH && col < BOARD_WIDTH {
        Some(row * BOARD_WIDTH + col)
    } else {
        None
    }
}
