//! Game board state: nine slots, row-major.

use core::fmt;

use super::common::BoardError;
use super::config::{BOARD_CELLS, BOARD_WIDTH};
use super::player::Symbol;

/// Contents of a single slot.
pub type Cell = Option<Symbol>;

/// Serializable board state for snapshots and replay output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardState {
    pub cells: [Cell; BOARD_CELLS],
}

/// Sole owner of the grid; the only place cell contents change.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Board {
            cells: [None; BOARD_CELLS],
        }
    }

    /// Read-only view of every slot in index order.
    pub fn slots(&self) -> &[Cell; BOARD_CELLS] {
        &self.cells
    }

    /// Contents of one slot.
    pub fn get(&self, index: usize) -> Result<Cell, BoardError> {
        self.cells
            .get(index)
            .copied()
            .ok_or(BoardError::InvalidIndex { index })
    }

    /// Place `symbol` at `index` if the slot is empty.
    ///
    /// Returns `Ok(true)` when the slot was filled and `Ok(false)` when it
    /// was already occupied, in which case the board is left untouched.
    pub fn set_move(&mut self, index: usize, symbol: Symbol) -> Result<bool, BoardError> {
        let slot = self
            .cells
            .get_mut(index)
            .ok_or(BoardError::InvalidIndex { index })?;
        if slot.is_some() {
            return Ok(false);
        }
        *slot = Some(symbol);
        Ok(true)
    }

    /// Clear every slot.
    pub fn reset(&mut self) {
        self.cells = [None; BOARD_CELLS];
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// Indices of open slots, ascending.
    pub fn empty_slots(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_none())
            .map(|(i, _)| i)
    }

    /// Number of slots holding `symbol`.
    pub fn count(&self, symbol: Symbol) -> usize {
        self.cells.iter().filter(|c| **c == Some(symbol)).count()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(")?;
        for cell in self.cells.iter() {
            let ch = cell.map_or('.', Symbol::as_char);
            write!(f, "{}", ch)?;
        }
        write!(f, ")")
    }
}

/// Three rows of three characters, `.` for empty.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.chunks(BOARD_WIDTH).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", cell.map_or('.', Symbol::as_char))?;
            }
        }
        Ok(())
    }
}

impl From<&Board> for BoardState {
    fn from(b: &Board) -> Self {
        BoardState { cells: b.cells }
    }
}

impl From<BoardState> for Board {
    fn from(state: BoardState) -> Self {
        Board { cells: state.cells }
    }
}
