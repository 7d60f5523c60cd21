#![cfg(feature = "std")]

//! Line-oriented terminal presentation: draws the board and status text and
//! turns typed commands into engine calls.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use crate::core::{
    cell_index, Board, GameEngine, GameEvents, MoveError, Symbol, BOARD_CELLS, BOARD_WIDTH,
};

/// A parsed line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move at the given slot index (0-based).
    Select(usize),
    Restart,
    Help,
    Quit,
}

/// Parse `5`, `b2`, `r`, `q` and friends. Cells are numbered 1-9 for
/// players; the returned index is 0-based.
pub fn parse_command(input: &str) -> Result<Command, String> {
    let input = input.trim().to_ascii_lowercase();
    match input.as_str() {
        "" => return Err("Empty input".to_string()),
        "q" | "quit" | "exit" => return Ok(Command::Quit),
        "r" | "restart" => return Ok(Command::Restart),
        "h" | "help" | "?" => return Ok(Command::Help),
        _ => {}
    }

    if let Ok(n) = input.parse::<usize>() {
        if (1..=BOARD_CELLS).contains(&n) {
            return Ok(Command::Select(n - 1));
        }
        return Err(format!("Cell {} out of bounds - must be 1-{}", n, BOARD_CELLS));
    }

    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("No column letter")?;
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Unrecognized input '{}' - type 'h' for help", input));
    }
    let col = (col_ch as u8).wrapping_sub(b'a') as usize;
    let row_str: String = chars.collect();
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-3", row_str))?;
    if row == 0 {
        return Err("Row cannot be 0 - must be 1-3".to_string());
    }
    cell_index(row - 1, col)
        .map(Command::Select)
        .ok_or_else(|| format!("'{}' is off the board - use a1 to c3", input))
}

/// Player-facing label for a slot: its 1-9 number and grid coordinate.
pub fn cell_label(index: usize) -> String {
    let row = index / BOARD_WIDTH;
    let col = index % BOARD_WIDTH;
    format!("{} ({}{})", index + 1, (b'a' + col as u8) as char, row + 1)
}

/// Rejection text using the numbering players type, not engine indices.
pub fn describe_rejection(err: &MoveError) -> String {
    match err {
        MoveError::CellOccupied { index } => {
            format!("Cell {} is already taken", cell_label(*index))
        }
        MoveError::InvalidIndex { .. } => format!("Pick a cell from 1 to {}", BOARD_CELLS),
        MoveError::GameAlreadyOver => "Game is over - type 'r' to play again".to_string(),
    }
}

const HELP: &str = "Commands:
  1-9      place your mark (cells numbered left to right, top to bottom)
  a1..c3   place your mark by column letter and row number
  r        restart the game
  q        quit";

/// [`GameEvents`] that prints to any writer.
///
/// Write failures are kept and surfaced through [`take_error`](Self::take_error)
/// since the notification methods cannot return them.
pub struct TerminalView<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    /// Print a rejection or parse problem.
    pub fn report(&mut self, problem: &dyn Display) {
        let res = writeln!(self.out, "! {}", problem);
        self.record(res);
    }

    pub fn print_help(&mut self) {
        let res = writeln!(self.out, "{}", HELP);
        self.record(res);
    }

    fn prompt(&mut self) {
        let res = write!(self.out, "> ").and_then(|()| self.out.flush());
        self.record(res);
    }

    fn record(&mut self, res: io::Result<()>) {
        if let Err(e) = res {
            self.error.get_or_insert(e);
        }
    }
}

impl<W: Write> GameEvents for TerminalView<W> {
    fn update_status(&mut self, message: &str) {
        let res = writeln!(self.out, "{}", message);
        self.record(res);
    }

    fn render_board(&mut self, board: &Board) {
        let res = print_board(&mut self.out, board);
        self.record(res);
    }
}

/// Draw the grid with column letters and row numbers.
pub fn print_board<W: Write>(out: &mut W, board: &Board) -> io::Result<()> {
    write!(out, "  ")?;
    for c in 0..BOARD_WIDTH {
        write!(out, " {}", (b'A' + c as u8) as char)?;
    }
    writeln!(out)?;
    for (r, row) in board.slots().chunks(BOARD_WIDTH).enumerate() {
        write!(out, "{:2}", r + 1)?;
        for cell in row {
            write!(out, " {}", cell.map_or('.', Symbol::as_char))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Run an interactive game until `input` ends or the player quits.
///
/// Rejected moves and unparseable lines are reported on `out` and the game
/// carries on. Returns the view so callers can recover the writer.
pub fn play<R: BufRead, W: Write>(input: R, out: W) -> io::Result<TerminalView<W>> {
    let mut engine = GameEngine::with_events(TerminalView::new(out));
    engine.restart_game();
    engine.events_mut().prompt();

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            engine.events_mut().prompt();
            continue;
        }
        match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Restart) => engine.restart_game(),
            Ok(Command::Help) => engine.events_mut().print_help(),
            Ok(Command::Select(index)) => {
                if let Err(e) = engine.make_move(index) {
                    log::debug!("move rejected: {}", e);
                    engine.events_mut().report(&describe_rejection(&e));
                }
            }
            Err(msg) => engine.events_mut().report(&msg),
        }
        if let Some(e) = engine.events_mut().take_error() {
            return Err(e);
        }
        engine.events_mut().prompt();
    }

    let mut view = engine.into_events();
    match view.take_error() {
        Some(e) => Err(e),
        None => Ok(view),
    }
}
