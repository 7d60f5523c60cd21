use alloc::{format, string::String};
use log::{debug, info, trace};

use super::{
    board::{Board, BoardState},
    common::{MoveError, MoveOutcome, SetupError},
    config::{BOARD_CELLS, PLAYER_ONE, PLAYER_TWO, TIE_MESSAGE},
    events::{GameEvents, NoEvents},
    player::Player,
    rules::{self, Verdict},
};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Outcome {
    Win(Player),
    Tie,
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum GameStatus {
    /// Waiting for the carried player to move.
    InProgress(Player),
    /// No further moves accepted until restart.
    Terminal(Outcome),
}

impl GameStatus {
    /// Status line shown to the players.
    pub fn message(&self) -> String {
        match self {
            GameStatus::InProgress(p) => format!("{}'s Turn", p.name()),
            GameStatus::Terminal(Outcome::Win(p)) => format!("{} Wins!", p.name()),
            GameStatus::Terminal(Outcome::Tie) => String::from(TIE_MESSAGE),
        }
    }
}

/// Serializable view of an engine: board cells, whose turn and status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Snapshot {
    pub board: BoardState,
    pub current: Player,
    pub status: GameStatus,
}

/// Turn and rule engine: owns the board, enforces alternation, detects the
/// end of the game and notifies `E` of every accepted change.
pub struct GameEngine<E: GameEvents = NoEvents> {
    board: Board,
    players: [Player; 2],
    current: usize,
    status: GameStatus,
    events: E,
}

impl GameEngine<NoEvents> {
    /// Engine with the default players and no presentation attached.
    pub fn new() -> Self {
        Self::with_events(NoEvents)
    }
}

impl Default for GameEngine<NoEvents> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: GameEvents> GameEngine<E> {
    /// Engine with the default players reporting to `events`.
    pub fn with_events(events: E) -> Self {
        Self::build(PLAYER_ONE, PLAYER_TWO, events)
    }

    /// Engine with custom players; `one` moves first.
    ///
    /// The two players must hold different symbols. Nothing is sent to
    /// `events` until the first move or restart.
    pub fn with_players(one: Player, two: Player, events: E) -> Result<Self, SetupError> {
        if one.symbol() == two.symbol() {
            return Err(SetupError::DuplicateSymbol(one.symbol()));
        }
        Ok(Self::build(one, two, events))
    }

    fn build(one: Player, two: Player, events: E) -> Self {
        Self {
            board: Board::new(),
            players: [one, two],
            current: 0,
            status: GameStatus::InProgress(one),
            events,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Player whose symbol the next accepted move places. After a win this
    /// stays the winner.
    pub fn current_player(&self) -> Player {
        self.players[self.current]
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// `true` once the game has been won or tied.
    pub fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::Terminal(_))
    }

    pub fn events(&self) -> &E {
        &self.events
    }

    pub fn events_mut(&mut self) -> &mut E {
        &mut self.events
    }

    pub fn into_events(self) -> E {
        self.events
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: BoardState::from(&self.board),
            current: self.current_player(),
            status: self.status,
        }
    }

    /// Place the current player's symbol at `index`.
    ///
    /// Rejections leave the board, turn and status untouched and send no
    /// notification. An accepted move sends one status update followed by
    /// one render request.
    pub fn make_move(&mut self, index: usize) -> Result<MoveOutcome, MoveError> {
        if index >= BOARD_CELLS {
            trace!("rejected move at {}: out of range", index);
            return Err(MoveError::InvalidIndex { index });
        }
        if self.is_over() {
            trace!("rejected move at {}: game over", index);
            return Err(MoveError::GameAlreadyOver);
        }

        let mover = self.current_player();
        if !self.board.set_move(index, mover.symbol())? {
            trace!("rejected move at {}: occupied", index);
            return Err(MoveError::CellOccupied { index });
        }
        debug!("{} placed {} at {}", mover.name(), mover.symbol(), index);

        let outcome = match rules::evaluate(&self.board) {
            Some(Verdict::Win(_)) => {
                self.status = GameStatus::Terminal(Outcome::Win(mover));
                info!("{} wins", mover.name());
                MoveOutcome::Won(mover)
            }
            Some(Verdict::Tie) => {
                self.status = GameStatus::Terminal(Outcome::Tie);
                info!("game tied");
                MoveOutcome::Tie
            }
            None => {
                self.current = 1 - self.current;
                let next = self.current_player();
                self.status = GameStatus::InProgress(next);
                MoveOutcome::Continue(next)
            }
        };

        self.notify();
        Ok(outcome)
    }

    /// Clear the board and hand the first turn back to player one. Valid
    /// from any state.
    pub fn restart_game(&mut self) {
        self.board.reset();
        self.current = 0;
        self.status = GameStatus::InProgress(self.players[0]);
        info!("game restarted");
        self.notify();
    }

    fn notify(&mut self) {
        let message = self.status.message();
        self.events.update_status(&message);
        self.events.render_board(&self.board);
    }
}
