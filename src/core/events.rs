//! Outbound notifications from the engine to whatever presents the game.

use alloc::string::String;
use alloc::vec::Vec;

use super::board::{Board, BoardState};

/// Sink for engine notifications, injected when the engine is built.
///
/// Both calls run synchronously inside the `make_move` / `restart_game` call
/// that triggered them.
pub trait GameEvents {
    /// New human-readable status line.
    fn update_status(&mut self, message: &str);

    /// Board contents changed (or were reset) and should be redrawn.
    fn render_board(&mut self, board: &Board);
}

impl<E: GameEvents + ?Sized> GameEvents for &mut E {
    fn update_status(&mut self, message: &str) {
        (**self).update_status(message)
    }

    fn render_board(&mut self, board: &Board) {
        (**self).render_board(board)
    }
}

/// [`GameEvents`] that ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoEvents;

impl GameEvents for NoEvents {
    fn update_status(&mut self, _message: &str) {}
    fn render_board(&mut self, _board: &Board) {}
}

/// One notification captured by [`RecordedEvents`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Status(String),
    Render(BoardState),
}

/// [`GameEvents`] that keeps every notification in arrival order.
#[derive(Debug, Default, Clone)]
pub struct RecordedEvents {
    events: Vec<Event>,
}

impl RecordedEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Most recent status message, if any was sent.
    pub fn last_status(&self) -> Option<&str> {
        self.events.iter().rev().find_map(|e| match e {
            Event::Status(msg) => Some(msg.as_str()),
            Event::Render(_) => None,
        })
    }

    pub fn render_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, Event::Render(_)))
            .count()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl GameEvents for RecordedEvents {
    fn update_status(&mut self, message: &str) {
        self.events.push(Event::Status(String::from(message)));
    }

    fn render_board(&mut self, board: &Board) {
        self.events.push(Event::Render(BoardState::from(board)));
    }
}
