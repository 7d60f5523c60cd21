//! Player identities and the marks they place.

use core::fmt;

/// Mark placed in a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Symbol {
    X,
    O,
}

impl Symbol {
    pub fn as_char(self) -> char {
        match self {
            Symbol::X => 'X',
            Symbol::O => 'O',
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Immutable (display name, symbol) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Player {
    name: &'static str,
    symbol: Symbol,
}

impl Player {
    pub const fn new(name: &'static str, symbol: Symbol) -> Self {
        Self { name, symbol }
    }

    /// Name used in status messages.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn symbol(&self) -> Symbol {
        self.symbol
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
