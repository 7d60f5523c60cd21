#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod core;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;
#[cfg(feature = "std")]
pub mod replay;
#[cfg(feature = "std")]
pub mod terminal;

pub use crate::core::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from, LOG_ENV};
#[cfg(feature = "std")]
pub use replay::{replay, Rejection, ReplayReport};
#[cfg(feature = "std")]
pub use terminal::{
    cell_label, describe_rejection, parse_command, play, print_board, Command, TerminalView,
};
