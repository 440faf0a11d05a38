//! Commonly used types and utilities for ease of import.

pub use crate::{AutoPlayer, Board, BoardError, Cell, Command, Flow, Limits};

#[cfg(feature = "std")]
pub use crate::{BoardView, Game, GameStatus, Session, User, UserStore};
