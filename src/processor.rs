//! Translation of player commands into board and game mutations.
//!
//! Every function bounds-checks before touching the board, so a rejected
//! command leaves the game exactly as it was.

use crate::board::Board;
use crate::command::Command;
use crate::common::{BoardError, Flow};
use crate::game::Game;

/// Result of a reveal command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// The cell was safe; carries how many cells were opened.
    Cleared(usize),
    /// The cell held a mine and the game is lost.
    Detonated,
}

pub const HELP: &str = "Commands:\n\
\tr/reveal [row] [col]\tReveal a square\n\
\tf/flag [row] [col]\tFlag a square\n\
\tg/guess [row] [col]\tGuess a square\n\
\th/help        \t\tPrint help\n\
\tq/quit        \t\tQuit to menu\n\
\tc/close       \t\tQuit the program\n";

fn check_bounds(board: &Board, row: usize, col: usize) -> Result<(), BoardError> {
    if board.in_bounds(row, col) {
        Ok(())
    } else {
        Err(BoardError::OutOfBounds { row, col })
    }
}

/// Reveal a cell, losing the game if it holds a mine.
pub fn reveal(row: usize, col: usize, game: &mut Game) -> Result<RevealOutcome, BoardError> {
    check_bounds(game.board(), row, col)?;
    if game.board().contains_mine(row, col)? {
        log::info!("mine hit at ({}, {})", row, col);
        game.lose();
        return Ok(RevealOutcome::Detonated);
    }
    let opened = game.board_mut().reveal(row, col)?;
    Ok(RevealOutcome::Cleared(opened))
}

/// Flag a cell. The board keeps the mines-remaining counter in step.
pub fn flag(row: usize, col: usize, game: &mut Game) -> Result<(), BoardError> {
    check_bounds(game.board(), row, col)?;
    game.board_mut().flag(row, col)
}

pub fn guess(row: usize, col: usize, game: &mut Game) -> Result<(), BoardError> {
    check_bounds(game.board(), row, col)?;
    game.board_mut().guess(row, col)
}

/// Show the mines on the next render only.
pub fn no_fog(game: &mut Game) {
    game.board_mut().set_no_fog(true);
}

/// End the game and return to the menu.
pub fn quit(game: &mut Game) -> Flow {
    game.quit();
    Flow::Continue
}

/// End the game and leave the program.
pub fn close(game: &mut Game) -> Flow {
    game.quit();
    Flow::Exit
}

pub fn help() -> &'static str {
    HELP
}

/// Run one parsed command against `game`.
///
/// Turn accounting and the win check belong to [`Game::apply`].
pub fn execute(command: Command, game: &mut Game) -> Result<Flow, BoardError> {
    match command {
        Command::Reveal { row, col } => reveal(row, col, game).map(|_| Flow::Continue),
        Command::Flag { row, col } => flag(row, col, game).map(|()| Flow::Continue),
        Command::Guess { row, col } => guess(row, col, game).map(|()| Flow::Continue),
        Command::NoFog => {
            no_fog(game);
            Ok(Flow::Continue)
        }
        Command::Quit => Ok(quit(game)),
        Command::Close => Ok(close(game)),
        Command::Help => Ok(Flow::Continue),
    }
}
