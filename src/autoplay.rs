//! A simple automatic player working only from what the board shows.
//!
//! It applies the two single-cell deductions (a number already satisfied by
//! its flags clears its other neighbours; a number equal to its flags plus
//! hidden neighbours makes them all mines) and otherwise reveals a random
//! hidden cell.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use rand::Rng;

use crate::board::{Board, Cell};
use crate::command::Command;

#[derive(Debug, Default, Clone, Copy)]
pub struct AutoPlayer;

impl AutoPlayer {
    pub fn new() -> Self {
        Self
    }

    /// Pick the next move, or `None` if no unflagged hidden cell is left.
    pub fn next_command<R: Rng + ?Sized>(&mut self, board: &Board, rng: &mut R) -> Option<Command> {
        if let Some(cmd) = self.deduce(board) {
            return Some(cmd);
        }
        let open: Vec<(usize, usize)> = cells(board)
            .filter(|&(_, _, cell)| matches!(cell, Cell::Hidden | Cell::Guessed))
            .map(|(row, col, _)| (row, col))
            .collect();
        if open.is_empty() {
            return None;
        }
        let (row, col) = open[rng.random_range(0..open.len())];
        Some(Command::Reveal { row, col })
    }

    fn deduce(&self, board: &Board) -> Option<Command> {
        for (row, col, cell) in cells(board) {
            let Cell::Revealed(n) = cell else { continue };
            if n == 0 {
                continue;
            }
            let mut flagged = 0usize;
            let mut hidden = None;
            let mut hidden_count = 0usize;
            for (r, c) in board.neighbors(row, col) {
                match board.cell(r, c) {
                    Some(Cell::Flagged) => flagged += 1,
                    Some(Cell::Hidden | Cell::Guessed) => {
                        hidden_count += 1;
                        hidden.get_or_insert((r, c));
                    }
                    _ => {}
                }
            }
            let Some((r, c)) = hidden else { continue };
            if flagged == n as usize {
                return Some(Command::Reveal { row: r, col: c });
            }
            if flagged + hidden_count == n as usize {
                return Some(Command::Flag { row: r, col: c });
            }
        }
        None
    }
}

fn cells(board: &Board) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
    (0..board.height()).flat_map(move |row| {
        (0..board.width())
            .filter_map(move |col| board.cell(row, col).map(|cell| (row, col, cell)))
    })
}
