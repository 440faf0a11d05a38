//! Text view of a board, coloured by the number in each revealed cell.
//!
//! Row indices run down the left edge from `height - 1` to `0`; column
//! indices form a footer. Boards wider or taller than
//! [`WIDE_LAYOUT_THRESHOLD`] use five-character cells so two-digit indices
//! stay aligned.

use core::fmt;

use crossterm::style::{Color, Stylize};

use crate::board::{Board, Cell};
use crate::config::{MINE, WIDE_LAYOUT_THRESHOLD};

/// Borrowed, restartable view of a board; format it as many times as needed.
#[derive(Clone, Copy)]
pub struct BoardView<'a> {
    board: &'a Board,
    reveal_mines: bool,
    colored: bool,
}

impl<'a> BoardView<'a> {
    /// View honouring the board's one-shot no-fog flag.
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            reveal_mines: board.no_fog(),
            colored: true,
        }
    }

    /// Overlay the true mine positions on unrevealed cells.
    pub fn reveal_mines(mut self, reveal: bool) -> Self {
        self.reveal_mines = reveal;
        self
    }

    /// Toggle ANSI background colours.
    pub fn colored(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    fn wide(&self) -> bool {
        self.board.width() > WIDE_LAYOUT_THRESHOLD || self.board.height() > WIDE_LAYOUT_THRESHOLD
    }
}

/// Background colour for a cell: by digit once revealed, grey otherwise.
pub fn cell_background(cell: Cell) -> Color {
    match cell {
        Cell::Revealed(0) => Color::Green,
        Cell::Revealed(1 | 2) => Color::Yellow,
        // orange
        Cell::Revealed(3 | 4) => Color::AnsiValue(208),
        Cell::Revealed(5 | 6) => Color::Magenta,
        Cell::Revealed(_) => Color::Red,
        Cell::Hidden | Cell::Flagged | Cell::Guessed => Color::DarkGrey,
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let wide = self.wide();
        for row in (0..self.board.height()).rev() {
            write!(f, "{:>2} ", row)?;
            for col in 0..self.board.width() {
                let cell = self.board.cell(row, col).unwrap_or(Cell::Hidden);
                let mined = self.board.contains_mine(row, col).unwrap_or(false);
                let symbol = if self.reveal_mines && mined && !cell.is_revealed() {
                    MINE
                } else {
                    cell.symbol()
                };
                let text = if wide {
                    format!("[ {} ]", symbol)
                } else {
                    format!("[{}]", symbol)
                };
                if self.colored {
                    write!(f, "{}", text.on(cell_background(cell)))?;
                } else {
                    f.write_str(&text)?;
                }
            }
            writeln!(f)?;
        }

        f.write_str(if wide { "     " } else { "    " })?;
        for col in 0..self.board.width() {
            if wide {
                write!(f, "{:<5}", col)?;
            } else {
                write!(f, "{:<3}", col)?;
            }
        }
        Ok(())
    }
}
