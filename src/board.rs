//! Game board state: mine layout, per-cell display state, and counters.
//!
//! Cells are addressed as `(row, col)` with `row < height` and `col < width`
//! and stored row-major in flat vectors (`row * width + col`). The mine layout
//! and the visible state are kept apart so nothing a player does can move a
//! mine.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use core::fmt;

use crate::common::BoardError;
use crate::config::{FLAG, GUESS, HIDDEN, MINE, MIN_SIDE};

/// What the player currently sees in a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Untouched.
    Hidden,
    /// Marked by the player as a mine.
    Flagged,
    /// Marked by the player as a possible mine.
    Guessed,
    /// Revealed, carrying the number of adjacent mines (0..=8).
    Revealed(u8),
}

impl Cell {
    pub fn is_revealed(self) -> bool {
        matches!(self, Cell::Revealed(_))
    }

    /// Character used for this cell in the fogged view.
    pub fn symbol(self) -> char {
        match self {
            Cell::Hidden => HIDDEN,
            Cell::Flagged => FLAG,
            Cell::Guessed => GUESS,
            Cell::Revealed(n) => (b'0' + n) as char,
        }
    }
}

/// Offsets of the eight neighbours of a cell.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Main board state: mine layout, visible cells, counters.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    mines: Vec<bool>,
    cells: Vec<Cell>,
    mine_total: usize,
    mines_remaining: usize,
    flag_count: usize,
    revealed_count: usize,
    no_fog: bool,
}

impl Board {
    /// Create a `width × height` board with every cell hidden and no mines.
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        let len = width
            .checked_mul(height)
            .filter(|_| width >= MIN_SIDE && height >= MIN_SIDE)
            .ok_or(BoardError::InvalidDimensions { width, height })?;
        let mut mines = Vec::with_capacity(len);
        mines.resize(len, false);
        let mut cells = Vec::with_capacity(len);
        cells.resize(len, Cell::Hidden);
        Ok(Board {
            width,
            height,
            mines,
            cells,
            mine_total: 0,
            mines_remaining: 0,
            flag_count: 0,
            revealed_count: 0,
            no_fog: false,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of mines placed on the board.
    pub fn mine_total(&self) -> usize {
        self.mine_total
    }

    /// Mines that have not been flagged yet.
    pub fn mines_remaining(&self) -> usize {
        self.mines_remaining
    }

    /// Cells currently carrying a flag.
    pub fn flag_count(&self) -> usize {
        self.flag_count
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed_count
    }

    /// Whether the next render should show the mines.
    pub fn no_fog(&self) -> bool {
        self.no_fog
    }

    pub fn set_no_fog(&mut self, no_fog: bool) {
        self.no_fog = no_fog;
    }

    /// Returns `true` if `(row, col)` lies on the board.
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, BoardError> {
        if self.in_bounds(row, col) {
            Ok(row * self.width + col)
        } else {
            Err(BoardError::OutOfBounds { row, col })
        }
    }

    /// Visible state of a cell, or `None` off the board.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.index(row, col).ok().map(|i| self.cells[i])
    }

    /// In-bounds neighbours of `(row, col)`, up to eight.
    pub fn neighbors(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> {
        let (height, width) = (self.height, self.width);
        NEIGHBOR_OFFSETS.iter().filter_map(move |&(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            (r < height && c < width).then_some((r, c))
        })
    }

    /// Place a mine at `(row, col)`. Fails without mutating on a collision.
    pub fn place_mine(&mut self, row: usize, col: usize) -> Result<(), BoardError> {
        let i = self.index(row, col)?;
        if self.mines[i] {
            return Err(BoardError::DuplicateMine);
        }
        self.mines[i] = true;
        self.mine_total += 1;
        self.mines_remaining += 1;
        Ok(())
    }

    /// Returns `true` if `(row, col)` holds a mine.
    pub fn contains_mine(&self, row: usize, col: usize) -> Result<bool, BoardError> {
        Ok(self.mines[self.index(row, col)?])
    }

    /// Number of mines among the neighbours of `(row, col)`.
    pub fn count_adjacent_mines(&self, row: usize, col: usize) -> Result<u8, BoardError> {
        self.index(row, col)?;
        Ok(self.adjacent_mines(row, col))
    }

    fn adjacent_mines(&self, row: usize, col: usize) -> u8 {
        self.neighbors(row, col)
            .filter(|&(r, c)| self.mines[r * self.width + c])
            .count() as u8
    }

    /// Flag a hidden or guessed cell.
    ///
    /// Flagging a mined cell also takes it off the mines-remaining counter.
    pub fn flag(&mut self, row: usize, col: usize) -> Result<(), BoardError> {
        let i = self.index(row, col)?;
        match self.cells[i] {
            Cell::Revealed(_) => Err(BoardError::AlreadyRevealed),
            Cell::Flagged => Err(BoardError::AlreadyFlagged),
            Cell::Hidden | Cell::Guessed => {
                self.cells[i] = Cell::Flagged;
                self.flag_count += 1;
                if self.mines[i] {
                    self.mines_remaining -= 1;
                }
                Ok(())
            }
        }
    }

    /// Mark a cell that has not been revealed as a guess, replacing any flag.
    pub fn guess(&mut self, row: usize, col: usize) -> Result<(), BoardError> {
        let i = self.index(row, col)?;
        if self.cells[i].is_revealed() {
            return Err(BoardError::AlreadyRevealed);
        }
        if self.cells[i] == Cell::Flagged {
            self.unflag(i);
        }
        self.cells[i] = Cell::Guessed;
        Ok(())
    }

    fn unflag(&mut self, i: usize) {
        self.flag_count -= 1;
        if self.mines[i] {
            self.mines_remaining += 1;
        }
    }

    /// Reveal `(row, col)` and, when it has no adjacent mines, the whole
    /// connected zero region plus its border.
    ///
    /// Returns the number of cells revealed. Flags on revealed cells are
    /// removed. Mine checks are the caller's concern.
    pub fn reveal(&mut self, row: usize, col: usize) -> Result<usize, BoardError> {
        let start = self.index(row, col)?;
        if self.cells[start].is_revealed() {
            return Err(BoardError::AlreadyRevealed);
        }

        let mut revealed = 0;
        let mut frontier = Vec::new();
        frontier.push((row, col));
        while let Some((r, c)) = frontier.pop() {
            let i = r * self.width + c;
            if self.cells[i].is_revealed() {
                continue;
            }
            if self.cells[i] == Cell::Flagged {
                self.unflag(i);
            }
            let count = self.adjacent_mines(r, c);
            self.cells[i] = Cell::Revealed(count);
            self.revealed_count += 1;
            revealed += 1;

            if count == 0 {
                for (nr, nc) in self.neighbors(r, c) {
                    if !self.cells[nr * self.width + nc].is_revealed() {
                        frontier.push((nr, nc));
                    }
                }
            }
        }
        log::debug!("revealed {} cell(s) from ({}, {})", revealed, row, col);
        Ok(revealed)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{ {}x{}, mines: {}, remaining: {}, flags: {}, revealed: {} }}",
            self.width,
            self.height,
            self.mine_total,
            self.mines_remaining,
            self.flag_count,
            self.revealed_count
        )?;
        for row in (0..self.height).rev() {
            for col in 0..self.width {
                let i = row * self.width + col;
                let ch = if self.mines[i] && !self.cells[i].is_revealed() {
                    MINE
                } else {
                    self.cells[i].symbol()
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
