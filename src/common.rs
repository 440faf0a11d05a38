//! Common types for Minesweeper: board errors and the control-flow signal.

/// Errors returned by Board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Board requested with a side shorter than two cells or with more
    /// cells than fit in `usize`.
    InvalidDimensions { width: usize, height: usize },
    /// Row or column is outside the grid.
    OutOfBounds { row: usize, col: usize },
    /// Mutation attempted on a cell that is already revealed.
    AlreadyRevealed,
    /// Flag attempted on a cell that already carries a flag.
    AlreadyFlagged,
    /// A mine already occupies this cell; the caller should resample.
    DuplicateMine,
    /// More mines requested than the board has cells.
    TooManyMines { requested: usize, cells: usize },
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::InvalidDimensions { width, height } => {
                write!(f, "Board must be at least 2x2, got {}x{}", width, height)
            }
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Position ({}, {}) is out of bounds", row, col)
            }
            BoardError::AlreadyRevealed => write!(f, "Tile already revealed"),
            BoardError::AlreadyFlagged => write!(f, "Tile already flagged"),
            BoardError::DuplicateMine => write!(f, "A mine is already placed there"),
            BoardError::TooManyMines { requested, cells } => {
                write!(f, "Cannot place {} mines on {} cells", requested, cells)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

/// What the outer session loop should do once a command has been handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep running: either the game goes on or control returns to the menu.
    Continue,
    /// Leave the program entirely.
    Exit,
}
