//! Board size policy and display constants.

/// Symbol shown for a cell that has not been touched.
pub const HIDDEN: char = '*';
/// Symbol shown for a flagged cell.
pub const FLAG: char = 'F';
/// Symbol shown for a cell marked as a guess.
pub const GUESS: char = '?';
/// Symbol shown for a mine when fog is lifted.
pub const MINE: char = '@';

/// Smallest legal side length for any board.
pub const MIN_SIDE: usize = 2;

/// Boards with a side longer than this use the wide cell layout.
pub const WIDE_LAYOUT_THRESHOLD: usize = 10;

/// File the user store is read from when no path is given.
pub const DEFAULT_USER_FILE: &str = "users.txt";

/// Bounds the menu enforces before a game is built.
///
/// The engine itself only requires sides of at least [`MIN_SIDE`]; these
/// limits are policy and can be overridden by the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Limits {
    pub min_height: usize,
    pub max_height: usize,
    pub min_width: usize,
    pub max_width: usize,
    /// Mine count must stay strictly below `ceil(area * mine_density)`.
    pub mine_density: f64,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            min_height: MIN_SIDE,
            max_height: 24,
            min_width: MIN_SIDE,
            max_width: 32,
            mine_density: 0.261,
        }
    }
}

impl Limits {
    pub fn height_ok(&self, height: usize) -> bool {
        (self.min_height..=self.max_height).contains(&height)
    }

    pub fn width_ok(&self, width: usize) -> bool {
        (self.min_width..=self.max_width).contains(&width)
    }

    /// Exclusive upper bound on the mine count for a `height × width` board.
    pub fn mine_cap(&self, height: usize, width: usize) -> usize {
        libm::ceil((height * width) as f64 * self.mine_density) as usize
    }

    pub fn mines_ok(&self, height: usize, width: usize, mines: usize) -> bool {
        mines > 0 && mines < self.mine_cap(height, width)
    }
}
