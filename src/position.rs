use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::OutOfRange;

/// Number of ranks and files on the board.
pub const BOARD_SIZE: u8 = 8;

/// A square on the 8x8 grid. Both `row` (rank) and `col` (file) are
/// 1-indexed: (1, 1) is a1, (8, 8) is h8.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(u8, u8)", into = "(u8, u8)")]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Build a position that is known to be on the board.
    ///
    /// Panics when either coordinate is outside `1..=8`. Callers holding
    /// untrusted coordinates should use [`Position::try_new`].
    pub fn new(row: u8, col: u8) -> Self {
        assert!(
            Self::in_bounds(row as i32, col as i32),
            "position ({row}, {col}) is off the board"
        );
        Position { row, col }
    }

    pub fn try_new(row: i32, col: i32) -> Option<Self> {
        if Self::in_bounds(row, col) {
            Some(Position {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    fn in_bounds(row: i32, col: i32) -> bool {
        (1..=BOARD_SIZE as i32).contains(&row) && (1..=BOARD_SIZE as i32).contains(&col)
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn col(self) -> u8 {
        self.col
    }

    /// The square `dr` ranks and `dc` files away, or `None` if that step
    /// leaves the board.
    pub fn offset(self, dr: i32, dc: i32) -> Option<Self> {
        Self::try_new(self.row as i32 + dr, self.col as i32 + dc)
    }

    /// Zero-based (row, col) indices into the board grid.
    pub(crate) fn index(self) -> (usize, usize) {
        (self.row as usize - 1, self.col as usize - 1)
    }

    /// All 64 squares, rank by rank starting from (1, 1).
    pub fn all() -> impl Iterator<Item = Position> {
        (1..=BOARD_SIZE).flat_map(|row| (1..=BOARD_SIZE).map(move |col| Position { row, col }))
    }
}

impl TryFrom<(u8, u8)> for Position {
    type Error = OutOfRange;

    fn try_from((row, col): (u8, u8)) -> Result<Self, Self::Error> {
        Self::try_new(row as i32, col as i32).ok_or(OutOfRange { row, col })
    }
}

impl From<Position> for (u8, u8) {
    fn from(pos: Position) -> Self {
        (pos.row, pos.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}
