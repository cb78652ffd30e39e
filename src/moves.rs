use std::fmt;

use serde::{Deserialize, Serialize};

use crate::piece::PieceType;
use crate::position::Position;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub start: Position,
    pub end: Position,
    /// Set only for pawn moves onto the farthest rank.
    pub promotion: Option<PieceType>,
}

impl Move {
    pub fn new(start: Position, end: Position) -> Self {
        Move {
            start,
            end,
            promotion: None,
        }
    }

    pub fn promote(start: Position, end: Position, piece_type: PieceType) -> Self {
        Move {
            start,
            end,
            promotion: Some(piece_type),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)?;
        if let Some(pt) = self.promotion {
            write!(f, "={pt:?}")?;
        }
        Ok(())
    }
}
