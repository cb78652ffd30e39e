use crate::moves::Move;
use crate::piece::Color;
use crate::position::Position;

/// Why `Game::make_move` refused a move. The game is left untouched in
/// every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidMove {
    #[error("no piece on {0}")]
    EmptySquare(Position),

    #[error("it is {turn}'s turn, but the piece belongs to {piece}")]
    WrongTeam { turn: Color, piece: Color },

    #[error("the piece cannot make the move {0}")]
    Unreachable(Move),

    #[error("{0} would leave the mover's king in check")]
    LeavesKingInCheck(Move),
}

/// A coordinate pair from outside the engine that does not name a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("position ({row}, {col}) is outside the 8x8 board")]
pub struct OutOfRange {
    pub row: u8,
    pub col: u8,
}
