use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::moves::Move;
use crate::piece::{Color, Piece, PieceType};
use crate::position::Position;

/// Piece order along each back rank, from file 1 to file 8.
const BACK_ROW: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// An 8x8 grid of optional pieces. The board applies no rules of its own;
/// legality lives in [`crate::game::Game`].
///
/// `Clone` copies the whole grid, so a cloned board never shares storage
/// with the original.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board with no pieces. Useful for setting up test positions.
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// A board in the standard starting layout.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.reset_board();
        board
    }

    /// Put `piece` on `position`, replacing whatever was there. Passing
    /// `None` clears the square.
    pub fn add_piece(&mut self, position: Position, piece: impl Into<Option<Piece>>) {
        let (r, c) = position.index();
        self.squares[r][c] = piece.into();
    }

    pub fn remove_piece(&mut self, position: Position) -> Option<Piece> {
        let (r, c) = position.index();
        self.squares[r][c].take()
    }

    pub fn get_piece(&self, position: Position) -> Option<Piece> {
        let (r, c) = position.index();
        self.squares[r][c]
    }

    pub fn clear(&mut self) {
        self.squares = [[None; 8]; 8];
    }

    /// Clear the grid and place the 32 pieces of a new game.
    pub fn reset_board(&mut self) {
        self.clear();
        for color in [Color::White, Color::Black] {
            let back = color.back_row();
            let pawns = color.pawn_start_row();
            for (i, &pt) in BACK_ROW.iter().enumerate() {
                let col = i as u8 + 1;
                self.add_piece(Position::new(back, col), Piece::new(pt, color));
                self.add_piece(Position::new(pawns, col), Piece::new(PieceType::Pawn, color));
            }
        }
    }

    /// Occupied squares belonging to `color`.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(move |pos| match self.get_piece(pos) {
            Some(p) if p.color == color => Some((pos, p)),
            _ => None,
        })
    }

    pub fn find_king(&self, color: Color) -> Option<Position> {
        self.pieces(color)
            .find(|(_, p)| p.piece_type == PieceType::King)
            .map(|(pos, _)| pos)
    }

    /// Every square some piece of `color` threatens.
    pub fn coverage(&self, color: Color) -> HashSet<Position> {
        self.pieces(color)
            .flat_map(|(pos, piece)| piece.attacked_squares(self, pos))
            .collect()
    }

    pub fn is_square_attacked_by(&self, position: Position, attacker: Color) -> bool {
        self.pieces(attacker)
            .any(|(pos, piece)| piece.attacked_squares(self, pos).contains(&position))
    }

    /// Whether `color`'s king stands on a square the other team covers.
    /// A team without a king on the board is never in check.
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.find_king(color) {
            Some(king) => self.is_square_attacked_by(king, color.opposite()),
            None => false,
        }
    }

    /// Relocate the piece on `m.start` to `m.end`, promoting it if the move
    /// says so. No legality checks; a move from an empty square does nothing.
    pub fn apply_move(&mut self, m: &Move) {
        let Some(piece) = self.remove_piece(m.start) else {
            return;
        };
        let moved = match m.promotion {
            Some(promo_type) => Piece::new(promo_type, piece.color),
            None => piece,
        };
        self.add_piece(m.end, moved);
    }
}
