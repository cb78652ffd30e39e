use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::moves::Move;
use crate::position::Position;

/// The two teams.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank step of a forward pawn move.
    pub fn pawn_direction(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Rank from which a pawn may advance two squares.
    pub fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => 2,
            Color::Black => 7,
        }
    }

    /// The farthest rank, where pawns promote.
    pub fn promotion_row(self) -> u8 {
        match self {
            Color::White => 8,
            Color::Black => 1,
        }
    }

    pub fn back_row(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 8,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceType {
    King,
    Queen,
    Bishop,
    Knight,
    Rook,
    Pawn,
}

impl PieceType {
    /// What a pawn may become on the farthest rank, in generation order.
    pub const PROMOTIONS: [PieceType; 4] = [
        PieceType::Queen,
        PieceType::Rook,
        PieceType::Bishop,
        PieceType::Knight,
    ];
}

const ORTHOGONAL: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
const DIAGONAL: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, -1), (-2, 1), (-1, -2), (-1, 2),
    (1, -2), (1, 2), (2, -1), (2, 1),
];
const KING_OFFSETS: [(i32, i32); 8] = [
    (-1, -1), (-1, 0), (-1, 1), (0, -1),
    (0, 1), (1, -1), (1, 0), (1, 1),
];

/// A chess piece. Pieces carry no position; the caller always supplies
/// the square a piece stands on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub piece_type: PieceType,
    pub color: Color,
}

impl Piece {
    pub fn new(piece_type: PieceType, color: Color) -> Self {
        Piece { piece_type, color }
    }

    /// Every pseudo-legal move for this piece standing on `position`.
    ///
    /// Geometry and occupancy only: a move returned here may still leave
    /// the mover's king attacked. The board is not modified.
    pub fn piece_moves(&self, board: &Board, position: Position) -> Vec<Move> {
        let mut moves = Vec::new();
        match self.piece_type {
            PieceType::King => self.step_moves(board, position, &KING_OFFSETS, &mut moves),
            PieceType::Queen => {
                self.sliding_moves(board, position, &ORTHOGONAL, &mut moves);
                self.sliding_moves(board, position, &DIAGONAL, &mut moves);
            }
            PieceType::Bishop => self.sliding_moves(board, position, &DIAGONAL, &mut moves),
            PieceType::Knight => self.step_moves(board, position, &KNIGHT_OFFSETS, &mut moves),
            PieceType::Rook => self.sliding_moves(board, position, &ORTHOGONAL, &mut moves),
            PieceType::Pawn => self.pawn_moves(board, position, &mut moves),
        }
        moves
    }

    /// Squares this piece threatens from `position`.
    ///
    /// Matches the destinations of [`Piece::piece_moves`] except for pawns,
    /// which threaten both forward diagonals (empty or not) and never the
    /// square straight ahead.
    pub fn attacked_squares(&self, board: &Board, position: Position) -> Vec<Position> {
        match self.piece_type {
            PieceType::Pawn => {
                let dir = self.color.pawn_direction();
                [-1, 1]
                    .iter()
                    .filter_map(|&dc| position.offset(dir, dc))
                    .collect()
            }
            _ => self
                .piece_moves(board, position)
                .into_iter()
                .map(|m| m.end)
                .collect(),
        }
    }

    fn is_friendly(&self, board: &Board, position: Position) -> bool {
        board
            .get_piece(position)
            .map(|p| p.color == self.color)
            .unwrap_or(false)
    }

    /// Single-step movers (king, knight): each on-board offset not held by a
    /// friendly piece.
    fn step_moves(
        &self,
        board: &Board,
        from: Position,
        offsets: &[(i32, i32)],
        moves: &mut Vec<Move>,
    ) {
        for &(dr, dc) in offsets {
            let Some(to) = from.offset(dr, dc) else {
                continue;
            };
            if self.is_friendly(board, to) {
                continue;
            }
            moves.push(Move::new(from, to));
        }
    }

    fn sliding_moves(
        &self,
        board: &Board,
        from: Position,
        directions: &[(i32, i32)],
        moves: &mut Vec<Move>,
    ) {
        for &(dr, dc) in directions {
            let mut cursor = from.offset(dr, dc);
            while let Some(to) = cursor {
                if let Some(p) = board.get_piece(to) {
                    if p.color != self.color {
                        moves.push(Move::new(from, to));
                    }
                    break;
                }
                moves.push(Move::new(from, to));
                cursor = to.offset(dr, dc);
            }
        }
    }

    fn pawn_moves(&self, board: &Board, from: Position, moves: &mut Vec<Move>) {
        let dir = self.color.pawn_direction();

        // Single push, then double push from the starting rank
        if let Some(one) = from.offset(dir, 0) {
            if board.get_piece(one).is_none() {
                self.push_pawn_move(from, one, moves);

                if from.row() == self.color.pawn_start_row() {
                    if let Some(two) = one.offset(dir, 0) {
                        if board.get_piece(two).is_none() {
                            self.push_pawn_move(from, two, moves);
                        }
                    }
                }
            }
        }

        // Captures
        for dc in [-1, 1] {
            let Some(to) = from.offset(dir, dc) else {
                continue;
            };
            let is_capture = board
                .get_piece(to)
                .map(|p| p.color != self.color)
                .unwrap_or(false);
            if is_capture {
                self.push_pawn_move(from, to, moves);
            }
        }
    }

    fn push_pawn_move(&self, from: Position, to: Position, moves: &mut Vec<Move>) {
        if to.row() == self.color.promotion_row() {
            for pt in PieceType::PROMOTIONS {
                moves.push(Move::promote(from, to, pt));
            }
        } else {
            moves.push(Move::new(from, to));
        }
    }
}
