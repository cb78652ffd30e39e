// =============================================================================
// Game
//
// Owns the board and the side to move. Move generation on `Piece` is
// pseudo-legal; this module filters it down to check-safe moves by playing
// each candidate on a cloned board and asking whether the mover's king is
// covered by the opponent afterwards. The live board is only written by
// `make_move`, after every check has passed.
// =============================================================================

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::InvalidMove;
use crate::moves::Move;
use crate::piece::Color;
use crate::position::Position;

/// Where the side to move stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    turn: Color,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A new game: standard layout, White to move.
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            turn: Color::White,
        }
    }

    pub fn team_turn(&self) -> Color {
        self.turn
    }

    pub fn set_team_turn(&mut self, color: Color) {
        self.turn = color;
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Replace the board wholesale. The turn is left as it was.
    pub fn set_board(&mut self, board: Board) {
        self.board = board;
    }

    /// Pseudo-legal moves of the piece on `position`, or `None` for an
    /// empty square.
    pub fn valid_moves(&self, position: Position) -> Option<HashSet<Move>> {
        let piece = self.board.get_piece(position)?;
        Some(piece.piece_moves(&self.board, position).into_iter().collect())
    }

    /// The check-safe subset of [`Game::valid_moves`].
    pub fn safe_moves(&self, position: Position) -> Option<HashSet<Move>> {
        let piece = self.board.get_piece(position)?;
        Some(
            piece
                .piece_moves(&self.board, position)
                .into_iter()
                .filter(|m| self.is_safe(piece.color, m))
                .collect(),
        )
    }

    /// Every check-safe move available to `color`, regardless of whose turn
    /// it is.
    pub fn legal_moves(&self, color: Color) -> Vec<Move> {
        self.board
            .pieces(color)
            .flat_map(|(pos, piece)| piece.piece_moves(&self.board, pos))
            .filter(|m| self.is_safe(color, m))
            .collect()
    }

    fn has_safe_move(&self, color: Color) -> bool {
        self.board.pieces(color).any(|(pos, piece)| {
            piece
                .piece_moves(&self.board, pos)
                .iter()
                .any(|m| self.is_safe(color, m))
        })
    }

    /// Play `m` on a scratch copy of the board and report whether `color`'s
    /// king (wherever it ends up) is left uncovered.
    fn is_safe(&self, color: Color, m: &Move) -> bool {
        let mut scratch = self.board.clone();
        scratch.apply_move(m);
        !scratch.is_in_check(color)
    }

    /// Apply `m` for the side to move and pass the turn.
    ///
    /// Rejected moves leave both the board and the turn untouched.
    pub fn make_move(&mut self, m: &Move) -> Result<(), InvalidMove> {
        let piece = self
            .board
            .get_piece(m.start)
            .ok_or(InvalidMove::EmptySquare(m.start))?;

        if piece.color != self.turn {
            return Err(InvalidMove::WrongTeam {
                turn: self.turn,
                piece: piece.color,
            });
        }
        if !piece.piece_moves(&self.board, m.start).contains(m) {
            return Err(InvalidMove::Unreachable(*m));
        }
        if !self.is_safe(piece.color, m) {
            return Err(InvalidMove::LeavesKingInCheck(*m));
        }

        self.board.apply_move(m);
        self.turn = self.turn.opposite();
        Ok(())
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        self.board.is_in_check(color)
    }

    pub fn is_in_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_safe_move(color)
    }

    pub fn is_in_stalemate(&self, color: Color) -> bool {
        !self.is_in_check(color) && !self.has_safe_move(color)
    }

    /// Check, checkmate and stalemate for the side to move.
    pub fn status(&self) -> GameStatus {
        let in_check = self.is_in_check(self.turn);
        match (in_check, self.has_safe_move(self.turn)) {
            (true, false) => GameStatus::Checkmate,
            (false, false) => GameStatus::Stalemate,
            (true, true) => GameStatus::Check,
            (false, true) => GameStatus::Ongoing,
        }
    }
}
