use crate::board::Board;
use crate::game::{Game as RulesGame, GameStatus};
use crate::moves::Move;
use crate::piece::{Color, Piece, PieceType};
use crate::position::Position;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
struct BoardState {
    /// `squares[r][c]` is rank `r + 1`, file `c + 1`.
    squares: Vec<Vec<Option<Piece>>>,
    current_turn: Color,
    status: GameStatus,
    is_in_check: bool,
    legal_moves: Vec<Move>,
}

#[derive(Serialize)]
struct MoveResult {
    #[serde(flatten)]
    board_state: Option<BoardState>,
    error: Option<String>,
}

fn string_to_piece_type(s: &str) -> Option<PieceType> {
    match s {
        "Queen" => Some(PieceType::Queen),
        "Rook" => Some(PieceType::Rook),
        "Bishop" => Some(PieceType::Bishop),
        "Knight" => Some(PieceType::Knight),
        _ => None,
    }
}

fn square(row: u8, col: u8) -> Result<Position, String> {
    Position::try_new(row as i32, col as i32)
        .ok_or_else(|| format!("square ({row}, {col}) is off the board"))
}

fn build_board_state(game: &RulesGame) -> BoardState {
    let squares: Vec<Vec<Option<Piece>>> = (1..=8)
        .map(|r| {
            (1..=8)
                .map(|c| game.board().get_piece(Position::new(r, c)))
                .collect()
        })
        .collect();

    let turn = game.team_turn();
    BoardState {
        squares,
        current_turn: turn,
        status: game.status(),
        is_in_check: game.is_in_check(turn),
        legal_moves: game.legal_moves(turn),
    }
}

fn to_js<T: Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or(JsValue::NULL)
}

fn error_result(message: String) -> JsValue {
    to_js(&MoveResult {
        board_state: None,
        error: Some(message),
    })
}

#[wasm_bindgen]
pub fn build_timestamp() -> String {
    env!("BUILD_TIMESTAMP").to_string()
}

#[wasm_bindgen]
pub struct Game {
    game: RulesGame,
}

#[wasm_bindgen]
impl Game {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Game {
        Game {
            game: RulesGame::new(),
        }
    }

    pub fn get_board_state(&self) -> JsValue {
        to_js(&build_board_state(&self.game))
    }

    pub fn make_move(
        &mut self,
        from_row: u8,
        from_col: u8,
        to_row: u8,
        to_col: u8,
        promotion: Option<String>,
    ) -> JsValue {
        let (start, end) = match (square(from_row, from_col), square(to_row, to_col)) {
            (Ok(start), Ok(end)) => (start, end),
            (Err(e), _) | (_, Err(e)) => return error_result(e),
        };
        let m = Move {
            start,
            end,
            promotion: promotion.as_deref().and_then(string_to_piece_type),
        };

        match self.game.make_move(&m) {
            Ok(()) => to_js(&build_board_state(&self.game)),
            Err(e) => error_result(e.to_string()),
        }
    }

    /// Check-safe moves of the piece on (row, col); `null` for an empty
    /// square.
    pub fn get_moves_for_square(&self, row: u8, col: u8) -> JsValue {
        let Ok(position) = square(row, col) else {
            return JsValue::NULL;
        };
        match self.game.safe_moves(position) {
            Some(moves) => to_js(&moves.into_iter().collect::<Vec<_>>()),
            None => JsValue::NULL,
        }
    }

    pub fn export_board(&self) -> String {
        serde_json::to_string(self.game.board()).unwrap_or_default()
    }

    /// Replace the board from JSON produced by `export_board`. On success the
    /// new state is returned; on failure the game is left as it was.
    pub fn import_board(&mut self, json: &str) -> JsValue {
        match serde_json::from_str::<Board>(json) {
            Ok(board) => {
                self.game.set_board(board);
                to_js(&build_board_state(&self.game))
            }
            Err(e) => error_result(format!("bad board: {e}")),
        }
    }

    pub fn set_turn(&mut self, white: bool) {
        let color = if white { Color::White } else { Color::Black };
        self.game.set_team_turn(color);
    }
}
