use std::collections::HashSet;

use chess_rules::{Board, Color, Game, GameStatus, InvalidMove, Move, Piece, PieceType, Position};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

fn pos(row: u8, col: u8) -> Position {
    Position::new(row, col)
}

fn game_with(pieces: &[((u8, u8), PieceType, Color)], turn: Color) -> Game {
    let mut board = Board::empty();
    for &((r, c), pt, color) in pieces {
        board.add_piece(pos(r, c), Piece::new(pt, color));
    }
    let mut game = Game::new();
    game.set_board(board);
    game.set_team_turn(turn);
    game
}

#[test]
fn initial_layout_moves() {
    let game = Game::new();
    for square in Position::all() {
        let Some(piece) = game.board().get_piece(square) else {
            assert_eq!(game.valid_moves(square), None);
            continue;
        };
        let moves = game.valid_moves(square).expect("occupied square");
        match piece.piece_type {
            PieceType::Pawn => {
                assert_eq!(moves.len(), 2, "pawn on {square}");
                assert!(moves.iter().all(|m| m.end.col() == square.col()));
            }
            PieceType::Knight => assert_eq!(moves.len(), 2, "knight on {square}"),
            _ => assert!(moves.is_empty(), "{piece:?} on {square} should be boxed in"),
        }
    }
}

#[test]
fn valid_moves_is_idempotent() {
    let game = Game::new();
    for square in [pos(1, 2), pos(2, 5), pos(7, 4), pos(8, 7)] {
        assert_eq!(game.valid_moves(square), game.valid_moves(square));
    }
}

#[test]
fn rejected_move_changes_nothing() {
    let mut game = Game::new();
    let before = game.clone();
    let before_json = serde_json::to_string(&game).unwrap();

    let bogus = Move::new(pos(1, 4), pos(5, 8));
    assert!(!game.valid_moves(pos(1, 4)).unwrap().contains(&bogus));
    assert_eq!(game.make_move(&bogus), Err(InvalidMove::Unreachable(bogus)));

    assert_eq!(game, before);
    assert_eq!(serde_json::to_string(&game).unwrap(), before_json);
}

#[test]
fn turns_alternate_on_success_only() {
    let mut game = Game::new();
    let opening = [
        Move::new(pos(2, 5), pos(4, 5)),
        Move::new(pos(7, 5), pos(5, 5)),
        Move::new(pos(1, 7), pos(3, 6)),
        Move::new(pos(8, 2), pos(6, 3)),
        Move::new(pos(1, 6), pos(4, 3)),
    ];
    for (n, m) in opening.iter().enumerate() {
        // Replaying the previous move must fail and keep the turn
        if n > 0 {
            assert!(game.make_move(&opening[n - 1]).is_err());
        }
        game.make_move(m).unwrap_or_else(|e| panic!("move {n} ({m}) rejected: {e}"));
        let expected = if (n + 1) % 2 == 0 { Color::White } else { Color::Black };
        assert_eq!(game.team_turn(), expected);
    }
}

#[test]
fn random_games_keep_turn_parity() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..5 {
        let mut game = Game::new();
        let mut played = 0;
        while played < 60 {
            let moves = game.legal_moves(game.team_turn());
            let Some(m) = moves.choose(&mut rng) else {
                break;
            };
            game.make_move(m).expect("legal move must be accepted");
            played += 1;
            let expected = if played % 2 == 0 { Color::White } else { Color::Black };
            assert_eq!(game.team_turn(), expected);
            assert!(!game.is_in_check(game.team_turn().opposite()));
        }
    }
}

#[test]
fn queen_mate_in_the_corner() {
    let game = game_with(
        &[
            ((8, 8), PieceType::King, Color::Black),
            ((7, 7), PieceType::Queen, Color::White),
            ((6, 6), PieceType::King, Color::White),
        ],
        Color::Black,
    );
    assert!(game.is_in_check(Color::Black));
    assert!(game.is_in_checkmate(Color::Black));
    assert!(!game.is_in_stalemate(Color::Black));
    assert!(!game.valid_moves(pos(8, 8)).unwrap().is_empty());
    assert!(game.safe_moves(pos(8, 8)).unwrap().is_empty());
    assert_eq!(game.status(), GameStatus::Checkmate);
}

#[test]
fn undefended_queen_can_be_taken_by_the_king() {
    let game = game_with(
        &[
            ((8, 8), PieceType::King, Color::Black),
            ((7, 7), PieceType::Queen, Color::White),
            ((1, 1), PieceType::King, Color::White),
        ],
        Color::Black,
    );
    assert!(game.is_in_check(Color::Black));
    assert!(!game.is_in_checkmate(Color::Black));
    assert_eq!(
        game.safe_moves(pos(8, 8)).unwrap(),
        HashSet::from([Move::new(pos(8, 8), pos(7, 7))])
    );
}

#[test]
fn cornered_king_is_stalemated() {
    let game = game_with(
        &[
            ((8, 8), PieceType::King, Color::Black),
            ((6, 6), PieceType::King, Color::White),
            ((7, 6), PieceType::Queen, Color::White),
        ],
        Color::Black,
    );
    assert!(!game.is_in_check(Color::Black));
    assert!(game.is_in_stalemate(Color::Black));
    assert!(!game.is_in_checkmate(Color::Black));
    assert_eq!(game.status(), GameStatus::Stalemate);
    assert!(!game.is_in_stalemate(Color::White));
}

#[test]
fn pawn_promotes_on_last_rank() {
    let mut game = game_with(
        &[
            ((7, 3), PieceType::Pawn, Color::White),
            ((1, 5), PieceType::King, Color::White),
            ((6, 8), PieceType::King, Color::Black),
        ],
        Color::White,
    );
    let promote = Move::promote(pos(7, 3), pos(8, 3), PieceType::Queen);
    assert_eq!(game.make_move(&promote), Ok(()));
    assert_eq!(
        game.board().get_piece(pos(8, 3)),
        Some(Piece::new(PieceType::Queen, Color::White))
    );
    assert_eq!(game.board().get_piece(pos(7, 3)), None);
    assert_eq!(game.team_turn(), Color::Black);
}

#[test]
fn pawn_push_to_last_rank_needs_a_promotion_choice() {
    let mut game = game_with(
        &[
            ((7, 3), PieceType::Pawn, Color::White),
            ((1, 5), PieceType::King, Color::White),
            ((6, 8), PieceType::King, Color::Black),
        ],
        Color::White,
    );
    let plain = Move::new(pos(7, 3), pos(8, 3));
    assert_eq!(game.make_move(&plain), Err(InvalidMove::Unreachable(plain)));
    assert_eq!(
        game.board().get_piece(pos(7, 3)),
        Some(Piece::new(PieceType::Pawn, Color::White))
    );
}

#[test]
fn mutating_a_clone_leaves_the_source_alone() {
    let game = Game::new();
    let mut copy = game.board().clone();
    for square in Position::all() {
        copy.add_piece(square, Piece::new(PieceType::Knight, Color::Black));
    }
    assert_eq!(game.board(), &Board::new());
    assert_eq!(
        game.board().get_piece(pos(1, 5)),
        Some(Piece::new(PieceType::King, Color::White))
    );
}
