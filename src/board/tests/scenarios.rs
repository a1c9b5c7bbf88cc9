//! Move sequences played from real positions.

use super::{play, sq};
use crate::board::{
    Board, BoardBuilder, Color, MiniMax, MoveStatus, MoveStrategy, PieceKind,
};

#[test]
fn test_fools_mate() {
    let board = play(Board::standard(), &["f2f4", "e7e5", "g2g4", "d8h4"]);
    let white = board.current_player();
    assert_eq!(white.color(), Color::White);
    assert!(white.is_in_check());
    assert!(white.is_in_checkmate());
    assert!(!white.is_in_stalemate());
    assert!(!board.black_player().is_in_check());
}

#[test]
fn test_scholars_mate() {
    let board = play(
        Board::standard(),
        &["e2e4", "e7e5", "f1c4", "b8c6", "d1h5", "g8f6", "h5f7"],
    );
    assert!(board.current_player().is_in_checkmate());
    assert_eq!(board.current_player().color(), Color::Black);
}

#[test]
fn test_king_side_castle_sequence() {
    let board = play(
        Board::standard(),
        &["e2e4", "e7e5", "g1f3", "d7d6", "f1e2", "d6d5"],
    );
    let castle = board.find_move(sq("e1"), sq("g1"));
    assert!(castle.is_castling());
    assert_eq!(castle.to_string(), "0-0");

    let board = play(board, &["e1g1"]);
    assert!(board.white_player().is_castled());
    assert!(!board.black_player().is_castled());
    assert_eq!(board.cell(sq("g1")).map(|p| p.kind()), Some(PieceKind::King));
    assert_eq!(board.cell(sq("f1")).map(|p| p.kind()), Some(PieceKind::Rook));
    assert!(board.cell(sq("e1")).is_none());
    assert!(board.cell(sq("h1")).is_none());
    assert!(!board.white_player().is_king_side_castle_capable());
}

#[test]
fn test_castled_flag_survives_later_king_moves() {
    let board = play(
        Board::standard(),
        &["e2e4", "e7e5", "g1f3", "d7d6", "f1e2", "d6d5", "e1g1"],
    );
    assert!(board.white_player().is_castled());

    let board = play(board, &["a7a6", "g1h1"]);
    assert_eq!(board.cell(sq("h1")).map(|p| p.kind()), Some(PieceKind::King));
    assert!(board.white_player().is_castled());
    assert!(!board.black_player().is_castled());

    let board = play(board, &["a6a5", "h1g1"]);
    assert!(board.white_player().is_castled());
}

#[test]
fn test_queen_side_castle_for_black() {
    let board = play(
        Board::standard(),
        &["e2e4", "d7d5", "g1f3", "c8g4", "d2d3", "b8c6", "c1e3", "d8d7", "b1c3"],
    );
    let board = play(board, &["e8c8"]);
    assert!(board.black_player().is_castled());
    assert_eq!(board.cell(sq("c8")).map(|p| p.kind()), Some(PieceKind::King));
    assert_eq!(board.cell(sq("d8")).map(|p| p.kind()), Some(PieceKind::Rook));
    assert!(board.cell(sq("a8")).is_none());
    assert!(board.to_fen().contains(" w KQ - "));
}

#[test]
fn test_en_passant_capture() {
    let start = BoardBuilder::new()
        .piece(PieceKind::King, Color::White, sq("h1"))
        .piece(PieceKind::King, Color::Black, sq("a8"))
        .piece(PieceKind::Pawn, Color::White, sq("e2"))
        .piece(PieceKind::Pawn, Color::Black, sq("d7"))
        .build();
    let board = play(start, &["e2e4", "a8b8", "e4e5", "d7d5"]);
    assert_eq!(board.en_passant_pawn().map(|p| p.square()), Some(sq("d5")));

    let capture = board.find_move(sq("e5"), sq("d6"));
    assert!(capture.is_en_passant());
    let board = play(board, &["e5d6"]);
    assert!(board.cell(sq("d5")).is_none());
    assert_eq!(board.cell(sq("d6")).map(|p| p.color()), Some(Color::White));
    assert_eq!(board.pieces(Color::Black).len(), 1);
}

#[test]
fn test_en_passant_expires() {
    let start = BoardBuilder::new()
        .piece(PieceKind::King, Color::White, sq("h1"))
        .piece(PieceKind::King, Color::Black, sq("a8"))
        .piece(PieceKind::Pawn, Color::White, sq("e5"))
        .piece(PieceKind::Pawn, Color::Black, sq("d7"))
        .side_to_move(Color::Black)
        .build();
    let board = play(start, &["d7d5", "h1g1", "a8b8"]);
    assert!(board.find_move(sq("e5"), sq("d6")).is_invalid());
}

#[test]
fn test_promotion_to_queen() {
    let start = BoardBuilder::new()
        .piece(PieceKind::King, Color::White, sq("a1"))
        .piece(PieceKind::King, Color::Black, sq("h5"))
        .piece(PieceKind::Pawn, Color::Black, sq("c2"))
        .piece(PieceKind::Rook, Color::White, sq("b1"))
        .side_to_move(Color::Black)
        .build();
    let board = play(start, &["c2b1"]);
    let queen = board.cell(sq("b1")).unwrap();
    assert_eq!(queen.kind(), PieceKind::Queen);
    assert_eq!(queen.color(), Color::Black);
    assert!(board.white_player().is_in_check());
    assert_eq!(board.pieces(Color::White).len(), 1);
}

#[test]
fn test_move_identity_depends_on_first_move() {
    let board = Board::standard();
    let original = board.find_move(sq("g1"), sq("f3"));
    let board = play(board, &["g1f3", "g8f6", "f3g1", "f6g8"]);
    assert_eq!(board.to_fen(), Board::standard().to_fen());
    let again = board.find_move(sq("g1"), sq("f3"));
    assert!(!again.is_invalid());
    assert_ne!(original, again);
}

#[test]
fn test_rook_in_corner_has_thirteen_moves() {
    let board = BoardBuilder::new()
        .piece(PieceKind::Rook, Color::White, sq("a1"))
        .piece(PieceKind::King, Color::White, sq("h1"))
        .piece(PieceKind::King, Color::Black, sq("h8"))
        .build();
    let mut dests: Vec<String> = board
        .white_player()
        .legal_moves()
        .iter()
        .filter(|m| m.piece().kind() == PieceKind::Rook)
        .map(|m| m.destination().to_string())
        .collect();
    dests.sort();
    let expected = [
        "a2", "a3", "a4", "a5", "a6", "a7", "a8", "b1", "c1", "d1", "e1", "f1", "g1",
    ];
    assert_eq!(dests, expected);
}

/// A king that is attacked but can step away reports check. Reporting it
/// only when no escape exists would conflate check with mate.
#[test]
fn test_check_is_reported_even_when_escapable() {
    let board = play(Board::standard(), &["e2e4", "f7f6", "d1h5"]);
    let black = board.current_player();
    assert!(black.is_in_check());
    assert!(black.has_escape_moves());
    assert!(!black.is_in_checkmate());

    let blocked = play(board, &["g7g6"]);
    assert!(!blocked.black_player().is_in_check());
}

#[test]
fn test_moving_into_check_is_rejected() {
    let board = BoardBuilder::new()
        .piece(PieceKind::King, Color::White, sq("e1"))
        .piece(PieceKind::King, Color::Black, sq("e8"))
        .piece(PieceKind::Rook, Color::Black, sq("d8"))
        .build();
    let mv = board.find_move(sq("e1"), sq("d1"));
    let transition = board.current_player().make_move(&mv);
    assert_eq!(transition.status(), MoveStatus::LeavesPlayerInCheck);
    assert_eq!(transition.board().to_fen(), board.to_fen());
}

#[test]
fn test_minimax_is_deterministic() {
    let board = play(Board::standard(), &["e2e4", "d7d5"]);
    let strategy = MiniMax::new(2);
    let first = strategy.execute(&board);
    for _ in 0..3 {
        assert_eq!(strategy.execute(&board), first);
    }
}

#[test]
fn test_minimax_finds_scholars_mate() {
    let board = play(
        Board::standard(),
        &["e2e4", "e7e5", "f1c4", "b8c6", "d1h5", "g8f6"],
    );
    let best = MiniMax::new(1).execute(&board).unwrap();
    assert_eq!(best.to_coordinate_string(), "h5f7");
}
