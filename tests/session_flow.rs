//! Integration tests for the selection/execution handshake and turn order.

use chess_rules::{
    Board, BoardBuilder, Color, GameSession, MoveOutcome, Piece, SelectionError, Square, Wing,
};

#[test]
fn e_pawn_opening_moves() {
    let mut session = GameSession::new();
    let moves = session.generate_moves(Square(6, 4));

    assert!(moves.contains(Square(5, 4)));
    assert!(moves.contains(Square(4, 4)));
    assert!(moves.iter().all(|m| !m.is_capture));
}

#[test]
fn knight_opening_moves() {
    let mut session = GameSession::new();
    let moves = session.generate_moves(Square(7, 1));

    assert_eq!(moves.len(), 2);
    assert!(moves.contains(Square(5, 0)));
    assert!(moves.contains(Square(5, 2)));
}

#[test]
fn executing_a_move_toggles_turn_and_relocates() {
    let mut session = GameSession::new();
    assert_eq!(session.active_player(), Color::White);

    session.generate_moves(Square(6, 4));
    let outcome = session.execute_move(Square(4, 4)).unwrap();

    let played = outcome.played().unwrap();
    assert_eq!(played.to, Square(4, 4));
    assert_eq!(played.captured, None);
    assert_eq!(played.castling_rook, None);

    assert_eq!(session.active_player(), Color::Black);
    assert!(session.board().piece_at(Square(6, 4)).is_none());
    assert_eq!(
        session.board().piece_at(Square(4, 4)),
        Some((Color::White, Piece::Pawn))
    );
    assert_eq!(session.selection(), None);
}

#[test]
fn rejected_destination_is_a_no_op() {
    let mut session = GameSession::new();
    let before = session.board().clone();

    session.generate_moves(Square(6, 4));
    let outcome = session.execute_move(Square(3, 4)).unwrap();

    assert_eq!(outcome, MoveOutcome::Rejected);
    assert_eq!(session.board(), &before);
    assert_eq!(session.active_player(), Color::White);
    // The selection survives a rejection, so the player can click a valid
    // destination without re-selecting.
    assert_eq!(session.selection(), Some(Square(6, 4)));
    assert!(session.execute_move(Square(4, 4)).unwrap().played().is_some());
}

#[test]
fn executing_without_selection_is_a_defined_error() {
    let mut session = GameSession::new();
    assert_eq!(
        session.execute_move(Square(4, 4)),
        Err(SelectionError::NoSelection)
    );
    assert_eq!(session.active_player(), Color::White);
}

#[test]
fn selecting_an_empty_square_rejects_everything() {
    let mut session = GameSession::new();
    let moves = session.generate_moves(Square(4, 4));

    assert!(moves.is_empty());
    assert_eq!(session.execute_move(Square(5, 4)).unwrap(), MoveOutcome::Rejected);
    assert_eq!(session.active_player(), Color::White);
}

#[test]
fn captures_append_to_the_movers_list_in_order() {
    let board = BoardBuilder::new()
        .piece(Square(4, 4), Color::White, Piece::Queen)
        .piece(Square(2, 4), Color::Black, Piece::Pawn)
        .piece(Square(2, 2), Color::Black, Piece::Knight)
        .piece(Square(7, 7), Color::White, Piece::King)
        .piece(Square(0, 7), Color::Black, Piece::King)
        .build();
    let mut session = GameSession::with_board(board, Color::White);

    session.generate_moves(Square(4, 4));
    let first = session.execute_move(Square(2, 4)).unwrap().played().unwrap();
    assert_eq!(first.captured, Some(Piece::Pawn));

    session.generate_moves(Square(0, 7));
    session.execute_move(Square(0, 6)).unwrap();

    session.generate_moves(Square(2, 4));
    let second = session.execute_move(Square(2, 2)).unwrap().played().unwrap();
    assert_eq!(second.captured, Some(Piece::Knight));

    assert_eq!(
        session.captured_pieces().by(Color::White),
        &[Piece::Pawn, Piece::Knight]
    );
    assert!(session.captured_pieces().by(Color::Black).is_empty());
}

#[test]
fn kingside_castling_relocates_both_pieces() {
    let board = BoardBuilder::new()
        .piece(Square(7, 4), Color::White, Piece::King)
        .piece(Square(7, 0), Color::White, Piece::Rook)
        .piece(Square(7, 7), Color::White, Piece::Rook)
        .piece(Square(0, 4), Color::Black, Piece::King)
        .all_castling_rights()
        .build();
    let mut session = GameSession::with_board(board, Color::White);

    let moves = session.generate_moves(Square(7, 4));
    assert!(moves.find(Square(7, 6)).unwrap().is_castling);

    let played = session.execute_move(Square(7, 6)).unwrap().played().unwrap();
    let rook = played.castling_rook.unwrap();
    assert_eq!(rook.from, Square(7, 7));
    assert_eq!(rook.to, Square(7, 5));

    let board = session.board();
    assert_eq!(board.piece_at(Square(7, 6)), Some((Color::White, Piece::King)));
    assert_eq!(board.piece_at(Square(7, 5)), Some((Color::White, Piece::Rook)));
    assert!(board.piece_at(Square(7, 4)).is_none());
    assert!(board.piece_at(Square(7, 7)).is_none());

    let rights = board.castling_rights();
    assert!(!rights.king_unmoved(Color::White));
    assert!(!rights.rook_unmoved(Color::White, Wing::KingSide));
    assert_eq!(session.active_player(), Color::Black);
}

#[test]
fn queenside_castling_relocates_both_pieces() {
    let board = BoardBuilder::new()
        .piece(Square(0, 4), Color::Black, Piece::King)
        .piece(Square(0, 0), Color::Black, Piece::Rook)
        .piece(Square(0, 7), Color::Black, Piece::Rook)
        .piece(Square(7, 4), Color::White, Piece::King)
        .all_castling_rights()
        .build();
    let mut session = GameSession::with_board(board, Color::Black);

    session.generate_moves(Square(0, 4));
    let played = session.execute_move(Square(0, 2)).unwrap().played().unwrap();
    let rook = played.castling_rook.unwrap();
    assert_eq!(rook.from, Square(0, 0));
    assert_eq!(rook.to, Square(0, 3));

    let board = session.board();
    assert_eq!(board.piece_at(Square(0, 2)), Some((Color::Black, Piece::King)));
    assert_eq!(board.piece_at(Square(0, 3)), Some((Color::Black, Piece::Rook)));
    assert!(board.piece_at(Square(0, 0)).is_none());
}

#[test]
fn moving_a_rook_drops_that_wings_right() {
    let mut session = GameSession::new();

    // Open the a-file pawn, then march the a-rook out and back is not needed:
    // a single rook move from column 0 is enough.
    session.generate_moves(Square(6, 0));
    session.execute_move(Square(4, 0)).unwrap();
    session.generate_moves(Square(1, 0));
    session.execute_move(Square(3, 0)).unwrap();

    session.generate_moves(Square(7, 0));
    session.execute_move(Square(5, 0)).unwrap();

    let rights = session.board().castling_rights();
    assert!(!rights.rook_unmoved(Color::White, Wing::QueenSide));
    assert!(rights.rook_unmoved(Color::White, Wing::KingSide));
    assert!(rights.king_unmoved(Color::White));
    assert!(rights.rook_unmoved(Color::Black, Wing::QueenSide));
}

#[test]
fn engine_allows_moving_into_check() {
    // No legality filtering: the king may walk into an attacked square.
    let board = BoardBuilder::new()
        .piece(Square(7, 4), Color::White, Piece::King)
        .piece(Square(0, 3), Color::Black, Piece::Rook)
        .piece(Square(0, 7), Color::Black, Piece::King)
        .build();
    let mut session = GameSession::with_board(board, Color::White);

    session.generate_moves(Square(7, 4));
    let outcome = session.execute_move(Square(7, 3)).unwrap();

    assert!(outcome.played().is_some());
    assert!(session.board().is_king_in_check(Color::White));
}

#[test]
fn full_board_default_session() {
    let session = GameSession::default();
    assert_eq!(session.board(), &Board::new());
    assert_eq!(session.active_player(), Color::White);
}
