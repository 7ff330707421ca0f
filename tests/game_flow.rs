//! Game controller tests: turn order, validation, promotion and undo.

use chess_rules::board::{
    BoardBuilder, GameError, GameStatus, MoveKind, PieceKind, RulesError, Square,
};
use chess_rules::game::{Game, PlayOutcome};
use chess_rules::{Board, Color};

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

fn play(game: &mut Game, from: &str, to: &str) -> GameStatus {
    match game.play(sq(from), sq(to)).unwrap() {
        PlayOutcome::Moved { status, .. } => status,
        PlayOutcome::PromotionRequired(p) => panic!("unexpected promotion {p:?}"),
    }
}

#[test]
fn fools_mate() {
    let mut game = Game::new();
    assert_eq!(play(&mut game, "f2", "f3"), GameStatus::Ongoing);
    assert_eq!(play(&mut game, "e7", "e5"), GameStatus::Ongoing);
    assert_eq!(play(&mut game, "g2", "g4"), GameStatus::Ongoing);
    assert_eq!(play(&mut game, "d8", "h4"), GameStatus::Checkmate);

    assert_eq!(game.side_to_move(), Color::White);
    assert_eq!(game.status().unwrap(), GameStatus::Checkmate);
    let last = game.last_move();
    assert!(game.board().is_in_checkmate(Color::White, last).unwrap());
    for (_, moves) in game.board().all_legal_moves(Color::White, game.last_move()) {
        assert!(moves.is_empty());
    }
}

#[test]
fn rejects_wrong_turn_empty_and_illegal() {
    let mut game = Game::new();
    assert_eq!(
        game.play(sq("e7"), sq("e5")),
        Err(GameError::WrongTurn {
            square: sq("e7"),
            to_move: Color::White
        })
    );
    assert_eq!(
        game.play(sq("e4"), sq("e5")),
        Err(GameError::EmptySquare { square: sq("e4") })
    );
    assert_eq!(
        game.play(sq("e2"), sq("e5")),
        Err(GameError::IllegalMove {
            from: sq("e2"),
            to: sq("e5")
        })
    );
    assert!(game.history().is_empty());
    assert_eq!(game.board(), &Board::new());
}

#[test]
fn en_passant_through_game_history() {
    let mut game = Game::new();
    play(&mut game, "e2", "e4");
    play(&mut game, "a7", "a6");
    play(&mut game, "e4", "e5");
    play(&mut game, "d7", "d5");

    assert!(game.legal_moves_from(sq("e5")).contains(sq("d6")));
    let PlayOutcome::Moved { record, .. } = game.play(sq("e5"), sq("d6")).unwrap() else {
        panic!("en passant should not promote");
    };
    assert_eq!(
        record.kind,
        MoveKind::EnPassant {
            captured_at: sq("d5")
        }
    );
    assert!(game.board().is_empty(sq("d5")));

    game.undo().unwrap();
    assert!(game.board().piece_at(sq("d5")).is_some());
    assert_eq!(game.side_to_move(), Color::White);
}

#[test]
fn en_passant_window_closes() {
    let mut game = Game::new();
    play(&mut game, "e2", "e4");
    play(&mut game, "a7", "a6");
    play(&mut game, "e4", "e5");
    play(&mut game, "d7", "d5");
    play(&mut game, "h2", "h3");
    play(&mut game, "h7", "h6");

    assert!(!game.legal_moves_from(sq("e5")).contains(sq("d6")));
    assert!(game.play(sq("e5"), sq("d6")).is_err());
}

#[test]
fn promotion_flow() {
    let mut game = Game::from_fen("7k/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();

    let outcome = game.play(sq("a7"), sq("a8")).unwrap();
    assert!(matches!(outcome, PlayOutcome::PromotionRequired(_)));
    assert!(game.pending_promotion().is_some());
    assert!(game.legal_moves_from(sq("e1")).is_empty());
    assert!(matches!(
        game.play(sq("e1"), sq("e2")),
        Err(GameError::PromotionPending { .. })
    ));
    assert!(matches!(
        game.undo(),
        Err(GameError::PromotionPending { .. })
    ));

    assert_eq!(
        game.promote(PieceKind::King),
        Err(GameError::Rules(RulesError::InvalidPromotionChoice {
            kind: PieceKind::King
        }))
    );
    assert!(game.pending_promotion().is_some());

    let PlayOutcome::Moved { record, status } = game.promote(PieceKind::Rook).unwrap() else {
        panic!("promotion should commit");
    };
    assert_eq!(record.promotion(), Some(PieceKind::Rook));
    assert_eq!(status, GameStatus::Check);
    assert_eq!(game.side_to_move(), Color::Black);
    assert!(game
        .board()
        .piece_at(sq("a8"))
        .unwrap()
        .is(PieceKind::Rook, Color::White));

    game.undo().unwrap();
    assert!(game
        .board()
        .piece_at(sq("a7"))
        .unwrap()
        .is(PieceKind::Pawn, Color::White));
}

#[test]
fn cancel_promotion_keeps_pawn() {
    let mut game = Game::from_fen("7k/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    game.play(sq("a7"), sq("a8")).unwrap();
    assert!(game.cancel_promotion().is_some());
    assert!(game.pending_promotion().is_none());
    assert!(game.board().piece_at(sq("a7")).is_some());
    assert_eq!(game.side_to_move(), Color::White);
    assert_eq!(
        game.promote(PieceKind::Queen),
        Err(GameError::NoPendingPromotion)
    );
}

#[test]
fn failed_play_leaves_game_unchanged() {
    // Black has no king, so the status after White's move cannot be computed.
    let board = BoardBuilder::new()
        .piece(sq("e1"), Color::White, PieceKind::King)
        .piece(sq("a8"), Color::Black, PieceKind::Rook)
        .build();
    let mut game = Game::from_board(board.clone(), Color::White);

    assert_eq!(
        game.play(sq("e1"), sq("e2")),
        Err(GameError::Rules(RulesError::KingNotFound {
            color: Color::Black
        }))
    );
    assert!(game.history().is_empty());
    assert_eq!(game.side_to_move(), Color::White);
    assert_eq!(game.board(), &board);
}

#[test]
fn failed_promotion_stays_pending() {
    let board = BoardBuilder::new()
        .piece(sq("e1"), Color::White, PieceKind::King)
        .moved_piece(sq("a7"), Color::White, PieceKind::Pawn)
        .build();
    let mut game = Game::from_board(board.clone(), Color::White);

    let outcome = game.play(sq("a7"), sq("a8")).unwrap();
    assert!(matches!(outcome, PlayOutcome::PromotionRequired(_)));
    assert!(game.promote(PieceKind::Queen).is_err());
    assert!(game.pending_promotion().is_some());
    assert!(game.history().is_empty());
    assert_eq!(game.side_to_move(), Color::White);
    assert_eq!(game.board(), &board);
}

#[test]
fn undo_on_fresh_game() {
    let mut game = Game::new();
    assert_eq!(game.undo(), Err(GameError::NothingToUndo));
}

#[test]
fn castling_through_game() {
    let mut game = Game::from_fen("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1").unwrap();
    assert_eq!(game.side_to_move(), Color::Black);
    let PlayOutcome::Moved { record, .. } = game.play(sq("e8"), sq("c8")).unwrap() else {
        panic!("castling should not promote");
    };
    assert_eq!(record.to_string(), "O-O-O");
    assert!(game
        .board()
        .piece_at(sq("d8"))
        .unwrap()
        .is(PieceKind::Rook, Color::Black));
    assert_eq!(game.board().castling_availability(), "KQ");
}

#[test]
fn stalemate_reported() {
    let mut game = Game::from_fen("7k/8/8/6Q1/8/8/8/K7 w - - 0 1").unwrap();
    assert_eq!(play(&mut game, "g5", "g6"), GameStatus::Stalemate);
    assert!(game.status().unwrap().is_terminal());
}

#[cfg(feature = "serde")]
#[test]
fn serde_round_trip() {
    let mut game = Game::new();
    play(&mut game, "e2", "e4");
    let board = game.board().clone();
    let record = game.history()[0];

    let json = serde_json::to_string(&board).unwrap();
    let back: Board = serde_json::from_str(&json).unwrap();
    assert_eq!(back, board);

    let json = serde_json::to_string(&record).unwrap();
    assert_eq!(
        serde_json::from_str::<chess_rules::MoveRecord>(&json).unwrap(),
        record
    );

    let moves = game.legal_moves_from(sq("e7"));
    let json = serde_json::to_string(&moves).unwrap();
    assert_eq!(
        serde_json::from_str::<chess_rules::board::SquareSet>(&json).unwrap(),
        moves
    );

    let last = game.last_move();
    let outcome = game.board().apply_move(sq("e7"), sq("e5"), last).unwrap();
    let json = serde_json::to_string(&outcome).unwrap();
    assert_eq!(
        serde_json::from_str::<chess_rules::board::MoveOutcome>(&json).unwrap(),
        outcome
    );

    let played = game.play(sq("e7"), sq("e5")).unwrap();
    let json = serde_json::to_string(&played).unwrap();
    assert_eq!(serde_json::from_str::<PlayOutcome>(&json).unwrap(), played);
}
