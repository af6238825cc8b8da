use minimax_bot::core::{PieceKind, Side, SquareSet};
use minimax_bot::error::GameError;
use minimax_bot::game::{BoardMove, ChessGame, GameEngine};
use shakmaty::Position;

/// Everything the search can observe about a position.
#[derive(Debug, PartialEq)]
struct Snapshot {
    hash: u64,
    halfmoves: u32,
    side: Side,
    moves: Vec<String>,
    pieces: Vec<SquareSet>,
    check: bool,
    repeated: bool,
    draw: bool,
}

fn snapshot(g: &ChessGame) -> Snapshot {
    let mut pieces = Vec::new();
    for side in Side::BOTH {
        for kind in PieceKind::PIECES {
            pieces.push(g.piece_squares(kind, side));
        }
    }
    Snapshot {
        hash: g.hash(),
        halfmoves: g.position().halfmoves(),
        side: g.side_to_move(),
        moves: g.legal_moves().iter().map(|m| m.to_uci_string()).collect(),
        pieces,
        check: g.is_in_check(),
        repeated: g.is_repeated_position(),
        draw: g.is_draw(),
    }
}

// ============================================================================
// Make / undo
// ============================================================================

#[test]
fn test_make_undo_restores_every_query() {
    let fens = [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
    ];
    for fen in fens {
        let mut g = ChessGame::from_fen(fen).unwrap();
        let before = snapshot(&g);
        for mv in g.legal_moves() {
            g.make_move(&mv).unwrap();
            g.undo_move(&mv).unwrap();
            assert_eq!(snapshot(&g), before, "{} after {}", fen, mv.to_uci_string());
        }
    }
}

#[test]
fn test_random_walks_unwind_to_start() {
    for _ in 0..20 {
        let mut g = ChessGame::new();
        let mut trail = vec![snapshot(&g)];
        let mut played = Vec::new();
        for _ in 0..40 {
            let moves = g.legal_moves();
            if moves.is_empty() {
                break;
            }
            let mv = moves[rand::random::<u32>() as usize % moves.len()].clone();
            g.make_move(&mv).unwrap();
            played.push(mv);
            trail.push(snapshot(&g));
        }
        assert_eq!(g.ply(), played.len());
        while let Some(mv) = played.pop() {
            trail.pop();
            g.undo_move(&mv).unwrap();
            assert_eq!(&snapshot(&g), trail.last().unwrap());
        }
        assert_eq!(g.ply(), 0);
    }
}

#[test]
fn test_undo_requires_last_move() {
    let mut g = ChessGame::new();
    let e4 = g.parse_uci("e2e4").unwrap();
    let d4 = g.parse_uci("d2d4").unwrap();

    assert!(matches!(g.undo_move(&e4), Err(GameError::NothingToUndo { .. })));

    g.make_move(&e4).unwrap();
    let err = g.undo_move(&d4).unwrap_err();
    assert_eq!(
        err,
        GameError::UndoMismatch {
            requested: "d2d4".to_string(),
            last: "e2e4".to_string(),
        }
    );
    assert_eq!(g.ply(), 1);
    g.undo_move(&e4).unwrap();
    assert_eq!(g.hash(), ChessGame::new().hash());
}

#[test]
fn test_illegal_move_is_rejected_without_side_effects() {
    let mut g = ChessGame::new();
    let e4 = g.parse_uci("e2e4").unwrap();
    g.make_move(&e4).unwrap();
    let before = snapshot(&g);

    // Same move again: the pawn is no longer on e2
    let err = g.make_move(&e4).unwrap_err();
    assert!(matches!(err, GameError::IllegalMove { ref uci, .. } if uci == "e2e4"));
    assert_eq!(snapshot(&g), before);
    assert_eq!(g.ply(), 1);

    assert!(g.parse_uci("e7e4").is_err());
    assert!(g.parse_uci("xyz").is_err());
}

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn test_invalid_fen() {
    let err = ChessGame::from_fen("not a fen").unwrap_err();
    assert!(matches!(err, GameError::InvalidFen { .. }));
    // Parses, but both kings are missing
    assert!(ChessGame::from_fen("8/8/8/8/8/8/8/8 w - - 0 1").is_err());
}

// ============================================================================
// Draws and terminal states
// ============================================================================

#[test]
fn test_repetition_and_draw() {
    let mut g = ChessGame::new();
    assert!(!g.is_repeated_position());
    for uci in ["g1f3", "g8f6", "f3g1"] {
        g.play_uci(uci).unwrap();
        assert!(!g.is_repeated_position());
    }
    let back = g.play_uci("f6g8").unwrap();
    assert!(g.is_repeated_position());
    assert!(g.is_draw());

    g.undo_move(&back).unwrap();
    assert!(!g.is_repeated_position());
    assert!(!g.is_draw());
}

#[test]
fn test_pawn_move_breaks_repetition_window() {
    let mut g = ChessGame::new();
    for uci in ["g1f3", "g8f6", "f3g1", "f6g8", "e2e4"] {
        g.play_uci(uci).unwrap();
    }
    assert!(!g.is_repeated_position());
}

#[test]
fn test_terminal_states() {
    let mated = ChessGame::from_fen("R5k1/5ppp/8/8/8/8/8/7K b - - 1 1").unwrap();
    assert!(mated.is_in_checkmate());
    assert!(mated.is_in_check());
    assert!(!mated.is_draw());
    assert!(!mated.is_stalemate());

    let stalemate = ChessGame::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
    assert!(stalemate.is_stalemate());
    assert!(stalemate.is_draw());
    assert!(!stalemate.is_in_checkmate());

    let bare_kings = ChessGame::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    assert!(bare_kings.is_draw());

    let fifty = ChessGame::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 100 80").unwrap();
    assert!(fifty.is_draw());
    let forty_nine = ChessGame::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 99 80").unwrap();
    assert!(!forty_nine.is_draw());
}

// ============================================================================
// Piece and move queries
// ============================================================================

#[test]
fn test_piece_queries() {
    let g = ChessGame::new();
    let white_pawns = g.piece_squares(PieceKind::Pawn, Side::White);
    assert_eq!(white_pawns.count(), 8);
    assert_eq!(white_pawns.iter().collect::<Vec<_>>(), (8..16).collect::<Vec<u8>>());
    assert_eq!(g.piece_squares(PieceKind::King, Side::Black), SquareSet::from_square(60));
    assert_eq!(g.piece_squares(PieceKind::None, Side::White), SquareSet::EMPTY);

    assert_eq!(g.piece_at(4), PieceKind::King);
    assert_eq!(g.piece_at(59), PieceKind::Queen);
    assert_eq!(g.piece_at(1), PieceKind::Knight);
    assert_eq!(g.piece_at(28), PieceKind::None);
    assert_eq!(g.piece_at(64), PieceKind::None);
    assert_eq!(g.side_to_move(), Side::White);
}

#[test]
fn test_move_squares() {
    let g = ChessGame::new();
    let mv = g.parse_uci("g1f3").unwrap();
    assert_eq!(mv.from_square(), Some(6));
    assert_eq!(mv.to_square(), 21);
}

#[test]
fn test_castling_targets_king_destination() {
    let g = ChessGame::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let short = g.parse_uci("e1g1").unwrap();
    let long = g.parse_uci("e1c1").unwrap();
    assert_eq!((short.from_square(), short.to_square()), (Some(4), 6));
    assert_eq!((long.from_square(), long.to_square()), (Some(4), 2));
    assert_eq!(short.to_uci_string(), "e1g1");
}
