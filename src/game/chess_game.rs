//! Standard chess game engine backed by shakmaty.
//!
//! shakmaty positions are values, so make/undo is a stack of the positions
//! that were replaced. The Zobrist hash of every position reached is kept
//! alongside for repetition detection.

use shakmaty::fen::Fen;
use shakmaty::uci::UciMove;
use shakmaty::zobrist::{Zobrist64, ZobristHash};
use shakmaty::{CastlingMode, Chess, Color, EnPassantMode, Move, Piece, Position, Role, Square};

use super::{BoardMove, GameEngine};
use crate::core::{PieceKind, Side, SquareSet};
use crate::error::GameError;

fn position_hash(pos: &Chess) -> u64 {
    let z: Zobrist64 = pos.zobrist_hash(EnPassantMode::Legal);
    z.0
}

/// Board part of the FEN plus side to move, for error messages.
fn describe(pos: &Chess) -> String {
    let turn = match pos.turn() {
        Color::White => 'w',
        Color::Black => 'b',
    };
    format!("{} {}", pos.board(), turn)
}

fn role_of(kind: PieceKind) -> Option<Role> {
    match kind {
        PieceKind::None => None,
        PieceKind::Pawn => Some(Role::Pawn),
        PieceKind::Knight => Some(Role::Knight),
        PieceKind::Bishop => Some(Role::Bishop),
        PieceKind::Rook => Some(Role::Rook),
        PieceKind::Queen => Some(Role::Queen),
        PieceKind::King => Some(Role::King),
    }
}

fn kind_of(role: Role) -> PieceKind {
    match role {
        Role::Pawn => PieceKind::Pawn,
        Role::Knight => PieceKind::Knight,
        Role::Bishop => PieceKind::Bishop,
        Role::Rook => PieceKind::Rook,
        Role::Queen => PieceKind::Queen,
        Role::King => PieceKind::King,
    }
}

fn color_of(side: Side) -> Color {
    match side {
        Side::White => Color::White,
        Side::Black => Color::Black,
    }
}

impl BoardMove for Move {
    fn from_square(&self) -> Option<u8> {
        self.from().map(|s| s as u8)
    }

    /// Castling lands on the king's destination, not on the rook that
    /// shakmaty uses as the move's target.
    fn to_square(&self) -> u8 {
        match self.to_uci(CastlingMode::Standard) {
            UciMove::Normal { to, .. } | UciMove::Put { to, .. } => to as u8,
            UciMove::Null => self.to() as u8,
        }
    }

    fn to_uci_string(&self) -> String {
        self.to_uci(CastlingMode::Standard).to_string()
    }
}

#[derive(Clone, Debug)]
pub struct ChessGame {
    position: Chess,
    /// Positions replaced by `make_move`, with the move that replaced them
    undo_stack: Vec<(Chess, Move)>,
    /// Hash of every position reached, current position last
    hashes: Vec<u64>,
}

impl ChessGame {
    /// Standard starting position.
    pub fn new() -> Self {
        Self::from_position(Chess::default())
    }

    pub fn from_position(position: Chess) -> Self {
        let hash = position_hash(&position);
        ChessGame {
            position,
            undo_stack: Vec::new(),
            hashes: vec![hash],
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, GameError> {
        let invalid = |reason: String| GameError::InvalidFen {
            fen: fen.to_string(),
            reason,
        };
        let parsed: Fen = fen.trim().parse().map_err(|e| invalid(format!("{}", e)))?;
        let position: Chess = parsed
            .into_position(CastlingMode::Standard)
            .map_err(|e| invalid(format!("{}", e)))?;
        Ok(Self::from_position(position))
    }

    pub fn position(&self) -> &Chess {
        &self.position
    }

    /// Zobrist hash of the current position.
    pub fn hash(&self) -> u64 {
        self.hashes.last().copied().unwrap_or_else(|| position_hash(&self.position))
    }

    /// Number of moves currently on the undo stack.
    pub fn ply(&self) -> usize {
        self.undo_stack.len()
    }

    /// Parse a UCI move (e.g. `e2e4`, `e7e8q`) in the current position.
    pub fn parse_uci(&self, uci: &str) -> Result<Move, GameError> {
        let illegal = || GameError::IllegalMove {
            uci: uci.to_string(),
            fen: describe(&self.position),
        };
        let parsed: UciMove = uci.parse().map_err(|_| illegal())?;
        let mv = parsed.to_move(&self.position).map_err(|_| illegal())?;
        if self.position.is_legal(&mv) {
            Ok(mv)
        } else {
            Err(illegal())
        }
    }

    /// Parse and apply a UCI move, returning the move played.
    pub fn play_uci(&mut self, uci: &str) -> Result<Move, GameError> {
        let mv = self.parse_uci(uci)?;
        self.make_move(&mv)?;
        Ok(mv)
    }
}

impl Default for ChessGame {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine for ChessGame {
    type Move = Move;

    fn legal_moves(&self) -> Vec<Move> {
        self.position.legal_moves().into_iter().collect()
    }

    fn make_move(&mut self, mv: &Move) -> Result<(), GameError> {
        let next = self
            .position
            .clone()
            .play(mv)
            .map_err(|_| GameError::IllegalMove {
                uci: mv.to_uci_string(),
                fen: describe(&self.position),
            })?;
        let previous = std::mem::replace(&mut self.position, next);
        self.undo_stack.push((previous, mv.clone()));
        self.hashes.push(position_hash(&self.position));
        Ok(())
    }

    fn undo_move(&mut self, mv: &Move) -> Result<(), GameError> {
        match self.undo_stack.last() {
            None => Err(GameError::NothingToUndo {
                requested: mv.to_uci_string(),
            }),
            Some((_, last)) if last != mv => Err(GameError::UndoMismatch {
                requested: mv.to_uci_string(),
                last: last.to_uci_string(),
            }),
            Some(_) => {
                if let Some((previous, _)) = self.undo_stack.pop() {
                    self.position = previous;
                    self.hashes.pop();
                }
                Ok(())
            }
        }
    }

    fn is_in_checkmate(&self) -> bool {
        self.position.is_checkmate()
    }

    fn is_draw(&self) -> bool {
        self.position.is_stalemate()
            || self.position.is_insufficient_material()
            || self.position.halfmoves() >= 100
            || self.is_repeated_position()
    }

    fn is_repeated_position(&self) -> bool {
        let Some((current, earlier)) = self.hashes.split_last() else {
            return false;
        };
        // Only positions since the last capture or pawn move can recur.
        let window = self.position.halfmoves() as usize;
        earlier.iter().rev().take(window).any(|h| h == current)
    }

    fn is_in_check(&self) -> bool {
        self.position.is_check()
    }

    fn side_to_move(&self) -> Side {
        match self.position.turn() {
            Color::White => Side::White,
            Color::Black => Side::Black,
        }
    }

    fn piece_squares(&self, kind: PieceKind, side: Side) -> SquareSet {
        match role_of(kind) {
            Some(role) => {
                let piece = Piece {
                    color: color_of(side),
                    role,
                };
                SquareSet(self.position.board().by_piece(piece).0)
            }
            None => SquareSet::EMPTY,
        }
    }

    fn piece_at(&self, square: u8) -> PieceKind {
        if square >= 64 {
            return PieceKind::None;
        }
        self.position
            .board()
            .piece_at(Square::new(u32::from(square)))
            .map(|p| kind_of(p.role))
            .unwrap_or(PieceKind::None)
    }

    fn is_stalemate(&self) -> bool {
        self.position.is_stalemate()
    }
}
