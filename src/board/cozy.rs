use cozy_chess::{Board as CozyBoard, Color, GameStatus, Move, Piece};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PositionError {
    #[error("invalid FEN '{fen}': {reason}")]
    InvalidFen { fen: String, reason: String },
    #[error("illegal move: {0}")]
    IllegalMove(String),
}

/// Owned board state, cloned once per explored branch so that sibling
/// subtrees never observe each other's mutations.
#[derive(Clone, Debug)]
pub struct Position {
    board: CozyBoard,
}

impl Position {
    pub fn startpos() -> Self {
        Self { board: CozyBoard::default() }
    }

    pub fn from_fen(fen: &str) -> Result<Self, PositionError> {
        CozyBoard::from_fen(fen, false)
            .map(|b| Self { board: b })
            .map_err(|e| PositionError::InvalidFen { fen: fen.to_string(), reason: format!("{e:?}") })
    }

    pub fn board(&self) -> &CozyBoard { &self.board }

    pub fn fen(&self) -> String { format!("{}", self.board) }

    pub fn side_to_move(&self) -> Color { self.board.side_to_move() }

    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);
        self.board.generate_moves(|ml| {
            for m in ml { moves.push(m); }
            false
        });
        moves
    }

    /// Successor position after a legal move; `self` is left untouched.
    pub fn play(&self, m: Move) -> Self {
        let mut child = self.board.clone();
        child.play(m);
        Self { board: child }
    }

    pub fn make_move_uci(&mut self, mv_uci: &str) -> Result<(), PositionError> {
        let mut found = None;
        self.board.generate_moves(|moves| {
            for m in moves {
                if format!("{}", m) == mv_uci { found = Some(m); break; }
            }
            found.is_some()
        });
        match found {
            Some(m) => { self.board.play(m); Ok(()) }
            None => Err(PositionError::IllegalMove(mv_uci.to_string())),
        }
    }

    pub fn is_checkmate(&self) -> bool {
        self.board.status() == GameStatus::Won
    }

    /// Stalemate or fifty-move draw as reported by the rules layer, plus
    /// the insufficient-material cases the status check does not cover.
    pub fn is_draw(&self) -> bool {
        match self.board.status() {
            GameStatus::Drawn => true,
            GameStatus::Won => false,
            GameStatus::Ongoing => insufficient_material(&self.board),
        }
    }

    pub fn set_from_start_and_moves(moves: &[String]) -> Result<Self, PositionError> {
        let mut pos = Self::startpos();
        for m in moves { pos.make_move_uci(m)?; }
        Ok(pos)
    }
}

/// Bare kings, or a lone minor piece against a bare king.
pub fn insufficient_material(board: &CozyBoard) -> bool {
    let heavy = board.pieces(Piece::Pawn) | board.pieces(Piece::Rook) | board.pieces(Piece::Queen);
    if !heavy.is_empty() {
        return false;
    }
    let minors = board.pieces(Piece::Knight) | board.pieces(Piece::Bishop);
    minors.len() <= 1
}
