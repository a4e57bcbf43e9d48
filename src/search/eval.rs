use cozy_chess::{
    get_bishop_moves, get_king_moves, get_knight_moves, get_pawn_attacks, get_rook_moves,
    BitBoard, Board, Color, GameStatus, Piece, Square,
};

use crate::board::cozy::insufficient_material;

pub const MATE_SCORE: f32 = f32::INFINITY;
pub const DRAW_SCORE: f32 = 0.0;

/// Below this much minor/major material the endgame king and pawn tables
/// take over.
pub const PHASE_THRESHOLD: i32 = 18;

/// Discount for a piece attacked by more enemies than it has defenders.
const HANGING_COEFF: f32 = 0.35;

// Piece-square tables, authored from White's visual perspective with the
// eighth rank in the first row. White looks up `63 - square`, Black looks up
// `square` directly.

#[rustfmt::skip]
static PAWN_TABLE: [f32; 64] = [
    1000.0, 1000.0, 1000.0, 1000.0, 1000.0, 1000.0, 1000.0, 1000.0,
     150.0,  150.0,  150.0,  150.0,  150.0,  150.0,  150.0,  150.0,
     115.0,  115.0,  115.0,  125.0,  125.0,  115.0,  115.0,  115.0,
     110.0,  110.0,  110.0,  120.0,  120.0,  110.0,  110.0,  110.0,
     105.0,  105.0,  105.0,  115.0,  115.0,  105.0,  105.0,  105.0,
     101.0,  101.0,  105.0,  110.0,  110.0,  105.0,  101.0,  101.0,
     100.0,  100.0,  100.0,  100.0,  100.0,  100.0,  100.0,  100.0,
    1000.0, 1000.0, 1000.0, 1000.0, 1000.0, 1000.0, 1000.0, 1000.0,
];

#[rustfmt::skip]
static KNIGHT_TABLE: [f32; 64] = [
    285.0, 285.0, 285.0, 285.0, 285.0, 285.0, 285.0, 285.0,
    285.0, 305.0, 305.0, 305.0, 305.0, 305.0, 305.0, 305.0,
    285.0, 305.0, 305.0, 305.0, 305.0, 305.0, 305.0, 305.0,
    285.0, 305.0, 305.0, 306.0, 306.0, 305.0, 305.0, 285.0,
    285.0, 305.0, 305.0, 305.0, 305.0, 305.0, 305.0, 285.0,
    285.0, 300.0, 305.0, 300.0, 300.0, 305.0, 300.0, 285.0,
    285.0, 300.0, 300.0, 305.0, 305.0, 300.0, 300.0, 300.0,
    285.0, 285.0, 285.0, 285.0, 285.0, 285.0, 285.0, 285.0,
];

#[rustfmt::skip]
static BISHOP_TABLE: [f32; 64] = [
    285.0, 285.0, 285.0, 285.0, 285.0, 285.0, 285.0, 285.0,
    300.0, 300.0, 300.0, 300.0, 300.0, 300.0, 300.0, 300.0,
    300.0, 300.0, 300.0, 300.0, 300.0, 300.0, 300.0, 300.0,
    300.0, 305.0, 300.0, 300.0, 300.0, 300.0, 303.0, 300.0,
    300.0, 300.0, 305.0, 300.0, 300.0, 305.0, 300.0, 300.0,
    300.0, 300.0, 300.0, 295.0, 295.0, 300.0, 300.0, 300.0,
    300.0, 303.0, 300.0, 301.0, 301.0, 300.0, 303.0, 300.0,
    285.0, 285.0, 285.0, 285.0, 285.0, 285.0, 285.0, 285.0,
];

#[rustfmt::skip]
static ROOK_TABLE: [f32; 64] = [
    515.0, 515.0, 515.0, 515.0, 515.0, 515.0, 515.0, 515.0,
    515.0, 515.0, 515.0, 515.0, 515.0, 515.0, 515.0, 515.0,
    500.0, 500.0, 500.0, 500.0, 500.0, 500.0, 500.0, 500.0,
    500.0, 500.0, 500.0, 500.0, 500.0, 500.0, 500.0, 500.0,
    500.0, 500.0, 500.0, 500.0, 500.0, 500.0, 500.0, 500.0,
    500.0, 500.0, 500.0, 500.0, 500.0, 500.0, 500.0, 500.0,
    500.0, 500.0, 500.0, 500.0, 500.0, 500.0, 500.0, 500.0,
    500.0, 500.0, 500.0, 500.0, 500.0, 500.0, 500.0, 500.0,
];

static QUEEN_TABLE: [f32; 64] = [900.0; 64];

#[rustfmt::skip]
static KING_TABLE: [f32; 64] = [
    950.0, 950.0, 950.0, 950.0, 950.0, 950.0, 950.0, 950.0,
    950.0, 950.0, 950.0, 950.0, 950.0, 950.0, 950.0, 950.0,
    950.0, 950.0, 950.0, 950.0, 950.0, 950.0, 950.0, 950.0,
    950.0, 950.0, 950.0, 950.0, 950.0, 950.0, 950.0, 950.0,
    950.0, 950.0, 950.0, 950.0, 950.0, 950.0, 950.0, 950.0,
    950.0, 950.0, 950.0, 950.0, 950.0, 950.0, 950.0, 950.0,
    950.0, 950.0, 950.0, 950.0, 950.0, 950.0, 950.0, 950.0,
    960.0, 970.0, 950.0, 950.0, 950.0, 950.0, 970.0, 960.0,
];

#[rustfmt::skip]
static KING_ENDGAME_TABLE: [f32; 64] = [
    700.0, 700.0, 700.0, 700.0, 700.0, 700.0, 700.0, 700.0,
    700.0, 700.0, 700.0, 700.0, 700.0, 700.0, 700.0, 700.0,
    700.0, 700.0, 700.0, 700.0, 700.0, 700.0, 700.0, 700.0,
    700.0, 700.0, 700.0, 700.0, 700.0, 700.0, 700.0, 700.0,
    700.0, 700.0, 700.0, 700.0, 700.0, 700.0, 700.0, 700.0,
    650.0, 650.0, 650.0, 650.0, 650.0, 650.0, 650.0, 650.0,
    600.0, 600.0, 600.0, 600.0, 600.0, 600.0, 600.0, 600.0,
    500.0, 500.0, 500.0, 500.0, 500.0, 500.0, 500.0, 500.0,
];

#[rustfmt::skip]
static PAWN_ENDGAME_TABLE: [f32; 64] = [
    1000.0, 1000.0, 1000.0, 1000.0, 1000.0, 1000.0, 1000.0, 1000.0,
     400.0,  400.0,  400.0,  400.0,  400.0,  400.0,  400.0,  400.0,
     200.0,  300.0,  300.0,  300.0,  300.0,  300.0,  300.0,  300.0,
     200.0,  200.0,  200.0,  200.0,  200.0,  200.0,  200.0,  200.0,
     170.0,  170.0,  170.0,  170.0,  170.0,  170.0,  170.0,  170.0,
     120.0,  120.0,  120.0,  120.0,  120.0,  120.0,  120.0,  120.0,
      60.0,   60.0,   60.0,   60.0,   60.0,   60.0,   60.0,   60.0,
    1000.0, 1000.0, 1000.0, 1000.0, 1000.0, 1000.0, 1000.0, 1000.0,
];

/// Coarse game-phase signal: 3/3/5/9 points per remaining knight/bishop/
/// rook/queen across both sides. Pawns and kings do not count.
pub fn phase_material(board: &Board) -> i32 {
    let n = board.pieces(Piece::Knight).len() as i32;
    let b = board.pieces(Piece::Bishop).len() as i32;
    let r = board.pieces(Piece::Rook).len() as i32;
    let q = board.pieces(Piece::Queen).len() as i32;
    n * 3 + b * 3 + r * 5 + q * 9
}

/// All pieces of `color` attacking `sq` on the current occupancy.
pub fn attackers(board: &Board, color: Color, sq: Square) -> BitBoard {
    let occ = board.occupied();
    let mut bb = BitBoard::EMPTY;
    bb |= get_knight_moves(sq) & board.pieces(Piece::Knight);
    bb |= get_king_moves(sq) & board.pieces(Piece::King);
    bb |= get_rook_moves(sq, occ) & (board.pieces(Piece::Rook) | board.pieces(Piece::Queen));
    bb |= get_bishop_moves(sq, occ) & (board.pieces(Piece::Bishop) | board.pieces(Piece::Queen));
    bb |= get_pawn_attacks(sq, !color) & board.pieces(Piece::Pawn);
    bb & board.colors(color)
}

fn table_for(piece: Piece, endgame: bool) -> &'static [f32; 64] {
    match piece {
        Piece::Pawn => if endgame { &PAWN_ENDGAME_TABLE } else { &PAWN_TABLE },
        Piece::Knight => &KNIGHT_TABLE,
        Piece::Bishop => &BISHOP_TABLE,
        Piece::Rook => &ROOK_TABLE,
        Piece::Queen => &QUEEN_TABLE,
        Piece::King => if endgame { &KING_ENDGAME_TABLE } else { &KING_TABLE },
    }
}

/// Static evaluation from White's perspective: higher is better for White.
///
/// Checkmate returns +inf with White to move and -inf otherwise. This is the
/// historical convention of the tables above and the rest of the engine is
/// written against it; do not flip it.
pub fn evaluate(board: &Board) -> f32 {
    match board.status() {
        GameStatus::Won => {
            return if board.side_to_move() == Color::White { MATE_SCORE } else { -MATE_SCORE };
        }
        GameStatus::Drawn => return DRAW_SCORE,
        GameStatus::Ongoing => {}
    }
    if insufficient_material(board) {
        return DRAW_SCORE;
    }

    let endgame = phase_material(board) < PHASE_THRESHOLD;
    let mut white_eval = 0.0f32;
    let mut black_eval = 0.0f32;

    for sq in board.occupied() {
        let (Some(piece), Some(color)) = (board.piece_on(sq), board.color_on(sq)) else {
            continue;
        };
        let attacked = attackers(board, !color, sq).len();
        let defended = attackers(board, color, sq).len();
        let coeff = if attacked > defended { HANGING_COEFF } else { 1.0 };
        let idx = match color {
            Color::White => 63 - sq as usize,
            Color::Black => sq as usize,
        };
        let value = coeff * table_for(piece, endgame)[idx];
        match color {
            Color::White => white_eval += value,
            Color::Black => black_eval += value,
        }
    }

    white_eval - black_eval
}
