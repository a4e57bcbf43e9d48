use cozy_chess::{Board, Color, GameStatus, Move};

use crate::board::cozy::insufficient_material;
use crate::search::eval::{evaluate, DRAW_SCORE, MATE_SCORE};
use crate::search::ordering::ordered_moves;

/// Documented default depth for fixed-depth searches (`go depth`, CLI).
pub const DEFAULT_DEPTH: u32 = 4;

#[derive(Debug, Clone, Copy)]
pub struct SearchResult {
    /// White-perspective score of the chosen line.
    pub score: f32,
    /// None only when the position has no legal moves.
    pub bestmove: Option<Move>,
    pub nodes: u64,
}

/// Minimax with alpha-beta pruning over board copies. Scores are fixed to
/// White's perspective, so White maximizes and Black minimizes.
#[derive(Default)]
pub struct Searcher {
    pub(crate) nodes: u64,
}

impl Searcher {
    /// Full-window fixed-depth search from the side to move.
    pub fn search_root(&mut self, board: &Board, depth: u32) -> SearchResult {
        let maximizing = board.side_to_move() == Color::White;
        let (score, bestmove) =
            self.minimax(board, depth, -MATE_SCORE, MATE_SCORE, maximizing);
        SearchResult { score, bestmove, nodes: self.nodes }
    }

    pub fn minimax(
        &mut self,
        board: &Board,
        depth: u32,
        mut alpha: f32,
        mut beta: f32,
        maximizing: bool,
    ) -> (f32, Option<Move>) {
        self.nodes += 1;

        // Terminal states outrank the depth cutoff: a mate score must not be
        // diluted by the static tables.
        match board.status() {
            GameStatus::Won => {
                // The side to move has been mated.
                let score = if board.side_to_move() == Color::White {
                    -MATE_SCORE
                } else {
                    MATE_SCORE
                };
                return (score, None);
            }
            GameStatus::Drawn => return (DRAW_SCORE, None),
            GameStatus::Ongoing => {}
        }
        if insufficient_material(board) {
            return (DRAW_SCORE, None);
        }
        if depth == 0 {
            return (evaluate(board), None);
        }

        let moves = ordered_moves(board);
        if moves.is_empty() {
            // Unreachable behind the status check; keep the zero-branch fold safe.
            return (evaluate(board), None);
        }

        let mut best = if maximizing { -MATE_SCORE } else { MATE_SCORE };
        let mut best_move: Option<Move> = None;
        for m in moves {
            let mut child = board.clone();
            child.play(m);
            let (score, _) = self.minimax(&child, depth - 1, alpha, beta, !maximizing);
            // Strict improvement: ties keep the earliest move. The first
            // child always seeds the running best.
            if maximizing {
                if best_move.is_none() || score > best {
                    best = score;
                    best_move = Some(m);
                }
                alpha = alpha.max(score);
            } else {
                if best_move.is_none() || score < best {
                    best = score;
                    best_move = Some(m);
                }
                beta = beta.min(score);
            }
            if beta <= alpha {
                break;
            }
        }
        (best, best_move)
    }
}
