use std::time::{Duration, Instant};

use cozy_chess::Board;

use crate::search::minimax::{SearchResult, Searcher};

/// Default time budget per move when the protocol gives none.
pub const DEFAULT_MOVETIME: Duration = Duration::from_millis(10_000);

/// Iterative-deepening driver: searches depth 1, 2, 3, ... and returns the
/// last fully completed result once the wall-clock budget is spent or a
/// forced mate has been found. The returned `nodes` counts the final
/// iteration only.
///
/// The depth-1 iteration always runs to completion, so a zero budget still
/// yields a legal move whenever one exists. The clock is only consulted
/// between iterations; a single iteration can overrun the budget by its own
/// duration, which is accepted rather than preempted.
pub fn best_move(board: &Board, budget: Duration) -> SearchResult {
    let start = Instant::now();
    let mut depth = 1;
    loop {
        // Fresh searcher per iteration: the node count in the log line and
        // in the returned result covers exactly one depth.
        let mut searcher = Searcher::default();
        let result = searcher.search_root(board, depth);
        log::debug!(
            "depth {} score {} nodes {} elapsed {:?}",
            depth,
            result.score,
            result.nodes,
            start.elapsed()
        );
        if result.score.is_infinite() {
            // Forced mate; deeper searches cannot improve on it.
            return result;
        }
        if result.bestmove.is_none() {
            // No legal moves at the root.
            return result;
        }
        if start.elapsed() >= budget {
            return result;
        }
        depth += 1;
    }
}
