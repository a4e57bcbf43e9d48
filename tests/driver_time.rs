use cozy_chess::Board;
use std::time::{Duration, Instant};

use quasar::search::driver::best_move;
use quasar::search::minimax::Searcher;

fn legal_uci(board: &Board) -> Vec<String> {
    let mut v = Vec::new();
    board.generate_moves(|ml| {
        for m in ml { v.push(format!("{}", m)); }
        false
    });
    v
}

#[test]
fn zero_budget_still_returns_a_legal_move() {
    let b = Board::default();
    let res = best_move(&b, Duration::ZERO);
    let bm = res.bestmove.expect("depth-1 iteration must complete");
    assert!(legal_uci(&b).contains(&format!("{}", bm)));
}

#[test]
fn reported_nodes_cover_the_final_iteration_only() {
    // A zero budget stops after the depth-1 iteration, so the node count
    // must match a standalone depth-1 search, not a running total.
    let b = Board::default();
    let res = best_move(&b, Duration::ZERO);
    let mut searcher = Searcher::default();
    let reference = searcher.search_root(&b, 1);
    assert_eq!(res.nodes, reference.nodes);
}

#[test]
fn small_budget_returns_within_bounded_time() {
    let b = Board::default();
    let t0 = Instant::now();
    let res = best_move(&b, Duration::from_millis(10));
    let elapsed = t0.elapsed();
    assert!(res.bestmove.is_some());
    // Budget plus at most one full iteration's overrun.
    assert!(elapsed < Duration::from_secs(30), "driver overran: {elapsed:?}");
}

#[test]
fn chosen_move_is_always_legal() {
    for fen in [
        "k7/8/8/8/8/8/3qQ3/7K w - - 0 1",
        "r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R b KQkq - 3 3",
    ] {
        let b = Board::from_fen(fen, false).expect("valid fen");
        let res = best_move(&b, Duration::from_millis(10));
        let bm = res.bestmove.expect("legal moves exist");
        assert!(legal_uci(&b).contains(&format!("{}", bm)), "illegal move from {fen}");
    }
}

#[test]
fn no_legal_moves_yields_no_move() {
    // Stalemate: the driver reports the draw score and no move.
    let b = Board::from_fen("k7/8/1Q6/8/8/8/8/7K b - - 0 1", false).expect("valid fen");
    let res = best_move(&b, Duration::from_millis(10));
    assert!(res.bestmove.is_none());
    assert_eq!(res.score, 0.0);
}

#[test]
fn startpos_opening_move_is_reasonable() {
    // Depth-limited search from the start position should develop a center
    // pawn or a knight, never something absurd like a rook-pawn push.
    let b = Board::default();
    let res = best_move(&b, Duration::from_millis(300));
    let bm = format!("{}", res.bestmove.expect("opening move"));
    let from = &bm[0..2];
    assert!(
        ["b1", "g1", "b2", "c2", "d2", "e2", "f2", "g2"].contains(&from),
        "unexpected opening move {bm}"
    );
}
