use cozy_chess::Board;
use quasar::search::minimax::Searcher;

#[test]
fn search_returns_legal_move_startpos() {
    let b = Board::default();
    let mut searcher = Searcher::default();
    let res = searcher.search_root(&b, 1);
    assert!(res.bestmove.is_some(), "no move found at depth 1");
    assert!(res.nodes > 0);
}

#[test]
fn search_prefers_winning_queen_capture() {
    let fen = "k7/8/8/8/8/8/3qQ3/7K w - - 0 1";
    let b = Board::from_fen(fen, false).expect("valid fen");
    let mut searcher = Searcher::default();
    let res = searcher.search_root(&b, 1);
    let bm = res.bestmove.expect("expected a best move");
    assert_eq!(format!("{}", bm), "e2d2", "expected Qe2xd2 as best move");
}

#[test]
fn search_is_deterministic() {
    let fen = "r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R b KQkq - 3 3";
    let b = Board::from_fen(fen, false).expect("valid fen");
    let r1 = Searcher::default().search_root(&b, 3);
    let r2 = Searcher::default().search_root(&b, 3);
    assert_eq!(r1.score, r2.score);
    assert_eq!(
        r1.bestmove.map(|m| format!("{}", m)),
        r2.bestmove.map(|m| format!("{}", m))
    );
}

#[test]
fn search_on_checkmated_position_returns_no_move() {
    // Fool's mate: White to move, already mated.
    let fen = "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3";
    let b = Board::from_fen(fen, false).expect("valid fen");
    let mut searcher = Searcher::default();
    let res = searcher.search_root(&b, 3);
    assert!(res.bestmove.is_none());
    assert_eq!(res.score, f32::NEG_INFINITY, "mated side to move loses");
}

#[test]
fn search_on_stalemate_returns_draw_score() {
    let fen = "k7/8/1Q6/8/8/8/8/7K b - - 0 1";
    let b = Board::from_fen(fen, false).expect("valid fen");
    let mut searcher = Searcher::default();
    let res = searcher.search_root(&b, 3);
    assert!(res.bestmove.is_none());
    assert_eq!(res.score, 0.0);
}
