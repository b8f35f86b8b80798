mod common;

use noughtbot::rules::{outcome, Outcome};
use noughtbot::search::{DepthLimit, SearchParams, Searcher};

#[test]
fn root_parallel_bestmove_equals_single_thread() {
    let mut boards: Vec<_> = common::reachable_positions()
        .into_iter()
        .filter(|b| outcome(b) == Outcome::InProgress)
        .collect();
    boards.sort_by_key(|b| b.to_compact());
    for depth in [1u32, 3, 9] {
        let p1 = SearchParams { depth: DepthLimit::new(depth), threads: 1, ..SearchParams::default() };
        let p4 = SearchParams { threads: 4, ..p1 };
        let mut s1 = Searcher::new(p1);
        let mut s4 = Searcher::new(p4);
        for b in boards.iter().step_by(7) {
            let r1 = s1.best_move(b).unwrap();
            let r4 = s4.best_move(b).unwrap();
            assert_eq!((r4.bestmove, r4.score), (r1.bestmove, r1.score), "board {}", b.to_compact());
        }
    }
}

#[test]
fn root_parallel_counts_same_nodes() {
    // Each root move runs with a full window in both modes.
    let b = noughtbot::board::Board::empty();
    let p1 = SearchParams { depth: DepthLimit::FULL, threads: 1, ..SearchParams::default() };
    let r1 = Searcher::new(p1).best_move(&b).unwrap();
    let pool = rayon::ThreadPoolBuilder::new().num_threads(4).build().unwrap();
    let r4 = pool.install(|| Searcher::new(SearchParams { threads: 4, ..p1 }).best_move(&b).unwrap());
    assert_eq!(r4, r1);
}

#[test]
fn threads_param_propagates() {
    let s = Searcher::new(SearchParams { threads: 4, ..SearchParams::default() });
    assert_eq!(s.get_threads(), 4);
    let s = Searcher::new(SearchParams { threads: 0, ..SearchParams::default() });
    assert_eq!(s.get_threads(), 1);
}
