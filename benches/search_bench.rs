use criterion::{criterion_group, criterion_main, Criterion, black_box};
use noughtbot::board::Board;
use noughtbot::search::{DepthLimit, SearchParams, Searcher};

fn bench_search(c: &mut Criterion) {
    let b = Board::empty();
    c.bench_function("best_move_full_depth_empty", |ben| {
        ben.iter(|| {
            let mut s = Searcher::new(SearchParams { depth: DepthLimit::FULL, ..SearchParams::default() });
            let r = s.best_move(black_box(&b)).unwrap();
            black_box(r.nodes)
        })
    });

    let mid: Board = "X...O...X".parse().unwrap();
    c.bench_function("best_move_depth_5_midgame", |ben| {
        ben.iter(|| {
            let mut s = Searcher::new(SearchParams { depth: DepthLimit::new(5), ..SearchParams::default() });
            let r = s.best_move(black_box(&mid)).unwrap();
            black_box(r.bestmove)
        })
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
