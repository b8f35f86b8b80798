use criterion::{criterion_group, criterion_main, Criterion, black_box};
use noughtbot::board::{Board, Player};
use noughtbot::perft::perft;

fn bench_perft(c: &mut Criterion) {
    let b = Board::empty();
    c.bench_function("perft_full_game_tree", |ben| {
        ben.iter(|| black_box(perft(black_box(&b), Player::X, 9)))
    });
}

criterion_group!(benches, bench_perft);
criterion_main!(benches);
