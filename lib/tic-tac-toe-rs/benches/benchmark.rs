use criterion::{
    black_box,
    criterion_group,
    criterion_main,
    Criterion,
};
use std::time::Duration;
use tic_tac_toe::{
    AdversarialSearch,
    Board,
    Marker,
    SearchOptions,
};

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("alpha-beta empty board", |b| {
        b.iter(|| {
            let mut board = black_box(Board::new());
            AdversarialSearch::new().best_move(&mut board, black_box(Marker::Ai))
        })
    });

    c.bench_function("minimax empty board", |b| {
        b.iter(|| {
            let mut board = black_box(Board::new());
            AdversarialSearch::with_options(SearchOptions { pruning: false })
                .best_move(&mut board, black_box(Marker::Ai))
        })
    });

    c.bench_function("alpha-beta center opening", |b| {
        let board: Board = "X--/-O-/---".parse().expect("invalid board");
        b.iter(|| {
            let mut board = black_box(board);
            AdversarialSearch::new().best_move(&mut board, black_box(Marker::Ai))
        })
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().measurement_time(Duration::from_secs(10));
    targets = criterion_benchmark
}
criterion_main!(benches);
