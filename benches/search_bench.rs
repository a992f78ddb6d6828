use criterion::{black_box, criterion_group, criterion_main, Criterion};
use xeque::search::Searcher;
use xeque::{Board, Color};

fn bench_search(c: &mut Criterion) {
    c.bench_function("search_depth_4_startpos", |ben| {
        ben.iter(|| {
            let mut board = Board::standard(Color::Black);
            let mut searcher = Searcher::new(4);
            let mv = searcher
                .choose_best_move(black_box(&mut board), Color::White)
                .unwrap();
            black_box(mv)
        })
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
