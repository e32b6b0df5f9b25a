use criterion::{Criterion, criterion_group, criterion_main};
use sapper_core::Board;
use std::hint::black_box;

// Worst-case cascade: one far-corner mine on the largest board the CLI
// allows, revealed from the opposite corner so the flood walks everything.
fn flood_cascade(c: &mut Criterion) {
    c.bench_function("flood_26x26_full_cascade", |b| {
        b.iter(|| {
            let mut board = Board::with_mines(26, &[(25, 25)]).unwrap();
            board.reveal(black_box((0, 0))).unwrap()
        })
    });

    c.bench_function("adjacency_26x26_max_mines", |b| {
        use rand::SeedableRng;
        use rand::rngs::SmallRng;

        b.iter(|| {
            let mut board = Board::new(26).unwrap();
            let mut rng = SmallRng::seed_from_u64(black_box(99));
            board.place_mines(236, &mut rng).unwrap();
            board
        })
    });
}

criterion_group!(benches, flood_cascade);
criterion_main!(benches);
