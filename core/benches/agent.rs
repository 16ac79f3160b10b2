use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use minado_core::{Agent, Board, MineLayout, PatternAgent};

fn bench_flood_reveal(c: &mut Criterion) {
    let layout = MineLayout::from_mine_coords((50, 50), &[(49, 49)]).unwrap();

    c.bench_function("flood_reveal_50x50", |b| {
        b.iter(|| {
            let mut board = Board::from_layout(layout.clone());
            black_box(board.reveal((0, 0)).unwrap())
        })
    });
}

fn bench_choose_action(c: &mut Criterion) {
    let mines = [
        (0, 0),
        (0, 5),
        (2, 0),
        (3, 12),
        (5, 3),
        (7, 15),
        (9, 1),
        (12, 4),
        (13, 13),
        (15, 0),
    ];
    let layout = MineLayout::from_mine_coords((16, 16), &mines).unwrap();
    let mut board = Board::from_layout(layout);
    board.reveal((8, 8)).unwrap();
    let mut agent = PatternAgent::new(7);

    c.bench_function("choose_action_16x16", |b| {
        b.iter(|| black_box(agent.choose_action(&board)))
    });
}

criterion_group!(benches, bench_flood_reveal, bench_choose_action);
criterion_main!(benches);
