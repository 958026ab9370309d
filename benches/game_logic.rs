use criterion::{black_box, criterion_group, criterion_main, Criterion};
use grid_tetris::core::{Grid, Session, SessionConfig, Shape};
use grid_tetris::types::{ShapeKind, TickOutcome};

fn started(seed: u32) -> Session {
    let config = SessionConfig::new(20, 10, 10).with_seed(seed);
    let mut session = Session::new(config).unwrap();
    session.start().unwrap();
    session
}

fn bench_tick(c: &mut Criterion) {
    let mut session = started(12345);

    c.bench_function("session_tick", |b| {
        b.iter(|| {
            if let TickOutcome::GameOver { .. } = black_box(session.tick()) {
                session.reset().ok();
            }
            session.drain_events();
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut grid = Grid::new(20, 10);
            // Fill bottom 4 rows
            for row in 16..20 {
                for col in 0..10 {
                    grid.activate(row, col);
                }
            }
            black_box(grid.clear_complete_rows());
        })
    });
}

fn bench_spawn(c: &mut Criterion) {
    let mut session = started(12345);

    c.bench_function("spawn_piece", |b| {
        b.iter(|| {
            session.reset().ok();
            session.drain_events();
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let mut session = Session::new(SessionConfig::new(20, 10, 10)).unwrap();
    session.place_piece(Shape::new(ShapeKind::Square, 0, 4)).unwrap();

    c.bench_function("move_left_right", |b| {
        b.iter(|| {
            black_box(session.move_left());
            black_box(session.move_right());
            session.drain_events();
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut session = Session::new(SessionConfig::new(20, 10, 10)).unwrap();
    session.place_piece(Shape::new(ShapeKind::BrokenStick, 4, 4)).unwrap();

    c.bench_function("rotate", |b| {
        b.iter(|| {
            black_box(session.rotate());
            session.drain_events();
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_spawn,
    bench_move,
    bench_rotate
);
criterion_main!(benches);
