//! Hot-path benchmarks for the exclusion filter.
//!
//! Every printed move passes through `move_to`, so the four branch shapes
//! are benchmarked separately against a no-op chain terminus.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use motionkit_core::{NoOpTransform, Position};
use motionkit_transforms::ExcludeFilter;

fn filter_with_noop() -> ExcludeFilter {
    let mut filter = ExcludeFilter::new();
    filter.bind_next(Box::new(NoOpTransform::new()));
    filter
}

fn bench_pass_through(c: &mut Criterion) {
    let mut filter = filter_with_noop();
    filter.begin_object("PART_A");

    let mut step = 0.0_f64;
    c.bench_function("move_pass_through", |b| {
        b.iter(|| {
            step += 0.05;
            filter
                .move_to(
                    black_box(Position::new(step % 200.0, 100.0, 0.2, step)),
                    black_box(300.0),
                )
                .unwrap();
        })
    });
}

fn bench_suppressed(c: &mut Criterion) {
    let mut filter = filter_with_noop();
    filter.exclude_object("PART_B");
    filter.begin_object("PART_B");
    // First move enters the region; iterations measure steady suppression
    filter
        .move_to(Position::new(50.0, 50.0, 0.2, 0.0), 300.0)
        .unwrap();

    let mut step = 0.0_f64;
    c.bench_function("move_suppressed", |b| {
        b.iter(|| {
            step += 0.05;
            filter
                .move_to(
                    black_box(Position::new(step % 200.0, 50.0, 0.2, step)),
                    black_box(300.0),
                )
                .unwrap();
        })
    });
}

fn bench_region_cycle(c: &mut Criterion) {
    let mut filter = filter_with_noop();
    filter.exclude_object("PART_B");

    let mut step = 0.0_f64;
    c.bench_function("move_region_enter_leave", |b| {
        b.iter(|| {
            step += 0.05;
            filter.begin_object("PART_B");
            filter
                .move_to(
                    black_box(Position::new(50.0, 50.0, 0.2, step)),
                    black_box(300.0),
                )
                .unwrap();
            filter.begin_object("PART_A");
            filter
                .move_to(
                    black_box(Position::new(step % 200.0, 10.0, 0.2, step)),
                    black_box(300.0),
                )
                .unwrap();
        })
    });
}

criterion_group!(benches, bench_pass_through, bench_suppressed, bench_region_cycle);
criterion_main!(benches);
