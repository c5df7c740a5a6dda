//! Benchmark for workshop table throughput.
//!
//! The table sits on the main loop's hot path (one delivery or collection
//! attempt per player action), so reservation must stay cheap.
//!
//! Run with: cargo bench --package oficina_core --bench table_benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use oficina_core::{Gift, GiftStyle, WorkshopTable};

fn benchmark_add_remove_cycle(c: &mut Criterion) {
    let table = WorkshopTable::new(3);

    c.bench_function("try_add_remove_cycle", |b| {
        b.iter(|| {
            let gift = Gift::new(1, 0, GiftStyle::Classic);
            black_box(table.try_add(gift));
            black_box(table.remove_oldest());
        });
    });
}

fn benchmark_full_table_rejection(c: &mut Criterion) {
    let table = WorkshopTable::new(3);
    for sequence in 0..3 {
        assert!(table.try_add(Gift::new(1, sequence, GiftStyle::Classic)));
    }

    // The rejection path is what runs under pressure; it must not degrade.
    c.bench_function("try_add_when_full", |b| {
        b.iter(|| {
            let gift = Gift::new(2, 0, GiftStyle::Striped);
            black_box(table.try_add(gift));
        });
    });
}

criterion_group!(benches, benchmark_add_remove_cycle, benchmark_full_table_rejection);
criterion_main!(benches);
