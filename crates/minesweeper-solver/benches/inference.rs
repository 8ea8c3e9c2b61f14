//! Micro-benchmarks for the constraint-inference hot path.
//!
//! Pairwise fact combination dominates the solver's runtime, so both the
//! single combination and a full store round are measured on representative
//! fact shapes.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench inference
//! ```

use std::hint;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use minesweeper_core::{CellId, CellSet};
use minesweeper_solver::{Fact, FactStore, SolverConfig};

fn cells(ids: impl IntoIterator<Item = usize>) -> CellSet {
    ids.into_iter().map(CellId::new).collect()
}

fn bench_fact_infer(c: &mut Criterion) {
    let pairs = [
        ("subset", Fact::new(cells(0..8), 3), Fact::new(cells(0..4), 2)),
        (
            "intersection_forced",
            Fact::new(cells(0..6), 5),
            Fact::new(cells(4..10), 1),
        ),
        ("disjoint", Fact::new(cells(0..8), 3), Fact::new(cells(8..16), 2)),
    ];

    for (param, left, right) in pairs {
        c.bench_with_input(
            BenchmarkId::new("fact_infer", param),
            &(left, right),
            |b, (left, right)| {
                b.iter(|| {
                    let inferred = hint::black_box(left).infer(hint::black_box(right));
                    hint::black_box(inferred)
                });
            },
        );
    }
}

/// A ring of overlapping clue-shaped facts, the store shape mid-game.
fn ring_store(num_facts: usize) -> FactStore {
    let mut store = FactStore::new(SolverConfig::default());
    for i in 0..num_facts {
        store.add(Fact::new(cells(i * 2..i * 2 + 5), 1 + i % 2));
    }
    store
}

fn bench_store_infer_round(c: &mut Criterion) {
    for num_facts in [8, 24, 48] {
        c.bench_with_input(
            BenchmarkId::new("fact_store_infer", num_facts),
            &ring_store(num_facts),
            |b, store| {
                b.iter_batched_ref(
                    || hint::black_box(store.clone()),
                    |store| {
                        let learned = store.infer();
                        hint::black_box(learned)
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

criterion_group!(benches, bench_fact_infer, bench_store_infer_round);
criterion_main!(benches);
