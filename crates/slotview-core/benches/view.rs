//! Benchmarks for slot conversions through composed views.
//!
//! # Benchmarks
//!
//! - **`local_to_external`**: Converts every local slot of a view into its
//!   external slot.
//! - **`external_to_local`**: Converts every external slot of a view back into
//!   its local slot.
//!
//! Each benchmark runs over three shapes:
//!
//! - **`fork_chain`**: A contiguous view forked repeatedly, as layouts nest
//!   their sections.
//! - **`wide_union`**: A union of many small arbitrary views.
//! - **`mixed`**: Forks of a union of joins.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench view
//! ```

use std::hint;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use slotview_core::{SlotMapping as _, View};

fn fork_chain() -> View {
    let mut view = View::contiguous(0, 4096).unwrap();
    for _ in 0..8 {
        let size = view.size();
        view = view.fork_range(1, size - 1).unwrap();
    }
    view
}

fn wide_union() -> View {
    View::union((0..64).map(|i| View::arbitrary((0..16).map(|j| i * 16 + (j * 7) % 16))))
}

fn mixed() -> View {
    let parts = (0..16).map(|i| {
        View::contiguous(i * 32, i * 32 + 32)
            .unwrap()
            .fork_range(4, 28)
            .unwrap()
    });
    let union = View::union(parts);
    let size = union.size();
    union
        .fork_many((0..size).rev().step_by(2))
        .unwrap()
}

fn views() -> [(&'static str, View); 3] {
    [
        ("fork_chain", fork_chain()),
        ("wide_union", wide_union()),
        ("mixed", mixed()),
    ]
}

fn bench_local_to_external(c: &mut Criterion) {
    for (name, view) in views() {
        c.bench_with_input(
            BenchmarkId::new("local_to_external", name),
            &view,
            |b, view| {
                b.iter(|| {
                    for local in view.local_slots() {
                        hint::black_box(view.local_to_external(hint::black_box(local)));
                    }
                });
            },
        );
    }
}

fn bench_external_to_local(c: &mut Criterion) {
    for (name, view) in views() {
        let externals = view.external_slots().collect::<Vec<_>>();
        c.bench_with_input(
            BenchmarkId::new("external_to_local", name),
            &externals,
            |b, externals| {
                b.iter(|| {
                    for &external in externals {
                        hint::black_box(view.external_to_local(hint::black_box(external)));
                    }
                });
            },
        );
    }
}

criterion_group!(benches, bench_local_to_external, bench_external_to_local);
criterion_main!(benches);
