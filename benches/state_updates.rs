// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for page state operations.
//!
//! Measures the performance of:
//! - Gallery navigation (peek/select across the wrap boundary)
//! - Cart ledger operations (merge-on-add, remove, totals)

use criterion::{criterion_group, criterion_main, Criterion};
use iced_vitrine::cart::CartLedger;
use iced_vitrine::catalog::Catalog;
use iced_vitrine::gallery::GalleryNavigator;
use std::hint::black_box;

/// Benchmark gallery navigation operations.
fn bench_gallery_navigation(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery");
    let catalog = Catalog::default();

    group.bench_function("full_forward_lap", |b| {
        b.iter(|| {
            let mut nav = GalleryNavigator::new(catalog.image_count());
            for _ in 0..catalog.image_count() {
                let next = nav.peek_next();
                nav.select(next);
            }
            black_box(nav.current());
        });
    });

    group.bench_function("full_backward_lap", |b| {
        b.iter(|| {
            let mut nav = GalleryNavigator::new(catalog.image_count());
            for _ in 0..catalog.image_count() {
                let previous = nav.peek_previous();
                nav.select(previous);
            }
            black_box(nav.current());
        });
    });

    group.finish();
}

/// Benchmark cart ledger operations.
fn bench_cart_ledger(c: &mut Criterion) {
    let mut group = c.benchmark_group("cart");
    let catalog = Catalog::default();

    group.bench_function("add_merge_remove", |b| {
        b.iter(|| {
            let mut ledger = CartLedger::new();
            for _ in 0..16 {
                ledger.add_items(catalog.product(), 2);
            }
            black_box(ledger.total_price());
            ledger.remove_item(&catalog.product().name);
            black_box(ledger.is_empty());
        });
    });

    group.bench_function("totals", |b| {
        let mut ledger = CartLedger::new();
        ledger.add_items(catalog.product(), 42);
        b.iter(|| {
            black_box(ledger.total_quantity());
            black_box(ledger.total_price());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_gallery_navigation, bench_cart_ledger);
criterion_main!(benches);
