//! This bench builds a large catalog of chained prerequisites and queries
//! every course in it.

#![allow(missing_docs)]

use std::{hint::black_box, num::NonZeroUsize};

use advisor::{Catalog, storage::parse_catalog, sorted_listing};
use criterion::{Criterion, criterion_group, criterion_main};

/// Generates catalog lines where each course requires the one before it.
fn catalog_lines(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            if i == 0 {
                "CS0000,Course 0".to_string()
            } else {
                format!("CS{i:04},Course {i},CS{:04}", i - 1)
            }
        })
        .collect()
}

fn parse(lines: &[String], buckets: usize) -> Catalog {
    parse_catalog(lines, NonZeroUsize::new(buckets).unwrap()).unwrap()
}

fn load_and_query(c: &mut Criterion) {
    let lines = catalog_lines(500);

    for buckets in [1, 100, 1000] {
        c.bench_function(&format!("parse 500 courses into {buckets} buckets"), |b| {
            b.iter(|| parse(black_box(&lines), buckets));
        });
    }

    let catalog = parse(&lines, 100);
    c.bench_function("find every course", |b| {
        b.iter(|| {
            for i in 0..500 {
                black_box(catalog.find(&format!("CS{i:04}")));
            }
        });
    });

    c.bench_function("sorted listing", |b| {
        b.iter(|| sorted_listing(black_box(&catalog)).count());
    });
}

criterion_group!(benches, load_and_query);
criterion_main!(benches);
