//! IAI-Callgrind benchmark for OrderedSet construction and set algebra.
//!
//! Measures instruction counts, which for a linear-scan set track the number
//! of equality comparisons closely.

use iai_callgrind::{library_benchmark, library_benchmark_group, main};
use insertion_ordered_set::set::OrderedSet;
use std::hint::black_box;

fn setup_elements_64() -> Vec<u32> {
    (0..64).chain(0..64).collect()
}

fn setup_elements_512() -> Vec<u32> {
    (0..512).chain(0..512).collect()
}

fn setup_pair(size: u32) -> (OrderedSet<u32>, OrderedSet<u32>) {
    (
        (0..size).collect(),
        (size / 2..size + size / 2).collect(),
    )
}

#[library_benchmark]
#[bench::with_setup(setup_elements_64())]
fn from_iter_64(elements: Vec<u32>) -> OrderedSet<u32> {
    black_box(black_box(elements).into_iter().collect())
}

#[library_benchmark]
#[bench::with_setup(setup_elements_512())]
fn from_iter_512(elements: Vec<u32>) -> OrderedSet<u32> {
    black_box(black_box(elements).into_iter().collect())
}

#[library_benchmark]
#[bench::with_setup(setup_pair(64))]
fn union_64(pair: (OrderedSet<u32>, OrderedSet<u32>)) -> OrderedSet<u32> {
    black_box(pair.0.union(black_box(&pair.1)))
}

#[library_benchmark]
#[bench::with_setup(setup_pair(64))]
fn symmetric_difference_64(pair: (OrderedSet<u32>, OrderedSet<u32>)) -> OrderedSet<u32> {
    black_box(pair.0.symmetric_difference(black_box(&pair.1)))
}

#[library_benchmark]
#[bench::with_setup(setup_pair(512))]
fn union_512(pair: (OrderedSet<u32>, OrderedSet<u32>)) -> OrderedSet<u32> {
    black_box(pair.0.union(black_box(&pair.1)))
}

#[library_benchmark]
#[bench::with_setup(setup_pair(512))]
fn symmetric_difference_512(pair: (OrderedSet<u32>, OrderedSet<u32>)) -> OrderedSet<u32> {
    black_box(pair.0.symmetric_difference(black_box(&pair.1)))
}

library_benchmark_group!(
    name = ordered_set_group;
    benchmarks =
        from_iter_64, from_iter_512,
        union_64, union_512,
        symmetric_difference_64, symmetric_difference_512
);

main!(library_benchmark_groups = ordered_set_group);
