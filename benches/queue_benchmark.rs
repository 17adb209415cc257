//! Handle-table backend benchmarks
//!
//! Compares the generational slot table against shared back-pointers on the
//! two workloads an addressable queue exists for.
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench queue_benchmark
//!
//! # Only the decrease-priority workload
//! cargo bench --bench queue_benchmark -- decrease
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use indexed_binary_heap::storage::{HandleTable, SharedPositions, SlotTable};
use indexed_binary_heap::{IndexedBinaryHeap, PriorityQueue};

const SIZES: [u32; 3] = [1 << 8, 1 << 12, 1 << 16];

/// Scrambled but deterministic priorities
fn priority_for(i: u32) -> u32 {
    i.wrapping_mul(2_654_435_761) >> 8
}

fn insert_extract_all<S: HandleTable>(n: u32) -> u64 {
    let mut queue: IndexedBinaryHeap<u32, u32, S> = IndexedBinaryHeap::new();
    for i in 0..n {
        let _ = queue.insert(priority_for(i), i);
    }
    let mut checksum = 0u64;
    while let Ok((priority, _)) = queue.extract_min() {
        checksum = checksum.wrapping_add(priority as u64);
    }
    checksum
}

fn decrease_all_then_drain<S: HandleTable>(n: u32) -> u64 {
    let mut queue: IndexedBinaryHeap<u32, u32, S> = IndexedBinaryHeap::with_fixed_capacity(n as usize);
    let mut handles = Vec::with_capacity(n as usize);
    for i in 0..n {
        if let Ok(handle) = queue.insert(u32::MAX - i, i) {
            handles.push(handle);
        }
    }
    for (i, handle) in handles.iter().enumerate() {
        let _ = queue.decrease_priority(handle, priority_for(i as u32));
    }
    let mut checksum = 0u64;
    while let Ok((priority, _)) = queue.extract_min() {
        checksum = checksum.wrapping_add(priority as u64);
    }
    checksum
}

fn benchmark_insert_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_extract");
    for n in SIZES {
        group.bench_with_input(BenchmarkId::new("slot_table", n), &n, |b, &n| {
            b.iter(|| black_box(insert_extract_all::<SlotTable>(n)))
        });
        group.bench_with_input(BenchmarkId::new("shared_positions", n), &n, |b, &n| {
            b.iter(|| black_box(insert_extract_all::<SharedPositions>(n)))
        });
    }
    group.finish();
}

fn benchmark_decrease_priority(c: &mut Criterion) {
    let mut group = c.benchmark_group("decrease");
    for n in SIZES {
        group.bench_with_input(BenchmarkId::new("slot_table", n), &n, |b, &n| {
            b.iter(|| black_box(decrease_all_then_drain::<SlotTable>(n)))
        });
        group.bench_with_input(BenchmarkId::new("shared_positions", n), &n, |b, &n| {
            b.iter(|| black_box(decrease_all_then_drain::<SharedPositions>(n)))
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_insert_extract, benchmark_decrease_priority);

criterion_main!(benches);
