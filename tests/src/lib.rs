//! Shared test harness for Silt integration tests.
//!
//! Provides a deterministic, seeded record corpus and helpers for
//! building full shard tables, so every integration test routes the
//! exact same records on every run.

use silt_partition::{HashStrategy, KeyHasher, ShardLookup};
use silt_types::{MapRecord, ShardDescriptor};

/// Advance a 32-bit LCG and return its next output.
fn next(state: &mut u32) -> u32 {
    *state = state.wrapping_mul(1103515245).wrapping_add(12345);
    *state >> 16
}

/// Deterministic corpus of `(timestamp, record)` pairs.
///
/// Records vary across three dimensions (host, service, status) and a
/// day's worth of timestamps. The same `seed` always yields the same
/// corpus.
pub fn seeded_corpus(size: usize, seed: u32) -> Vec<(i64, MapRecord)> {
    let mut state = seed;
    (0..size)
        .map(|_| {
            let timestamp = 1_600_000_000 + (next(&mut state) % 86_400) as i64;
            let record = MapRecord::new()
                .with_dimension("host", [format!("host-{}", next(&mut state) % 257)])
                .with_dimension("service", [format!("svc-{}", next(&mut state) % 17)])
                .with_dimension("status", [format!("{}", 200 + (next(&mut state) % 5) * 100)]);
            (timestamp, record)
        })
        .collect()
}

/// Full descriptor collection for a `count`-way partition space.
pub fn descriptor_table(count: u32) -> Vec<ShardDescriptor> {
    (0..count)
        .map(|i| ShardDescriptor::new(i, count).expect("valid descriptor"))
        .collect()
}

/// Validated lookup table for a `count`-way partition space.
pub fn lookup_table(count: u32) -> ShardLookup {
    ShardLookup::new(descriptor_table(count)).expect("valid table")
}

/// One hash strategy per shard of a `count`-way partition space, all
/// sharing the default hasher.
pub fn hash_strategies(count: u32) -> Vec<HashStrategy> {
    descriptor_table(count)
        .into_iter()
        .map(|d| HashStrategy::new(d, KeyHasher::default()))
        .collect()
}
