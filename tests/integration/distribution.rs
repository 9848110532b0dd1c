//! Integration test: distribution sanity.
//!
//! Route a fixed 10,000-record corpus into a 4-way partition space and
//! verify the hash spreads records roughly uniformly, and that the
//! membership path sees the same spread as the selection path.

use silt_integration_tests::{hash_strategies, lookup_table, seeded_corpus};
use silt_partition::ShardStrategy;

/// 10,000 seeded records over 4 partitions: every partition gets
/// between 15% and 35% of the corpus.
#[test]
fn test_roughly_uniform_over_four_partitions() {
    let corpus = seeded_corpus(10_000, 1);
    let strategies = hash_strategies(4);
    let table = lookup_table(4);

    let mut counts = [0usize; 4];
    for (timestamp, record) in &corpus {
        let selected = strategies[0].select(&table, *timestamp, record).unwrap();
        counts[selected.partition_index() as usize] += 1;
    }

    for (partition, count) in counts.iter().enumerate() {
        assert!(
            (1_500..=3_500).contains(count),
            "partition {partition} received {count}/10000 records: {counts:?}"
        );
    }
}

/// The membership path must attribute exactly the same per-partition
/// counts as the selection path.
#[test]
fn test_membership_counts_match_selection_counts() {
    let corpus = seeded_corpus(2_000, 7);
    let strategies = hash_strategies(4);
    let table = lookup_table(4);

    let mut by_selection = [0usize; 4];
    let mut by_membership = [0usize; 4];

    for (timestamp, record) in &corpus {
        let selected = strategies[0].select(&table, *timestamp, record).unwrap();
        by_selection[selected.partition_index() as usize] += 1;

        for strategy in &strategies {
            if strategy.is_in_shard(*timestamp, record).unwrap() {
                by_membership[strategy.descriptor().partition_index() as usize] += 1;
            }
        }
    }

    assert_eq!(by_selection, by_membership);
}

/// With more partitions than distinct hash residues would saturate,
/// every partition still receives traffic from a large corpus.
#[test]
fn test_no_starved_partition_at_eight_way() {
    let corpus = seeded_corpus(8_000, 3);
    let strategies = hash_strategies(8);
    let table = lookup_table(8);

    let mut counts = [0usize; 8];
    for (timestamp, record) in &corpus {
        let selected = strategies[0].select(&table, *timestamp, record).unwrap();
        counts[selected.partition_index() as usize] += 1;
    }

    for (partition, count) in counts.iter().enumerate() {
        assert!(*count > 0, "partition {partition} received no records");
    }
}
