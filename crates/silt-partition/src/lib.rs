//! Deterministic partition assignment for time-bucketed segments.
//!
//! This crate decides which shard of a bucket's partition space owns an
//! incoming record. The pieces:
//!
//! - [`GroupKey`] — canonical grouping key built from a record's timestamp
//!   and dimensions, encoded to bytes with postcard.
//! - [`KeyHasher`] — immutable murmur3 hash over encoded group keys.
//! - [`ShardLookup`] — validated, position-indexed table of
//!   [`ShardDescriptor`](silt_types::ShardDescriptor)s.
//! - [`ShardStrategy`] — the seam between assignment schemes, with
//!   [`HashStrategy`] (hash-modulo ownership) and [`LinearStrategy`]
//!   (append-oriented numbered shards) as the two implementations.
//!
//! Everything here is a pure function of its inputs: the same record and
//! timestamp always land on the same shard, across threads, processes,
//! and restarts. Both query paths — "is this record mine?" and "which
//! shard owns this record?" — derive the owner from the same hash and
//! the same modulo convention, so they can never disagree.

mod error;
mod group_key;
mod hasher;
mod lookup;
mod strategy;

pub use error::ShardError;
pub use group_key::GroupKey;
pub use hasher::{DEFAULT_SEED, KeyHasher};
pub use lookup::ShardLookup;
pub use strategy::{HashStrategy, LinearStrategy, ShardStrategy};
