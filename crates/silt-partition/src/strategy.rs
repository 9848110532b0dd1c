//! Shard assignment strategies.

use silt_types::{PartitionRecord, ShardDescriptor};

use crate::error::ShardError;
use crate::hasher::KeyHasher;
use crate::lookup::ShardLookup;

/// Owner partition of a hash value: truncating remainder, then absolute
/// value.
///
/// Both query paths resolve ownership through this one function, so
/// membership and lookup agree for every hash value. Negative hashes
/// are where a split convention (signed remainder on one path, absolute
/// value on the other) would silently route a record to a shard that
/// disclaims it.
fn owner_index(hash: i32, count: u32) -> u32 {
    ((hash as i64) % (count as i64)).unsigned_abs() as u32
}

/// One shard's view of a partition-assignment scheme.
///
/// A strategy is held by the ingestion worker that owns one shard and
/// answers the two routing questions: membership ("is this record
/// mine?") and selection ("which shard of the full table owns this
/// record?"). Implementations must answer both from the same derivation
/// so the two paths can never disagree.
pub trait ShardStrategy {
    /// Descriptor of the shard this strategy answers membership for.
    fn descriptor(&self) -> ShardDescriptor;

    /// Whether `record` at `timestamp` belongs to this shard.
    fn is_in_shard(
        &self,
        timestamp: i64,
        record: &dyn PartitionRecord,
    ) -> Result<bool, ShardError>;

    /// Resolve the owning shard for `record` from the full table.
    fn select(
        &self,
        table: &ShardLookup,
        timestamp: i64,
        record: &dyn PartitionRecord,
    ) -> Result<ShardDescriptor, ShardError>;
}

/// Hash-based assignment: a record belongs to the shard at
/// `|hash(group key) mod partition_count|`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashStrategy {
    descriptor: ShardDescriptor,
    hasher: KeyHasher,
}

impl HashStrategy {
    /// Create a strategy for one shard, hashing with `hasher`.
    ///
    /// Every strategy over the same partition space must be given an
    /// equal hasher, or their routing answers will contradict each
    /// other.
    pub fn new(descriptor: ShardDescriptor, hasher: KeyHasher) -> Self {
        Self { descriptor, hasher }
    }
}

impl ShardStrategy for HashStrategy {
    fn descriptor(&self) -> ShardDescriptor {
        self.descriptor
    }

    fn is_in_shard(
        &self,
        timestamp: i64,
        record: &dyn PartitionRecord,
    ) -> Result<bool, ShardError> {
        let hash = self.hasher.hash_record(timestamp, record)?;
        let owner = owner_index(hash, self.descriptor.partition_count());
        Ok(owner == self.descriptor.partition_index())
    }

    fn select(
        &self,
        table: &ShardLookup,
        timestamp: i64,
        record: &dyn PartitionRecord,
    ) -> Result<ShardDescriptor, ShardError> {
        let count = self.descriptor.partition_count();
        if table.partition_count() != count {
            return Err(ShardError::LookupLength {
                expected: count as usize,
                actual: table.partition_count() as usize,
            });
        }
        let hash = self.hasher.hash_record(timestamp, record)?;
        Ok(table.get(owner_index(hash, count)))
    }
}

/// Numbered assignment for append-oriented buckets: every shard accepts
/// every record, and selection always resolves to the first shard.
///
/// Used where partitions are carved by arrival order rather than by
/// content, so membership carries no information.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearStrategy {
    descriptor: ShardDescriptor,
}

impl LinearStrategy {
    /// Create a strategy for one numbered shard.
    pub fn new(descriptor: ShardDescriptor) -> Self {
        Self { descriptor }
    }
}

impl ShardStrategy for LinearStrategy {
    fn descriptor(&self) -> ShardDescriptor {
        self.descriptor
    }

    fn is_in_shard(
        &self,
        _timestamp: i64,
        _record: &dyn PartitionRecord,
    ) -> Result<bool, ShardError> {
        Ok(true)
    }

    fn select(
        &self,
        table: &ShardLookup,
        _timestamp: i64,
        _record: &dyn PartitionRecord,
    ) -> Result<ShardDescriptor, ShardError> {
        Ok(table.first())
    }
}
