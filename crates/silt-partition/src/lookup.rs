//! Validated shard lookup tables.

use silt_types::ShardDescriptor;
use tracing::debug;

use crate::error::ShardError;

/// Position-indexed table of every shard in one bucket's partition space.
///
/// Construction validates the caller contract once: the table is
/// non-empty, descriptor `i` sits at position `i`, and every descriptor
/// carries a partition count equal to the table length. After that,
/// resolving any owner index in `[0, partition_count)` is total, so
/// selection can never run off the end of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShardLookup {
    shards: Vec<ShardDescriptor>,
}

impl ShardLookup {
    /// Build a lookup table from the full descriptor collection.
    ///
    /// A malformed collection is a programming error in the caller and
    /// is rejected outright, never reordered or truncated to fit.
    pub fn new(shards: Vec<ShardDescriptor>) -> Result<Self, ShardError> {
        if shards.is_empty() {
            return Err(ShardError::LookupEmpty);
        }
        let count = shards.len();
        for (position, shard) in shards.iter().enumerate() {
            if shard.partition_index() as usize != position {
                return Err(ShardError::LookupOrder {
                    position,
                    index: shard.partition_index(),
                });
            }
            if shard.partition_count() as usize != count {
                return Err(ShardError::LookupLength {
                    expected: shard.partition_count() as usize,
                    actual: count,
                });
            }
        }
        debug!(partitions = count, "built shard lookup table");
        Ok(Self { shards })
    }

    /// Number of shards in the table.
    pub fn partition_count(&self) -> u32 {
        self.shards.len() as u32
    }

    /// Descriptor at `index`. Total for `index < partition_count`.
    pub(crate) fn get(&self, index: u32) -> ShardDescriptor {
        self.shards[index as usize]
    }

    /// First descriptor in the table.
    pub(crate) fn first(&self) -> ShardDescriptor {
        self.shards[0]
    }

    /// All descriptors in position order.
    pub fn shards(&self) -> &[ShardDescriptor] {
        &self.shards
    }
}
