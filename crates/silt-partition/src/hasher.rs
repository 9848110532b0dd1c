//! Murmur3 hashing of canonical group keys.

use std::io::Cursor;

use murmur3::murmur3_32;
use silt_types::PartitionRecord;

use crate::error::ShardError;
use crate::group_key::GroupKey;

/// Seed shared by every partitioner in a deployment.
///
/// All hashers that partition the same timeline must agree on the seed,
/// otherwise membership answers from one process would contradict
/// lookup answers from another.
pub const DEFAULT_SEED: u32 = 0;

/// Immutable hash function over canonical group keys.
///
/// A `KeyHasher` carries nothing but its seed, so it is `Copy` and safe
/// to share across any number of threads. It is injected into the
/// strategies that need it rather than living in process-global state,
/// which keeps hashing swappable in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyHasher {
    seed: u32,
}

impl KeyHasher {
    /// Create a hasher with an explicit seed.
    pub const fn new(seed: u32) -> Self {
        Self { seed }
    }

    /// Hash a record's canonical group key to a signed 32-bit value.
    ///
    /// Fails only when the group key cannot be canonically encoded,
    /// which means the record reached this stage with content the
    /// encoding cannot represent.
    pub fn hash_record<R>(&self, timestamp: i64, record: &R) -> Result<i32, ShardError>
    where
        R: PartitionRecord + ?Sized,
    {
        let bytes = GroupKey::from_record(timestamp, record).encode()?;
        let digest = murmur3_32(&mut Cursor::new(&bytes), self.seed)?;
        Ok(digest as i32)
    }
}

impl Default for KeyHasher {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}
