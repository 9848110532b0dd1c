//! Error types for partition assignment.

use silt_types::InvalidDescriptor;

/// Errors that can occur during partition assignment.
///
/// None of these are transient: encoding failures mean the record
/// carries content the canonical encoding cannot represent (an upstream
/// contract violation), and lookup-table failures mean the caller built
/// a malformed descriptor collection. Neither is retried or corrected.
#[derive(Debug, thiserror::Error)]
pub enum ShardError {
    /// Canonical encoding of a group key failed.
    #[error("group key encoding failed: {0}")]
    Encoding(#[from] postcard::Error),

    /// The hash function failed to read the encoded key.
    #[error("group key hashing failed: {0}")]
    Hash(#[from] std::io::Error),

    /// A shard descriptor violated its coordinate invariant.
    #[error("invalid shard descriptor: {0}")]
    Descriptor(#[from] InvalidDescriptor),

    /// A lookup table was built from an empty descriptor collection.
    #[error("lookup table is empty")]
    LookupEmpty,

    /// A lookup table's descriptor does not sit at its own partition index.
    #[error("lookup table out of order: descriptor at position {position} has partition index {index}")]
    LookupOrder {
        /// Position of the offending descriptor in the collection.
        position: usize,
        /// The partition index that descriptor carries.
        index: u32,
    },

    /// A lookup table's length disagrees with the descriptors' partition count.
    #[error("lookup table has {actual} entries, expected {expected}")]
    LookupLength {
        /// The partition count the table must match.
        expected: usize,
        /// The number of entries actually supplied.
        actual: usize,
    },
}
