//! Shared types for the Silt ingestion layer.
//!
//! This crate defines the types that partition assignment and the
//! surrounding ingestion machinery agree on: the [`ShardDescriptor`]
//! coordinate of one shard within a time bucket's partition space, the
//! [`PartitionRecord`] collaborator trait through which records expose
//! their dimensions, and [`MapRecord`], a plain map-backed record for
//! tests and simple callers.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Shard descriptor
// ---------------------------------------------------------------------------

/// Error returned when a [`ShardDescriptor`] would violate its invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("partition index {index} out of range for {count} partitions")]
pub struct InvalidDescriptor {
    /// The rejected partition index.
    pub index: u32,
    /// The partition count it was checked against.
    pub count: u32,
}

/// Coordinate of one shard within a time bucket's partition space.
///
/// A descriptor is created when the partition plan for an ingestion
/// bucket is laid out and lives unchanged for the duration of that plan.
/// `partition_index` is always strictly less than `partition_count`;
/// the constructor rejects anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ShardDescriptor {
    partition_index: u32,
    partition_count: u32,
}

impl ShardDescriptor {
    /// Create a descriptor, enforcing `partition_index < partition_count`.
    pub fn new(partition_index: u32, partition_count: u32) -> Result<Self, InvalidDescriptor> {
        if partition_count == 0 || partition_index >= partition_count {
            return Err(InvalidDescriptor {
                index: partition_index,
                count: partition_count,
            });
        }
        Ok(Self {
            partition_index,
            partition_count,
        })
    }

    /// Ordinal position of this shard in `[0, partition_count)`.
    pub fn partition_index(&self) -> u32 {
        self.partition_index
    }

    /// Total number of shards in this bucket's partition space.
    pub fn partition_count(&self) -> u32 {
        self.partition_count
    }
}

impl fmt::Display for ShardDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.partition_index, self.partition_count)
    }
}

// ---------------------------------------------------------------------------
// Record collaborator
// ---------------------------------------------------------------------------

/// A record as seen by partition assignment: a set of named dimensions,
/// each holding zero or more string values.
///
/// The record's timestamp travels alongside it as an explicit argument;
/// extraction and bucket truncation belong to the ingestion layer, not
/// to the record itself.
///
/// Implementations may report dimension names in any order. Partition
/// assignment canonicalizes ordering itself, so two records with the
/// same content always group identically. Multi-valued dimensions with
/// set semantics must present their values already canonically ordered;
/// the order given here is the order that is hashed.
pub trait PartitionRecord {
    /// Names of the dimensions present on this record, in any order.
    fn dimension_names(&self) -> Vec<&str>;

    /// Values of one dimension. Empty when the dimension is absent.
    fn dimension_values(&self, name: &str) -> &[String];
}

/// A plain map-backed [`PartitionRecord`].
///
/// Suitable for tests and for callers that assemble records field by
/// field rather than decoding them from an input format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapRecord {
    dimensions: BTreeMap<String, Vec<String>>,
}

impl MapRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a dimension, replacing any previous values under the same name.
    pub fn with_dimension<N, I, V>(mut self, name: N, values: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.set_dimension(name, values);
        self
    }

    /// Set a dimension in place.
    pub fn set_dimension<N, I, V>(&mut self, name: N, values: I)
    where
        N: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.dimensions
            .insert(name.into(), values.into_iter().map(Into::into).collect());
    }
}

impl PartitionRecord for MapRecord {
    fn dimension_names(&self) -> Vec<&str> {
        self.dimensions.keys().map(String::as_str).collect()
    }

    fn dimension_values(&self, name: &str) -> &[String] {
        self.dimensions.get(name).map(Vec::as_slice).unwrap_or(&[])
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
