//! Canonical grouping keys.

use std::collections::BTreeMap;

use serde::Serialize;
use silt_types::PartitionRecord;

use crate::error::ShardError;

/// Canonical grouping key for one record within a time bucket.
///
/// The key is the record's timestamp plus every non-empty dimension in
/// lexicographic name order. Because the dimensions live in a
/// [`BTreeMap`], two records with identical content produce identical
/// keys no matter what order their dimensions were supplied in, and
/// [`encode`](GroupKey::encode) yields byte-identical output for them.
///
/// Empty dimensions are omitted entirely, so a record that never set a
/// dimension groups the same as one that set it to no values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupKey {
    timestamp: i64,
    dimensions: BTreeMap<String, Vec<String>>,
}

impl GroupKey {
    /// Build the canonical key for `record` at `timestamp`.
    pub fn from_record<R>(timestamp: i64, record: &R) -> Self
    where
        R: PartitionRecord + ?Sized,
    {
        let mut dimensions = BTreeMap::new();
        for name in record.dimension_names() {
            let values = record.dimension_values(name);
            if values.is_empty() {
                continue;
            }
            dimensions.insert(name.to_string(), values.to_vec());
        }
        Self {
            timestamp,
            dimensions,
        }
    }

    /// Timestamp component of the key.
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// Serialize the key to its canonical byte form.
    ///
    /// Postcard is non-self-describing and a pure function of the value,
    /// so the same key always encodes to the same bytes, independent of
    /// process or run.
    pub fn encode(&self) -> Result<Vec<u8>, ShardError> {
        Ok(postcard::to_allocvec(self)?)
    }
}
