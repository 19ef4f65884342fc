//! Fixed-capacity string-to-string table.
//!
//! Every key lives in the bucket at `hash(key)`. Buckets are allocated on the
//! first insert into their slot and hold at most as many entries as the table
//! has slots. Entries are kept densely packed at the front of a bucket, so a
//! scan may stop at the first unused position; removal shifts the following
//! entries left to keep it that way.

use log::{debug, trace, warn};

use crate::common::config::{SlotIndex, CAPACITY};
use crate::common::exception::ContainerError;
use crate::container::hash_function::HashFunction;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    key: String,
    value: String,
}

/// A bounded, densely packed list of entries sharing one home slot.
#[derive(Debug)]
struct Bucket {
    entries: Vec<Entry>,
    limit: usize,
}

impl Bucket {
    fn new(limit: usize) -> Self {
        Self {
            entries: Vec::with_capacity(limit),
            limit,
        }
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.key == key)
    }

    fn is_full(&self) -> bool {
        self.entries.len() >= self.limit
    }
}

pub struct HashTable {
    buckets: Vec<Option<Bucket>>,
    hash_fn: HashFunction,
    len: usize,
}

impl HashTable {
    /// Creates an empty table of [`CAPACITY`] slots.
    pub fn new() -> Self {
        Self::with_capacity(CAPACITY)
    }

    /// Creates an empty table with `capacity` slots, each bucket bounded to
    /// `capacity` entries.
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, || None);
        Self {
            buckets,
            hash_fn: HashFunction::new(capacity),
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn bucket(&self, key: &str) -> (SlotIndex, Option<&Bucket>) {
        let slot = self.hash_fn.get_hash(key);
        (slot, self.buckets[slot].as_ref())
    }

    /// Stores `value` under `key`. Existing keys are never overwritten.
    ///
    /// # Errors
    /// - `KeyOccupied` if the key is already present; the stored value is kept.
    /// - `BucketFull` if the key's bucket already holds its maximum.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ContainerError> {
        let slot = self.hash_fn.get_hash(key);
        let limit = self.capacity();
        let bucket = self.buckets[slot].get_or_insert_with(|| {
            debug!("Allocating bucket for slot {}", slot);
            Bucket::new(limit)
        });

        if bucket.position(key).is_some() {
            debug!("Table set of {:?} rejected: key occupied", key);
            return Err(ContainerError::KeyOccupied(key.to_string()));
        }

        if bucket.is_full() {
            warn!("Bucket {} is full ({} entries), rejecting {:?}", slot, limit, key);
            return Err(ContainerError::BucketFull {
                key: key.to_string(),
                slot,
                capacity: limit,
            });
        }

        trace!(
            "Table set of {:?} into slot {} at position {}",
            key,
            slot,
            bucket.entries.len()
        );
        bucket.entries.push(Entry {
            key: key.to_string(),
            value: value.to_string(),
        });
        self.len += 1;
        Ok(())
    }

    /// Removes `key`, shifting the rest of its bucket left by one position.
    pub fn remove(&mut self, key: &str) -> Result<(), ContainerError> {
        let slot = self.hash_fn.get_hash(key);
        let position = self.buckets[slot]
            .as_ref()
            .and_then(|bucket| bucket.position(key));

        match (position, self.buckets[slot].as_mut()) {
            (Some(position), Some(bucket)) => {
                trace!("Table remove of {:?} from slot {} at {}", key, slot, position);
                bucket.entries.remove(position);
                self.len -= 1;
                Ok(())
            }
            _ => {
                debug!("Table remove of {:?} rejected: key absent", key);
                Err(ContainerError::KeyNotDeleted(key.to_string()))
            }
        }
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Result<&str, ContainerError> {
        let (slot, bucket) = self.bucket(key);
        let Some(bucket) = bucket else {
            trace!("Table get of {:?}: slot {} unallocated", key, slot);
            return Err(ContainerError::KeyNotFound(key.to_string()));
        };

        bucket
            .entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.value.as_str())
            .ok_or_else(|| ContainerError::KeyNotFound(key.to_string()))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_ok()
    }

    /// Iterates over `(key, value)` pairs, bucket by bucket.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.buckets
            .iter()
            .flatten()
            .flat_map(|bucket| bucket.entries.iter())
            .map(|entry| (entry.key.as_str(), entry.value.as_str()))
    }

    #[cfg(test)]
    fn bucket_keys(&self, slot: SlotIndex) -> Option<Vec<&str>> {
        self.buckets[slot]
            .as_ref()
            .map(|bucket| bucket.entries.iter().map(|e| e.key.as_str()).collect())
    }
}

impl Default for HashTable {
    fn default() -> Self {
        Self::new()
    }
}
