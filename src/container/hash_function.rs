use crate::common::config::{SlotIndex, CAPACITY};

/// Returns the slot for `key` in a container of [`CAPACITY`] slots.
///
/// The slot is the sum of the key's Unicode code points modulo the capacity.
/// It is not a quality hash: anagrams always collide, and the containers are
/// expected to resolve that.
pub fn hash(key: &str) -> SlotIndex {
    hash_with_capacity(key, CAPACITY)
}

/// Same as [`hash`] for a container of `capacity` slots.
///
/// # Panics
/// Panics if `capacity` is zero.
pub fn hash_with_capacity(key: &str, capacity: usize) -> SlotIndex {
    assert!(capacity > 0, "hashed container capacity must be non-zero");
    let capacity = capacity as u64;
    // Reducing at every step keeps the accumulator bounded for long keys.
    key.chars()
        .fold(0u64, |acc, c| (acc + u64::from(u32::from(c))) % capacity) as SlotIndex
}

/// Hash function bound to a fixed capacity, shared by the hashed containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashFunction {
    capacity: usize,
}

impl HashFunction {
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "hashed container capacity must be non-zero");
        Self { capacity }
    }

    /// Returns the home slot of `key`.
    pub fn get_hash(&self, key: &str) -> SlotIndex {
        hash_with_capacity(key, self.capacity)
    }

    /// Slot that follows `slot` on a forward probe, wrapping at the end.
    pub fn next_slot(&self, slot: SlotIndex) -> SlotIndex {
        (slot + 1) % self.capacity
    }
}

impl Default for HashFunction {
    fn default() -> Self {
        Self::new(CAPACITY)
    }
}
