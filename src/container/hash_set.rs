//! Fixed-capacity string set with open addressing and linear probing.
//!
//! # Invariants
//! - No two occupied slots hold the same key.
//! - Walking forward from `hash(key)` reaches an occupied key's slot without
//!   crossing an `Empty` slot. Tombstones may sit in between.
//!
//! Deleting a key leaves a tombstone rather than an empty slot, so keys that
//! collided with it and were placed further along stay reachable. Runs of
//! tombstones directly in front of an empty slot carry no information and are
//! reclaimed back to empty.

use log::{debug, trace, warn};

use crate::common::config::{SlotIndex, CAPACITY};
use crate::common::exception::ContainerError;
use crate::container::hash_function::HashFunction;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Slot {
    Empty,
    Tombstone,
    Occupied(String),
}

/// Outcome of a probe for one key.
#[derive(Debug, PartialEq, Eq)]
enum Probe {
    Found(SlotIndex),
    /// The key is absent; `vacancy` is the slot an insert should use, if any.
    Absent { vacancy: Option<SlotIndex> },
}

pub struct HashSet {
    slots: Vec<Slot>,
    hash_fn: HashFunction,
    len: usize,
}

impl HashSet {
    /// Creates an empty set of [`CAPACITY`] slots.
    pub fn new() -> Self {
        Self::with_capacity(CAPACITY)
    }

    /// Creates an empty set with exactly `capacity` slots. The set never grows.
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![Slot::Empty; capacity],
            hash_fn: HashFunction::new(capacity),
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Walks the probe sequence of `key`.
    ///
    /// Stops when the key is found, when an empty slot is hit, or after one
    /// full lap of the table.
    fn probe(&self, key: &str) -> Probe {
        let start = self.hash_fn.get_hash(key);
        let mut first_tombstone = None;
        let mut slot = start;

        loop {
            match &self.slots[slot] {
                Slot::Occupied(existing) if existing == key => return Probe::Found(slot),
                Slot::Occupied(_) => {}
                Slot::Tombstone => {
                    first_tombstone.get_or_insert(slot);
                }
                Slot::Empty => {
                    return Probe::Absent {
                        vacancy: first_tombstone.or(Some(slot)),
                    };
                }
            }

            slot = self.hash_fn.next_slot(slot);
            if slot == start {
                return Probe::Absent {
                    vacancy: first_tombstone,
                };
            }
        }
    }

    /// Adds `key` to the set.
    ///
    /// Fails with `SetMemberExists` if the key is already present and with
    /// `SetFull` if every slot is occupied by another key.
    pub fn insert(&mut self, key: &str) -> Result<(), ContainerError> {
        match self.probe(key) {
            Probe::Found(slot) => {
                debug!("Set insert of {:?} rejected: already in slot {}", key, slot);
                Err(ContainerError::SetMemberExists(key.to_string()))
            }
            Probe::Absent {
                vacancy: Some(slot),
            } => {
                trace!("Set insert of {:?} into slot {}", key, slot);
                self.slots[slot] = Slot::Occupied(key.to_string());
                self.len += 1;
                Ok(())
            }
            Probe::Absent { vacancy: None } => {
                warn!(
                    "Set is full ({} slots), rejecting {:?}",
                    self.capacity(),
                    key
                );
                Err(ContainerError::SetFull {
                    key: key.to_string(),
                    capacity: self.capacity(),
                })
            }
        }
    }

    /// Removes `key` from the set, failing with `SetMemberNotFound` if absent.
    pub fn remove(&mut self, key: &str) -> Result<(), ContainerError> {
        match self.probe(key) {
            Probe::Found(slot) => {
                trace!("Set remove of {:?} from slot {}", key, slot);
                self.slots[slot] = Slot::Tombstone;
                self.len -= 1;
                self.reclaim_tombstones(slot);
                Ok(())
            }
            Probe::Absent { .. } => {
                debug!("Set remove of {:?} rejected: not a member", key);
                Err(ContainerError::SetMemberNotFound(key.to_string()))
            }
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        matches!(self.probe(key), Probe::Found(_))
    }

    /// Iterates over the members in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().filter_map(|slot| match slot {
            Slot::Occupied(key) => Some(key.as_str()),
            _ => None,
        })
    }

    /// Turns the tombstone run ending at `slot` back into empty slots when the
    /// slot after it is already empty.
    fn reclaim_tombstones(&mut self, slot: SlotIndex) {
        if self.slots[self.hash_fn.next_slot(slot)] != Slot::Empty {
            return;
        }

        let capacity = self.capacity();
        let mut current = slot;
        for _ in 0..capacity {
            if self.slots[current] != Slot::Tombstone {
                break;
            }
            self.slots[current] = Slot::Empty;
            current = (current + capacity - 1) % capacity;
        }
    }

    #[cfg(test)]
    fn tombstones(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| **slot == Slot::Tombstone)
            .count()
    }
}

impl Default for HashSet {
    fn default() -> Self {
        Self::new()
    }
}
