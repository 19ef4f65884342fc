use dbms::common::config::CAPACITY;
use dbms::common::exception::{ContainerError, ErrorKind};
use dbms::container::hash_function::hash;
use dbms::container::hash_table::HashTable;

use crate::common::logger::init_test_logger;

/// Generates `count` distinct keys that all hash to the same slot.
fn colliding_keys(count: usize) -> Vec<String> {
    // Swapping "aa" for "b`" keeps the code-point sum: 97 + 97 == 98 + 96.
    (0..count)
        .map(|i| format!("{}{}", "aa".repeat(count - i), "b`".repeat(i)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colliding_keys_helper_collides() {
        let keys = colliding_keys(5);
        let home = hash(&keys[0]);
        assert!(keys.iter().all(|k| hash(k) == home));
        let mut unique = keys.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 5);
    }

    #[test]
    fn set_get_roundtrip_for_many_keys() {
        init_test_logger();
        let mut table = HashTable::new();
        for i in 0..1_000 {
            assert_ok!(table.set(&format!("key_{}", i), &format!("value_{}", i)));
        }
        assert_eq!(table.len(), 1_000);
        for i in 0..1_000 {
            assert_eq!(
                assert_ok!(table.get(&format!("key_{}", i))),
                format!("value_{}", i)
            );
        }
    }

    #[test]
    fn second_set_keeps_first_value() {
        init_test_logger();
        let mut table = HashTable::new();
        assert_ok!(table.set("k", "v1"));
        let err = assert_err!(table.set("k", "v2"));
        assert_eq!(err.to_string(), "k is already occupied, select another key.");
        assert_eq!(assert_ok!(table.get("k")), "v1");
    }

    #[test]
    fn delete_then_get_is_not_found() {
        init_test_logger();
        let mut table = HashTable::new();
        assert_ok!(table.set("a", "1"));
        assert_ok!(table.remove("a"));
        let err = assert_err!(table.get("a"));
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.to_string(), "Key not found: a");

        let err = assert_err!(table.remove("a"));
        assert_eq!(err.to_string(), "a does not exist in the hash table.");
    }

    #[test]
    fn deleting_from_the_middle_of_a_bucket() {
        init_test_logger();
        let keys = colliding_keys(10);
        let mut table = HashTable::new();
        for (i, key) in keys.iter().enumerate() {
            assert_ok!(table.set(key, &i.to_string()));
        }

        assert_ok!(table.remove(&keys[0]));
        assert_ok!(table.remove(&keys[5]));
        for (i, key) in keys.iter().enumerate() {
            if i == 0 || i == 5 {
                assert_err!(table.get(key));
            } else {
                assert_eq!(assert_ok!(table.get(key)), i.to_string());
            }
        }

        let remaining: Vec<&str> = table.iter().map(|(k, _)| k).collect();
        let expected: Vec<&str> = keys
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != 0 && *i != 5)
            .map(|(_, k)| k.as_str())
            .collect();
        assert_eq!(remaining, expected);
    }

    #[test]
    fn bucket_is_bounded_by_capacity() {
        init_test_logger();
        let keys = colliding_keys(CAPACITY + 1);
        let mut table = HashTable::new();
        for key in &keys[..CAPACITY] {
            assert_ok!(table.set(key, "v"));
        }

        let err = assert_err!(table.set(&keys[CAPACITY], "v"));
        assert_eq!(
            err,
            ContainerError::BucketFull {
                key: keys[CAPACITY].clone(),
                slot: hash(&keys[0]),
                capacity: CAPACITY,
            }
        );

        // Removing one entry makes room again.
        assert_ok!(table.remove(&keys[3]));
        assert_ok!(table.set(&keys[CAPACITY], "v"));
        assert_eq!(table.len(), CAPACITY);
    }
}
