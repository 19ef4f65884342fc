use dbms::common::config::CAPACITY;
use dbms::common::exception::{ContainerError, ErrorKind};
use dbms::container::hash_function::hash;
use dbms::container::hash_set::HashSet;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet as ModelSet;

use crate::common::logger::init_test_logger;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_inserted_keys_are_absent() {
        init_test_logger();
        let set = HashSet::new();
        for i in 0..500 {
            assert!(!set.contains(&format!("key_{}", i)));
        }
    }

    #[test]
    fn capacity_boundary() {
        init_test_logger();
        let mut set = HashSet::new();
        for i in 0..CAPACITY {
            assert_ok!(set.insert(&format!("key_{}", i)), "insert below capacity");
        }
        assert_eq!(set.len(), CAPACITY);

        let err = assert_err!(set.insert("one_too_many"));
        assert_eq!(
            err,
            ContainerError::SetFull {
                key: "one_too_many".to_string(),
                capacity: CAPACITY
            }
        );

        // Every stored key is still reachable on a full table.
        for i in 0..CAPACITY {
            assert!(set.contains(&format!("key_{}", i)));
        }
        // A duplicate on a full table is still reported as a duplicate.
        let err = assert_err!(set.insert("key_0"));
        assert_eq!(err.kind(), ErrorKind::AlreadyExists);
    }

    #[test]
    fn removal_frees_room_on_a_full_set() {
        init_test_logger();
        let mut set = HashSet::new();
        for i in 0..CAPACITY {
            assert_ok!(set.insert(&format!("key_{}", i)));
        }
        assert_ok!(set.remove("key_42"));
        assert_ok!(set.insert("newcomer"));
        assert!(set.contains("newcomer"));
        assert!(!set.contains("key_42"));
        assert_err!(set.insert("another"));
    }

    #[test]
    fn long_collision_chain_survives_deletes() {
        init_test_logger();
        // Anagrams all share a home slot, forming one long probe chain.
        let keys = ["abcd", "abdc", "acbd", "acdb", "adbc", "adcb", "bacd", "badc"];
        let home = hash(keys[0]);
        assert!(keys.iter().all(|k| hash(k) == home));

        let mut set = HashSet::new();
        for key in keys {
            assert_ok!(set.insert(key));
        }
        for key in keys.iter().step_by(2) {
            assert_ok!(set.remove(key));
        }
        for (i, key) in keys.iter().enumerate() {
            assert_eq!(set.contains(key), i % 2 == 1, "membership of {}", key);
        }
    }

    #[test]
    fn matches_std_set_under_random_operations() {
        init_test_logger();
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut set = HashSet::with_capacity(16);
        let mut model = ModelSet::new();

        for _ in 0..5_000 {
            // A small alphabet keeps collisions frequent.
            let key = format!("{}", rng.gen_range(0..40));
            match rng.gen_range(0..3) {
                0 => {
                    let result = set.insert(&key);
                    if model.contains(&key) {
                        assert_eq!(assert_err!(result).kind(), ErrorKind::AlreadyExists);
                    } else if model.len() == 16 {
                        assert_eq!(assert_err!(result).kind(), ErrorKind::CapacityExceeded);
                    } else {
                        assert_ok!(result);
                        model.insert(key);
                    }
                }
                1 => {
                    let result = set.remove(&key);
                    if model.remove(&key) {
                        assert_ok!(result);
                    } else {
                        assert_eq!(assert_err!(result).kind(), ErrorKind::NotFound);
                    }
                }
                _ => assert_eq!(set.contains(&key), model.contains(&key)),
            }
            assert_eq!(set.len(), model.len());
        }

        let mut members: Vec<&str> = set.iter().collect();
        members.sort_unstable();
        let mut expected: Vec<&str> = model.iter().map(String::as_str).collect();
        expected.sort_unstable();
        assert_eq!(members, expected);
    }
}
