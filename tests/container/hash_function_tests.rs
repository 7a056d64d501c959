use bucketmap::container::hash_function::{HashFunction, KeyHasher};

#[test]
fn test_hash_function_is_deterministic() {
    let hash_fn = HashFunction::<str>::new();
    let first = hash_fn.get_hash("test_key");
    let second = hash_fn.get_hash("test_key");
    assert_eq!(first, second);
}

#[test]
fn test_hash_function_spreads_small_keys() {
    // Not a statistical test; just make sure sequential integers do not all
    // land on one value modulo a small bucket count.
    let hash_fn = HashFunction::<u64>::new();
    let mut seen = std::collections::HashSet::new();
    for key in 0u64..64 {
        seen.insert(hash_fn.get_hash(&key) % 8);
    }
    assert!(seen.len() > 1);
}
