use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use xxhash_rust::xxh3;

/// The hashing capability a table is constructed with.
///
/// Implementations must be deterministic: equal keys (by `Eq`) must produce
/// equal hash values for the lifetime of the table. The table only ever uses
/// the result modulo its current bucket count, so distribution quality
/// matters more than the full 64-bit range.
pub trait KeyHasher<K: ?Sized> {
    /// Returns the hash value of the given key.
    ///
    /// # Parameters
    /// - `key`: The key to be hashed.
    ///
    /// # Returns
    /// The hashed value.
    fn get_hash(&self, key: &K) -> u64;
}

/// Default hash function, backed by xxh3.
pub struct HashFunction<K: ?Sized> {
    _marker: PhantomData<K>,
}

impl<K: ?Sized> HashFunction<K> {
    /// Creates a new `HashFunction`.
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<K: ?Sized> Default for HashFunction<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> KeyHasher<K> for HashFunction<K>
where
    K: Hash + ?Sized,
{
    fn get_hash(&self, key: &K) -> u64 {
        let mut hasher = xxh3::Xxh3::new();
        key.hash(&mut hasher);
        hasher.finish()
    }
}
