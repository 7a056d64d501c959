use std::fmt::Debug;
use std::hash::Hash;
use std::io;
use std::mem;

use log::{debug, trace};

use crate::common::config::TableOptions;
use crate::common::exception::TableError;
use crate::container::hash_function::{HashFunction, KeyHasher};

/// One bucket: the ordered chain of pairs whose keys hash to the same index.
/// Order within a chain carries no meaning and is not part of the contract.
type Chain<K, V> = Vec<(K, V)>;

/// An in-memory hash table using separate chaining.
///
/// The table owns a bucket array of `capacity()` independent chains. Every
/// operation hashes the key through the injected [`KeyHasher`] and works on
/// the chain at `hash % capacity`. Growth is automatic: once an insert pushes
/// the load factor above the configured threshold, the bucket array is
/// replaced with one `growth_factor` times larger and every pair is rehashed
/// into it. Capacity never shrinks.
///
/// A key appears in at most one chain, at most once. `len()` always equals
/// the total number of stored pairs.
///
/// Mutation requires `&mut self`, so exactly one owner reads or writes the
/// table at a time; callers needing shared access must wrap the whole table
/// in their own synchronization.
///
/// The `Hash`/`Eq` contract on `K` (and determinism of a custom hasher) is a
/// caller obligation. If equal keys hash differently the table may hold
/// duplicates or lose track of entries; this is not checked at runtime.
pub struct ChainedHashTable<K, V, H = HashFunction<K>> {
    buckets: Vec<Chain<K, V>>,
    count: usize,
    max_load_factor: f64,
    growth_factor: usize,
    hash_fn: H,
}

impl<K, V> ChainedHashTable<K, V, HashFunction<K>>
where
    K: Eq + Hash,
{
    /// Creates a table with the default options and the default xxh3 hasher.
    pub fn new() -> Self {
        Self::with_options(TableOptions::default())
    }

    /// Creates a table with `initial_capacity` buckets and otherwise default
    /// options. A requested capacity below 1 is clamped to 1.
    pub fn with_capacity(initial_capacity: usize) -> Self {
        Self::with_options(TableOptions::with_capacity(initial_capacity))
    }

    pub fn with_options(options: TableOptions) -> Self {
        Self::with_hasher(options, HashFunction::new())
    }
}

impl<K, V> Default for ChainedHashTable<K, V, HashFunction<K>>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, H> ChainedHashTable<K, V, H>
where
    K: Eq,
    H: KeyHasher<K>,
{
    /// Creates a table with the given options and an injected hash function.
    ///
    /// # Parameters
    /// - `options`: Tuning knobs; normalized before use (see
    ///   [`TableOptions::normalized`]).
    /// - `hash_fn`: The hashing capability. Must be deterministic for the
    ///   lifetime of the table.
    pub fn with_hasher(options: TableOptions, hash_fn: H) -> Self {
        let options = options.normalized();
        let mut buckets = Vec::new();
        buckets.resize_with(options.initial_capacity, Chain::new);
        Self {
            buckets,
            count: 0,
            max_load_factor: options.max_load_factor,
            growth_factor: options.growth_factor,
            hash_fn,
        }
    }

    /// Inserts a key-value pair, overwriting in place if the key is present.
    ///
    /// # Parameters
    /// - `key`: The key to insert.
    /// - `value`: The value to be associated with the key.
    ///
    /// # Returns
    /// `Ok(Some(previous))` if the key was already present (count unchanged),
    /// `Ok(None)` for a fresh insertion. The only error is allocation failure
    /// while growing the bucket array; the pair is stored even then, and the
    /// growth is retried by a later insert since the load factor is
    /// re-checked on every call.
    pub fn insert(&mut self, key: K, value: V) -> Result<Option<V>, TableError> {
        let idx = self.bucket_index(&key);
        for (existing, slot) in &mut self.buckets[idx] {
            if *existing == key {
                trace!("overwriting existing key in bucket {}", idx);
                return Ok(Some(mem::replace(slot, value)));
            }
        }

        self.buckets[idx].push((key, value));
        self.count += 1;

        if self.load_factor() > self.max_load_factor {
            let new_capacity = self.capacity() * self.growth_factor;
            self.resize(new_capacity)?;
        }
        Ok(None)
    }

    /// Looks up the value associated with a key.
    ///
    /// # Parameters
    /// - `key`: The key to look up.
    ///
    /// # Returns
    /// A borrow of the value, or `None` if the key is absent. Absence is an
    /// ordinary result, not an error.
    pub fn get(&self, key: &K) -> Option<&V> {
        let idx = self.bucket_index(key);
        self.buckets[idx]
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    /// Removes a key and returns its value.
    ///
    /// Removing an absent key is a no-op returning `None`; the count only
    /// changes when a pair was actually removed.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let idx = self.bucket_index(key);
        let position = self.buckets[idx]
            .iter()
            .position(|(existing, _)| existing == key)?;
        let (_, value) = self.buckets[idx].swap_remove(position);
        self.count -= 1;
        Some(value)
    }

    /// Returns `count / capacity`, recomputed on every call.
    pub fn load_factor(&self) -> f64 {
        self.count as f64 / self.capacity() as f64
    }

    /// Returns the number of stored pairs.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns the current number of buckets. Never decreases.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    fn bucket_index(&self, key: &K) -> usize {
        (self.hash_fn.get_hash(key) % self.capacity() as u64) as usize
    }

    /// Replaces the bucket array with one of `new_capacity` chains, rehashing
    /// every pair under the new capacity. The count is untouched: a resize
    /// neither drops nor duplicates entries.
    ///
    /// The new array is reserved before the old one is touched, so on
    /// allocation failure the table is exactly as it was.
    fn resize(&mut self, new_capacity: usize) -> Result<(), TableError> {
        debug_assert!(new_capacity >= 1, "resize requires at least one bucket");

        let mut fresh: Vec<Chain<K, V>> = Vec::new();
        fresh
            .try_reserve_exact(new_capacity)
            .map_err(|source| TableError::AllocationFailed {
                requested: new_capacity,
                source,
            })?;
        fresh.resize_with(new_capacity, Chain::new);

        debug!(
            "resizing table: {} -> {} buckets, {} entries",
            self.capacity(),
            new_capacity,
            self.count
        );

        let old = mem::replace(&mut self.buckets, fresh);
        for chain in old {
            for (key, value) in chain {
                let idx = (self.hash_fn.get_hash(&key) % new_capacity as u64) as usize;
                self.buckets[idx].push((key, value));
            }
        }
        Ok(())
    }
}

impl<K, V, H> ChainedHashTable<K, V, H>
where
    K: Eq + Debug,
    V: Debug,
    H: KeyHasher<K>,
{
    /// Writes one line per bucket: the bucket index followed by its chain
    /// contents. Diagnostic output only, not part of the functional contract.
    pub fn dump<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        for (idx, chain) in self.buckets.iter().enumerate() {
            write!(out, "{}:", idx)?;
            for (key, value) in chain {
                write!(out, " -> ({:?}, {:?})", key, value)?;
            }
            writeln!(out)?;
        }
        Ok(())
    }

    /// Dumps the table to stdout.
    pub fn debug_print(&self) {
        let mut stdout = io::stdout().lock();
        let _ = self.dump(&mut stdout);
    }
}
