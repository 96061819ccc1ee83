// Hash table implementation with separate chaining

pub mod error;

use log::{debug, trace};
use serde::Serialize;

use crate::infrastructure::chain::{Chain, Entry};
use crate::infrastructure::hash::HashAlgorithm;
use crate::types::{LoadPolicy, TableConfig};

pub use error::{TableError, TableResult};

/// Snapshot of a table's shape, for diagnostics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableStats {
    /// Number of buckets
    pub capacity: usize,
    /// Number of stored keys
    pub length: usize,
    /// Buckets holding at least one entry
    pub occupied_buckets: usize,
    /// Longest collision chain
    pub longest_chain: usize,
    /// Configured growth threshold
    pub load_factor: f64,
    /// Current load as measured by the load policy
    pub load: f64,
    /// Resizes performed since construction
    pub resizes: usize,
}

/// Hash table structure
///
/// String keys map to values of any type. Each bucket holds an optional
/// [`Chain`] created on first use. The table doubles its bucket count and
/// rehashes every entry as soon as an insertion pushes the load past
/// `load_factor`; it never shrinks.
#[derive(Debug, Clone)]
pub struct HashTable<V> {
    /// Bucket array, `None` until a bucket receives its first entry
    buckets: Vec<Option<Chain<V>>>,
    /// Number of buckets
    capacity: usize,
    /// Growth threshold
    load_factor: f64,
    load_policy: LoadPolicy,
    hash_algorithm: HashAlgorithm,
    /// Number of stored keys
    key_count: usize,
    /// Buckets whose chain is non-empty
    occupied: usize,
    resizes: usize,
}

impl<V> Default for HashTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> HashTable<V> {
    /// Create a table with 16 buckets and a 0.75 load factor
    pub fn new() -> Self {
        Self::build(TableConfig::default())
    }

    /// Create a table with the given bucket count and load factor
    pub fn with_capacity(capacity: usize, load_factor: f64) -> TableResult<Self> {
        Self::with_config(TableConfig {
            capacity,
            load_factor,
            ..TableConfig::default()
        })
    }

    /// Create a table from a validated configuration
    pub fn with_config(config: TableConfig) -> TableResult<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: TableConfig) -> Self {
        HashTable {
            buckets: Self::empty_buckets(config.capacity),
            capacity: config.capacity,
            load_factor: config.load_factor,
            load_policy: config.load_policy,
            hash_algorithm: config.hash_algorithm,
            key_count: 0,
            occupied: 0,
            resizes: 0,
        }
    }

    fn empty_buckets(capacity: usize) -> Vec<Option<Chain<V>>> {
        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, || None);
        buckets
    }

    /// Bucket index of `key` under the current capacity
    pub fn hash(&self, key: &str) -> usize {
        self.hash_algorithm.bucket_index(key, self.capacity)
    }

    fn threshold(&self) -> f64 {
        self.capacity as f64 * self.load_factor
    }

    /// Check if the current load is above the growth threshold
    pub fn load_exceeded(&self) -> bool {
        let load = match self.load_policy {
            LoadPolicy::KeyDensity => self.key_count,
            LoadPolicy::BucketOccupancy => self.occupied,
        };
        load as f64 > self.threshold()
    }

    /// Insert or update a key.
    ///
    /// An existing key keeps its position in the chain and gets the new value;
    /// the old value is returned. A new key that pushes the load past the
    /// threshold doubles the table until it fits again before this returns.
    pub fn set(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let previous = self.place(key.into(), value);
        if previous.is_none() {
            while self.load_exceeded() {
                self.resize();
            }
        }
        previous
    }

    /// Put a pair into its bucket without checking the load
    fn place(&mut self, key: String, value: V) -> Option<V> {
        let index = self.hash(&key);
        let chain = self.buckets[index].get_or_insert_with(Chain::new);

        if let Some(entry) = chain.lookup_mut(&key) {
            trace!("updated {:?} in bucket {}", key, index);
            return Some(entry.replace_value(value));
        }

        if chain.is_empty() {
            self.occupied += 1;
        }
        trace!("inserted {:?} into bucket {}", key, index);
        chain.append(key, value);
        self.key_count += 1;
        None
    }

    /// Entry stored for `key`
    pub fn get_entry(&self, key: &str) -> Option<&Entry<V>> {
        let index = self.hash(key);
        self.buckets[index].as_ref()?.lookup(key)
    }

    /// Value stored for `key`
    pub fn get(&self, key: &str) -> Option<&V> {
        self.get_entry(key).map(Entry::value)
    }

    /// Mutable value stored for `key`
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let index = self.hash(key);
        self.buckets[index]
            .as_mut()?
            .lookup_mut(key)
            .map(Entry::value_mut)
    }

    /// Check if `key` is stored
    pub fn has(&self, key: &str) -> bool {
        self.get_entry(key).is_some()
    }

    /// Remove `key` and return its value; absent keys are a no-op
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let index = self.hash(key);
        let chain = self.buckets[index].as_mut()?;
        let position = chain.find(key)?;
        let (_, value) = match chain.remove_at(position) {
            Ok(pair) => pair,
            // `position` was just returned by `find` on this chain
            Err(err) => unreachable!("{}", err),
        };

        if chain.is_empty() {
            self.occupied -= 1;
        }
        self.key_count -= 1;
        trace!("removed {:?} from bucket {}", key, index);
        Some(value)
    }

    /// Number of stored keys
    pub fn length(&self) -> usize {
        self.key_count
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.key_count == 0
    }

    /// Number of buckets
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Configured growth threshold
    pub fn load_factor(&self) -> f64 {
        self.load_factor
    }

    /// What the load factor measures
    pub fn load_policy(&self) -> LoadPolicy {
        self.load_policy
    }

    /// Key to bucket mapping
    pub fn hash_algorithm(&self) -> HashAlgorithm {
        self.hash_algorithm
    }

    /// Buckets holding at least one entry
    pub fn occupied_buckets(&self) -> usize {
        self.occupied
    }

    /// Double the bucket count and rehash every entry.
    ///
    /// Pairs are drained out of the old buckets first, then replayed through
    /// the insert path against the enlarged array.
    pub fn resize(&mut self) {
        let old_capacity = self.capacity;
        let new_capacity = old_capacity.saturating_mul(2);

        let pairs: Vec<(String, V)> = self
            .buckets
            .iter_mut()
            .filter_map(Option::take)
            .flatten()
            .collect();

        self.capacity = new_capacity;
        self.buckets = Self::empty_buckets(new_capacity);
        self.key_count = 0;
        self.occupied = 0;

        for (key, value) in pairs {
            self.place(key, value);
        }
        self.resizes += 1;

        debug!(
            "resized table from {} to {} buckets, {} keys rehashed into {} buckets",
            old_capacity, new_capacity, self.key_count, self.occupied
        );
    }

    /// Drop every entry, keeping the current capacity
    pub fn clear(&mut self) {
        debug!("clearing {} keys from {} buckets", self.key_count, self.capacity);
        self.buckets = Self::empty_buckets(self.capacity);
        self.key_count = 0;
        self.occupied = 0;
    }

    /// Chain stored in bucket `index`, if one was ever created there
    pub fn bucket(&self, index: usize) -> Option<&Chain<V>> {
        self.buckets.get(index)?.as_ref()
    }

    /// Iterate pairs in bucket order, then chain order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.buckets
            .iter()
            .flatten()
            .flat_map(Chain::iter)
            .map(|entry| (entry.key(), entry.value()))
    }

    /// Iterate stored keys
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|(key, _)| key)
    }

    /// Iterate stored values
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, value)| value)
    }

    /// Collect shape statistics
    pub fn stats(&self) -> TableStats {
        let longest_chain = self
            .buckets
            .iter()
            .flatten()
            .map(Chain::len)
            .max()
            .unwrap_or(0);
        let measured = match self.load_policy {
            LoadPolicy::KeyDensity => self.key_count,
            LoadPolicy::BucketOccupancy => self.occupied,
        };

        TableStats {
            capacity: self.capacity,
            length: self.key_count,
            occupied_buckets: self.occupied,
            longest_chain,
            load_factor: self.load_factor,
            load: measured as f64 / self.capacity as f64,
            resizes: self.resizes,
        }
    }
}

impl<K: Into<String>, V> Extend<(K, V)> for HashTable<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}
