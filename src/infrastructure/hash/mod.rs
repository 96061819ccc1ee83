// Hash functions for strings

use serde::{Deserialize, Serialize};

/// Multiplier of the polynomial bucket hash
pub const POLYNOMIAL_BASE: u64 = 31;

/// Base-31 polynomial rolling hash reduced into `[0, capacity)`.
///
/// Walks the key's UTF-16 code units and folds each one in with
/// `h = (31 * h + unit) % capacity`. Reducing after every step keeps the
/// accumulator below `capacity` regardless of key length, so the result only
/// depends on `(key, capacity)`.
///
/// # Panics
///
/// Panics if `capacity` is zero.
pub fn polynomial31_index(key: &str, capacity: usize) -> usize {
    assert!(capacity > 0, "bucket capacity must be non-zero");
    let modulus = capacity as u128;

    let mut hash: u128 = 0;
    for unit in key.encode_utf16() {
        hash = (POLYNOMIAL_BASE as u128 * hash + unit as u128) % modulus;
    }

    hash as usize
}

/// FNV-1a hash implementation for strings
/// Returns a 64-bit integer hash value
pub fn fnv1a_hash(s: &str) -> u64 {
    // FNV-1a constants
    const FNV_OFFSET_BASIS: u64 = 14695981039346656037;
    const FNV_PRIME: u64 = 1099511628211;

    let mut hash = FNV_OFFSET_BASIS;

    for byte in s.as_bytes() {
        hash ^= *byte as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
    }

    hash
}

/// djb2 hash implementation for strings
/// Returns a 64-bit integer hash value
pub fn djb2_hash(s: &str) -> u64 {
    const DJB2_MAGIC_NUMBER: u64 = 5381;

    let mut hash = DJB2_MAGIC_NUMBER;

    for byte in s.as_bytes() {
        // hash * 33 + c
        hash = hash.wrapping_shl(5).wrapping_add(hash).wrapping_add(*byte as u64);
    }

    hash
}

/// XXH64 with a zero seed
pub fn xxh64_hash(s: &str) -> u64 {
    xxhash_rust::xxh64::xxh64(s.as_bytes(), 0)
}

/// CRC32 checksum widened to 64 bits
pub fn crc32_hash(s: &str) -> u64 {
    crc32fast::hash(s.as_bytes()) as u64
}

/// Selects how a table maps keys onto buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HashAlgorithm {
    /// Base-31 polynomial reduced per step, see [`polynomial31_index`]
    #[default]
    Polynomial31,
    /// FNV-1a digest modulo capacity
    Fnv1a,
    /// djb2 digest modulo capacity
    Djb2,
    /// XXH64 digest modulo capacity
    Xxh64,
    /// CRC32 checksum modulo capacity
    Crc32,
}

impl HashAlgorithm {
    /// Compute the bucket index for `key` in a table of `capacity` buckets
    pub fn bucket_index(self, key: &str, capacity: usize) -> usize {
        let digest = match self {
            HashAlgorithm::Polynomial31 => return polynomial31_index(key, capacity),
            HashAlgorithm::Fnv1a => fnv1a_hash(key),
            HashAlgorithm::Djb2 => djb2_hash(key),
            HashAlgorithm::Xxh64 => xxh64_hash(key),
            HashAlgorithm::Crc32 => crc32_hash(key),
        };
        assert!(capacity > 0, "bucket capacity must be non-zero");
        (digest % capacity as u64) as usize
    }

    /// Name used in configuration files and reports
    pub fn name(self) -> &'static str {
        match self {
            HashAlgorithm::Polynomial31 => "polynomial31",
            HashAlgorithm::Fnv1a => "fnv1a",
            HashAlgorithm::Djb2 => "djb2",
            HashAlgorithm::Xxh64 => "xxh64",
            HashAlgorithm::Crc32 => "crc32",
        }
    }
}

impl std::str::FromStr for HashAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "polynomial31" => Ok(HashAlgorithm::Polynomial31),
            "fnv1a" => Ok(HashAlgorithm::Fnv1a),
            "djb2" => Ok(HashAlgorithm::Djb2),
            "xxh64" => Ok(HashAlgorithm::Xxh64),
            "crc32" => Ok(HashAlgorithm::Crc32),
            other => Err(format!("unknown hash algorithm: {}", other)),
        }
    }
}
