//! Chainhash: string-keyed hash table with separately chained buckets

// Global type definitions
pub mod types;

pub mod infrastructure;
pub mod logger;

// Re-export the table items for easier access
pub use infrastructure::chain::{Chain, ChainError, ChainResult, Entry};
pub use infrastructure::hash::HashAlgorithm;
pub use infrastructure::hash_table::{HashTable, TableError, TableResult, TableStats};
pub use types::{LoadPolicy, TableConfig};
