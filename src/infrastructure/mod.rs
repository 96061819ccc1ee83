//! Data-structure engine: hash functions, bucket chains and the table

pub mod chain;
pub mod hash;
pub mod hash_table;
