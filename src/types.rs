//! Global type definitions

use std::fs;
use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::infrastructure::hash::HashAlgorithm;
use crate::infrastructure::hash_table::error::{TableError, TableResult};

/// Default bucket count of a new table
pub const DEFAULT_CAPACITY: usize = 16;

/// Default growth threshold
pub const DEFAULT_LOAD_FACTOR: f64 = 0.75;

/// What the load factor is measured against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadPolicy {
    /// Stored keys per bucket
    #[default]
    KeyDensity,
    /// Buckets holding at least one entry per bucket.
    ///
    /// Ignores chain length, so heavy collisions in a few buckets never
    /// trigger growth.
    BucketOccupancy,
}

impl LoadPolicy {
    /// Name used in configuration files and reports
    pub fn name(self) -> &'static str {
        match self {
            LoadPolicy::KeyDensity => "key_density",
            LoadPolicy::BucketOccupancy => "bucket_occupancy",
        }
    }
}

impl std::str::FromStr for LoadPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "key_density" => Ok(LoadPolicy::KeyDensity),
            "bucket_occupancy" => Ok(LoadPolicy::BucketOccupancy),
            other => Err(format!("unknown load policy: {}", other)),
        }
    }
}

/// Hash table configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Initial number of buckets
    pub capacity: usize,
    /// Growth threshold, in (0, 1]
    pub load_factor: f64,
    /// What the load factor measures
    pub load_policy: LoadPolicy,
    /// Key to bucket mapping
    pub hash_algorithm: HashAlgorithm,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            load_factor: DEFAULT_LOAD_FACTOR,
            load_policy: LoadPolicy::default(),
            hash_algorithm: HashAlgorithm::default(),
        }
    }
}

impl TableConfig {
    /// Check capacity and load factor ranges
    pub fn validate(&self) -> TableResult<()> {
        if self.capacity == 0 {
            return Err(TableError::InvalidArgument(
                "capacity must be a positive integer".to_string(),
            ));
        }
        if !(self.load_factor > 0.0 && self.load_factor <= 1.0) {
            return Err(TableError::InvalidArgument(format!(
                "load factor must be in (0, 1], got {}",
                self.load_factor
            )));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration
    pub fn from_json_str(json: &str) -> TableResult<Self> {
        let config: TableConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> TableResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents).inspect_err(|err| {
            warn!("rejected table config {}: {}", path.display(), err);
        })
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> TableResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_defaults() {
        let config = TableConfig::default();
        assert_eq!(config.capacity, 16);
        assert_eq!(config.load_factor, 0.75);
        assert_eq!(config.load_policy, LoadPolicy::KeyDensity);
        assert_eq!(config.hash_algorithm, HashAlgorithm::Polynomial31);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate_rejects_bad_values() {
        let zero = TableConfig {
            capacity: 0,
            ..TableConfig::default()
        };
        assert!(matches!(zero.validate(), Err(TableError::InvalidArgument(_))));

        for load_factor in [0.0, -0.5, 1.5, f64::NAN, f64::INFINITY] {
            let config = TableConfig {
                load_factor,
                ..TableConfig::default()
            };
            assert!(
                matches!(config.validate(), Err(TableError::InvalidArgument(_))),
                "load factor {} accepted",
                load_factor
            );
        }

        let full = TableConfig {
            load_factor: 1.0,
            ..TableConfig::default()
        };
        assert!(full.validate().is_ok());
    }

    #[test]
    fn test_config_from_json_partial() {
        let config = TableConfig::from_json_str(r#"{"capacity": 64, "load_policy": "bucket_occupancy"}"#)
            .unwrap();
        assert_eq!(config.capacity, 64);
        assert_eq!(config.load_factor, 0.75);
        assert_eq!(config.load_policy, LoadPolicy::BucketOccupancy);
        assert_eq!(config.hash_algorithm, HashAlgorithm::Polynomial31);

        let config = TableConfig::from_json_str(r#"{"hash_algorithm": "xxh64"}"#).unwrap();
        assert_eq!(config.hash_algorithm, HashAlgorithm::Xxh64);
    }

    #[test]
    fn test_config_from_json_errors() {
        assert!(matches!(
            TableConfig::from_json_str("{"),
            Err(TableError::ParseError(_))
        ));
        assert!(matches!(
            TableConfig::from_json_str(r#"{"hash_algorithm": "md5"}"#),
            Err(TableError::ParseError(_))
        ));
        assert!(matches!(
            TableConfig::from_json_str(r#"{"load_factor": 2.0}"#),
            Err(TableError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_config_json_round_trip() {
        let config = TableConfig {
            capacity: 8,
            load_factor: 0.5,
            load_policy: LoadPolicy::BucketOccupancy,
            hash_algorithm: HashAlgorithm::Crc32,
        };
        let json = config.to_json().unwrap();
        assert!(json.contains("\"bucket_occupancy\""));
        assert_eq!(TableConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_config_load_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"capacity": 32, "load_factor": 0.5}}"#).unwrap();

        let config = TableConfig::load(file.path()).unwrap();
        assert_eq!(config.capacity, 32);
        assert_eq!(config.load_factor, 0.5);

        let missing = file.path().with_extension("missing");
        assert!(matches!(TableConfig::load(&missing), Err(TableError::IoError(_))));
    }

    #[test]
    fn test_load_policy_parse() {
        assert_eq!("key_density".parse::<LoadPolicy>(), Ok(LoadPolicy::KeyDensity));
        assert_eq!(
            LoadPolicy::BucketOccupancy.name().parse::<LoadPolicy>(),
            Ok(LoadPolicy::BucketOccupancy)
        );
        assert!("keys".parse::<LoadPolicy>().is_err());
    }
}
