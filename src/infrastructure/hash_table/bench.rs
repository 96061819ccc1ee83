use criterion::{black_box, criterion_group, criterion_main, Criterion};
use linked_hash_map::LinkedHashMap;
use std::collections::HashMap;

use chainhash::{HashAlgorithm, HashTable, LoadPolicy, TableConfig};

// Test configuration
const OPERATIONS: usize = 10_000;

fn keys() -> Vec<String> {
    (0..OPERATIONS).map(|i| format!("key-{}", i)).collect()
}

// Benchmark insert/get/remove cycles
pub fn bench_single_threaded(c: &mut Criterion) {
    let keys = keys();
    let mut group = c.benchmark_group("SingleThreaded");

    group.bench_function("HashTable", |b| {
        b.iter(|| {
            let mut map = HashTable::new();
            for key in &keys {
                map.set(key.as_str(), "test_value");
            }
            for key in &keys {
                assert!(map.get(key).is_some());
            }
            for key in &keys {
                map.remove(key);
            }
        });
    });

    group.bench_function("StdHashMap", |b| {
        b.iter(|| {
            let mut map = HashMap::new();
            for key in &keys {
                map.insert(key.clone(), "test_value");
            }
            for key in &keys {
                assert!(map.get(key).is_some());
            }
            for key in &keys {
                map.remove(key);
            }
        });
    });

    group.bench_function("LinkedHashMap", |b| {
        b.iter(|| {
            let mut map = LinkedHashMap::new();
            for key in &keys {
                map.insert(key.clone(), "test_value");
            }
            for key in &keys {
                assert!(map.get(key).is_some());
            }
            for key in &keys {
                map.remove(key);
            }
        });
    });

    group.finish();
}

// Benchmark read-heavy workloads (90% reads, 10% writes) on a pre-populated map
pub fn bench_read_heavy(c: &mut Criterion) {
    let keys = keys();
    let mut group = c.benchmark_group("ReadHeavy");

    let mut table = HashTable::new();
    let mut std_map = HashMap::new();
    let mut linked_map = LinkedHashMap::new();
    for key in &keys {
        table.set(key.as_str(), "test_value");
        std_map.insert(key.clone(), "test_value");
        linked_map.insert(key.clone(), "test_value");
    }

    group.bench_function("HashTable", |b| {
        b.iter(|| {
            for (i, key) in keys.iter().enumerate() {
                if i % 10 == 0 {
                    table.set(key.as_str(), "updated_value");
                } else {
                    black_box(table.get(key));
                }
            }
        });
    });

    group.bench_function("StdHashMap", |b| {
        b.iter(|| {
            for (i, key) in keys.iter().enumerate() {
                if i % 10 == 0 {
                    std_map.insert(key.clone(), "updated_value");
                } else {
                    black_box(std_map.get(key));
                }
            }
        });
    });

    group.bench_function("LinkedHashMap", |b| {
        b.iter(|| {
            for (i, key) in keys.iter().enumerate() {
                if i % 10 == 0 {
                    linked_map.insert(key.clone(), "updated_value");
                } else {
                    black_box(linked_map.get(key));
                }
            }
        });
    });

    group.finish();
}

// Benchmark growth from the default capacity under each hash algorithm and load policy
pub fn bench_growth(c: &mut Criterion) {
    let keys = keys();
    let mut group = c.benchmark_group("Growth");

    for algorithm in [HashAlgorithm::Polynomial31, HashAlgorithm::Fnv1a, HashAlgorithm::Xxh64] {
        for policy in [LoadPolicy::KeyDensity, LoadPolicy::BucketOccupancy] {
            let config = TableConfig {
                load_policy: policy,
                hash_algorithm: algorithm,
                ..TableConfig::default()
            };
            let name = format!("{}/{}", algorithm.name(), policy.name());

            group.bench_function(name, |b| {
                b.iter(|| {
                    let mut map = match HashTable::with_config(config.clone()) {
                        Ok(map) => map,
                        Err(err) => panic!("invalid bench config: {}", err),
                    };
                    for key in &keys {
                        map.set(key.as_str(), 0u8);
                    }
                    black_box(map.stats())
                });
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_single_threaded, bench_read_heavy, bench_growth);
criterion_main!(benches);
