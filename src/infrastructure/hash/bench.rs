use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;

use chainhash::infrastructure::hash::{crc32_hash, djb2_hash, fnv1a_hash, polynomial31_index, xxh64_hash};

// Generate a random string of specified length
fn generate_random_string(length: usize) -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    let mut rng = rand::thread_rng();
    let mut s = String::with_capacity(length);

    for _ in 0..length {
        let idx = rng.gen_range(0..CHARSET.len());
        s.push(CHARSET[idx] as char);
    }

    s
}

fn bench_strings(c: &mut Criterion, group_name: &str, length: usize) {
    let s = generate_random_string(length);

    let mut group = c.benchmark_group(group_name);

    group.bench_function("polynomial31_index", |b| b.iter(|| polynomial31_index(black_box(&s), 1024)));
    group.bench_function("fnv1a_hash", |b| b.iter(|| fnv1a_hash(black_box(&s))));
    group.bench_function("djb2_hash", |b| b.iter(|| djb2_hash(black_box(&s))));
    group.bench_function("xxh64_hash", |b| b.iter(|| xxh64_hash(black_box(&s))));
    group.bench_function("crc32_hash", |b| b.iter(|| crc32_hash(black_box(&s))));

    group.finish();
}

// Benchmark hash functions with short strings
pub fn bench_short_strings(c: &mut Criterion) {
    bench_strings(c, "ShortStrings", 10);
}

// Benchmark hash functions with medium strings
pub fn bench_medium_strings(c: &mut Criterion) {
    bench_strings(c, "MediumStrings", 100);
}

// Benchmark hash functions with long strings
pub fn bench_long_strings(c: &mut Criterion) {
    bench_strings(c, "LongStrings", 1000);
}

criterion_group!(benches, bench_short_strings, bench_medium_strings, bench_long_strings);
criterion_main!(benches);
