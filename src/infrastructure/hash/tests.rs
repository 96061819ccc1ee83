use super::*;

#[test]
fn test_polynomial31_known_values() {
    assert_eq!(polynomial31_index("a", 16), 1);
    assert_eq!(polynomial31_index("ab", 16), 1);
    assert_eq!(polynomial31_index("ab", 1000003), 3105);
    assert_eq!(polynomial31_index("Miyuki", 16), 6);
    assert_eq!(polynomial31_index("Miyuki", 32), 22);
    assert_eq!(polynomial31_index("hello", 32), 18);
}

#[test]
fn test_polynomial31_empty_key() {
    assert_eq!(polynomial31_index("", 16), 0);
    assert_eq!(polynomial31_index("", 1), 0);
}

#[test]
fn test_polynomial31_uses_utf16_units() {
    // U+00E9 is a single unit, U+1F600 is a surrogate pair
    assert_eq!(polynomial31_index("é", 1000003), 233);
    assert_eq!(polynomial31_index("😀", 1000003), 772896);
}

#[test]
fn test_polynomial31_in_range() {
    let keys = ["", "x", "Miyuki", "kjgiuoiyqw", "a much longer key with spaces and ünïcödé"];
    for capacity in [1, 2, 3, 16, 17, 32, 1024] {
        for key in keys {
            let index = polynomial31_index(key, capacity);
            assert!(index < capacity, "{} -> {} with capacity {}", key, index, capacity);
            // Deterministic for the same inputs
            assert_eq!(index, polynomial31_index(key, capacity));
        }
    }
}

#[test]
#[should_panic(expected = "bucket capacity must be non-zero")]
fn test_polynomial31_zero_capacity() {
    polynomial31_index("key", 0);
}

#[test]
fn test_fnv1a_hash_consistency() {
    let s = "hello world";
    assert_eq!(fnv1a_hash(s), fnv1a_hash(s));

    // Empty input yields the offset basis
    assert_eq!(fnv1a_hash(""), 14695981039346656037);
    assert_eq!(fnv1a_hash("a"), 12638187200555641996);
}

#[test]
fn test_hash_different_strings() {
    let s1 = "hello";
    let s2 = "world";

    assert_ne!(fnv1a_hash(s1), fnv1a_hash(s2));
    assert_ne!(djb2_hash(s1), djb2_hash(s2));
    assert_ne!(xxh64_hash(s1), xxh64_hash(s2));
    assert_ne!(crc32_hash(s1), crc32_hash(s2));
}

#[test]
fn test_crc32_known_value() {
    assert_eq!(crc32_hash("hello world"), 222957957);
}

#[test]
fn test_bucket_index_all_algorithms() {
    let algorithms = [
        HashAlgorithm::Polynomial31,
        HashAlgorithm::Fnv1a,
        HashAlgorithm::Djb2,
        HashAlgorithm::Xxh64,
        HashAlgorithm::Crc32,
    ];

    for algorithm in algorithms {
        for capacity in [1, 16, 33] {
            let index = algorithm.bucket_index("ojpojla", capacity);
            assert!(index < capacity);
            assert_eq!(index, algorithm.bucket_index("ojpojla", capacity));
        }
        assert_eq!(algorithm.name().parse::<HashAlgorithm>(), Ok(algorithm));
    }

    assert_eq!(
        HashAlgorithm::Polynomial31.bucket_index("Miyuki", 32),
        polynomial31_index("Miyuki", 32)
    );
    assert_eq!(
        HashAlgorithm::Fnv1a.bucket_index("Miyuki", 32),
        (fnv1a_hash("Miyuki") % 32) as usize
    );
}

#[test]
fn test_hash_algorithm_parse_unknown() {
    assert!("sha256".parse::<HashAlgorithm>().is_err());
    assert_eq!(HashAlgorithm::default(), HashAlgorithm::Polynomial31);
}
