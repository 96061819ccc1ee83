//! Chainhash demo session

// Use jemalloc as global allocator
#[global_allocator]
static GLOBAL: jemallocator::Jemalloc = jemallocator::Jemalloc;

use std::process;

use chainhash::logger::initialize_logger;
use chainhash::{HashTable, TableConfig, TableError};
use log::{error, info};

const SAMPLE: &[(&str, &str)] = &[
    ("Miyuki", "test1"),
    ("Miyuki", "test2"),
    ("Miyuki", "test3"),
    ("as;djv;", "test5"),
    ("cmasxoq", "test6"),
    ("k2pfj", "test7"),
    ("x,.mca", "test8"),
    ("qpx,nvie", "test9"),
    ("ckqopjcw", "test10"),
    ("mcoqa", "test11"),
    ("ghjd", "test12"),
    ("qijoiq", "test13"),
    ("askclj", "test14"),
    ("lkaa a", "test15"),
    ("ojpojla", "test16"),
    ("yrtuvv", "test17"),
    ("kjgiuoiyqw", "test18"),
    ("ca,zka", "test19"),
    ("k137", "test20"),
    ("oijoiuwiouqw", "test21"),
    ("cjajshquwu", "test22"),
    ("Miyuki", "test23"),
];

fn run() -> Result<(), TableError> {
    // Optional JSON config as the first argument
    let config = match std::env::args().nth(1) {
        Some(path) => TableConfig::load(path)?,
        None => TableConfig::default(),
    };
    info!(
        "creating table: capacity {}, load factor {}, policy {}, hash {}",
        config.capacity,
        config.load_factor,
        config.load_policy.name(),
        config.hash_algorithm.name()
    );

    let mut table = HashTable::with_config(config)?;
    table.extend(SAMPLE.iter().copied());
    table.remove("Miyuki");

    let miyuki_bucket = table.hash("Miyuki");
    if let Some(chain) = table.bucket(miyuki_bucket) {
        println!("bucket {}: {}", miyuki_bucket, chain);
    }
    println!("{:?}", table.get_entry("ojpojla"));
    println!("{}", table.has("Miyuki"));
    println!("{}", table.length());

    for index in 0..table.capacity() {
        match table.bucket(index) {
            Some(chain) if !chain.is_empty() => println!("{:>4}: {}", index, chain),
            _ => {}
        }
    }

    let stats = table.stats();
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}

fn main() {
    initialize_logger();

    if let Err(err) = run() {
        error!("{}", err);
        process::exit(1);
    }
}
