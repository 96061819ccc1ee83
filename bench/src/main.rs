//! Chainhash Benchmark Tool

use chainhash::logger::initialize_logger;
use chainhash::{HashAlgorithm, HashTable, LoadPolicy, TableConfig};
use clap::Parser;
use log::{error, info};
use rand::SeedableRng;
use std::time::{Duration, Instant};

mod metrics;
mod scenarios;

use metrics::Metrics;

#[derive(Parser, Debug, Clone)]
#[command(name = "chainhash-bench")]
#[command(about = "Chainhash table load generator")]
struct Args {
    #[arg(short = 's', long, default_value = "point_get")]
    scenario: String,

    #[arg(short = 'd', long, default_value = "10")]
    duration: u64,

    #[arg(short = 'k', long, default_value = "10000")]
    keys: usize,

    #[arg(short = 'c', long, default_value = "16")]
    capacity: usize,

    #[arg(short = 'l', long, default_value = "0.75")]
    load_factor: f64,

    #[arg(long, default_value = "key_density")]
    policy: LoadPolicy,

    #[arg(long, default_value = "polynomial31")]
    hash: HashAlgorithm,

    #[arg(long, default_value = "0")]
    seed: u64,
}

fn main() {
    initialize_logger();
    let args = Args::parse();

    println!("Chainhash Benchmark Tool");
    println!("========================");
    println!("Scenario: {}", args.scenario);
    println!("Duration: {}s", args.duration);
    println!("Keys: {}", args.keys);
    println!("Capacity: {} (load factor {})", args.capacity, args.load_factor);
    println!("Policy: {}", args.policy.name());
    println!("Hash: {}", args.hash.name());
    println!();

    if args.keys == 0 && args.scenario != "insert" {
        error!("scenario {} needs at least one key", args.scenario);
        std::process::exit(1);
    }
    let Some(scenario) = scenarios::by_name(&args.scenario, args.keys) else {
        error!("Unknown scenario: {}", args.scenario);
        std::process::exit(1);
    };

    let config = TableConfig {
        capacity: args.capacity,
        load_factor: args.load_factor,
        load_policy: args.policy,
        hash_algorithm: args.hash,
    };
    let mut table = match HashTable::with_config(config) {
        Ok(table) => table,
        Err(err) => {
            error!("{}", err);
            std::process::exit(1);
        }
    };

    info!("preparing {}", scenario.name());
    scenario.prepare(&mut table);
    info!("prepared {} keys in {} buckets", table.length(), table.capacity());

    println!("Running benchmark...");
    let mut rng = rand::rngs::StdRng::seed_from_u64(args.seed);
    let mut metrics = Metrics::new();
    let duration = Duration::from_secs(args.duration);
    let start_time = Instant::now();

    while start_time.elapsed() < duration {
        let start = Instant::now();
        let hit = scenario.execute(&mut table, &mut rng);
        metrics.record_op(start.elapsed().as_nanos() as u64);
        if !hit {
            metrics.record_miss();
        }
    }

    let elapsed = start_time.elapsed();
    let total_ops = metrics.total_ops();
    let ops_per_sec = total_ops as f64 / elapsed.as_secs_f64();
    let stats = table.stats();

    println!();
    println!("Operation statistics:");
    println!("    operations:        {:>12} ({:.1} ops/s)", total_ops, ops_per_sec);
    println!("    misses:            {:>12}", metrics.total_misses());
    println!(
        "    latency:           {:8.3} us (avg), {:8.3} us (max)",
        metrics.avg_latency_ns() / 1000.0,
        metrics.max_latency_ns() as f64 / 1000.0
    );
    println!("Table statistics:");
    println!("    keys:              {:>12}", stats.length);
    println!("    capacity:          {:>12}", stats.capacity);
    println!("    occupied buckets:  {:>12}", stats.occupied_buckets);
    println!("    longest chain:     {:>12}", stats.longest_chain);
    println!("    load:              {:>12.3}", stats.load);
    println!("    resizes:           {:>12}", stats.resizes);
}
