//! Metrics collection module

/// Metrics collector for benchmark
pub struct Metrics {
    ops_count: u64,
    latency_sum: u64,
    latency_max: u64,
    misses: u64,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            ops_count: 0,
            latency_sum: 0,
            latency_max: 0,
            misses: 0,
        }
    }

    pub fn record_op(&mut self, latency_ns: u64) {
        self.ops_count += 1;
        self.latency_sum += latency_ns;
        self.latency_max = self.latency_max.max(latency_ns);
    }

    /// Lookup or removal of a key that was not stored
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn total_ops(&self) -> u64 {
        self.ops_count
    }

    pub fn total_latency_ns(&self) -> u64 {
        self.latency_sum
    }

    pub fn max_latency_ns(&self) -> u64 {
        self.latency_max
    }

    pub fn total_misses(&self) -> u64 {
        self.misses
    }

    pub fn avg_latency_ns(&self) -> f64 {
        if self.ops_count == 0 {
            0.0
        } else {
            self.latency_sum as f64 / self.ops_count as f64
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
