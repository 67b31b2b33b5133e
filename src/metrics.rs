use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

#[derive(Clone)]
pub struct LookupMetrics {
    cache_hits: Arc<AtomicU64>,
    cache_misses: Arc<AtomicU64>,
    place_failures: Arc<AtomicU64>,
    network_degraded: Arc<AtomicU64>,
    start_time: Arc<Instant>,
}

impl LookupMetrics {
    pub fn new() -> Self {
        LookupMetrics {
            cache_hits: Arc::new(AtomicU64::new(0)),
            cache_misses: Arc::new(AtomicU64::new(0)),
            place_failures: Arc::new(AtomicU64::new(0)),
            network_degraded: Arc::new(AtomicU64::new(0)),
            start_time: Arc::new(Instant::now()),
        }
    }

    pub fn increment_hits(&self) {
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_misses(&self) {
        self.cache_misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_place_failures(&self) {
        self.place_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_network_degraded(&self) {
        self.network_degraded.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get_hits(&self) -> u64 {
        self.cache_hits.load(Ordering::Relaxed)
    }

    pub fn get_misses(&self) -> u64 {
        self.cache_misses.load(Ordering::Relaxed)
    }

    pub fn get_place_failures(&self) -> u64 {
        self.place_failures.load(Ordering::Relaxed)
    }

    pub fn get_network_degraded(&self) -> u64 {
        self.network_degraded.load(Ordering::Relaxed)
    }

    pub fn get_lookups(&self) -> u64 {
        self.get_hits() + self.get_misses()
    }

    pub fn get_hit_rate(&self) -> f64 {
        let lookups = self.get_lookups();
        if lookups > 0 {
            self.get_hits() as f64 / lookups as f64 * 100.0
        } else {
            0.0
        }
    }

    pub fn get_uptime_secs(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64()
    }

    pub fn print_summary(&self) {
        tracing::info!("=== Lookup Metrics Summary ===");
        tracing::info!("  Total lookups: {}", self.get_lookups());
        tracing::info!("  Cache hits: {}", self.get_hits());
        tracing::info!("  Cache misses: {}", self.get_misses());
        tracing::info!("  Hit rate: {:.2}%", self.get_hit_rate());
        tracing::info!("  Place lookup failures: {}", self.get_place_failures());
        tracing::info!("  ASN lookups degraded: {}", self.get_network_degraded());
        tracing::info!("  Uptime: {:.2}s", self.get_uptime_secs());
    }
}

impl Default for LookupMetrics {
    fn default() -> Self {
        Self::new()
    }
}
