use std::num::NonZeroUsize;
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, warn};

use crate::error::{GeoError, Result};
use crate::metrics::LookupMetrics;
use crate::model::{Address, CacheEntry, NetworkRecord, PlaceRecord, ResolvedIdentity};
use crate::service::geo_source::GeoSource;
use crate::service::lookup_cache::LookupCache;

pub type PlaceSource = Arc<dyn GeoSource<Record = PlaceRecord>>;
pub type NetworkSource = Arc<dyn GeoSource<Record = NetworkRecord>>;

/// Resolves addresses through the cache, falling through to both datasets on a miss.
///
/// Place data is mandatory: any place-source failure fails the resolution.
/// Network-ownership data is supplementary: its failures only leave the
/// network record absent.
#[derive(Clone)]
pub struct GeoResolutionService {
    places: PlaceSource,
    networks: NetworkSource,
    cache: Arc<LookupCache>,
    metrics: LookupMetrics,
}

impl GeoResolutionService {
    pub fn new(places: PlaceSource, networks: NetworkSource, cache_capacity: NonZeroUsize) -> Self {
        Self {
            places,
            networks,
            cache: Arc::new(LookupCache::new(cache_capacity)),
            metrics: LookupMetrics::new(),
        }
    }

    pub fn cache(&self) -> &LookupCache {
        &self.cache
    }

    pub fn metrics(&self) -> &LookupMetrics {
        &self.metrics
    }

    pub fn resolve(&self, address: &Address, request_id: &str) -> Result<ResolvedIdentity> {
        let entry = match self.cache.get(address) {
            Some(entry) => {
                self.metrics.increment_hits();
                entry
            }
            None => {
                self.metrics.increment_misses();
                let entry = self.query_sources(address)?;
                self.cache.put(address, entry)
            }
        };

        Ok(ResolvedIdentity {
            address: *address,
            place: entry.place.clone(),
            network: entry.network.clone(),
            request_id: request_id.to_string(),
            timestamp: Utc::now().timestamp_millis(),
        })
    }

    fn query_sources(&self, address: &Address) -> Result<CacheEntry> {
        let place = self.places.lookup(address.ip()).map_err(|e| {
            self.metrics.increment_place_failures();
            warn!("{} lookup failed for {}: {}", self.places.name(), address, e);
            GeoError::LookupFailed(e)
        })?;

        let network = match self.networks.lookup(address.ip()) {
            Ok(record) => Some(record),
            Err(e) => {
                self.metrics.increment_network_degraded();
                debug!("{} lookup degraded for {}: {}", self.networks.name(), address, e);
                None
            }
        };

        Ok(CacheEntry::new(place, network))
    }
}
