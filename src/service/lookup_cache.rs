use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use lru::LruCache;

use crate::model::{Address, CacheEntry};

/// Capacity-bounded LRU memo of resolved addresses.
///
/// Every operation takes one mutex for the map-and-list update only.
/// Entries are never expired, only evicted by capacity pressure.
pub struct LookupCache {
    entries: Mutex<LruCache<String, Arc<CacheEntry>>>,
}

impl LookupCache {
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, LruCache<String, Arc<CacheEntry>>> {
        // LRU bookkeeping is complete after every call, so a poisoned lock is still consistent
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Look up an entry and promote it to most-recently-used.
    pub fn get(&self, addr: &Address) -> Option<Arc<CacheEntry>> {
        self.lock().get(&addr.key()).cloned()
    }

    /// Insert or replace an entry, evicting the least-recently-used one when full.
    pub fn put(&self, addr: &Address, entry: CacheEntry) -> Arc<CacheEntry> {
        let entry = Arc::new(entry);
        self.lock().put(addr.key(), Arc::clone(&entry));
        entry
    }

    /// Membership check that does not touch recency
    #[cfg(test)]
    pub fn contains(&self, addr: &Address) -> bool {
        self.lock().contains(&addr.key())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.lock().cap().get()
    }
}
