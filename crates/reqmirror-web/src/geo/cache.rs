//! Bounded least-recently-used location cache.
//!
//! Explicit structure: a map of slots plus a recency queue of (key, tick)
//! pairs. Every access stamps a fresh tick; queue entries whose tick no
//! longer matches the slot are stale and skipped during eviction. The queue
//! is compacted once it grows well past the live set, keeping amortized
//! cost constant. The mutex is never held across an await point.

use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, PoisonError};

use reqmirror_core::describe::Location;

struct Slot {
    location: Location,
    tick: u64,
}

#[derive(Default)]
struct LruInner {
    map: HashMap<String, Slot>,
    queue: VecDeque<(String, u64)>,
    tick: u64,
}

pub struct LocationCache {
    capacity: usize,
    inner: Mutex<LruInner>,
}

impl LocationCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            inner: Mutex::new(LruInner::default()),
        }
    }

    /// Fetch the memoized location for `ip`, refreshing its recency.
    pub fn get(&self, ip: &str) -> Option<Location> {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.tick += 1;
        let tick = inner.tick;
        let location = {
            let slot = inner.map.get_mut(ip)?;
            slot.tick = tick;
            slot.location.clone()
        };
        inner.queue.push_back((ip.to_string(), tick));
        Self::maybe_compact(&mut inner);
        Some(location)
    }

    /// Memoize `location` for `ip`, evicting the least recently used entry
    /// when over capacity.
    pub fn insert(&self, ip: &str, location: Location) {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.tick += 1;
        let tick = inner.tick;
        inner.map.insert(ip.to_string(), Slot { location, tick });
        inner.queue.push_back((ip.to_string(), tick));

        while inner.map.len() > self.capacity {
            let Some((key, queued_tick)) = inner.queue.pop_front() else {
                break;
            };
            // Stale queue entries point at re-touched slots; skip them.
            if inner.map.get(&key).is_some_and(|s| s.tick == queued_tick) {
                inner.map.remove(&key);
            }
        }
        Self::maybe_compact(&mut inner);
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .map
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn maybe_compact(inner: &mut LruInner) {
        if inner.queue.len() <= inner.map.len() * 2 + 16 {
            return;
        }
        let LruInner { map, queue, .. } = inner;
        queue.retain(|(key, tick)| map.get(key).is_some_and(|s| s.tick == *tick));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(country: &str) -> Location {
        Location::new(None, Some(country.to_string()))
    }

    #[test]
    fn get_returns_inserted_value() {
        let cache = LocationCache::new(4);
        cache.insert("1.1.1.1", loc("AU"));
        assert_eq!(cache.get("1.1.1.1"), Some(loc("AU")));
        assert_eq!(cache.get("8.8.8.8"), None);
    }

    #[test]
    fn capacity_evicts_least_recently_used() {
        let cache = LocationCache::new(2);
        cache.insert("a", loc("AA"));
        cache.insert("b", loc("BB"));
        cache.insert("c", loc("CC"));
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("a"), None, "oldest entry must be evicted");
        assert!(cache.get("b").is_some());
        assert!(cache.get("c").is_some());
    }

    #[test]
    fn recent_access_protects_from_eviction() {
        let cache = LocationCache::new(2);
        cache.insert("a", loc("AA"));
        cache.insert("b", loc("BB"));
        cache.get("a");
        cache.insert("c", loc("CC"));
        assert!(cache.get("a").is_some(), "recently read entry must survive");
        assert_eq!(cache.get("b"), None);
    }

    #[test]
    fn reinsert_updates_value() {
        let cache = LocationCache::new(2);
        cache.insert("a", loc("AA"));
        cache.insert("a", loc("ZZ"));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("a"), Some(loc("ZZ")));
    }

    #[test]
    fn heavy_read_traffic_stays_bounded() {
        let cache = LocationCache::new(8);
        for i in 0..8 {
            cache.insert(&format!("ip{i}"), loc("XX"));
        }
        for _ in 0..10_000 {
            cache.get("ip0");
        }
        assert_eq!(cache.len(), 8);
    }
}
