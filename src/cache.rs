//! Per-raster source cache.
//!
//! A source (opened raster and its metadata) is built the first time
//! its index is displayed and reused on every later visit.  The
//! unbounded cache never evicts, so it holds at most one entry per
//! raster of the series for the lifetime of the viewer.  A bounded
//! cache evicts the least recently used source, for long series.

use std::num::NonZeroUsize;

use lru::LruCache;
use tracing::debug;

pub struct SourceCache<T> {
    entries: LruCache<usize, T>,
    hits: u64,
    misses: u64,
}

impl<T> SourceCache<T> {
    /// A cache that never evicts.
    pub fn unbounded() -> Self {
        SourceCache { entries: LruCache::unbounded(), hits: 0, misses: 0 }
    }

    /// A cache holding at most `capacity` sources.
    pub fn bounded(capacity: NonZeroUsize) -> Self {
        SourceCache { entries: LruCache::new(capacity), hits: 0, misses: 0 }
    }

    /// Return the source of `index`, building it with `build` if it is
    /// not resident.  Nothing is stored when `build` fails.
    pub fn get_or_try_insert_with<E, F>(&mut self, index: usize, build: F)
                                        -> Result<&T, E>
    where F: FnOnce() -> Result<T, E> {
        if self.entries.contains(&index) {
            self.hits += 1;
            debug!(index, "Source cache hit");
        } else {
            self.misses += 1;
            debug!(index, "Source cache miss");
        }
        self.entries.try_get_or_insert(index, build)
    }

    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.entries.contains(&index)
    }

    #[inline]
    pub fn len(&self) -> usize { self.entries.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// `(hits, misses)` since creation.
    #[inline]
    pub fn stats(&self) -> (u64, u64) { (self.hits, self.misses) }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn builds_at_most_once() {
        let builds = Cell::new(0);
        let mut cache = SourceCache::unbounded();
        for i in [0, 1, 0, 2, 1, 0] {
            let v = cache.get_or_try_insert_with(i, || {
                builds.set(builds.get() + 1);
                Ok::<_, ()>(i * 10)
            }).unwrap();
            assert_eq!(*v, i * 10);
        }
        assert_eq!(builds.get(), 3);
        assert_eq!(cache.len(), 3);
        assert_eq!(cache.stats(), (3, 3));
    }

    #[test]
    fn failures_are_not_cached() {
        let mut cache: SourceCache<u32> = SourceCache::unbounded();
        assert!(cache.get_or_try_insert_with(4, || Err("boom")).is_err());
        assert!(!cache.contains(4));
        assert_eq!(*cache.get_or_try_insert_with(4, || Ok::<_, &str>(7))
                   .unwrap(), 7);
    }

    #[test]
    fn bounded_evicts_least_recent() {
        let mut cache = SourceCache::bounded(NonZeroUsize::new(2).unwrap());
        for i in [0, 1, 0, 2] {
            cache.get_or_try_insert_with(i, || Ok::<_, ()>(i)).unwrap();
        }
        assert!(cache.contains(0) && cache.contains(2));
        assert!(!cache.contains(1));
    }
}
