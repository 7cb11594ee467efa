//! Thread-safe cache for twiddle tables.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::domain::Direction;

/// Cache key for a twiddle table.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub struct CacheKey {
    pub len: usize,
    pub direction: Direction,
}

/// Thread-safe cache of root-of-unity tables, one instance per domain.
pub struct TwiddleCache<T> {
    tables: Mutex<HashMap<CacheKey, Arc<[T]>>>,
    max_entries: usize,
}

impl<T> TwiddleCache<T> {
    /// Create a new cache holding at most `max_entries` tables.
    #[must_use]
    pub fn new(max_entries: usize) -> Self {
        Self {
            tables: Mutex::new(HashMap::new()),
            max_entries,
        }
    }

    /// Get a cached table, if available.
    pub fn get(&self, key: &CacheKey) -> Option<Arc<[T]>> {
        self.tables.lock().get(key).cloned()
    }

    /// Store a table in the cache.
    pub fn put(&self, key: CacheKey, table: Arc<[T]>) {
        let mut tables = self.tables.lock();
        if tables.len() >= self.max_entries {
            tables.clear();
        }
        tables.insert(key, table);
    }

    /// Return the cached table for `(len, direction)`, building it on a miss.
    ///
    /// The lock is not held while `build` runs; two threads racing on the
    /// same key both build the table and the last one wins.
    pub fn get_or_insert_with(
        &self,
        len: usize,
        direction: Direction,
        build: impl FnOnce() -> Vec<T>,
    ) -> Arc<[T]> {
        let key = CacheKey { len, direction };
        if let Some(table) = self.get(&key) {
            return table;
        }
        let table: Arc<[T]> = build().into();
        self.put(key, Arc::clone(&table));
        table
    }

    /// Get the number of cached tables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.lock().len()
    }

    /// Check if the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.lock().is_empty()
    }

    /// Clear the cache.
    pub fn clear(&self) {
        self.tables.lock().clear();
    }
}

impl<T> Default for TwiddleCache<T> {
    fn default() -> Self {
        Self::new(64)
    }
}
