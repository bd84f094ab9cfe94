//! Memoized property resolution.
//!
//! Resolution is pure and its inputs are short strings, so outcomes can be
//! cached by value. Rejections are cached too: a pattern that repeats a bad
//! reference pays the table scan once.

use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use crate::property::{resolve, Predicate};
use crate::Rejected;

type CacheKey = (String, Option<String>);

/// A memoizing front-end over [`resolve`](crate::resolve).
///
/// Keys are the raw `(name, value)` pair as written in the pattern, so
/// different spellings of the same property occupy separate entries; the
/// predicates they map to are equal. Safe to share across threads.
pub struct PropertyCache {
    resolved: Mutex<FxHashMap<CacheKey, Result<Predicate, Rejected>>>,
}

impl PropertyCache {
    pub fn new() -> PropertyCache {
        PropertyCache {
            resolved: Mutex::new(FxHashMap::default()),
        }
    }

    /// Resolve a property reference through the cache.
    pub fn resolve(&self, name: &str, value: Option<&str>) -> Result<Predicate, Rejected> {
        let key = (name.to_string(), value.map(str::to_string));
        *self
            .resolved
            .lock()
            .entry(key)
            .or_insert_with(|| resolve(name, value))
    }

    /// Number of distinct references resolved so far.
    pub fn len(&self) -> usize {
        self.resolved.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolved.lock().is_empty()
    }
}

impl Default for PropertyCache {
    fn default() -> Self {
        PropertyCache::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cached_resolution_matches_direct() {
        let cache = PropertyCache::new();
        let direct = resolve("sc", Some("Greek")).unwrap();
        let cached = cache.resolve("sc", Some("Greek")).unwrap();
        assert_eq!(direct, cached);
        // Second hit comes from the map and stays equal.
        assert_eq!(cache.resolve("sc", Some("Greek")).unwrap(), direct);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_rejections_are_cached() {
        let cache = PropertyCache::new();
        assert_eq!(cache.resolve("foo", None), Err(Rejected));
        assert_eq!(cache.resolve("foo", None), Err(Rejected));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_distinct_spellings_resolve_equal() {
        let cache = PropertyCache::new();
        let a = cache.resolve("scx", Some("Common")).unwrap();
        let b = cache.resolve("Script_Extensions", Some("common")).unwrap();
        assert_eq!(a, b);
        assert_eq!(cache.len(), 2);
    }
}
