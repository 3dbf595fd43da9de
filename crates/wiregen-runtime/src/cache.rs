//! Bounded recency cache of default constructors
//!
//! The generic decode entry points (`decode_as::<T>`, `decode_from_as::<T>`)
//! default-construct a caller-chosen type `T`. Constructors are looked up by
//! [`TypeId`] in a small most-recently-used list so that repeated decodes
//! into the same few types hit the front of the list. The cache is bounded:
//! once it holds [`DEFAULT_CACHE_CAPACITY`] types, the least recently used
//! entry is evicted.

use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::any::{Any, TypeId, type_name};
use std::collections::VecDeque;
use std::fmt;

/// Number of distinct types remembered by the global cache
pub const DEFAULT_CACHE_CAPACITY: usize = 16;

static GLOBAL: Lazy<ConstructorCache> = Lazy::new(|| ConstructorCache::new(DEFAULT_CACHE_CAPACITY));

struct Entry {
    type_id: TypeId,
    type_name: &'static str,
    /// Always a `fn() -> T` for the `T` identified by `type_id`
    constructor: Box<dyn Any + Send + Sync>,
}

/// Recency-ordered map from requested type to its default constructor
pub struct ConstructorCache {
    capacity: usize,
    entries: Mutex<VecDeque<Entry>>,
}

impl ConstructorCache {
    /// Create a cache holding at most `capacity` types (minimum 1)
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// The process-wide cache used by [`Record`](crate::Record)
    pub fn global() -> &'static ConstructorCache {
        &GLOBAL
    }

    /// Look up (or register) the default constructor for `T` and mark it as
    /// most recently used.
    pub fn constructor<T: Default + 'static>(&self) -> fn() -> T {
        let type_id = TypeId::of::<T>();
        let mut entries = self.entries.lock();

        if let Some(index) = entries.iter().position(|entry| entry.type_id == type_id) {
            if let Some(entry) = entries.remove(index) {
                if let Some(constructor) = entry.constructor.downcast_ref::<fn() -> T>().copied() {
                    entries.push_front(entry);
                    return constructor;
                }
            }
        }

        tracing::trace!(type_name = type_name::<T>(), "constructor cache miss");

        let constructor: fn() -> T = T::default;
        entries.push_front(Entry {
            type_id,
            type_name: type_name::<T>(),
            constructor: Box::new(constructor),
        });
        entries.truncate(self.capacity);
        constructor
    }

    /// Default-construct a `T` through the cache
    pub fn construct<T: Default + 'static>(&self) -> T {
        (self.constructor::<T>())()
    }

    /// Whether `T` currently has a cached constructor
    pub fn contains<T: 'static>(&self) -> bool {
        let type_id = TypeId::of::<T>();
        self.entries
            .lock()
            .iter()
            .any(|entry| entry.type_id == type_id)
    }

    /// Cached type names, most recently used first
    pub fn cached_types(&self) -> Vec<&'static str> {
        self.entries
            .lock()
            .iter()
            .map(|entry| entry.type_name)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop every cached constructor
    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

impl Default for ConstructorCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

impl fmt::Debug for ConstructorCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstructorCache")
            .field("capacity", &self.capacity)
            .field("types", &self.cached_types())
            .finish()
    }
}
