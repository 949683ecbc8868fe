use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, Weak};

use tracing::debug;

use crate::sync::{SyncContext, SyncKey, Synchronized};

type CacheKey = (TypeId, SyncKey);
type ErasedContext = dyn Any + Send + Sync;

/// Identity map of live synchronization contexts.
///
/// Entries are weak: a context is dropped once its last entity handle goes
/// away, and the dead entry is pruned on the next insert.
#[derive(Default)]
pub struct EntityCache {
    entries: Mutex<HashMap<CacheKey, Weak<ErasedContext>>>,
}

impl EntityCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the live context for `key`, creating it with `create` if needed.
    pub fn find_or_insert<J: Synchronized>(
        &self,
        key: SyncKey,
        create: impl FnOnce() -> SyncContext<J>,
    ) -> Arc<SyncContext<J>> {
        let mut entries = self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let cache_key = (TypeId::of::<J>(), key);

        if let Some(existing) = entries
            .get(&cache_key)
            .and_then(Weak::upgrade)
            .and_then(|ctx| ctx.downcast::<SyncContext<J>>().ok())
        {
            return existing;
        }

        entries.retain(|_, entry| entry.strong_count() > 0);

        debug!(kind = J::KIND, id = %cache_key.1.id, "Caching new context");
        let ctx = Arc::new(create());
        let erased: Arc<ErasedContext> = ctx.clone();
        entries.insert(cache_key, Arc::downgrade(&erased));
        ctx
    }

    /// Register the context cached under `key` under `alias` as well.
    ///
    /// A live context already cached under `alias` is left in place.
    pub fn alias<J: Synchronized>(&self, key: &SyncKey, alias: SyncKey) {
        let mut entries = self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let type_id = TypeId::of::<J>();
        let alias_key = (type_id, alias);

        if entries
            .get(&alias_key)
            .is_some_and(|entry| entry.strong_count() > 0)
        {
            return;
        }

        if let Some(entry) = entries.get(&(type_id, key.clone())).cloned() {
            debug!(kind = J::KIND, id = %key.id, alias = %alias_key.1.id, "Aliasing context");
            entries.insert(alias_key, entry);
        }
    }

    /// Number of contexts still referenced by at least one handle.
    pub fn len(&self) -> usize {
        let entries = self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        entries
            .values()
            .filter(|entry| entry.strong_count() > 0)
            .map(|entry| entry.as_ptr() as *const ())
            .collect::<HashSet<_>>()
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
