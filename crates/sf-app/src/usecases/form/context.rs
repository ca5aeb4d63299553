use std::sync::Arc;

use sf_core::FormSnapshot;
use tokio::sync::{Mutex, MutexGuard};

/// Shared form context containing the snapshot and dispatch lock.
///
/// Shared between `FormOrchestrator` and the deferred tasks it spawns so that
/// user events and timer resolutions apply one at a time.
///
/// ## Lock Ordering
/// When acquiring both locks, acquire `dispatch_lock` first, then `snapshot`.
/// - `dispatch_lock`: held for a whole event or resolution, including render.
/// - `snapshot`: held only while reading or mutating form state.
pub struct FormContext {
    snapshot: Mutex<FormSnapshot>,
    dispatch_lock: Mutex<()>,
}

impl Default for FormContext {
    fn default() -> Self {
        Self::new(FormSnapshot::new())
    }
}

impl FormContext {
    pub fn new(initial: FormSnapshot) -> Self {
        Self {
            snapshot: Mutex::new(initial),
            dispatch_lock: Mutex::new(()),
        }
    }

    /// Returns the context wrapped in Arc for shared ownership.
    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Copy of the current snapshot. Does NOT acquire `dispatch_lock`.
    pub async fn snapshot(&self) -> FormSnapshot {
        self.snapshot.lock().await.clone()
    }

    /// Acquires the dispatch lock. The guard releases it when dropped.
    pub async fn acquire_dispatch_lock(&self) -> MutexGuard<'_, ()> {
        self.dispatch_lock.lock().await
    }

    /// Mutable access to the snapshot.
    ///
    /// This should only be called after acquiring `dispatch_lock`.
    pub async fn lock_snapshot(&self) -> MutexGuard<'_, FormSnapshot> {
        self.snapshot.lock().await
    }
}
