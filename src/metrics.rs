use std::sync::atomic::{AtomicU64, Ordering};

/// Counts requests that reach the static file server.
///
/// All operations are single atomic steps, so the counter can be shared
/// across request handlers behind an `Arc` without a lock.
#[derive(Debug, Default)]
pub struct HitCounter {
    hits: AtomicU64,
}

impl HitCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn read(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn reset(&self) {
        self.hits.store(0, Ordering::Relaxed);
    }
}
