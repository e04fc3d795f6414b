//! Cache Statistics Module
//!
//! Derived, read-only usage view computed by scanning the substrate.

use serde::Serialize;

// == Cache Stats ==
/// Cache usage statistics for monitoring and debugging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Count of namespaced entries in the substrate
    pub total_keys: usize,
    /// Total bytes used by all entries (sum of serialized lengths)
    pub total_size: usize,
    /// Write timestamp of the oldest entry (Unix ms), None if empty
    pub oldest_entry: Option<u64>,
}

impl CacheStats {
    // == Constructor ==
    /// Creates zeroed stats, the value reported for an empty or
    /// unavailable cache.
    pub fn new() -> Self {
        Self::default()
    }

    // == Record Entry ==
    /// Folds one scanned entry into the totals.
    ///
    /// `timestamp` is None for entries that failed to decode; those still
    /// count toward size and key totals but not toward the oldest entry.
    pub fn record_entry(&mut self, serialized_len: usize, timestamp: Option<u64>) {
        self.total_keys += 1;
        self.total_size += serialized_len;

        if let Some(ts) = timestamp {
            match self.oldest_entry {
                Some(oldest) if oldest <= ts => {}
                _ => self.oldest_entry = Some(ts),
            }
        }
    }
}
