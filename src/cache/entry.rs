//! Cache Entry Module
//!
//! Defines the persisted wrapper for cached payloads with TTL metadata.

use chrono::Utc;
use serde::{Deserialize, Serialize};

// == Cache Entry ==
/// A single persisted cache entry: the payload plus TTL metadata.
///
/// The serialized form is the wire format stored in the substrate:
/// `{"data": ..., "timestamp": ..., "expiresAt": ...}`. Decoding is strict;
/// a stored string missing any field is treated as corrupted by the cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry<T> {
    /// The cached payload
    pub data: T,
    /// Creation timestamp (Unix milliseconds)
    pub timestamp: u64,
    /// Expiration timestamp (Unix milliseconds)
    #[serde(rename = "expiresAt")]
    pub expires_at: u64,
}

impl<T> CacheEntry<T> {
    // == Constructor ==
    /// Creates a new entry expiring `ttl_ms` milliseconds from now.
    ///
    /// TTL is clamped to at least 1ms so `expires_at > timestamp` always
    /// holds.
    pub fn new(data: T, ttl_ms: u64) -> Self {
        let now = current_timestamp_ms();
        Self {
            data,
            timestamp: now,
            expires_at: now + ttl_ms.max(1),
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// Boundary condition: an entry is expired once the current time is
    /// greater than or equal to the expiration time, so a TTL of `t` makes
    /// the entry unavailable at any time `>= t` after the write.
    pub fn is_expired(&self) -> bool {
        current_timestamp_ms() >= self.expires_at
    }
}

// == Utility Functions ==
/// Returns the current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    Utc::now().timestamp_millis().max(0) as u64
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new("payload".to_string(), 60_000);

        assert_eq!(entry.data, "payload");
        assert_eq!(entry.expires_at, entry.timestamp + 60_000);
        assert!(!entry.is_expired());
    }

    #[test]
    fn test_entry_expiration() {
        let entry = CacheEntry::new("payload".to_string(), 10);

        assert!(!entry.is_expired());
        sleep(Duration::from_millis(20));
        assert!(entry.is_expired());
    }

    #[test]
    fn test_zero_ttl_clamped() {
        let entry = CacheEntry::new((), 0);
        assert!(entry.expires_at > entry.timestamp);
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let now = current_timestamp_ms();
        let entry = CacheEntry {
            data: "test".to_string(),
            timestamp: now,
            expires_at: now, // Expires exactly at creation time
        };

        assert!(entry.is_expired(), "Entry should be expired at boundary");
    }

    #[test]
    fn test_wire_format_field_names() {
        let entry = CacheEntry::new(serde_json::json!([1, 2, 3]), 1000);
        let encoded = serde_json::to_string(&entry).unwrap();

        assert!(encoded.contains("\"data\""));
        assert!(encoded.contains("\"timestamp\""));
        assert!(encoded.contains("\"expiresAt\""));
    }

    #[test]
    fn test_strict_decode_rejects_missing_fields() {
        // An entry without expiresAt is corrupted, not "never expiring"
        let raw = r#"{"data":[1],"timestamp":123}"#;
        let result = serde_json::from_str::<CacheEntry<serde_json::Value>>(raw);
        assert!(result.is_err());
    }
}
