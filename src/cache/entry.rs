//! Cache Entry Module
//!
//! Defines a single cached value together with its absolute expiry time.

use std::time::{SystemTime, UNIX_EPOCH};

// == Cache Entry ==
/// A stored value and the moment it stops being servable.
#[derive(Debug, Clone)]
pub struct CacheEntry<T> {
    /// The stored value
    pub value: T,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

impl<T> CacheEntry<T> {
    // == Constructor ==
    /// Creates a new entry expiring `ttl_ms` milliseconds from now.
    ///
    /// # Arguments
    /// * `value` - The value to store
    /// * `ttl_ms` - Time to live in milliseconds
    pub fn new(value: T, ttl_ms: u64) -> Self {
        Self {
            value,
            expires_at: current_timestamp_ms() + ttl_ms,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// Boundary condition: an entry is expired once the current time is
    /// greater than or equal to its expiry timestamp, so a zero TTL
    /// entry is never served.
    pub fn is_expired(&self) -> bool {
        current_timestamp_ms() >= self.expires_at
    }

    // == Time To Live ==
    /// Returns remaining TTL in milliseconds, 0 once expired.
    pub fn ttl_remaining_ms(&self) -> u64 {
        self.expires_at.saturating_sub(current_timestamp_ms())
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}
