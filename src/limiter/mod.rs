//! Fixed-window rate limiting over the persisted request log.
//!
//! # Design Decisions
//! - Fixed window (not sliding or token bucket), keyed only by the
//!   client-local clock; there is no server-side enforcement
//! - The log is pruned and written back on every check, so it never holds
//!   more than one window of history
//! - Clock skew or clearing the log resets the limit; accepted weakness
//! - Purely per-client: the log is keyed by nothing, not by wallet address

pub mod store;

pub use store::{JsonFileStore, MemoryStore, RequestLogStore, StoreError, StoreResult};

use std::time::{SystemTime, UNIX_EPOCH};

/// Source of "now" in epoch milliseconds, injectable for tests.
pub trait Clock: Send + Sync {
    fn now_ms(&self) -> u64;
}

impl<C: Clock + ?Sized> Clock for std::sync::Arc<C> {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system clock before unix epoch")
            .as_millis() as u64
    }
}

/// Fixed-window limiter: at most `max_requests` per trailing `window_ms`.
pub struct FixedWindowLimiter<S, C> {
    store: S,
    clock: C,
    max_requests: usize,
    window_ms: u64,
}

impl<S: RequestLogStore, C: Clock> FixedWindowLimiter<S, C> {
    pub fn new(store: S, clock: C, max_requests: usize, window_ms: u64) -> Self {
        Self {
            store,
            clock,
            max_requests,
            window_ms,
        }
    }

    /// Maximum requests allowed per window.
    pub fn max_requests(&self) -> usize {
        self.max_requests
    }

    /// Whether another request is allowed right now.
    ///
    /// Prunes expired entries and writes the pruned log back as a side
    /// effect.
    pub fn check(&self) -> StoreResult<bool> {
        let valid = self.prune()?;
        Ok(valid.len() < self.max_requests)
    }

    /// Append the current timestamp to the log.
    ///
    /// Called once per confirmed airdrop, never for failed ones.
    pub fn record(&self) -> StoreResult<()> {
        let mut entries = self.store.load()?;
        entries.push(self.clock.now_ms());
        self.store.save(&entries)
    }

    /// Requests still available in the current window.
    pub fn remaining(&self) -> StoreResult<usize> {
        let valid = self.prune()?;
        Ok(self.max_requests.saturating_sub(valid.len()))
    }

    fn prune(&self) -> StoreResult<Vec<u64>> {
        let now = self.clock.now_ms();
        let mut entries = self.store.load()?;
        // age == window counts as expired; future timestamps count as valid
        entries.retain(|&ts| now.saturating_sub(ts) < self.window_ms);
        self.store.save(&entries)?;
        Ok(entries)
    }
}
