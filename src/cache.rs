//! TTL cache in front of [`snapshot::fetch`].
//!
//! Keyed by the exact (uppercased ticker, start, end) tuple; no range-overlap
//! reuse. Entries are overwritten in place on refetch and never evicted
//! otherwise, so the map is bounded by the set of distinct requests in a
//! process lifetime.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::NaiveDate;
use tokio::sync::RwLock;

use crate::core::{DashClient, DashError};
use crate::snapshot::{self, Snapshot};

/// Default time-to-live for a cached snapshot.
pub const DEFAULT_TTL: Duration = Duration::from_secs(3600);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    symbol: String,
    start: NaiveDate,
    end: NaiveDate,
}

#[derive(Debug)]
struct CacheEntry {
    snapshot: Snapshot,
    fetched_at: Instant,
}

/// Memoizes snapshot fetches to bound provider call frequency.
///
/// Clones share the same underlying map, so one cache can serve several
/// dashboard sessions; lookups take a read lock and stores take a write
/// lock. Failed fetches are never cached.
#[derive(Debug, Clone)]
pub struct SnapshotCache {
    client: DashClient,
    ttl: Duration,
    entries: Arc<RwLock<HashMap<CacheKey, CacheEntry>>>,
}

impl SnapshotCache {
    /// Create a cache with the default one-hour TTL.
    #[must_use]
    pub fn new(client: DashClient) -> Self {
        Self::with_ttl(client, DEFAULT_TTL)
    }

    /// Create a cache with a custom TTL.
    #[must_use]
    pub fn with_ttl(client: DashClient, ttl: Duration) -> Self {
        Self {
            client,
            ttl,
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Return the snapshot for `(symbol, start, end)`, fetching it from the
    /// provider only when no fresh cache entry exists.
    ///
    /// # Errors
    ///
    /// Returns [`DashError::InvalidRange`] when `start > end` (no cache or
    /// network activity happens), or whatever the underlying fetch fails
    /// with. Failures leave any stale entry untouched so the next call
    /// retries.
    pub async fn get(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Snapshot, DashError> {
        if start > end {
            return Err(DashError::InvalidRange);
        }
        let key = CacheKey {
            symbol: symbol.trim().to_uppercase(),
            start,
            end,
        };

        {
            let guard = self.entries.read().await;
            if let Some(entry) = guard.get(&key)
                && entry.fetched_at.elapsed() < self.ttl
            {
                tracing::debug!(symbol = %key.symbol, %start, %end, "cache hit");
                return Ok(entry.snapshot.clone());
            }
        }

        tracing::debug!(symbol = %key.symbol, %start, %end, "cache miss, fetching");
        let snapshot = snapshot::fetch(&self.client, &key.symbol, start, end).await?;

        let mut guard = self.entries.write().await;
        guard.insert(
            key,
            CacheEntry {
                snapshot: snapshot.clone(),
                fetched_at: Instant::now(),
            },
        );
        Ok(snapshot)
    }
}
