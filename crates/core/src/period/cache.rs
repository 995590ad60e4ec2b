//! Period summary caching using Moka.
//!
//! Projections are always recomputable from a snapshot; this cache only
//! avoids redundant recomputation when the same range is requested against
//! an unchanged store. The host supplies an opaque `records_version` that
//! changes whenever its data changes.

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use moka::sync::Cache;

use fluxo_shared::types::Snapshot;

use super::service::PeriodAggregator;
use super::types::PeriodSummary;
use crate::date::{DateRange, format_iso_date};
use crate::event::EventClassifier;

/// Default cache capacity (number of entries).
const DEFAULT_CACHE_CAPACITY: u64 = 100;

/// Default time-to-live for cache entries (5 minutes).
const DEFAULT_TTL_SECS: u64 = 300;

/// Cache for period summaries.
///
/// Keyed by the host's records version plus the queried range.
/// Thread-safe and suitable for concurrent access.
#[derive(Clone)]
pub struct SummaryCache {
    cache: Cache<String, Arc<PeriodSummary>>,
}

impl SummaryCache {
    /// Creates a new summary cache with default settings.
    ///
    /// Default: 100 entries max, 5 minute TTL.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DEFAULT_CACHE_CAPACITY, DEFAULT_TTL_SECS)
    }

    /// Creates a new summary cache with custom configuration.
    ///
    /// # Arguments
    ///
    /// * `max_capacity` - Maximum number of entries to cache
    /// * `ttl_secs` - Time-to-live in seconds for each entry
    #[must_use]
    pub fn with_config(max_capacity: u64, ttl_secs: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { cache }
    }

    /// Classifies and aggregates, returning a cached summary when one
    /// exists for the same records version and range.
    #[must_use]
    pub fn aggregate_cached(
        &self,
        records_version: &str,
        classifier: &EventClassifier,
        snapshot: &Snapshot,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Arc<PeriodSummary> {
        let key = Self::cache_key(records_version, start, end);

        if let Some(cached) = self.cache.get(&key) {
            return cached;
        }

        let events = classifier.classify(snapshot, &DateRange::new(start, end));
        let summary = Arc::new(PeriodAggregator::aggregate(&events, start, end));
        self.cache.insert(key, Arc::clone(&summary));
        summary
    }

    /// Invalidates all cached entries.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }

    /// Returns the number of entries currently in the cache.
    #[must_use]
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Runs cache maintenance tasks.
    ///
    /// Moka handles expiry in the background; calling this explicitly
    /// reclaims memory sooner and settles `entry_count`.
    pub fn run_pending_tasks(&self) {
        self.cache.run_pending_tasks();
    }

    fn cache_key(records_version: &str, start: NaiveDate, end: NaiveDate) -> String {
        format!(
            "{records_version}:{}:{}",
            format_iso_date(start),
            format_iso_date(end)
        )
    }
}

impl Default for SummaryCache {
    fn default() -> Self {
        Self::new()
    }
}
