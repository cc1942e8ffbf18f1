use std::collections::BTreeSet;

use chrono::{DateTime, Local};
use strum_macros::Display;

use crate::config::constants::{MAX_STRATEGY_THRESHOLD, MIN_STRATEGY_THRESHOLD};

/// The backend's last-known cache state.
///
/// Immutable once constructed. The engine never edits a snapshot in place;
/// each successful probe replaces the whole value.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerStatus {
    /// Number of threshold entries the backend has materialized.
    pub cache_size: usize,
    /// Which minimum-strategy thresholds currently have precomputed results.
    pub cached_strategies: BTreeSet<u32>,
    pub last_updated: Option<DateTime<Local>>,
    /// True while the backend is pre-loading strategies in the background.
    pub is_background_loading: bool,
}

impl ServerStatus {
    /// Build a snapshot from raw wire values.
    /// Thresholds outside the valid slider domain are dropped here so the
    /// rest of the app never sees them.
    pub fn new(
        cache_size: usize,
        raw_thresholds: impl IntoIterator<Item = i64>,
        last_updated: Option<DateTime<Local>>,
        is_background_loading: bool,
    ) -> Self {
        let cached_strategies = raw_thresholds
            .into_iter()
            .filter_map(|t| u32::try_from(t).ok())
            .filter(|t| (MIN_STRATEGY_THRESHOLD..=MAX_STRATEGY_THRESHOLD).contains(t))
            .collect();

        Self {
            cache_size,
            cached_strategies,
            last_updated,
            is_background_loading,
        }
    }

    pub fn is_cached(&self, threshold: u32) -> bool {
        self.cached_strategies.contains(&threshold)
    }

    /// Advisory guess of whether a scan at `threshold` would hit the cache.
    /// The authoritative answer is the `from_cache` flag on the scan result;
    /// the two can disagree if the backend changed between probe and scan.
    pub fn predict(&self, threshold: u32) -> CachePrediction {
        if self.is_cached(threshold) {
            CachePrediction::Cached
        } else {
            CachePrediction::FetchFresh
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum CachePrediction {
    #[strum(serialize = "DATA CACHED")]
    Cached,
    #[strum(serialize = "WILL FETCH FRESH")]
    FetchFresh,
}
