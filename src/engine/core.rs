use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;

use crate::config::constants::REFRESH_PROBE_DELAY;
use crate::data::ScanApi;
use crate::models::{CachePrediction, ScanRequest, ScanResult};

use super::state::PanelState;

/// Sequences the three backend operations and owns all observable state.
///
/// Each operation axis (scan, refresh) runs Idle -> InFlight -> Idle
/// independently; a request on a busy axis is a silent no-op, not an error
/// and not a queue entry. The axes are deliberately NOT mutually exclusive:
/// they touch disjoint backend effects, and the post-completion status probe
/// is the only point of snapshot mutation either way.
pub struct ScanEngine {
    api: Arc<dyn ScanApi>,

    /// Observable state. Only the engine writes this.
    pub state: PanelState,

    refresh_probe_delay: Duration,
}

impl ScanEngine {
    pub fn new(api: Arc<dyn ScanApi>) -> Self {
        Self {
            api,
            state: PanelState::default(),
            refresh_probe_delay: REFRESH_PROBE_DELAY,
        }
    }

    /// Override the deferred-probe delay. Tests pass a near-zero value so
    /// they don't sleep through the real policy constant.
    pub fn with_probe_delay(mut self, delay: Duration) -> Self {
        self.refresh_probe_delay = delay;
        self
    }

    /// One automatic status probe on startup. Failure leaves the snapshot
    /// absent and is never fatal.
    pub async fn initialize(&mut self) {
        self.probe_status().await;
    }

    /// Execute one scan at `min_strategies`, store the result, then re-probe
    /// status so derived cache predictions stay current.
    ///
    /// Ordering is fixed: the result is visible before the follow-up probe
    /// completes, and a probe failure never rolls the result back. A failed
    /// scan still stores a result so the operator sees the diagnostic.
    pub async fn request_search(&mut self, min_strategies: u32) {
        if self.state.searching {
            log::debug!("Scan already in flight, ignoring duplicate request");
            return;
        }
        self.state.searching = true;

        let request = ScanRequest::new(min_strategies);
        let result = match self.api.execute_search(&request).await {
            Ok(result) => result,
            Err(e) => {
                log::warn!("Scan for {}+ strategies failed: {:#}", min_strategies, e);
                ScanResult::from_failure("Failed to fetch data")
            }
        };
        self.state.results = Some(result);

        self.probe_status().await;

        self.state.searching = false;
    }

    /// Ask the backend to rebuild its cache, then probe once after a fixed
    /// delay so the snapshot catches the recomputation actually starting.
    ///
    /// Rejected while a trigger is in flight or the snapshot says the
    /// backend is already loading; either way no duplicate trigger goes out.
    pub async fn request_refresh(&mut self) {
        if self.state.refreshing {
            log::debug!("Refresh trigger already in flight, ignoring duplicate request");
            return;
        }
        if self
            .state
            .status
            .as_ref()
            .is_some_and(|s| s.is_background_loading)
        {
            log::debug!("Backend is already loading, refresh request rejected");
            return;
        }

        self.state.refreshing = true;
        let accepted = match self.api.trigger_refresh().await {
            Ok(ack) => {
                if !ack.success {
                    log::warn!(
                        "Backend declined refresh: {}",
                        ack.message.as_deref().unwrap_or("no reason given")
                    );
                }
                ack.success
            }
            Err(e) => {
                log::warn!("Refresh trigger failed: {:#}", e);
                false
            }
        };
        // The flag means "trigger in flight", not "refresh complete".
        self.state.refreshing = false;

        if accepted {
            sleep(self.refresh_probe_delay).await;
            self.probe_status().await;
        }
    }

    /// Advisory cache-hit guess for the given threshold. None until a probe
    /// has landed. The authoritative answer is the result's from_cache flag.
    pub fn predict_cache_hit(&self, threshold: u32) -> Option<CachePrediction> {
        self.state.status.as_ref().map(|s| s.predict(threshold))
    }

    /// Probe the backend and swap in the fresh snapshot. A failed probe
    /// keeps whatever snapshot we already had.
    async fn probe_status(&mut self) {
        match self.api.probe_status().await {
            Ok(status) => self.state.status = Some(status),
            Err(e) => log::warn!("Status probe failed: {:#}", e),
        }
    }
}
