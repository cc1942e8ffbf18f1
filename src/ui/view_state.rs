use crate::engine::PanelState;
use crate::models::{CachePrediction, ScanResult, StockRow};

/// Everything a frontend needs to paint the control panel, fully derived.
///
/// Projection is a pure function of panel state plus the live slider value:
/// same inputs, same output, no network, no mutation. That keeps the engine's
/// state the sole source of truth.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// Scan action enablement. Disabled only while a scan is in flight.
    pub search_enabled: bool,
    /// Refresh action enablement. Disabled while a trigger is in flight or
    /// the backend reports a background load in progress.
    pub refresh_enabled: bool,

    // Status block. Falls back to zeros / "N/A" when no probe has landed.
    pub cache_size: usize,
    pub cached_strategy_count: usize,
    pub last_updated_label: String,

    /// Cache badge for the slider's current threshold. None until a probe
    /// has landed (no snapshot, no badge).
    pub prediction: Option<CachePrediction>,
    pub background_loading: bool,

    pub slider_value: u32,
    pub results: ResultsView,
}

/// The center panel, three ways: nothing scanned yet, a message (failed or
/// empty scan), or a table of matches.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultsView {
    Welcome,
    Message {
        total: usize,
        from_cache: bool,
        text: String,
    },
    Table {
        total: usize,
        from_cache: bool,
        rows: Vec<RowView>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub name: String,
    pub price_label: String,
    pub strategy_tags: Vec<String>,
    pub strategy_count: u32,
}

impl ViewState {
    pub fn project(state: &PanelState, slider_value: u32) -> Self {
        let status = state.status.as_ref();

        Self {
            search_enabled: !state.searching,
            refresh_enabled: !state.refreshing
                && !status.is_some_and(|s| s.is_background_loading),
            cache_size: status.map_or(0, |s| s.cache_size),
            cached_strategy_count: status.map_or(0, |s| s.cached_strategies.len()),
            last_updated_label: status
                .and_then(|s| s.last_updated)
                .map(|ts| ts.format("%H:%M:%S").to_string())
                .unwrap_or_else(|| "N/A".to_string()),
            prediction: status.map(|s| s.predict(slider_value)),
            background_loading: status.is_some_and(|s| s.is_background_loading),
            slider_value,
            results: project_results(state.results.as_ref()),
        }
    }
}

fn project_results(results: Option<&ScanResult>) -> ResultsView {
    let Some(result) = results else {
        return ResultsView::Welcome;
    };

    if result.success && !result.rows.is_empty() {
        ResultsView::Table {
            total: result.total,
            from_cache: result.from_cache,
            rows: result.rows.iter().map(project_row).collect(),
        }
    } else {
        ResultsView::Message {
            total: result.total,
            from_cache: result.from_cache,
            text: result
                .message
                .clone()
                .unwrap_or_else(|| "No stocks found".to_string()),
        }
    }
}

fn project_row(row: &StockRow) -> RowView {
    RowView {
        name: row.name.clone(),
        price_label: row
            .price
            .map(|p| format!("₹{}", p))
            .unwrap_or_else(|| "-".to_string()),
        strategy_tags: row.strategies.clone(),
        strategy_count: row.strategy_count,
    }
}
