// Core modules
pub mod config;
pub mod data;
pub mod engine;
pub mod models;
pub mod ui;

// Re-export commonly used types outside of crate
pub use data::{HttpScanApi, ScanApi};
pub use engine::{PanelState, ScanEngine};
pub use models::{CachePrediction, ScanRequest, ScanResult, ServerStatus, StockRow};
pub use ui::ViewState;

use std::sync::Arc;

use crate::config::constants::{MAX_STRATEGY_THRESHOLD, MIN_STRATEGY_THRESHOLD};
use crate::config::BackendConfig;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Minimum number of matching strategies a stock must satisfy (2-7)
    #[arg(long, default_value_t = MIN_STRATEGY_THRESHOLD)]
    pub min_strategies: u32,

    /// Trigger a backend cache refresh before scanning
    #[arg(long, default_value_t = false)]
    pub refresh: bool,
}

/// Main application entry point - drives one panel session end to end.
/// This is the public API for the binary to call.
pub async fn run_app(args: Cli) -> anyhow::Result<()> {
    // Constrain at the UI boundary; everything below trusts the domain.
    let min_strategies = args
        .min_strategies
        .clamp(MIN_STRATEGY_THRESHOLD, MAX_STRATEGY_THRESHOLD);
    if min_strategies != args.min_strategies {
        log::warn!(
            "--min-strategies {} outside [{}, {}], clamped to {}",
            args.min_strategies,
            MIN_STRATEGY_THRESHOLD,
            MAX_STRATEGY_THRESHOLD,
            min_strategies
        );
    }

    let config = BackendConfig::default();
    log::info!("Using backend at {}", config.base_url);

    let api = Arc::new(HttpScanApi::new(&config)?);
    let mut engine = ScanEngine::new(api);

    engine.initialize().await;

    if args.refresh {
        engine.request_refresh().await;
    }

    engine.request_search(min_strategies).await;

    let view = ViewState::project(&engine.state, min_strategies);
    print!("{}", ui::render(&view));

    Ok(())
}
