mod scan;
mod status;

pub use {
    scan::{RefreshAck, ScanRequest, ScanResult, StockRow, split_strategy_codes},
    status::{CachePrediction, ServerStatus},
};
