use crate::config::constants::{MAX_STRATEGY_THRESHOLD, MIN_STRATEGY_THRESHOLD};

/// Parameters of a single scan execution.
///
/// Captured from the slider at the moment the scan runs. The live slider
/// value may drift away from the value a stored result was produced with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanRequest {
    pub min_strategies: u32,
}

impl ScanRequest {
    /// Callers constrain the value at the UI boundary; this only asserts it.
    pub fn new(min_strategies: u32) -> Self {
        debug_assert!(
            (MIN_STRATEGY_THRESHOLD..=MAX_STRATEGY_THRESHOLD).contains(&min_strategies),
            "min_strategies {} outside slider domain",
            min_strategies
        );
        Self { min_strategies }
    }
}

/// One stock that matched the scan.
#[derive(Debug, Clone, PartialEq)]
pub struct StockRow {
    pub name: String,
    /// Current market price. The backend nulls this out for NaN/inf values.
    pub price: Option<f64>,
    /// Individual strategy codes, decomposed from the wire's comma-joined string.
    pub strategies: Vec<String>,
    pub strategy_count: u32,
}

/// Outcome of one completed scan. Superseded wholesale by the next scan,
/// never merged.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanResult {
    pub success: bool,
    pub message: Option<String>,
    pub rows: Vec<StockRow>,
    pub total: usize,
    pub from_cache: bool,
}

impl ScanResult {
    /// The shape every transport-level scan failure collapses into:
    /// nothing found, and a diagnostic the operator can read.
    pub fn from_failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            rows: Vec::new(),
            total: 0,
            from_cache: false,
        }
    }
}

/// Acknowledgement of a refresh trigger. The backend only confirms the
/// trigger was accepted; recomputation continues asynchronously.
#[derive(Debug, Clone, PartialEq)]
pub struct RefreshAck {
    pub success: bool,
    pub message: Option<String>,
}

/// Decompose a comma-joined strategy string ("S1, S3") into trimmed codes.
pub fn split_strategy_codes(joined: &str) -> Vec<String> {
    joined
        .split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_codes_are_split_and_trimmed() {
        assert_eq!(split_strategy_codes("S1, S3"), vec!["S1", "S3"]);
        assert_eq!(split_strategy_codes("S6A"), vec!["S6A"]);
        assert_eq!(split_strategy_codes(" S2 ,S4,  S5 "), vec!["S2", "S4", "S5"]);
        assert!(split_strategy_codes("").is_empty());
        assert!(split_strategy_codes(" , ,").is_empty());
    }

    #[test]
    fn failure_result_is_empty_with_message() {
        let result = ScanResult::from_failure("Failed to fetch data");

        assert!(!result.success);
        assert!(result.rows.is_empty());
        assert_eq!(result.total, 0);
        assert!(!result.from_cache);
        assert_eq!(result.message.as_deref(), Some("Failed to fetch data"));
    }
}
