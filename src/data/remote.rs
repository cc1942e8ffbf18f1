use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::config::BackendConfig;
use crate::models::{RefreshAck, ScanRequest, ScanResult, ServerStatus, StockRow, split_strategy_codes};

/// Abstract interface for the three backend operations.
///
/// Transport and decode failures collapse into `Err` at this boundary;
/// callers never distinguish them. A well-formed response that reports
/// `success = false` is data, not an error.
#[async_trait]
pub trait ScanApi: Send + Sync {
    /// Fetch the backend's current cache status.
    async fn probe_status(&self) -> Result<ServerStatus>;

    /// Run one scan at the request's threshold.
    async fn execute_search(&self, request: &ScanRequest) -> Result<ScanResult>;

    /// Ask the backend to recompute its cache. Returns as soon as the
    /// trigger is acknowledged; recomputation continues asynchronously.
    async fn trigger_refresh(&self) -> Result<RefreshAck>;
}

pub struct HttpScanApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpScanApi {
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl ScanApi for HttpScanApi {
    async fn probe_status(&self) -> Result<ServerStatus> {
        let dto: StatusDto = self
            .http
            .get(self.url("/status"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(dto.into())
    }

    async fn execute_search(&self, request: &ScanRequest) -> Result<ScanResult> {
        let body = SearchBody {
            min_strategies: request.min_strategies,
        };

        let dto: SearchResponseDto = self
            .http
            .post(self.url("/search"))
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(dto.into())
    }

    async fn trigger_refresh(&self) -> Result<RefreshAck> {
        let dto: RefreshDto = self
            .http
            .post(self.url("/refresh-cache"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(RefreshAck {
            success: dto.success,
            message: dto.message,
        })
    }
}

// --- WIRE TYPES ---

#[derive(Debug, Serialize)]
struct SearchBody {
    min_strategies: u32,
}

#[derive(Debug, Deserialize)]
struct StatusDto {
    cache_size: usize,
    cached_strategies: Vec<i64>,
    last_updated: Option<String>,
    is_loading: bool,
}

impl From<StatusDto> for ServerStatus {
    fn from(dto: StatusDto) -> Self {
        ServerStatus::new(
            dto.cache_size,
            dto.cached_strategies,
            parse_last_updated(dto.last_updated.as_deref()),
            dto.is_loading,
        )
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponseDto {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Vec<StockRowDto>,
    #[serde(default)]
    total: usize,
    // Absent on some backend failure paths
    #[serde(default)]
    from_cache: bool,
}

impl From<SearchResponseDto> for ScanResult {
    fn from(dto: SearchResponseDto) -> Self {
        ScanResult {
            success: dto.success,
            message: dto.message,
            rows: dto.data.into_iter().map(StockRow::from).collect(),
            total: dto.total,
            from_cache: dto.from_cache,
        }
    }
}

/// One row of the scan payload. Field names are the backend's raw
/// DataFrame column names, hence the renames.
#[derive(Debug, Deserialize)]
struct StockRowDto {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "CMPRs.", default)]
    price: Option<f64>,
    #[serde(rename = "Strategies", default)]
    strategies: Option<String>,
    #[serde(rename = "Strategies_Count", default)]
    strategies_count: u32,
}

impl From<StockRowDto> for StockRow {
    fn from(dto: StockRowDto) -> Self {
        StockRow {
            name: dto.name,
            price: dto.price,
            strategies: dto
                .strategies
                .as_deref()
                .map(split_strategy_codes)
                .unwrap_or_default(),
            strategy_count: dto.strategies_count,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RefreshDto {
    success: bool,
    #[serde(default)]
    message: Option<String>,
}

/// The backend emits pandas `isoformat()` timestamps, which carry no UTC
/// offset. Accept RFC3339 too, and treat naive values as local wall time.
fn parse_last_updated(raw: Option<&str>) -> Option<DateTime<Local>> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local));
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .and_then(|naive| naive.and_local_timezone(Local).single())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_payload_decodes() {
        let raw = r#"{
            "cache_size": 3,
            "cached_strategies": [2, 3, 4],
            "last_updated": "2026-08-07T09:15:30.123456",
            "is_loading": false
        }"#;

        let status: ServerStatus = serde_json::from_str::<StatusDto>(raw).unwrap().into();

        assert_eq!(status.cache_size, 3);
        assert!(status.is_cached(3));
        assert!(!status.is_cached(5));
        assert!(status.last_updated.is_some());
        assert!(!status.is_background_loading);
    }

    #[test]
    fn null_last_updated_decodes_to_none() {
        let raw = r#"{
            "cache_size": 0,
            "cached_strategies": [],
            "last_updated": null,
            "is_loading": true
        }"#;

        let status: ServerStatus = serde_json::from_str::<StatusDto>(raw).unwrap().into();

        assert!(status.last_updated.is_none());
        assert!(status.is_background_loading);
        assert_eq!(status.cache_size, 0);
    }

    #[test]
    fn rfc3339_last_updated_is_accepted() {
        assert!(parse_last_updated(Some("2026-08-07T09:15:30+05:30")).is_some());
        assert!(parse_last_updated(Some("2026-08-07T09:15:30")).is_some());
        assert!(parse_last_updated(Some("not a timestamp")).is_none());
        assert!(parse_last_updated(Some("")).is_none());
        assert!(parse_last_updated(None).is_none());
    }

    #[test]
    fn search_payload_decodes_dataframe_columns() {
        let raw = r#"{
            "success": true,
            "message": "Found 2 stocks in 3+ strategies (cached)",
            "data": [
                {"Name": "ABC", "CMPRs.": 123.45, "Strategies": "S1, S3", "Strategies_Count": 2},
                {"Name": "XYZ", "CMPRs.": null, "Strategies": "S2,S4, S6A", "Strategies_Count": 3}
            ],
            "total": 2,
            "from_cache": true
        }"#;

        let result: ScanResult = serde_json::from_str::<SearchResponseDto>(raw).unwrap().into();

        assert!(result.success);
        assert!(result.from_cache);
        assert_eq!(result.total, 2);
        assert_eq!(result.rows[0].name, "ABC");
        assert_eq!(result.rows[0].price, Some(123.45));
        assert_eq!(result.rows[0].strategies, vec!["S1", "S3"]);
        assert_eq!(result.rows[1].price, None);
        assert_eq!(result.rows[1].strategies, vec!["S2", "S4", "S6A"]);
        assert_eq!(result.rows[1].strategy_count, 3);
    }

    #[test]
    fn failure_payload_without_from_cache_decodes() {
        // The backend omits from_cache on its generic error path.
        let raw = r#"{
            "success": false,
            "message": "Error: upstream source unavailable",
            "data": [],
            "total": 0
        }"#;

        let result: ScanResult = serde_json::from_str::<SearchResponseDto>(raw).unwrap().into();

        assert!(!result.success);
        assert!(!result.from_cache);
        assert!(result.rows.is_empty());
        assert_eq!(result.message.as_deref(), Some("Error: upstream source unavailable"));
    }
}
