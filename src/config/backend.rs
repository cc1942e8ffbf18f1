/// Environment variable that overrides the backend base address.
/// This is the only recognized override; everything else is the default.
pub const API_URL_ENV: &str = "STRAT_RADAR_API_URL";

pub struct BackendConfig {
    pub base_url: String,
    pub timeout_ms: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: resolve_base_url(),
            timeout_ms: BACKEND.client.timeout_ms,
        }
    }
}

pub struct ClientDefaults {
    pub timeout_ms: u64,
}

pub struct BackendApiConfig {
    pub default_base_url: &'static str,
    pub client: ClientDefaults,
}

pub const BACKEND: BackendApiConfig = BackendApiConfig {
    default_base_url: "http://localhost:8001",
    client: ClientDefaults { timeout_ms: 5000 },
};

fn resolve_base_url() -> String {
    std::env::var(API_URL_ENV)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| BACKEND.default_base_url.to_string())
}
