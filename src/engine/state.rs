use crate::models::{ScanResult, ServerStatus};

/// The control panel's observable state.
///
/// Owned and written exclusively by the engine; the UI layer only projects
/// from it. Lives as an explicitly owned struct (not an ambient global) so
/// the engine is unit-testable without any rendering environment.
#[derive(Debug, Clone, Default)]
pub struct PanelState {
    /// Is a scan in flight? Scan requests are no-ops while this is set.
    pub searching: bool,

    /// Is a refresh trigger in flight? Covers only the trigger call itself,
    /// never the backend's asynchronous recomputation.
    pub refreshing: bool,

    /// THE FRONT BUFFER.
    /// Last successful status probe. Never edited in place; a fresh probe
    /// simply replaces the whole value.
    pub status: Option<ServerStatus>,

    /// Last completed scan. Replaced by the next one, never merged.
    pub results: Option<ScanResult>,
}
