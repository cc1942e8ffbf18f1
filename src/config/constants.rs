use std::time::Duration;

// Top Level Constants

/// Lower bound of the strategy-count slider. The backend rejects anything below this.
pub const MIN_STRATEGY_THRESHOLD: u32 = 2;
/// Upper bound of the strategy-count slider.
pub const MAX_STRATEGY_THRESHOLD: u32 = 7;

/// How long to wait after a refresh trigger is accepted before re-probing
/// the backend status. The trigger only acknowledges that recomputation has
/// started; probing immediately would usually observe stale state. This is a
/// heuristic against an unknown backend completion time and may under- or
/// over-shoot the actual refresh duration.
pub const REFRESH_PROBE_DELAY: Duration = Duration::from_secs(1);
