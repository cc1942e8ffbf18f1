mod remote;

pub use remote::{HttpScanApi, ScanApi};
