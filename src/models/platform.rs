// PaaS performance sample

use serde::{Deserialize, Serialize};

/// Number of time points per sample (now back to now - 9 minutes).
pub const POINT_COUNT: usize = 10;

/// Spacing between consecutive time points.
pub const POINT_SPACING_MS: u64 = 60_000;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformancePoint {
    /// Epoch millis; points within a sample are strictly decreasing.
    pub timestamp_ms: u64,
    pub requests_per_min: u32,
    pub response_time_ms: f64,
}

/// One tick of simulated platform performance over the trailing 10 minutes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformSample {
    pub points: Vec<PerformancePoint>,
}
