// IaaS resource-usage sample

use serde::{Deserialize, Serialize};

/// The fixed resources monitored on the IaaS view, in display order.
pub const RESOURCES: [&str; 4] = ["CPU", "Memory", "Storage", "Network"];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceUsage {
    pub resource: String,
    pub usage_percent: f64,
}

/// One tick of simulated infrastructure usage: exactly one entry per
/// resource in [`RESOURCES`], each in [20, 95] percent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfrastructureSample {
    pub resources: Vec<ResourceUsage>,
}
