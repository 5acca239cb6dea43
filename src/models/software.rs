// SaaS subscription-tier sample

use serde::{Deserialize, Serialize};

/// The fixed subscription tiers on the SaaS view, in display order.
pub const TIERS: [&str; 3] = ["Basic", "Professional", "Enterprise"];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierUsers {
    pub tier: String,
    pub users: u32,
}

/// One tick of simulated user counts: exactly one entry per tier in
/// [`TIERS`], each in [100, 1000).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoftwareSample {
    pub tiers: Vec<TierUsers>,
}

impl SoftwareSample {
    /// Total user population displayed for this tick.
    pub fn total_users(&self) -> u64 {
        self.tiers.iter().map(|t| t.users as u64).sum()
    }
}
