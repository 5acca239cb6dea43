// Domain models for the dashboard wire format

mod category;
mod chart;
mod infrastructure;
mod platform;
mod software;

pub use category::{CATEGORIES, Category, UnknownCategory};
pub use chart::{AxisRange, ChartKind, ChartSeries, ChartSpec};
pub use infrastructure::{InfrastructureSample, RESOURCES, ResourceUsage};
pub use platform::{POINT_COUNT, POINT_SPACING_MS, PerformancePoint, PlatformSample};
pub use software::{SoftwareSample, TIERS, TierUsers};

use serde::{Deserialize, Serialize};

/// One tick's worth of simulated metrics for a single category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "lowercase")]
pub enum Sample {
    Iaas(InfrastructureSample),
    Paas(PlatformSample),
    Saas(SoftwareSample),
}

impl Sample {
    pub fn category(&self) -> Category {
        match self {
            Sample::Iaas(_) => Category::Iaas,
            Sample::Paas(_) => Category::Paas,
            Sample::Saas(_) => Category::Saas,
        }
    }
}
