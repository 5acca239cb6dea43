// Maps samples to chart descriptions. Total over the sample shapes and
// deterministic: the same sample always yields the same spec.

use crate::models::{
    AxisRange, ChartKind, ChartSeries, ChartSpec, InfrastructureSample, PlatformSample, Sample,
    SoftwareSample,
};
use chrono::{TimeZone, Utc};

pub const IAAS_TITLE: &str = "IaaS Resource Usage";
pub const PAAS_TITLE: &str = "PaaS Performance Metrics";
pub const SAAS_TITLE: &str = "SaaS User Distribution";

pub fn chart_for(sample: &Sample) -> ChartSpec {
    match sample {
        Sample::Iaas(s) => infrastructure_chart(s),
        Sample::Paas(s) => platform_chart(s),
        Sample::Saas(s) => software_chart(s),
    }
}

/// Categorical bar chart, one bar per resource, y-axis pinned to [0, 100].
pub fn infrastructure_chart(sample: &InfrastructureSample) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Bar,
        title: IAAS_TITLE.to_string(),
        labels: sample.resources.iter().map(|r| r.resource.clone()).collect(),
        series: vec![ChartSeries {
            name: "Usage (%)".to_string(),
            values: sample.resources.iter().map(|r| r.usage_percent).collect(),
        }],
        y_range: Some(AxisRange {
            min: 0.0,
            max: 100.0,
        }),
    }
}

/// Dual-series line chart over the sample's time points, oldest first so the
/// x-axis reads left to right.
pub fn platform_chart(sample: &PlatformSample) -> ChartSpec {
    let points: Vec<_> = sample.points.iter().rev().collect();
    ChartSpec {
        kind: ChartKind::Line,
        title: PAAS_TITLE.to_string(),
        labels: points.iter().map(|p| format_time(p.timestamp_ms)).collect(),
        series: vec![
            ChartSeries {
                name: "Requests/min".to_string(),
                values: points.iter().map(|p| p.requests_per_min as f64).collect(),
            },
            ChartSeries {
                name: "Response Time (ms)".to_string(),
                values: points.iter().map(|p| p.response_time_ms).collect(),
            },
        ],
        y_range: None,
    }
}

/// Proportion chart over the tiers by user count, labels in tier order.
pub fn software_chart(sample: &SoftwareSample) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Pie,
        title: SAAS_TITLE.to_string(),
        labels: sample.tiers.iter().map(|t| t.tier.clone()).collect(),
        series: vec![ChartSeries {
            name: "Users".to_string(),
            values: sample.tiers.iter().map(|t| t.users as f64).collect(),
        }],
        y_range: None,
    }
}

/// Epoch millis to an "HH:MM" UTC axis label.
fn format_time(timestamp_ms: u64) -> String {
    match Utc.timestamp_millis_opt(timestamp_ms as i64).single() {
        Some(t) => t.format("%H:%M").to_string(),
        None => timestamp_ms.to_string(),
    }
}
