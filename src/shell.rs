// Static dashboard composition: title, tabs, and descriptive copy. Fetched
// once by clients (GET /api/dashboard or WS welcome); never changes at
// runtime.

use crate::models::{CATEGORIES, Category};
use serde::Serialize;

pub const DASHBOARD_TITLE: &str = "Cloud Services Dashboard";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TabInfo {
    pub category: Category,
    pub label: String,
    pub paragraphs: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardInfo {
    pub title: String,
    pub tabs: Vec<TabInfo>,
}

/// The fixed three-tab composition, one panel per category.
pub fn dashboard_info() -> DashboardInfo {
    DashboardInfo {
        title: DASHBOARD_TITLE.to_string(),
        tabs: CATEGORIES
            .iter()
            .map(|c| TabInfo {
                category: *c,
                label: c.tab_label().to_string(),
                paragraphs: paragraphs(*c).iter().map(|p| (*p).to_string()).collect(),
            })
            .collect(),
    }
}

/// The two explanatory paragraphs shown under each chart.
pub fn paragraphs(category: Category) -> [&'static str; 2] {
    match category {
        Category::Iaas => [
            "Infrastructure as a Service (IaaS) provides virtualized computing resources over the internet.",
            "Monitors usage of fundamental computing resources: CPU, Memory, Storage, and Network.",
        ],
        Category::Paas => [
            "Platform as a Service (PaaS) provides a platform allowing customers to develop, run, and manage applications.",
            "Tracks application performance metrics: request rates and response times for deployed services.",
        ],
        Category::Saas => [
            "Software as a Service (SaaS) delivers software applications over the internet, on a subscription basis.",
            "Monitors user engagement across different subscription tiers: Basic, Professional, and Enterprise.",
        ],
    }
}
