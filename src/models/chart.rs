// Declarative chart description consumed by the browser surface

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    pub name: String,
    pub values: Vec<f64>,
}

/// Framework-agnostic description of what to draw: the page renders this
/// without knowing which category or generator produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    /// X-axis labels for bar/line, slice labels for pie. Same length as
    /// every series' values.
    pub labels: Vec<String>,
    pub series: Vec<ChartSeries>,
    /// Fixed y-axis range where the view pins one (IaaS usage), otherwise
    /// the renderer scales to the data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_range: Option<AxisRange>,
}
