// Service category identifiers

use serde::{Deserialize, Serialize};

/// The three cloud-service categories the dashboard covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Iaas,
    Paas,
    Saas,
}

/// All categories, in tab order.
pub const CATEGORIES: [Category; 3] = [Category::Iaas, Category::Paas, Category::Saas];

#[derive(Debug, thiserror::Error)]
#[error("unknown category {0:?}, expected one of: iaas, paas, saas")]
pub struct UnknownCategory(pub String);

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Iaas => "iaas",
            Category::Paas => "paas",
            Category::Saas => "saas",
        }
    }

    /// Tab label shown in the browser surface.
    pub fn tab_label(&self) -> &'static str {
        match self {
            Category::Iaas => "IaaS Metrics",
            Category::Paas => "PaaS Metrics",
            Category::Saas => "SaaS Metrics",
        }
    }
}

impl std::str::FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "iaas" => Ok(Category::Iaas),
            "paas" => Ok(Category::Paas),
            "saas" => Ok(Category::Saas),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
