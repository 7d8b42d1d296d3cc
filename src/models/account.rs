use serde::{Deserialize, Serialize};

pub const ENVIRONMENTS: &[&str] = &[
    "Production",
    "Development",
    "Staging",
    "Sandbox",
    "Security",
    "Shared Services",
];

/// One member account of the AWS organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub account_id: String,
    pub account_name: String,
    pub environment: String,
    pub status: String,
    pub compliance_score: f64,
    pub monthly_cost: f64,
    pub finding_count: u32,
}

impl Account {
    pub fn in_environment(&self, environment: &str) -> bool {
        self.environment.eq_ignore_ascii_case(environment.trim())
    }

    pub fn has_status(&self, status: &str) -> bool {
        self.status.eq_ignore_ascii_case(status.trim())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProvisionRequest {
    pub account_name: Option<String>,
    pub environment: Option<String>,
    pub template: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvisionDetails {
    pub name: String,
    pub environment: String,
    pub template: String,
}

impl From<ProvisionRequest> for ProvisionDetails {
    fn from(req: ProvisionRequest) -> Self {
        Self {
            name: req.account_name.unwrap_or_else(|| "new-account".to_string()),
            environment: req.environment.unwrap_or_else(|| "Development".to_string()),
            template: req.template.unwrap_or_else(|| "standard".to_string()),
        }
    }
}
