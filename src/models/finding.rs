use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Severity level for a finding, ordered from most to least severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    Informational,
}

impl Severity {
    pub const ALL: [Severity; 5] = [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
        Severity::Informational,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "CRITICAL",
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
            Severity::Low => "LOW",
            Severity::Informational => "INFORMATIONAL",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FindingStatus {
    Active,
    Resolved,
    Suppressed,
}

impl FindingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FindingStatus::Active => "ACTIVE",
            FindingStatus::Resolved => "RESOLVED",
            FindingStatus::Suppressed => "SUPPRESSED",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComplianceStatus {
    Passed,
    Failed,
    NotAvailable,
}

/// A Security Hub style finding attached to one AWS resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    pub id: String,
    pub title: String,
    pub severity: Severity,
    pub status: FindingStatus,
    pub resource_type: String,
    pub resource_id: String,
    pub account_id: String,
    pub region: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compliance_status: Option<ComplianceStatus>,
}

impl Finding {
    pub fn has_severity(&self, label: &str) -> bool {
        self.severity.as_str().eq_ignore_ascii_case(label.trim())
    }

    pub fn has_status(&self, label: &str) -> bool {
        self.status.as_str().eq_ignore_ascii_case(label.trim())
    }
}

/// GuardDuty threat finding. Severity is GuardDuty's numeric 1.0-8.9 scale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreatFinding {
    pub id: String,
    #[serde(rename = "type")]
    pub threat_type: String,
    pub severity: f64,
    pub title: String,
    pub description: String,
    pub resource: String,
    pub created_at: DateTime<Utc>,
}

/// Inspector vulnerability finding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VulnerabilityFinding {
    pub id: String,
    #[serde(rename = "type")]
    pub vuln_type: String,
    pub severity: Severity,
    pub title: String,
    pub package: String,
    pub fixed_version: String,
    pub resource: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_orders_most_severe_first() {
        assert!(Severity::Critical < Severity::High);
        assert!(Severity::Low < Severity::Informational);
    }

    #[test]
    fn test_severity_serializes_upper_case() {
        assert_eq!(serde_json::to_string(&Severity::Informational).unwrap(), "\"INFORMATIONAL\"");
        assert_eq!(format!("{}", Severity::Medium), "MEDIUM");
    }

    #[test]
    fn test_compliance_status_wire_name() {
        assert_eq!(serde_json::to_string(&ComplianceStatus::NotAvailable).unwrap(), "\"NOT_AVAILABLE\"");
    }

    #[test]
    fn test_finding_filters() {
        let finding = Finding {
            id: "finding-0001".into(),
            title: "Open security group".into(),
            severity: Severity::High,
            status: FindingStatus::Active,
            resource_type: "AWS::EC2::Instance".into(),
            resource_id: "resource-1234".into(),
            account_id: "123456789012".into(),
            region: "us-east-1".into(),
            created_at: Utc::now(),
            compliance_status: None,
        };
        assert!(finding.has_severity("high"));
        assert!(!finding.has_severity("critical"));
        assert!(finding.has_status("Active"));

        let json = serde_json::to_value(&finding).unwrap();
        assert!(json.get("compliance_status").is_none());
    }
}
