//! Fixed payloads of the enveloped surface, in the console's camelCase shape.

use serde_json::{json, Value};
use crate::models::CostSummary;

pub const COMPLIANCE_SCORE: u32 = 87;

pub fn key_metrics() -> Value {
    json!([
        {"id": "1", "title": "Total Findings", "value": 1247, "change": -12},
        {"id": "2", "title": "Critical Issues", "value": 23, "change": -3},
        {"id": "3", "title": "Compliance Score", "value": COMPLIANCE_SCORE, "change": 5},
        {"id": "4", "title": "AWS Accounts", "value": 48, "change": 0},
        {"id": "5", "title": "MTD Cost", "value": 127400, "change": 8},
    ])
}

pub fn findings_summary() -> Value {
    json!({
        "critical": 23,
        "high": 89,
        "medium": 312,
        "low": 567,
        "informational": 256,
    })
}

pub fn dashboard() -> Value {
    json!({
        "keyMetrics": key_metrics(),
        "complianceScore": COMPLIANCE_SCORE,
        "findings": findings_summary(),
    })
}

pub fn security_hub_summary() -> Value {
    json!({
        "critical": 23,
        "high": 89,
        "medium": 312,
        "low": 567,
        "informational": 256,
        "totalFindings": 1247,
        "complianceScore": COMPLIANCE_SCORE,
        "enabledStandards": [
            "AWS Foundational Security Best Practices",
            "CIS AWS Foundations Benchmark",
            "PCI-DSS",
        ],
    })
}

pub fn guardduty_findings() -> Vec<Value> {
    vec![
        json!({"id": "gd-001", "type": "Trojan:EC2/DriveBySourceTraffic!DNS", "severity": 8}),
        json!({"id": "gd-002", "type": "Recon:EC2/PortProbeUnprotectedPort", "severity": 5}),
    ]
}

pub fn inspector_findings() -> Vec<Value> {
    vec![
        json!({"id": "ins-001", "title": "CVE-2024-1234", "severity": "HIGH", "cvss": 8.5}),
        json!({"id": "ins-002", "title": "CVE-2024-5678", "severity": "MEDIUM", "cvss": 5.2}),
    ]
}

pub fn config_compliance() -> Value {
    json!({"compliant": 156, "nonCompliant": 23, "notApplicable": 12})
}

pub fn cost_summary() -> CostSummary {
    CostSummary {
        current_month_cost: 127_432.0,
        previous_month_cost: 117_500.0,
        forecasted_month_cost: 185_000.0,
        month_over_month_change: 8.5,
        year_to_date_cost: 1_247_000.0,
        budget_amount: 200_000.0,
        budget_used_percent: 64.0,
    }
}

pub fn service_costs() -> Vec<Value> {
    vec![
        json!({"service": "Amazon EC2", "cost": 45000, "percentage": 35}),
        json!({"service": "Amazon RDS", "cost": 28000, "percentage": 22}),
        json!({"service": "Amazon S3", "cost": 18000, "percentage": 14}),
    ]
}

pub fn account_costs() -> Value {
    json!([
        {"accountId": "123456789012", "accountName": "Production-Retail", "cost": 65000},
        {"accountId": "123456789013", "accountName": "Dev-Healthcare", "cost": 28000},
    ])
}

pub fn recommendations() -> Value {
    json!([
        {"type": "SAVINGS_PLAN", "title": "Compute Savings Plan", "monthlySavings": 12500},
        {"type": "RIGHTSIZING", "title": "EC2 Rightsizing", "monthlySavings": 4200},
    ])
}

pub fn anomalies() -> Vec<Value> {
    vec![json!({"service": "Amazon RDS", "impact": 2500, "impactPercentage": 47, "status": "OPEN"})]
}

pub fn budgets() -> Value {
    json!([
        {"name": "Overall AWS Budget", "amount": 200000, "spent": 127432, "percentUsed": 64},
    ])
}

pub fn forecast() -> Value {
    json!({"nextMonth": 185000, "confidence": 85, "trend": "increasing"})
}

pub fn predictions() -> Vec<Value> {
    vec![
        json!({"type": "cost", "title": "Monthly Cost Prediction", "prediction": "15% increase expected"}),
        json!({"type": "security", "title": "Security Risk Forecast", "prediction": "Low risk of new critical findings"}),
    ]
}

pub fn alerts() -> Value {
    json!([
        {"id": "alert-001", "priority": "HIGH", "title": "Budget threshold approaching"},
        {"id": "alert-002", "priority": "MEDIUM", "title": "New critical CVE affecting your images"},
    ])
}

pub fn frameworks() -> Value {
    json!([
        {"id": "aws-foundational", "name": "AWS Foundational", "score": 92},
        {"id": "cis-aws", "name": "CIS AWS Foundations", "score": 87},
        {"id": "pci-dss", "name": "PCI-DSS", "score": 78},
    ])
}

pub fn scp_policies() -> Value {
    json!([
        {"id": "scp-001", "name": "Deny Root Account Actions", "status": "ATTACHED"},
        {"id": "scp-002", "name": "Require Encryption", "status": "ATTACHED"},
    ])
}

pub fn opa_policies() -> Value {
    json!([
        {"id": "opa-001", "name": "Require Tags", "violations": 12},
        {"id": "opa-002", "name": "Block Privileged Containers", "violations": 3},
    ])
}

pub fn kics_results() -> Value {
    json!({"totalIssues": 23, "critical": 2, "high": 8, "medium": 10, "low": 3})
}

pub fn accounts() -> Value {
    json!([
        {"id": "123456789012", "name": "Production-Retail", "status": "ACTIVE"},
        {"id": "123456789013", "name": "Dev-Healthcare", "status": "ACTIVE"},
    ])
}

pub fn account_templates() -> Value {
    json!([
        {"id": "tpl-001", "name": "Production Account", "environment": "production"},
        {"id": "tpl-002", "name": "Development Account", "environment": "development"},
    ])
}

/// Keep records whose string `field` equals `wanted`, ignoring case.
pub fn filter_by_label(records: Vec<Value>, field: &str, wanted: Option<&str>) -> Vec<Value> {
    match wanted {
        None => records,
        Some(wanted) => records
            .into_iter()
            .filter(|r| r[field].as_str().is_some_and(|v| v.eq_ignore_ascii_case(wanted.trim())))
            .collect(),
    }
}
