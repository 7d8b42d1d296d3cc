use std::collections::BTreeMap;
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::Serialize;
use serde_json::{json, Value};
use crate::models::{ComplianceScore, Finding, Severity};
use crate::utils::formatting::format_usd;
use super::{compliance, security};

const ACCOUNTS_BY_ENVIRONMENT: &[(&str, u32)] = &[
    ("Production", 85),
    ("Development", 234),
    ("Staging", 120),
    ("Sandbox", 156),
    ("Security", 15),
    ("Shared Services", 30),
];

const TREND_DAYS: i64 = 30;

#[derive(Debug, Clone, Serialize)]
pub struct DashboardData {
    pub key_metrics: Vec<Value>,
    pub findings: BTreeMap<Severity, usize>,
    pub compliance: ComplianceScore,
    pub accounts_summary: Value,
    pub trend_data: Value,
    pub recent_findings: Vec<Finding>,
}

/// Count findings per severity, reporting zero for absent levels.
pub fn severity_counts(findings: &[Finding]) -> BTreeMap<Severity, usize> {
    let mut counts: BTreeMap<Severity, usize> = Severity::ALL.iter().map(|s| (*s, 0)).collect();
    for finding in findings {
        *counts.entry(finding.severity).or_default() += 1;
    }
    counts
}

pub fn dashboard<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> DashboardData {
    let findings = security::security_findings(rng, 100, now);
    let counts = severity_counts(&findings);
    let critical = counts.get(&Severity::Critical).copied().unwrap_or(0);
    let total_accounts: u32 = ACCOUNTS_BY_ENVIRONMENT.iter().map(|(_, n)| n).sum();

    let key_metrics = vec![
        json!({"title": "Total Findings", "value": findings.len(), "change": -12, "icon": "shield"}),
        json!({"title": "Critical Issues", "value": critical, "change": -3, "icon": "alert-triangle"}),
        json!({"title": "Compliance Score", "value": "87.3%", "change": 5.2, "icon": "check-circle"}),
        json!({"title": "AWS Accounts", "value": total_accounts, "change": 0, "icon": "users"}),
        json!({"title": "MTD Cost", "value": format_usd(247_832.0), "change": 8.5, "icon": "dollar-sign"}),
    ];

    let by_environment: serde_json::Map<String, Value> = ACCOUNTS_BY_ENVIRONMENT
        .iter()
        .map(|(env, n)| (env.to_string(), json!(n)))
        .collect();

    let dates: Vec<String> = (1..=TREND_DAYS)
        .rev()
        .map(|days_ago| (now - Duration::days(days_ago)).format("%Y-%m-%d").to_string())
        .collect();
    let mut series = |low: u32, high: u32| -> Vec<u32> {
        (0..TREND_DAYS).map(|_| rng.gen_range(low..=high)).collect()
    };
    let trend_data = json!({
        "dates": dates,
        "critical": series(5, 15),
        "high": series(20, 40),
        "medium": series(30, 60),
    });

    DashboardData {
        key_metrics,
        findings: counts,
        compliance: compliance::compliance_scores(rng, now),
        accounts_summary: json!({"total": total_accounts, "by_environment": by_environment}),
        trend_data,
        recent_findings: findings.into_iter().take(10).collect(),
    }
}
