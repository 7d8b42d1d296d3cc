use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use crate::models::{ComplianceStatus, Finding, FindingStatus, Severity, ThreatFinding, VulnerabilityFinding};
use crate::utils::formatting::round_to;
use super::{account_id, pick, pick_weighted};

const SEVERITY_WEIGHTS: &[(Severity, u32)] = &[
    (Severity::Critical, 5),
    (Severity::High, 15),
    (Severity::Medium, 30),
    (Severity::Low, 30),
    (Severity::Informational, 20),
];

const STATUS_WEIGHTS: &[(FindingStatus, u32)] = &[
    (FindingStatus::Active, 70),
    (FindingStatus::Resolved, 25),
    (FindingStatus::Suppressed, 5),
];

const RESOURCE_TYPES: &[&str] = &[
    "AWS::EC2::Instance",
    "AWS::S3::Bucket",
    "AWS::IAM::Role",
    "AWS::RDS::DBInstance",
    "AWS::Lambda::Function",
    "AWS::EKS::Cluster",
];

const REGIONS: &[&str] = &["us-east-1", "us-west-2", "eu-west-1", "ap-southeast-1"];

const COMPLIANCE_STATUSES: &[ComplianceStatus] = &[
    ComplianceStatus::Passed,
    ComplianceStatus::Failed,
    ComplianceStatus::NotAvailable,
];

const THREAT_TYPES: &[&str] = &["UnauthorizedAccess", "Recon", "Trojan", "CryptoCurrency", "Backdoor"];

const VULN_TYPES: &[&str] = &["CVE", "Network Reachability", "Package Vulnerability", "Code Vulnerability"];

const VULN_SEVERITIES: &[Severity] = &[Severity::Critical, Severity::High, Severity::Medium, Severity::Low];

pub fn security_findings<R: Rng + ?Sized>(rng: &mut R, count: usize, now: DateTime<Utc>) -> Vec<Finding> {
    (1..=count)
        .map(|i| {
            let severity = pick_weighted(rng, SEVERITY_WEIGHTS);
            Finding {
                id: format!("finding-{:04}", i),
                title: format!("Security finding {} - {} severity issue detected", i, severity),
                severity,
                status: pick_weighted(rng, STATUS_WEIGHTS),
                resource_type: pick(rng, RESOURCE_TYPES).to_string(),
                resource_id: format!("resource-{}", rng.gen_range(1000..=9999)),
                account_id: account_id(rng),
                region: pick(rng, REGIONS).to_string(),
                created_at: now - Duration::days(rng.gen_range(0..=30)),
                compliance_status: Some(*pick(rng, COMPLIANCE_STATUSES)),
            }
        })
        .collect()
}

pub fn guardduty_findings<R: Rng + ?Sized>(rng: &mut R, count: usize, now: DateTime<Utc>) -> Vec<ThreatFinding> {
    (1..=count)
        .map(|i| ThreatFinding {
            id: format!("gd-{:04}", i),
            threat_type: pick(rng, THREAT_TYPES).to_string(),
            severity: round_to(rng.gen_range(1.0..8.9), 1),
            title: format!("GuardDuty finding - {} detected", pick(rng, THREAT_TYPES)),
            description: "Suspicious activity detected in your AWS environment".to_string(),
            resource: format!("i-{:08x}", rng.gen_range(10_000_000u32..=99_999_999)),
            created_at: now - Duration::days(rng.gen_range(0..=14)),
        })
        .collect()
}

pub fn inspector_findings<R: Rng + ?Sized>(rng: &mut R, count: usize, now: DateTime<Utc>) -> Vec<VulnerabilityFinding> {
    (1..=count)
        .map(|i| VulnerabilityFinding {
            id: format!("inspector-{:04}", i),
            vuln_type: pick(rng, VULN_TYPES).to_string(),
            severity: *pick(rng, VULN_SEVERITIES),
            title: format!("Vulnerability: CVE-2024-{}", rng.gen_range(1000..=9999)),
            package: format!("package-{}", rng.gen_range(1..=100)),
            fixed_version: format!(
                "{}.{}.{}",
                rng.gen_range(1..=5),
                rng.gen_range(0..=9),
                rng.gen_range(0..=9)
            ),
            resource: format!(
                "arn:aws:ec2:us-east-1:123456789012:instance/i-{:08x}",
                rng.gen_range(10_000_000u32..=99_999_999)
            ),
            created_at: now - Duration::days(rng.gen_range(0..=30)),
        })
        .collect()
}

/// Keep findings matching the optional severity and status filters.
pub fn filter_findings(findings: Vec<Finding>, severity: Option<&str>, status: Option<&str>) -> Vec<Finding> {
    findings
        .into_iter()
        .filter(|f| severity.map_or(true, |s| f.has_severity(s)))
        .filter(|f| status.map_or(true, |s| f.has_status(s)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::DemoSource;

    #[test]
    fn test_security_findings_count_and_ids() {
        let mut rng = DemoSource::new(Some(11)).rng();
        let findings = security_findings(&mut rng, 25, Utc::now());
        assert_eq!(findings.len(), 25);
        assert_eq!(findings[0].id, "finding-0001");
        assert_eq!(findings[24].id, "finding-0025");
        assert!(findings.iter().all(|f| f.title.contains(f.severity.as_str())));
    }

    #[test]
    fn test_security_findings_created_within_thirty_days() {
        let now = Utc::now();
        let mut rng = DemoSource::new(Some(5)).rng();
        for finding in security_findings(&mut rng, 100, now) {
            assert!(finding.created_at <= now);
            assert!(now - finding.created_at <= Duration::days(30));
        }
    }

    #[test]
    fn test_filter_never_increases_count() {
        let mut rng = DemoSource::new(Some(9)).rng();
        let findings = security_findings(&mut rng, 200, Utc::now());
        let total = findings.len();

        let critical = filter_findings(findings.clone(), Some("critical"), None);
        assert!(critical.len() <= total);
        assert!(critical.iter().all(|f| f.severity == Severity::Critical));

        let active_high = filter_findings(findings, Some("HIGH"), Some("active"));
        assert!(active_high
            .iter()
            .all(|f| f.severity == Severity::High && f.status == FindingStatus::Active));
    }

    #[test]
    fn test_filter_unknown_severity_is_empty() {
        let mut rng = DemoSource::new(Some(9)).rng();
        let findings = security_findings(&mut rng, 50, Utc::now());
        assert!(filter_findings(findings, Some("severe"), None).is_empty());
    }

    #[test]
    fn test_guardduty_severity_range() {
        let mut rng = DemoSource::new(Some(2)).rng();
        let findings = guardduty_findings(&mut rng, 100, Utc::now());
        assert!(findings.iter().all(|f| (1.0..=8.9).contains(&f.severity)));
        assert!(findings.iter().all(|f| f.resource.starts_with("i-") && f.resource.len() == 10));
    }

    #[test]
    fn test_inspector_never_informational() {
        let mut rng = DemoSource::new(Some(4)).rng();
        let findings = inspector_findings(&mut rng, 100, Utc::now());
        assert!(findings.iter().all(|f| f.severity != Severity::Informational));
        assert!(findings.iter().all(|f| f.title.starts_with("Vulnerability: CVE-2024-")));
    }
}
