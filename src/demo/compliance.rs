use chrono::{DateTime, Utc};
use rand::Rng;
use crate::models::{ComplianceScore, FrameworkStatus, Trend};
use crate::utils::formatting::round_to;
use super::pick;

/// Framework name with the score range its demo value is drawn from.
const FRAMEWORKS: &[(&str, f64, f64)] = &[
    ("SOC 2", 75.0, 98.0),
    ("PCI-DSS", 70.0, 95.0),
    ("HIPAA", 72.0, 96.0),
    ("GDPR", 68.0, 94.0),
    ("ISO 27001", 74.0, 97.0),
    ("NIST 800-53", 70.0, 95.0),
    ("CIS AWS", 65.0, 92.0),
    ("AWS Well-Architected", 72.0, 96.0),
];

const TRENDS: &[Trend] = &[Trend::Improving, Trend::Stable, Trend::Declining];

pub fn compliance_scores<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> ComplianceScore {
    let raw: Vec<(&str, f64)> = FRAMEWORKS
        .iter()
        .map(|(name, low, high)| (*name, rng.gen_range(*low..*high)))
        .collect();
    let overall = raw.iter().map(|(_, score)| score).sum::<f64>() / raw.len() as f64;

    ComplianceScore {
        overall_score: round_to(overall, 1),
        frameworks: raw
            .into_iter()
            .map(|(name, score)| (name.to_string(), round_to(score, 1)))
            .collect(),
        trend: *pick(rng, TRENDS),
        last_updated: now,
    }
}

/// Per-framework control counts derived from a fresh score set.
pub fn framework_statuses<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> Vec<FrameworkStatus> {
    let scores = compliance_scores(rng, now);
    scores
        .frameworks
        .iter()
        .map(|(name, score)| FrameworkStatus::new(name, score, rng.gen_range(80..=200)))
        .collect()
}
