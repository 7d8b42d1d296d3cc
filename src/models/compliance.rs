use chrono::{DateTime, Utc};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Improving,
    Stable,
    Declining,
}

/// Per-framework scores, kept in insertion order and serialized as a JSON object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameworkScores(Vec<(String, f64)>);

impl FrameworkScores {
    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, score)| *score)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(name, score)| (name.as_str(), *score))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, f64)> for FrameworkScores {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for FrameworkScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, score) in &self.0 {
            map.serialize_entry(name, score)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ComplianceScore {
    pub overall_score: f64,
    pub frameworks: FrameworkScores,
    pub trend: Trend,
    pub last_updated: DateTime<Utc>,
}

/// Control-level status of one compliance framework.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameworkStatus {
    pub name: String,
    pub score: f64,
    pub total_controls: u32,
    pub passed_controls: u32,
    pub failed_controls: u32,
    pub status: String,
}

impl FrameworkStatus {
    pub const PASSING_SCORE: f64 = 80.0;

    pub fn new(name: &str, score: f64, total_controls: u32) -> Self {
        let passed = (total_controls as f64 * (score / 100.0)) as u32;
        let status = if score >= Self::PASSING_SCORE { "Compliant" } else { "Non-Compliant" };
        Self {
            name: name.to_string(),
            score,
            total_controls,
            passed_controls: passed,
            failed_controls: total_controls - passed,
            status: status.to_string(),
        }
    }
}
