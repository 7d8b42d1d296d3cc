use chrono::{DateTime, Utc};
use serde::Serialize;

const COST_REPLY: &str = "Based on your current AWS spending patterns, I've identified several optimization opportunities:

1. **Compute Savings**: Your EC2 usage shows consistent patterns. Purchasing Compute Savings Plans could save approximately $12,500/month.

2. **Idle Resources**: I found 35 idle resources (EBS volumes, Elastic IPs, NAT Gateways) costing ~$3,200/month.

3. **Storage Optimization**: Moving 2.3TB of infrequently accessed S3 data to Glacier could save $2,100/month.

**Total Potential Savings: $31,600/month ($379,200/year)**

Would you like me to generate a detailed remediation plan for any of these?";

const SECURITY_REPLY: &str = "Here's a summary of your security posture:

**Critical Issues (Immediate Action Required):**
- 8 EC2 instances with public IPs and open security groups
- 3 S3 buckets with public read access
- 5 IAM users without MFA enabled

**High Priority:**
- 23 resources missing required encryption
- 12 Lambda functions with overly permissive IAM roles

**Recommendations:**
1. Enable IMDSv2 on all EC2 instances
2. Review and restrict S3 bucket policies
3. Enforce MFA for all IAM users

I can generate remediation scripts for any of these findings. Which would you like to address first?";

const COMPLIANCE_REPLY: &str = "Your current compliance status across frameworks:

| Framework | Score | Status |
|-----------|-------|--------|
| SOC 2 | 87.3% | ✅ Compliant |
| PCI-DSS | 82.1% | ✅ Compliant |
| HIPAA | 79.5% | ⚠️ At Risk |
| GDPR | 85.2% | ✅ Compliant |
| ISO 27001 | 88.7% | ✅ Compliant |

**HIPAA Gap Analysis:**
- 12 controls require attention
- Primary gaps: encryption at rest, access logging, audit trails

Would you like me to create a remediation roadmap for HIPAA compliance?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Cost,
    Security,
    Compliance,
    General,
}

impl Topic {
    /// First matching keyword wins: cost, then security, then compliance.
    pub fn detect(message: &str) -> Self {
        let lower = message.to_lowercase();
        if lower.contains("cost") || lower.contains("spend") {
            Topic::Cost
        } else if lower.contains("security") || lower.contains("finding") {
            Topic::Security
        } else if lower.contains("compliance") {
            Topic::Compliance
        } else {
            Topic::General
        }
    }
}

/// Canned assistant reply for a user message.
pub fn canned_reply(message: &str) -> String {
    match Topic::detect(message) {
        Topic::Cost => COST_REPLY.to_string(),
        Topic::Security => SECURITY_REPLY.to_string(),
        Topic::Compliance => COMPLIANCE_REPLY.to_string(),
        Topic::General => format!(
            "I understand you're asking about: \"{}\"

As your AI-powered cloud governance assistant, I can help you with:

1. **Cost Analysis** - Identify savings opportunities and anomalies
2. **Security Insights** - Analyze findings and generate remediation plans
3. **Compliance** - Track framework compliance and gaps
4. **Resource Optimization** - Right-sizing and idle resource detection

How can I assist you today?",
            message
        ),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Prediction {
    pub id: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub confidence: f64,
    pub impact: &'static str,
    pub recommended_action: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct PredictionSet {
    pub predictions: Vec<Prediction>,
    pub generated_at: DateTime<Utc>,
}

pub fn ai_predictions(now: DateTime<Utc>) -> PredictionSet {
    PredictionSet {
        predictions: vec![
            Prediction {
                id: "pred-001",
                kind: "cost",
                title: "Cost Spike Predicted",
                description: "Based on current trends, expect 15% cost increase next month due to data transfer growth",
                confidence: 0.87,
                impact: "high",
                recommended_action: "Review data transfer patterns and consider CloudFront optimization",
            },
            Prediction {
                id: "pred-002",
                kind: "security",
                title: "Potential Security Risk",
                description: "3 EC2 instances showing unusual outbound traffic patterns",
                confidence: 0.72,
                impact: "critical",
                recommended_action: "Investigate network flows and review security groups",
            },
            Prediction {
                id: "pred-003",
                kind: "capacity",
                title: "Capacity Planning Alert",
                description: "RDS storage utilization trending toward 90% in 2 weeks",
                confidence: 0.91,
                impact: "medium",
                recommended_action: "Plan storage expansion or implement data archival",
            },
        ],
        generated_at: now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_detection() {
        assert_eq!(Topic::detect("How can I reduce COST?"), Topic::Cost);
        assert_eq!(Topic::detect("monthly spend trend"), Topic::Cost);
        assert_eq!(Topic::detect("show security findings"), Topic::Security);
        assert_eq!(Topic::detect("any new finding?"), Topic::Security);
        assert_eq!(Topic::detect("Compliance gaps"), Topic::Compliance);
        assert_eq!(Topic::detect("hello"), Topic::General);
    }

    #[test]
    fn test_cost_takes_priority_over_security() {
        assert_eq!(Topic::detect("security cost tradeoffs"), Topic::Cost);
    }

    #[test]
    fn test_cost_reply_mentions_savings_plans() {
        assert!(canned_reply("what does this cost").contains("Savings Plans"));
    }

    #[test]
    fn test_general_reply_quotes_message() {
        let reply = canned_reply("rotate my keys");
        assert!(reply.starts_with("I understand you're asking about: \"rotate my keys\""));
    }

    #[test]
    fn test_predictions_have_valid_confidence() {
        let set = ai_predictions(Utc::now());
        assert_eq!(set.predictions.len(), 3);
        assert!(set.predictions.iter().all(|p| p.confidence > 0.0 && p.confidence <= 1.0));
    }
}
