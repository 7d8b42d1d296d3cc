use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct RemediationPlan {
    pub id: String,
    pub name: String,
    pub findings_count: u32,
    pub status: String,
    pub progress: u8,
    pub created_at: DateTime<Utc>,
}

pub fn remediation_plans(now: DateTime<Utc>) -> Vec<RemediationPlan> {
    vec![
        RemediationPlan {
            id: "plan-001".to_string(),
            name: "Critical Security Remediation".to_string(),
            findings_count: 15,
            status: "In Progress".to_string(),
            progress: 45,
            created_at: now - Duration::days(3),
        },
        RemediationPlan {
            id: "plan-002".to_string(),
            name: "Cost Optimization Sprint".to_string(),
            findings_count: 35,
            status: "Pending Approval".to_string(),
            progress: 0,
            created_at: now - Duration::days(1),
        },
    ]
}

const TERRAFORM_TEMPLATE: &str = r#"# Auto-generated remediation for finding: {finding_id}

resource "aws_s3_bucket_public_access_block" "remediation" {
  bucket = aws_s3_bucket.example.id

  block_public_acls       = true
  block_public_policy     = true
  ignore_public_acls      = true
  restrict_public_buckets = true
}

resource "aws_s3_bucket_server_side_encryption_configuration" "remediation" {
  bucket = aws_s3_bucket.example.id

  rule {
    apply_server_side_encryption_by_default {
      sse_algorithm = "aws:kms"
    }
  }
}"#;

const CLOUDFORMATION_TEMPLATE: &str = r#"# Auto-generated CloudFormation remediation
AWSTemplateFormatVersion: '2010-09-09'
Description: Remediation for {finding_id}

Resources:
  S3BucketPolicy:
    Type: AWS::S3::BucketPolicy
    Properties:
      Bucket: !Ref MyBucket
      PolicyDocument:
        Statement:
          - Effect: Deny
            Principal: '*'
            Action: 's3:*'
            Resource: !Sub '${MyBucket.Arn}/*'
            Condition:
              Bool:
                'aws:SecureTransport': 'false'"#;

/// Infrastructure-as-code snippet closing the public-bucket class of finding.
///
/// `terraform` and `cloudformation` get full templates; any other language
/// gets a comment-only stub naming the finding.
pub fn remediation_code(finding_id: &str, language: &str) -> String {
    match language {
        "terraform" => TERRAFORM_TEMPLATE.replace("{finding_id}", finding_id),
        "cloudformation" => CLOUDFORMATION_TEMPLATE.replace("{finding_id}", finding_id),
        other => format!("# Remediation code for {}\n# Language: {}", finding_id, other),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GeneratedCode {
    pub finding_id: String,
    pub language: String,
    pub code: String,
    pub generated_at: DateTime<Utc>,
}

impl GeneratedCode {
    pub fn new(finding_id: &str, language: &str) -> Self {
        Self {
            finding_id: finding_id.to_string(),
            language: language.to_string(),
            code: remediation_code(finding_id, language),
            generated_at: Utc::now(),
        }
    }
}
