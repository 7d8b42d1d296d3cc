use serde::Serialize;

/// Organization guardrail (SCP or OPA policy) as listed by the gateway surface.
#[derive(Debug, Clone, Serialize)]
pub struct GuardrailPolicy {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attached_ous: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violations: Option<u32>,
    pub status: &'static str,
}

const fn scp(id: &'static str, name: &'static str, description: &'static str, attached_ous: u32) -> GuardrailPolicy {
    GuardrailPolicy { id, name, description, attached_ous: Some(attached_ous), violations: None, status: "Active" }
}

const fn opa(
    id: &'static str,
    name: &'static str,
    description: &'static str,
    violations: u32,
    status: &'static str,
) -> GuardrailPolicy {
    GuardrailPolicy { id, name, description, attached_ous: None, violations: Some(violations), status }
}

pub fn scp_policies() -> Vec<GuardrailPolicy> {
    vec![
        scp("scp-001", "DenyRootUser", "Deny root user access", 12),
        scp("scp-002", "RequireIMDSv2", "Require IMDSv2 for EC2", 8),
        scp("scp-003", "DenyLeaveOrg", "Prevent leaving organization", 15),
        scp("scp-004", "RequireEncryption", "Require encryption at rest", 10),
        scp("scp-005", "RestrictRegions", "Limit to approved regions", 12),
    ]
}

pub fn opa_policies() -> Vec<GuardrailPolicy> {
    vec![
        opa("opa-001", "require-tags", "Require mandatory tags on resources", 23, "Enforcing"),
        opa("opa-002", "restrict-instance-types", "Limit allowed EC2 instance types", 5, "Enforcing"),
        opa("opa-003", "require-private-subnet", "RDS must be in private subnet", 0, "Enforcing"),
        opa("opa-004", "s3-encryption", "S3 buckets must have encryption", 8, "Monitoring"),
    ]
}
