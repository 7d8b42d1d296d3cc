use rand::Rng;
use crate::models::{Account, ProvisionDetails, ProvisionRequest, ENVIRONMENTS};
use crate::utils::formatting::round_to;
use serde::Serialize;
use super::{account_id, pick, pick_weighted};

const ACCOUNT_STATUSES: &[(&str, u32)] = &[("Active", 90), ("Suspended", 5), ("Pending", 5)];

pub fn aws_accounts<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Account> {
    (1..=count)
        .map(|i| {
            let environment = *pick(rng, ENVIRONMENTS);
            Account {
                account_id: account_id(rng),
                account_name: format!("{}-account-{:03}", environment.to_lowercase(), i),
                environment: environment.to_string(),
                status: pick_weighted(rng, ACCOUNT_STATUSES).to_string(),
                compliance_score: round_to(rng.gen_range(65.0..98.0), 1),
                monthly_cost: round_to(rng.gen_range(5_000.0..50_000.0), 2),
                finding_count: rng.gen_range(0..=50),
            }
        })
        .collect()
}

pub fn filter_accounts(accounts: Vec<Account>, environment: Option<&str>, status: Option<&str>) -> Vec<Account> {
    accounts
        .into_iter()
        .filter(|a| environment.map_or(true, |e| a.in_environment(e)))
        .filter(|a| status.map_or(true, |s| a.has_status(s)))
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct ProvisionReceipt {
    pub status: String,
    pub message: String,
    pub request_id: String,
    pub estimated_time: String,
    pub account_details: ProvisionDetails,
}

/// Acknowledge a provisioning request. Nothing is created.
pub fn provision<R: Rng + ?Sized>(rng: &mut R, request: ProvisionRequest) -> ProvisionReceipt {
    ProvisionReceipt {
        status: "success".to_string(),
        message: "Account provisioning initiated".to_string(),
        request_id: format!("req-{}", rng.gen_range(100_000..=999_999)),
        estimated_time: "15-20 minutes".to_string(),
        account_details: request.into(),
    }
}
