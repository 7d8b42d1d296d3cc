use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use crate::models::{
    AccountCost, Budget, BudgetStatus, CostAnomaly, CostOverview, DailyCost, SavingsRecommendation,
    ServiceCost, ServiceCostChange,
};
use crate::utils::formatting::round_to;
use super::{account_id, accounts, pick};

const MONTHLY_BUDGET: f64 = 350_000.0;

/// Service, share of month-to-date spend, and the range its change is drawn from.
const TOP_SERVICES: &[(&str, f64, f64, f64)] = &[
    ("Amazon EC2", 0.35, -10.0, 15.0),
    ("Amazon RDS", 0.20, -5.0, 10.0),
    ("Amazon S3", 0.12, -8.0, 12.0),
    ("AWS Lambda", 0.08, -20.0, 30.0),
    ("Amazon EKS", 0.10, -5.0, 20.0),
];

const BILLED_SERVICES: &[&str] = &[
    "Amazon EC2",
    "Amazon RDS",
    "Amazon S3",
    "AWS Lambda",
    "Amazon EKS",
    "Amazon CloudFront",
    "Amazon DynamoDB",
    "AWS Fargate",
    "Amazon ElastiCache",
    "Amazon Redshift",
    "AWS Glue",
    "Amazon SageMaker",
    "Amazon API Gateway",
];

const ANOMALY_SERVICES: &[&str] = &["EC2", "RDS", "S3", "Lambda", "EKS"];

const ROOT_CAUSES: &[&str] = &[
    "Unusual spike in data transfer",
    "New resources provisioned",
    "Increased API calls",
    "Storage growth exceeds normal",
    "Compute usage spike",
];

const ANOMALY_STATUSES: &[&str] = &["Open", "Investigating", "Resolved"];

const BUDGET_NAMES: &[&str] = &["Overall AWS", "Production", "Development", "Data Platform", "Security Tools"];

pub fn cost_overview<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> CostOverview {
    let mtd = rng.gen_range(150_000.0..300_000.0);
    CostOverview {
        mtd_cost: round_to(mtd, 2),
        forecasted_cost: round_to(mtd * 1.2, 2),
        budget: MONTHLY_BUDGET,
        budget_utilization: round_to(mtd / MONTHLY_BUDGET * 100.0, 1),
        cost_change_percent: round_to(rng.gen_range(-15.0..25.0), 1),
        top_services: TOP_SERVICES
            .iter()
            .map(|(service, share, low, high)| ServiceCostChange {
                service: service.to_string(),
                cost: round_to(mtd * share, 2),
                change: round_to(rng.gen_range(*low..*high), 1),
            })
            .collect(),
        daily_costs: (1..=30)
            .rev()
            .map(|days_ago| DailyCost {
                date: (now - Duration::days(days_ago)).format("%Y-%m-%d").to_string(),
                amount: round_to(rng.gen_range(8_000.0..12_000.0), 2),
            })
            .collect(),
    }
}

pub fn service_costs<R: Rng + ?Sized>(rng: &mut R) -> Vec<ServiceCost> {
    BILLED_SERVICES
        .iter()
        .map(|service| ServiceCost {
            service: service.to_string(),
            mtd_cost: round_to(rng.gen_range(5_000.0..80_000.0), 2),
            last_month_cost: round_to(rng.gen_range(5_000.0..80_000.0), 2),
            change_percent: round_to(rng.gen_range(-20.0..30.0), 1),
            trend: (0..30).map(|_| round_to(rng.gen_range(150.0..300.0), 2)).collect(),
        })
        .collect()
}

pub fn account_costs<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<AccountCost> {
    accounts::aws_accounts(rng, count)
        .into_iter()
        .map(|acc| AccountCost {
            budget: round_to(acc.monthly_cost * rng.gen_range(1.1..1.5), 2),
            utilization: round_to(rng.gen_range(50.0..110.0), 1),
            account_id: acc.account_id,
            account_name: acc.account_name,
            environment: acc.environment,
            mtd_cost: acc.monthly_cost,
        })
        .collect()
}

pub fn savings_recommendations() -> Vec<SavingsRecommendation> {
    let rec = |id: &str, rec_type: &str, title: &str, description: &str, monthly: f64, effort: &str, resources: u32| {
        SavingsRecommendation {
            id: id.to_string(),
            rec_type: rec_type.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            estimated_monthly_savings: monthly,
            estimated_annual_savings: monthly * 12.0,
            effort: effort.to_string(),
            resource_count: resources,
        }
    };

    vec![
        rec(
            "rec-001",
            "Savings Plans",
            "Purchase Compute Savings Plans",
            "Based on your consistent EC2 and Fargate usage, purchasing 1-year Compute Savings Plans could reduce costs significantly.",
            12_500.0,
            "Low",
            156,
        ),
        rec(
            "rec-002",
            "Reserved Instances",
            "Convert On-Demand RDS to Reserved",
            "Your RDS instances have been running consistently for 6+ months. Reserved Instances would reduce costs.",
            8_200.0,
            "Low",
            23,
        ),
        rec(
            "rec-003",
            "Rightsizing",
            "Rightsize underutilized EC2 instances",
            "47 EC2 instances are running at less than 20% CPU utilization. Consider downsizing.",
            5_600.0,
            "Medium",
            47,
        ),
        rec(
            "rec-004",
            "Idle Resources",
            "Terminate idle resources",
            "Found 12 unattached EBS volumes, 8 idle Elastic IPs, and 15 unused NAT Gateways.",
            3_200.0,
            "Low",
            35,
        ),
        rec(
            "rec-005",
            "Storage Optimization",
            "Optimize S3 storage classes",
            "Move infrequently accessed data to S3 Glacier or Intelligent-Tiering.",
            2_100.0,
            "Medium",
            89,
        ),
    ]
}

pub fn cost_anomalies<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> Vec<CostAnomaly> {
    let count = rng.gen_range(3..=8);
    (1..=count)
        .map(|i| CostAnomaly {
            id: format!("anomaly-{:03}", i),
            service: pick(rng, ANOMALY_SERVICES).to_string(),
            account_id: account_id(rng),
            expected_cost: round_to(rng.gen_range(1_000.0..10_000.0), 2),
            actual_cost: round_to(rng.gen_range(5_000.0..50_000.0), 2),
            impact: round_to(rng.gen_range(1_000.0..40_000.0), 2),
            root_cause: pick(rng, ROOT_CAUSES).to_string(),
            detected_at: now - Duration::hours(rng.gen_range(1..=72)),
            status: pick(rng, ANOMALY_STATUSES).to_string(),
        })
        .collect()
}

pub fn budgets<R: Rng + ?Sized>(rng: &mut R) -> Vec<Budget> {
    BUDGET_NAMES
        .iter()
        .map(|name| {
            let limit: u64 = rng.gen_range(50_000..=200_000);
            let actual = round_to(limit as f64 * rng.gen_range(0.4..1.1), 2);
            Budget {
                name: name.to_string(),
                limit,
                actual,
                forecasted: round_to(actual * rng.gen_range(1.0..1.3), 2),
                utilization: round_to(actual / limit as f64 * 100.0, 1),
                status: BudgetStatus::classify(actual, limit as f64),
                alerts_triggered: rng.gen_range(0..=3),
            }
        })
        .collect()
}
