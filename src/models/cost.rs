use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Month-to-date cost picture used by the gateway surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostOverview {
    pub mtd_cost: f64,
    pub forecasted_cost: f64,
    pub budget: f64,
    pub budget_utilization: f64,
    pub cost_change_percent: f64,
    pub top_services: Vec<ServiceCostChange>,
    pub daily_costs: Vec<DailyCost>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceCostChange {
    pub service: String,
    pub cost: f64,
    pub change: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyCost {
    pub date: String,
    pub amount: f64,
}

/// Cost summary in the console's camelCase shape (standalone surface).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostSummary {
    pub current_month_cost: f64,
    pub previous_month_cost: f64,
    pub forecasted_month_cost: f64,
    pub month_over_month_change: f64,
    pub year_to_date_cost: f64,
    pub budget_amount: f64,
    pub budget_used_percent: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceCost {
    pub service: String,
    pub mtd_cost: f64,
    pub last_month_cost: f64,
    pub change_percent: f64,
    pub trend: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountCost {
    pub account_id: String,
    pub account_name: String,
    pub environment: String,
    pub mtd_cost: f64,
    pub budget: f64,
    pub utilization: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsRecommendation {
    pub id: String,
    #[serde(rename = "type")]
    pub rec_type: String,
    pub title: String,
    pub description: String,
    pub estimated_monthly_savings: f64,
    pub estimated_annual_savings: f64,
    pub effort: String,
    pub resource_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostAnomaly {
    pub id: String,
    pub service: String,
    pub account_id: String,
    pub expected_cost: f64,
    pub actual_cost: f64,
    pub impact: f64,
    pub root_cause: String,
    pub detected_at: DateTime<Utc>,
    pub status: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetStatus {
    #[serde(rename = "On Track")]
    OnTrack,
    #[serde(rename = "At Risk")]
    AtRisk,
    #[serde(rename = "Over Budget")]
    OverBudget,
}

impl BudgetStatus {
    /// On track below 90% of the limit, at risk below 100%, over otherwise.
    pub fn classify(actual: f64, limit: f64) -> Self {
        if actual < limit * 0.9 {
            BudgetStatus::OnTrack
        } else if actual < limit {
            BudgetStatus::AtRisk
        } else {
            BudgetStatus::OverBudget
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    pub name: String,
    pub limit: u64,
    pub actual: f64,
    pub forecasted: f64,
    pub utilization: f64,
    pub status: BudgetStatus,
    pub alerts_triggered: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_status_thresholds() {
        assert_eq!(BudgetStatus::classify(80_000.0, 100_000.0), BudgetStatus::OnTrack);
        assert_eq!(BudgetStatus::classify(90_000.0, 100_000.0), BudgetStatus::AtRisk);
        assert_eq!(BudgetStatus::classify(100_000.0, 100_000.0), BudgetStatus::OverBudget);
    }

    #[test]
    fn test_budget_status_wire_names() {
        assert_eq!(serde_json::to_string(&BudgetStatus::OnTrack).unwrap(), "\"On Track\"");
        assert_eq!(serde_json::to_string(&BudgetStatus::OverBudget).unwrap(), "\"Over Budget\"");
    }

    #[test]
    fn test_cost_summary_camel_case() {
        let summary = CostSummary {
            current_month_cost: 1.0,
            previous_month_cost: 2.0,
            forecasted_month_cost: 3.0,
            month_over_month_change: 4.0,
            year_to_date_cost: 5.0,
            budget_amount: 6.0,
            budget_used_percent: 7.0,
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["currentMonthCost"], 1.0);
        assert_eq!(json["budgetUsedPercent"], 7.0);
    }
}
