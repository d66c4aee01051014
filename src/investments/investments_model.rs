use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Investment item owned by a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub id: i64,
    pub description: String,
    pub category_id: Option<i64>,
    pub is_active: bool,
}

/// One deposit or withdrawal attributed to an investment.
/// Positive amounts are contributions, negative amounts are withdrawals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashEvent {
    pub investment_id: i64,
    pub date: DateTime<Utc>,
    pub amount: i64,
    pub note: String,
}

impl CashEvent {
    pub fn is_deposit(&self) -> bool {
        self.amount > 0
    }

    pub fn is_withdrawal(&self) -> bool {
        self.amount < 0
    }
}

/// Observed value of an investment at a point in time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationSnapshot {
    pub investment_id: i64,
    pub date: DateTime<Utc>,
    pub value: i64,
}

/// Interest-rate sample, shared across all investments of a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateObservation {
    pub date: DateTime<Utc>,
    pub annual_rate_percent: i64,
}
