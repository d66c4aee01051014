use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::month::MonthKey;

/// Derived metrics for one investment in one calendar month.
///
/// `delta_percent` and `delta_percent_running_avg` are absent (not zero) for
/// months where the cumulative contribution is still zero, so that the report
/// never divides by a zero plan value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyMetrics {
    pub deposits_in: i64,
    pub withdrawals_out: i64,
    pub plan_value: i64,
    pub fact_value: i64,
    pub benchmark_value: i64,
    pub benchmark_ratio_percent: Decimal,
    pub delta_value: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta_percent: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta_percent_running_avg: Option<Decimal>,
    pub cashflow_per_month: i64,
}

/// Per-investment block of the report: identity, resolved category label,
/// and the month-indexed metric series keyed by "YYYY-MM".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentReportItem {
    pub id: i64,
    pub description: String,
    pub category: String,
    pub metrics: BTreeMap<MonthKey, MonthlyMetrics>,
}

/// Full report for one user, one block per investment in store order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentReport {
    pub items: Vec<InvestmentReportItem>,
}
