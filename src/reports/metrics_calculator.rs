use std::collections::BTreeMap;

use log::debug;
use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::PERCENT_DECIMAL_PRECISION;
use crate::month::MonthKey;
use crate::reports::benchmark::BenchmarkSimulator;
use crate::reports::reports_model::MonthlyMetrics;
use crate::reports::series_builder::MonthlySeries;

const HUNDRED: Decimal = dec!(100);

/// Running state carried across the month fold
#[derive(Debug, Default)]
struct MetricsState {
    cumulative_contribution: i64,
    last_known_fact: i64,
    delta_percent_sum: Decimal,
    delta_percent_count: u32,
}

/// Single forward pass over the contiguous month axis, producing one
/// `MonthlyMetrics` row per month. The benchmark walker shares the loop so
/// both series see the same net contributions in the same order.
///
/// Guard rules: the relative delta and its running average are omitted while
/// the cumulative contribution is zero, and the benchmark ratio falls back to
/// zero while the benchmark balance truncates to zero. Neither is an error.
pub fn calculate_monthly_metrics(
    series: &MonthlySeries,
    months: &[MonthKey],
) -> BTreeMap<MonthKey, MonthlyMetrics> {
    let mut metrics = BTreeMap::new();
    let mut state = MetricsState::default();
    let mut benchmark = BenchmarkSimulator::new();

    for (index, &month) in months.iter().enumerate() {
        let month_index = index as i64 + 1;

        let deposits_in = series.deposits_in(month);
        let withdrawals_out = series.withdrawals_out(month);
        let net_contribution = deposits_in + withdrawals_out;

        state.cumulative_contribution += net_contribution;
        let plan_value = state.cumulative_contribution;

        let benchmark_value = benchmark.step(net_contribution, series.rate(month));

        let fact_value = match series.fact(month) {
            Some(observed) => {
                state.last_known_fact = observed;
                observed
            }
            None => state.last_known_fact,
        };

        let benchmark_ratio_percent = if benchmark_value != 0 {
            (Decimal::from(fact_value) / Decimal::from(benchmark_value) * HUNDRED - HUNDRED)
                .round_dp(PERCENT_DECIMAL_PRECISION)
        } else {
            Decimal::ZERO
        };

        let delta_value = fact_value - plan_value;

        let (delta_percent, delta_percent_running_avg) = if plan_value != 0 {
            let percent = (Decimal::from(delta_value) / Decimal::from(plan_value) * HUNDRED)
                .round_dp(PERCENT_DECIMAL_PRECISION);
            state.delta_percent_sum += percent;
            state.delta_percent_count += 1;
            let running_avg = (state.delta_percent_sum
                / Decimal::from(state.delta_percent_count))
            .round_dp(PERCENT_DECIMAL_PRECISION);
            (Some(percent), Some(running_avg))
        } else {
            (None, None)
        };

        let cashflow_per_month = (Decimal::from(delta_value) / Decimal::from(month_index))
            .trunc()
            .to_i64()
            .unwrap_or(0);

        metrics.insert(
            month,
            MonthlyMetrics {
                deposits_in,
                withdrawals_out,
                plan_value,
                fact_value,
                benchmark_value,
                benchmark_ratio_percent,
                delta_value,
                delta_percent,
                delta_percent_running_avg,
                cashflow_per_month,
            },
        );
    }

    debug!(
        "Calculated metrics for {} months ({} with relative delta)",
        metrics.len(),
        state.delta_percent_count
    );

    metrics
}
