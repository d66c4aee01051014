use std::collections::BTreeMap;

use crate::investments::{CashEvent, RateObservation, ValuationSnapshot};
use crate::month::{get_months_between, MonthKey};

/// Raw records of one investment bucketed into calendar months.
///
/// Deposits and withdrawals accumulate within a month; valuation snapshots
/// and rate observations overwrite, so the last-processed record of a month
/// wins. Months with no records simply have no key.
#[derive(Debug, Clone, Default)]
pub struct MonthlySeries {
    deposits_in: BTreeMap<MonthKey, i64>,
    withdrawals_out: BTreeMap<MonthKey, i64>,
    fact_raw: BTreeMap<MonthKey, i64>,
    rate_raw: BTreeMap<MonthKey, i64>,
}

impl MonthlySeries {
    pub fn from_records(
        cash_events: &[CashEvent],
        valuations: &[ValuationSnapshot],
        rates: &[RateObservation],
    ) -> Self {
        let mut series = MonthlySeries::default();

        for event in cash_events {
            let month = MonthKey::from_datetime(&event.date);
            if event.is_deposit() {
                *series.deposits_in.entry(month).or_insert(0) += event.amount;
            } else if event.is_withdrawal() {
                *series.withdrawals_out.entry(month).or_insert(0) += event.amount;
            }
        }

        for valuation in valuations {
            let month = MonthKey::from_datetime(&valuation.date);
            series.fact_raw.insert(month, valuation.value);
        }

        for rate in rates {
            let month = MonthKey::from_datetime(&rate.date);
            series.rate_raw.insert(month, rate.annual_rate_percent);
        }

        series
    }

    /// Contiguous month axis spanning the first to last month with any
    /// deposit, withdrawal, or valuation. Rate observations are shared
    /// across investments and do not widen the axis. Empty when the
    /// investment has no activity at all.
    pub fn month_range(&self) -> Vec<MonthKey> {
        let observed = self
            .deposits_in
            .keys()
            .chain(self.withdrawals_out.keys())
            .chain(self.fact_raw.keys());

        let first = observed.clone().min();
        let last = observed.max();

        match (first, last) {
            (Some(first), Some(last)) => get_months_between(*first, *last),
            _ => Vec::new(),
        }
    }

    pub fn deposits_in(&self, month: MonthKey) -> i64 {
        self.deposits_in.get(&month).copied().unwrap_or(0)
    }

    pub fn withdrawals_out(&self, month: MonthKey) -> i64 {
        self.withdrawals_out.get(&month).copied().unwrap_or(0)
    }

    /// Net contribution of a month: deposits plus (negative) withdrawals
    pub fn net_contribution(&self, month: MonthKey) -> i64 {
        self.deposits_in(month) + self.withdrawals_out(month)
    }

    pub fn fact(&self, month: MonthKey) -> Option<i64> {
        self.fact_raw.get(&month).copied()
    }

    pub fn rate(&self, month: MonthKey) -> Option<i64> {
        self.rate_raw.get(&month).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn datetime(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
    }

    fn cash_event(year: i32, month: u32, day: u32, amount: i64) -> CashEvent {
        CashEvent {
            investment_id: 1,
            date: datetime(year, month, day),
            amount,
            note: "test".to_string(),
        }
    }

    fn valuation(year: i32, month: u32, day: u32, value: i64) -> ValuationSnapshot {
        ValuationSnapshot {
            investment_id: 1,
            date: datetime(year, month, day),
            value,
        }
    }

    fn rate(year: i32, month: u32, day: u32, annual_rate_percent: i64) -> RateObservation {
        RateObservation {
            date: datetime(year, month, day),
            annual_rate_percent,
        }
    }

    #[test]
    fn test_deposits_and_withdrawals_accumulate_within_month() {
        let events = vec![
            cash_event(2022, 6, 1, 500),
            cash_event(2022, 6, 20, 300),
            cash_event(2022, 6, 25, -100),
            cash_event(2022, 6, 28, -50),
        ];
        let series = MonthlySeries::from_records(&events, &[], &[]);
        let june = MonthKey::new(2022, 6).unwrap();

        assert_eq!(series.deposits_in(june), 800);
        assert_eq!(series.withdrawals_out(june), -150);
        assert_eq!(series.net_contribution(june), 650);
    }

    #[test]
    fn test_bucketing_is_order_independent() {
        let mut events = vec![
            cash_event(2022, 6, 28, -50),
            cash_event(2022, 6, 1, 500),
            cash_event(2022, 7, 3, 200),
            cash_event(2022, 6, 20, 300),
        ];
        let forward = MonthlySeries::from_records(&events, &[], &[]);
        events.reverse();
        let reversed = MonthlySeries::from_records(&events, &[], &[]);

        let june = MonthKey::new(2022, 6).unwrap();
        let july = MonthKey::new(2022, 7).unwrap();
        assert_eq!(forward.deposits_in(june), reversed.deposits_in(june));
        assert_eq!(forward.withdrawals_out(june), reversed.withdrawals_out(june));
        assert_eq!(forward.deposits_in(july), reversed.deposits_in(july));
    }

    #[test]
    fn test_last_valuation_of_month_wins() {
        let valuations = vec![valuation(2022, 6, 5, 100), valuation(2022, 6, 25, 200)];
        let series = MonthlySeries::from_records(&[], &valuations, &[]);
        assert_eq!(series.fact(MonthKey::new(2022, 6).unwrap()), Some(200));
    }

    #[test]
    fn test_last_rate_of_month_wins() {
        let rates = vec![rate(2022, 6, 5, 7), rate(2022, 6, 25, 8)];
        let series = MonthlySeries::from_records(&[], &[], &rates);
        assert_eq!(series.rate(MonthKey::new(2022, 6).unwrap()), Some(8));
    }

    #[test]
    fn test_month_range_is_contiguous_across_gaps() {
        let events = vec![cash_event(2022, 1, 10, 100)];
        let valuations = vec![valuation(2022, 5, 10, 400)];
        let series = MonthlySeries::from_records(&events, &valuations, &[]);

        let range: Vec<String> = series.month_range().iter().map(|m| m.to_string()).collect();
        assert_eq!(
            range,
            vec!["2022-01", "2022-02", "2022-03", "2022-04", "2022-05"]
        );
    }

    #[test]
    fn test_rates_do_not_widen_month_range() {
        let events = vec![cash_event(2022, 6, 1, 1000)];
        let rates = vec![rate(2019, 5, 11, 7)];
        let series = MonthlySeries::from_records(&events, &[], &rates);

        let range = series.month_range();
        assert_eq!(range, vec![MonthKey::new(2022, 6).unwrap()]);
    }

    #[test]
    fn test_empty_records_produce_empty_range() {
        let series = MonthlySeries::from_records(&[], &[], &[]);
        assert!(series.month_range().is_empty());
    }

    #[test]
    fn test_zero_amount_event_is_ignored() {
        let events = vec![cash_event(2022, 6, 1, 0)];
        let series = MonthlySeries::from_records(&events, &[], &[]);
        let june = MonthKey::new(2022, 6).unwrap();
        assert_eq!(series.deposits_in(june), 0);
        assert_eq!(series.withdrawals_out(june), 0);
    }
}
