/// Annual benchmark rate (percent) assumed before the first rate observation
pub const DEFAULT_ANNUAL_RATE_PERCENT: i64 = 4;

/// Months per year, used to derive the monthly compounding factor
pub const MONTHS_PER_YEAR: u32 = 12;

/// Decimal precision for percent columns in the report
pub const PERCENT_DECIMAL_PRECISION: u32 = 1;
