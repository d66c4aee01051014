pub mod benchmark;
pub mod metrics_calculator;
pub mod reports_model;
pub mod reports_service;
pub mod series_builder;


pub use benchmark::BenchmarkSimulator;
pub use metrics_calculator::calculate_monthly_metrics;
pub use reports_model::{InvestmentReport, InvestmentReportItem, MonthlyMetrics};
pub use reports_service::{ReportService, ReportServiceTrait};
pub use series_builder::MonthlySeries;
