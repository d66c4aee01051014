pub mod investments_model;
pub mod investments_traits;

pub use investments_model::{CashEvent, Investment, RateObservation, ValuationSnapshot};
pub use investments_traits::ReportInputRepositoryTrait;
