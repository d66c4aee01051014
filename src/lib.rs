pub mod categories;
pub mod constants;
pub mod errors;
pub mod investments;
pub mod month;
pub mod reports;

pub use errors::{Error, Result};
pub use month::MonthKey;
pub use reports::*;
