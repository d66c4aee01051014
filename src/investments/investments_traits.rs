use crate::categories::Category;
use crate::errors::Result;
use crate::investments::investments_model::{
    CashEvent, Investment, RateObservation, ValuationSnapshot,
};
use async_trait::async_trait;

/// Read-only view of the external data store that feeds the report engine.
///
/// The engine never writes through this trait; each report build fetches its
/// own snapshot of the raw records and owns the derived structures until the
/// finished report is handed back to the caller.
#[async_trait]
pub trait ReportInputRepositoryTrait: Send + Sync {
    /// All investments owned by the user, in presentation order
    async fn get_investments(&self, user_id: i64) -> Result<Vec<Investment>>;

    /// Deposit/withdrawal events for one investment, in processing order
    async fn get_cash_events(&self, user_id: i64, investment_id: i64) -> Result<Vec<CashEvent>>;

    /// Valuation snapshots for one investment, in processing order
    async fn get_valuation_snapshots(
        &self,
        user_id: i64,
        investment_id: i64,
    ) -> Result<Vec<ValuationSnapshot>>;

    /// The interest-rate table shared across all investments
    async fn get_rate_observations(&self) -> Result<Vec<RateObservation>>;

    /// Category table for label resolution
    async fn get_categories(&self, user_id: i64) -> Result<Vec<Category>>;
}
