use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};

use crate::categories::Category;
use crate::errors::Result;
use crate::investments::ReportInputRepositoryTrait;
use crate::reports::metrics_calculator::calculate_monthly_metrics;
use crate::reports::reports_model::{InvestmentReport, InvestmentReportItem};
use crate::reports::series_builder::MonthlySeries;

#[async_trait]
pub trait ReportServiceTrait: Send + Sync {
    /// Builds the full monthly performance report for a user, one block per
    /// investment. Recomputed from the current raw records on every call;
    /// nothing is cached or persisted.
    async fn build_investment_report(&self, user_id: i64) -> Result<InvestmentReport>;
}

pub struct ReportService {
    repository: Arc<dyn ReportInputRepositoryTrait>,
}

impl ReportService {
    pub fn new(repository: Arc<dyn ReportInputRepositoryTrait>) -> Self {
        ReportService { repository }
    }
}

#[async_trait]
impl ReportServiceTrait for ReportService {
    async fn build_investment_report(&self, user_id: i64) -> Result<InvestmentReport> {
        debug!("Building investment report for user {}", user_id);

        let investments = self.repository.get_investments(user_id).await?;
        let categories = self.repository.get_categories(user_id).await?;
        let rates = self.repository.get_rate_observations().await?;

        let category_labels = Category::build_label_lookup(&categories);

        let mut items = Vec::with_capacity(investments.len());
        for investment in &investments {
            let cash_events = self
                .repository
                .get_cash_events(user_id, investment.id)
                .await?;
            let valuations = self
                .repository
                .get_valuation_snapshots(user_id, investment.id)
                .await?;

            let series = MonthlySeries::from_records(&cash_events, &valuations, &rates);
            let months = series.month_range();
            if months.is_empty() {
                warn!(
                    "Investment {} ('{}') has no recorded activity, reporting an empty series",
                    investment.id, investment.description
                );
            }

            let category = match investment.category_id {
                Some(category_id) => match category_labels.get(&category_id) {
                    Some(label) => label.clone(),
                    None => {
                        warn!(
                            "Investment {} references missing category {}, using empty label",
                            investment.id, category_id
                        );
                        String::new()
                    }
                },
                None => String::new(),
            };

            items.push(InvestmentReportItem {
                id: investment.id,
                description: investment.description.clone(),
                category,
                metrics: calculate_monthly_metrics(&series, &months),
            });
        }

        debug!(
            "Investment report for user {} built with {} investments",
            user_id,
            items.len()
        );

        Ok(InvestmentReport { items })
    }
}
