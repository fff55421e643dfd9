//! The three summary cards derived from the final projection month

use crate::format::{format_count, format_currency};
use crate::projection::ProjectionResult;

/// Formatted summary cards: final-month MRR, final-month customers, and
/// cumulative 12-month revenue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryCards {
    pub final_mrr: String,
    pub final_customers: String,
    pub cumulative_revenue: String,
}

impl SummaryCards {
    /// Build the cards from the last record of a projection
    pub fn from_projection(result: &ProjectionResult) -> Self {
        let summary = result.summary();
        Self {
            final_mrr: format_currency(summary.final_mrr),
            final_customers: format_count(summary.final_customers),
            cumulative_revenue: format_currency(summary.cumulative_revenue),
        }
    }

    /// Render the cards as display lines
    pub fn render(&self) -> String {
        format!(
            "Month 12 MRR:        {}\n\
             Projected Customers: {}\n\
             12-Month Revenue:    {}\n",
            self.final_mrr, self.final_customers, self.cumulative_revenue,
        )
    }
}
