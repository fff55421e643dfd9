//! Projection output structures

use serde::{Deserialize, Serialize};

/// One row of projection output: the end-of-month position for one month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionRecord {
    /// Projection month (1-indexed, 1..=12)
    pub month: u32,

    /// Active customers after this month's acquisition and churn
    pub customers: i64,

    /// Monthly recurring revenue for this month (customers x price)
    pub mrr: i64,

    /// Running total of MRR over months 1..=this month
    pub cumulative_revenue: i64,
}

/// Complete projection result: the full 12-month sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// One record per month, month ascending
    pub records: Vec<ProjectionRecord>,
}

impl ProjectionResult {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Add a record row
    pub fn add_record(&mut self, record: ProjectionRecord) {
        self.records.push(record);
    }

    /// Last record of the sequence (month 12 for a full projection)
    pub fn final_record(&self) -> Option<&ProjectionRecord> {
        self.records.last()
    }

    /// Summary statistics derived from the final record
    pub fn summary(&self) -> ProjectionSummary {
        let last = self.records.last();
        ProjectionSummary {
            total_months: self.records.len() as u32,
            final_mrr: last.map(|r| r.mrr).unwrap_or(0),
            final_customers: last.map(|r| r.customers).unwrap_or(0),
            cumulative_revenue: last.map(|r| r.cumulative_revenue).unwrap_or(0),
        }
    }
}

impl Default for ProjectionResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Summary statistics for a projection (the three summary cards)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub total_months: u32,
    pub final_mrr: i64,
    pub final_customers: i64,
    pub cumulative_revenue: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_reads_last_record() {
        let mut result = ProjectionResult::new();
        result.add_record(ProjectionRecord {
            month: 1,
            customers: 20,
            mrr: 980,
            cumulative_revenue: 980,
        });
        result.add_record(ProjectionRecord {
            month: 2,
            customers: 39,
            mrr: 1911,
            cumulative_revenue: 2891,
        });

        let summary = result.summary();
        assert_eq!(summary.total_months, 2);
        assert_eq!(summary.final_mrr, 1911);
        assert_eq!(summary.final_customers, 39);
        assert_eq!(summary.cumulative_revenue, 2891);
    }

    #[test]
    fn test_summary_of_empty_result() {
        let result = ProjectionResult::new();
        let summary = result.summary();
        assert_eq!(summary.total_months, 0);
        assert_eq!(summary.final_mrr, 0);
        assert_eq!(summary.cumulative_revenue, 0);
    }
}
