//! Running state of a projection in progress

use crate::inputs::CalculatorInputs;

/// State carried from one simulated month to the next
///
/// Each month depends only on the prior month's customer count; everything
/// else is recomputed from the input snapshot.
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Current projection month (0 before the first month is simulated)
    pub month: u32,

    /// Active customers at the end of the last simulated month
    pub customers: i64,

    /// Total MRR accumulated across simulated months
    pub cumulative_revenue: i64,
}

impl ProjectionState {
    /// Initial state at projection start: no customers, no revenue
    pub fn new() -> Self {
        Self {
            month: 0,
            customers: 0,
            cumulative_revenue: 0,
        }
    }

    /// Simulate one month forward
    ///
    /// Acquisition is a flat function of traffic and conversion rate (an
    /// external channel, not word-of-mouth). Churn applies to the count
    /// carried in from the prior month, before this month's additions.
    /// The net update is intentionally not floored at zero, so a churn
    /// rate above 100% can drive the count negative.
    pub fn advance_month(&mut self, inputs: &CalculatorInputs) {
        self.month += 1;

        let new_customers = floor_pct(inputs.monthly_traffic, inputs.conversion_rate);
        let churned_customers = floor_pct(self.customers, inputs.monthly_churn);

        self.customers = self.customers + new_customers - churned_customers;
        self.cumulative_revenue += self.mrr(inputs);
    }

    /// MRR at the current customer count
    pub fn mrr(&self, inputs: &CalculatorInputs) -> i64 {
        self.customers * inputs.average_price
    }
}

impl Default for ProjectionState {
    fn default() -> Self {
        Self::new()
    }
}

/// floor(base x pct / 100), flooring toward negative infinity
fn floor_pct(base: i64, pct: f64) -> i64 {
    (base as f64 * pct / 100.0).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_empty() {
        let state = ProjectionState::new();
        assert_eq!(state.month, 0);
        assert_eq!(state.customers, 0);
        assert_eq!(state.cumulative_revenue, 0);
    }

    #[test]
    fn test_floor_pct_rounds_down() {
        assert_eq!(floor_pct(1000, 2.0), 20);
        assert_eq!(floor_pct(39, 5.0), 1); // 1.95 floors to 1
        assert_eq!(floor_pct(0, 5.0), 0);
    }

    #[test]
    fn test_floor_pct_negative_base_floors_toward_neg_infinity() {
        // Matches Math.floor semantics, not truncation
        assert_eq!(floor_pct(-39, 5.0), -2); // -1.95 floors to -2
    }

    #[test]
    fn test_advance_month_applies_churn_before_additions() {
        let inputs = CalculatorInputs::default();
        let mut state = ProjectionState::new();

        state.advance_month(&inputs);
        assert_eq!(state.month, 1);
        assert_eq!(state.customers, 20);
        assert_eq!(state.cumulative_revenue, 980);

        // Month 2: churn of floor(20 * 5%) = 1 comes off the carried-in 20
        state.advance_month(&inputs);
        assert_eq!(state.customers, 39);
        assert_eq!(state.cumulative_revenue, 2891);
    }
}
