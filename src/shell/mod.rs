//! Presentation shell: input state, reactive recomputation, and the
//! display collaborators (chart, summary cards)

mod chart;
mod summary;

pub use chart::Chart;
pub use summary::SummaryCards;

use crate::inputs::{
    parse_or_zero, CalculatorInputs, CONVERSION_RATE_DOMAIN, MONTHLY_CHURN_DOMAIN,
};
use crate::projection::{project, ProjectionResult};

/// Owns the four input values and the projection derived from them
///
/// Every edit recomputes the full sequence from the complete current input
/// tuple and replaces the prior result wholesale. Observers reading
/// `projection()` between edits always see one consistent sequence, never a
/// partially updated one.
#[derive(Debug, Clone)]
pub struct CalculatorShell {
    inputs: CalculatorInputs,
    projection: ProjectionResult,
}

impl CalculatorShell {
    /// Start the shell at the default inputs, projection already computed
    pub fn new() -> Self {
        Self::with_inputs(CalculatorInputs::default())
    }

    /// Start the shell at a specific input snapshot
    pub fn with_inputs(inputs: CalculatorInputs) -> Self {
        Self {
            projection: project(&inputs),
            inputs,
        }
    }

    /// Current input snapshot
    pub fn inputs(&self) -> &CalculatorInputs {
        &self.inputs
    }

    /// Current derived projection
    pub fn projection(&self) -> &ProjectionResult {
        &self.projection
    }

    /// Summary cards for the current projection
    pub fn summary_cards(&self) -> SummaryCards {
        SummaryCards::from_projection(&self.projection)
    }

    /// Edit the traffic field from raw free-entry text
    ///
    /// Unparseable text coerces to 0; the edit is never rejected.
    pub fn set_monthly_traffic_raw(&mut self, raw: &str) {
        self.inputs.monthly_traffic = parse_or_zero(raw);
        self.recompute();
    }

    /// Edit the price field from raw free-entry text
    pub fn set_average_price_raw(&mut self, raw: &str) {
        self.inputs.average_price = parse_or_zero(raw);
        self.recompute();
    }

    /// Move the conversion-rate slider (clamped to [0, 10], 0.1 steps)
    pub fn set_conversion_rate(&mut self, value: f64) {
        self.inputs.conversion_rate = CONVERSION_RATE_DOMAIN.clamp(value);
        self.recompute();
    }

    /// Move the churn slider (clamped to [0, 20], 0.5 steps)
    pub fn set_monthly_churn(&mut self, value: f64) {
        self.inputs.monthly_churn = MONTHLY_CHURN_DOMAIN.clamp(value);
        self.recompute();
    }

    fn recompute(&mut self) {
        log::debug!(
            "recomputing projection: traffic={} conversion={}% price={} churn={}%",
            self.inputs.monthly_traffic,
            self.inputs.conversion_rate,
            self.inputs.average_price,
            self.inputs.monthly_churn,
        );
        self.projection = project(&self.inputs);
    }
}

impl Default for CalculatorShell {
    fn default() -> Self {
        Self::new()
    }
}
