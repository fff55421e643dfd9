//! Core projection engine: the 12-month MRR simulation

use super::records::{ProjectionRecord, ProjectionResult};
use super::state::ProjectionState;
use crate::inputs::CalculatorInputs;

/// Fixed projection horizon in months
///
/// The horizon is part of the product definition, not a tunable: every
/// projection is exactly twelve months.
pub const PROJECTION_MONTHS: u32 = 12;

/// Run the projection for one input snapshot
///
/// Pure and total: any numeric input tuple produces a full 12-record
/// sequence, identical on every call with the same inputs. No clamping is
/// applied beyond the flooring inherent in the customer arithmetic; bounds
/// enforcement belongs to the input surface.
pub fn project(inputs: &CalculatorInputs) -> ProjectionResult {
    let mut result = ProjectionResult::new();
    let mut state = ProjectionState::new();

    for _month in 1..=PROJECTION_MONTHS {
        state.advance_month(inputs);

        result.add_record(ProjectionRecord {
            month: state.month,
            customers: state.customers,
            mrr: state.mrr(inputs),
            cumulative_revenue: state.cumulative_revenue,
        });
    }

    result
}
