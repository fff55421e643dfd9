//! Month-by-month MRR projection over the fixed 12-month horizon

mod engine;
mod records;
mod state;

pub use engine::{project, PROJECTION_MONTHS};
pub use records::{ProjectionRecord, ProjectionResult, ProjectionSummary};
pub use state::ProjectionState;
