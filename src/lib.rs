//! MRR Calculator - SaaS revenue projection over a fixed 12-month horizon
//!
//! This library provides:
//! - A deterministic month-by-month MRR projection engine (acquisition,
//!   churn, cumulative revenue)
//! - A presentation shell holding the four inputs and recomputing the
//!   projection on every edit
//! - A dual-axis text chart and summary cards mirroring the calculator UI
//! - CSV/JSON export of projection results

pub mod format;
pub mod inputs;
pub mod projection;
pub mod report;
pub mod shell;

// Re-export commonly used types
pub use inputs::CalculatorInputs;
pub use projection::{project, ProjectionRecord, ProjectionResult, ProjectionSummary};
pub use shell::{CalculatorShell, Chart, SummaryCards};
