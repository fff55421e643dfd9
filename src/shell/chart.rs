//! Dual-axis line chart rendered as terminal text
//!
//! Left axis = MRR (abbreviated currency ticks), right axis = customers,
//! shared x-axis = months 1..12. Below the narrow-width threshold the axis
//! legends are dropped so the plot itself keeps its room, the same
//! adaptation the responsive layout makes on small viewports.

use crate::format::{format_count, format_currency, format_currency_abbrev};
use crate::projection::ProjectionResult;

/// Plot body height in rows
const PLOT_ROWS: usize = 12;

/// Width below which axis legends are dropped
const NARROW_WIDTH: usize = 64;

/// Marker for the MRR series
const MRR_MARKER: char = '*';

/// Marker for the customers series
const CUSTOMERS_MARKER: char = 'o';

/// Marker where both series land on the same cell
const OVERLAP_MARKER: char = '#';

/// Chart layout configuration
#[derive(Debug, Clone, Copy)]
pub struct Chart {
    /// Total character width available for rendering
    pub width: usize,
}

impl Chart {
    pub fn new(width: usize) -> Self {
        Self { width: width.max(40) }
    }

    /// Whether the layout is too narrow for axis legends
    pub fn is_narrow(&self) -> bool {
        self.width < NARROW_WIDTH
    }

    /// Render the full dual-axis chart for a projection
    pub fn render(&self, result: &ProjectionResult) -> String {
        if result.records.is_empty() {
            return String::from("(no projection)\n");
        }

        let mrr_values: Vec<i64> = result.records.iter().map(|r| r.mrr).collect();
        let customer_values: Vec<i64> = result.records.iter().map(|r| r.customers).collect();

        let mrr_scale = AxisScale::fit(&mrr_values);
        let customer_scale = AxisScale::fit(&customer_values);

        // Column position per month within the plot body
        let left_gutter = 8; // tick labels like "$9k" right-aligned
        let right_gutter = 7;
        let body_width = self.width.saturating_sub(left_gutter + right_gutter).max(24);
        let step = (body_width - 1).max(1) / (result.records.len().max(2) - 1);
        let cols: Vec<usize> = (0..result.records.len()).map(|i| i * step).collect();
        let used_width = cols.last().copied().unwrap_or(0) + 1;

        let mut grid = vec![vec![' '; used_width]; PLOT_ROWS];
        for (i, record) in result.records.iter().enumerate() {
            let col = cols[i];
            let mrr_row = mrr_scale.row(record.mrr);
            let cust_row = customer_scale.row(record.customers);
            grid[mrr_row][col] = MRR_MARKER;
            grid[cust_row][col] = if cust_row == mrr_row {
                OVERLAP_MARKER
            } else {
                CUSTOMERS_MARKER
            };
        }

        let mut out = String::new();

        if !self.is_narrow() {
            out.push_str(&format!(
                "{:<left$}{:>right$}\n",
                "MRR ($)",
                "Customers",
                left = left_gutter + used_width / 2,
                right = right_gutter + used_width - used_width / 2,
            ));
        }

        for (row_idx, row) in grid.iter().enumerate() {
            let line: String = row.iter().collect();
            // Tick labels on the top, middle, and bottom rows
            let ticked = row_idx == 0 || row_idx == PLOT_ROWS - 1 || row_idx == PLOT_ROWS / 2;
            let left_label = if ticked {
                format_currency_abbrev(mrr_scale.value_at(row_idx))
            } else {
                String::new()
            };
            let right_label = if ticked {
                format_count(customer_scale.value_at(row_idx))
            } else {
                String::new()
            };
            out.push_str(&format!(
                "{:>lg$} |{}| {}\n",
                left_label,
                line,
                right_label,
                lg = left_gutter - 2,
            ));
        }

        // X axis and month labels
        out.push_str(&format!(
            "{:>lg$} +{}+\n",
            "",
            "-".repeat(used_width),
            lg = left_gutter - 2,
        ));
        let mut axis = vec![' '; used_width + 2];
        for (i, &col) in cols.iter().enumerate() {
            let label = (i + 1).to_string();
            for (j, ch) in label.chars().enumerate() {
                let pos = col + 1 + j;
                if pos < axis.len() {
                    axis[pos] = ch;
                }
            }
        }
        out.push_str(&format!(
            "{:>lg$} {}\n",
            "",
            axis.iter().collect::<String>(),
            lg = left_gutter - 2,
        ));
        if !self.is_narrow() {
            out.push_str(&format!(
                "{:>lg$}\n",
                "Month",
                lg = left_gutter + used_width / 2 + 2,
            ));
            out.push_str(&format!(
                "{:>lg$} {} MRR   {} Customers\n",
                "",
                MRR_MARKER,
                CUSTOMERS_MARKER,
                lg = left_gutter - 2,
            ));
        }

        out
    }

    /// Exact values for one month, the hover-tooltip contract: currency
    /// formatted MRR with no fractional digits plus the customer count
    pub fn tooltip(&self, result: &ProjectionResult, month: u32) -> Option<String> {
        let record = result.records.iter().find(|r| r.month == month)?;
        Some(format!(
            "Month {}: MRR {}, customers {}",
            record.month,
            format_currency(record.mrr),
            format_count(record.customers),
        ))
    }
}

impl Default for Chart {
    fn default() -> Self {
        Self::new(100)
    }
}

/// Linear scale mapping a value range onto the plot rows (row 0 = top)
#[derive(Debug, Clone, Copy)]
struct AxisScale {
    min: i64,
    max: i64,
}

impl AxisScale {
    /// Fit a scale to the series, anchored at zero like the source chart's
    /// `domain={[0, 'auto']}` unless the data dips below it
    fn fit(values: &[i64]) -> Self {
        let min = values.iter().copied().min().unwrap_or(0).min(0);
        let max = values.iter().copied().max().unwrap_or(0).max(min + 1);
        Self { min, max }
    }

    /// Grid row for a value (0 = top row)
    fn row(&self, value: i64) -> usize {
        let span = (self.max - self.min) as f64;
        let frac = (value - self.min) as f64 / span;
        let row = ((PLOT_ROWS - 1) as f64 * frac).round() as usize;
        (PLOT_ROWS - 1).saturating_sub(row.min(PLOT_ROWS - 1))
    }

    /// Axis value shown beside a given row
    fn value_at(&self, row: usize) -> i64 {
        let frac = (PLOT_ROWS - 1 - row) as f64 / (PLOT_ROWS - 1) as f64;
        self.min + ((self.max - self.min) as f64 * frac).round() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::CalculatorInputs;
    use crate::projection::project;

    fn reference_projection() -> ProjectionResult {
        project(&CalculatorInputs::default())
    }

    #[test]
    fn test_scale_maps_extremes_to_edge_rows() {
        let scale = AxisScale::fit(&[0, 500, 1000]);
        assert_eq!(scale.row(1000), 0);
        assert_eq!(scale.row(0), PLOT_ROWS - 1);
    }

    #[test]
    fn test_scale_is_zero_anchored_for_positive_data() {
        let scale = AxisScale::fit(&[980, 9261]);
        assert_eq!(scale.min, 0);
        assert_eq!(scale.max, 9261);
    }

    #[test]
    fn test_scale_extends_below_zero_when_needed() {
        let scale = AxisScale::fit(&[-50, 100]);
        assert_eq!(scale.min, -50);
        assert_eq!(scale.row(-50), PLOT_ROWS - 1);
    }

    #[test]
    fn test_scale_handles_flat_series() {
        let scale = AxisScale::fit(&[0, 0, 0]);
        assert_eq!(scale.row(0), PLOT_ROWS - 1);
    }

    #[test]
    fn test_render_contains_both_series_markers() {
        let chart = Chart::new(100);
        let rendered = chart.render(&reference_projection());
        assert!(rendered.contains(MRR_MARKER));
        assert!(rendered.contains(CUSTOMERS_MARKER));
        assert!(rendered.contains("$9k"));
    }

    #[test]
    fn test_wide_layout_shows_legends() {
        let chart = Chart::new(100);
        assert!(!chart.is_narrow());
        let rendered = chart.render(&reference_projection());
        assert!(rendered.contains("MRR ($)"));
        assert!(rendered.contains("Customers"));
        assert!(rendered.contains("Month"));
    }

    #[test]
    fn test_narrow_layout_drops_legends() {
        let chart = Chart::new(48);
        assert!(chart.is_narrow());
        let rendered = chart.render(&reference_projection());
        assert!(!rendered.contains("MRR ($)"));
        assert!(!rendered.contains("Month"));
        // Ticks stay even when legends go
        assert!(rendered.contains("$9k"));
    }

    #[test]
    fn test_tooltip_formats_exact_values() {
        let chart = Chart::default();
        let projection = reference_projection();
        assert_eq!(
            chart.tooltip(&projection, 2).as_deref(),
            Some("Month 2: MRR $1,911, customers 39"),
        );
        assert_eq!(chart.tooltip(&projection, 13), None);
    }

    #[test]
    fn test_render_of_empty_projection() {
        let chart = Chart::default();
        let rendered = chart.render(&ProjectionResult::new());
        assert!(rendered.contains("no projection"));
    }
}
