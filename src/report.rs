//! CSV and JSON export of projection results

use std::io::Write;

use serde::Serialize;
use thiserror::Error;

use crate::inputs::CalculatorInputs;
use crate::projection::{ProjectionRecord, ProjectionResult, ProjectionSummary};

/// Failures while writing a projection report
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Full report payload for JSON export
#[derive(Debug, Serialize)]
struct ReportPayload<'a> {
    inputs: &'a CalculatorInputs,
    records: &'a [ProjectionRecord],
    summary: ProjectionSummary,
}

/// Write the 12 monthly records as CSV
///
/// Header row comes from the record field names:
/// `month,customers,mrr,cumulative_revenue`.
pub fn write_csv<W: Write>(writer: W, result: &ProjectionResult) -> Result<(), ReportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in &result.records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write inputs, records, and summary as pretty-printed JSON
pub fn write_json<W: Write>(
    mut writer: W,
    inputs: &CalculatorInputs,
    result: &ProjectionResult,
) -> Result<(), ReportError> {
    let payload = ReportPayload {
        inputs,
        records: &result.records,
        summary: result.summary(),
    };
    serde_json::to_writer_pretty(&mut writer, &payload)?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::project;
    use std::fs;
    use std::fs::File;

    #[test]
    fn test_csv_has_header_and_twelve_rows() {
        let result = project(&CalculatorInputs::default());
        let mut buffer = Vec::new();
        write_csv(&mut buffer, &result).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 13);
        assert_eq!(lines[0], "month,customers,mrr,cumulative_revenue");
        assert_eq!(lines[1], "1,20,980,980");
        assert_eq!(lines[12], "12,189,9261,65660");
    }

    #[test]
    fn test_json_round_trips_summary() {
        let inputs = CalculatorInputs::default();
        let result = project(&inputs);
        let mut buffer = Vec::new();
        write_json(&mut buffer, &inputs, &result).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed["inputs"]["monthly_traffic"], 1000);
        assert_eq!(parsed["records"].as_array().unwrap().len(), 12);
        assert_eq!(parsed["summary"]["final_mrr"], 9261);
        assert_eq!(parsed["summary"]["cumulative_revenue"], 65660);
    }

    #[test]
    fn test_reports_write_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let inputs = CalculatorInputs::default();
        let result = project(&inputs);

        let csv_path = dir.path().join("projection.csv");
        write_csv(File::create(&csv_path).unwrap(), &result).unwrap();
        let csv_text = fs::read_to_string(&csv_path).unwrap();
        assert!(csv_text.starts_with("month,customers,mrr,cumulative_revenue"));

        let json_path = dir.path().join("projection.json");
        write_json(File::create(&json_path).unwrap(), &inputs, &result).unwrap();
        let json_text = fs::read_to_string(&json_path).unwrap();
        assert!(json_text.contains("\"final_customers\": 189"));
    }
}
