//! Sweep the conversion-rate x churn grid for fixed traffic and price
//!
//! Walks both slider domains at their native steps, projects every cell in
//! parallel, and writes the month-12 surface (MRR, customers, cumulative
//! revenue) to CSV for spreadsheet analysis.
//!
//! Accepts config via environment variables: SWEEP_TRAFFIC, SWEEP_PRICE

use std::env;
use std::fs::File;
use std::time::Instant;

use rayon::prelude::*;

use mrr_calculator::inputs::{CONVERSION_RATE_DOMAIN, MONTHLY_CHURN_DOMAIN};
use mrr_calculator::{project, CalculatorInputs};

/// One cell of the sweep surface
#[derive(Debug, Clone, serde::Serialize)]
struct SweepRow {
    conversion_rate: f64,
    monthly_churn: f64,
    final_customers: i64,
    final_mrr: i64,
    cumulative_revenue: i64,
}

fn env_i64(name: &str, default: i64) -> i64 {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Walk a slider domain at its native step
fn domain_steps(domain: &mrr_calculator::inputs::SliderDomain) -> Vec<f64> {
    let count = ((domain.max - domain.min) / domain.step).round() as usize;
    (0..=count)
        .map(|i| domain.clamp(domain.min + i as f64 * domain.step))
        .collect()
}

fn main() {
    env_logger::init();

    let traffic = env_i64("SWEEP_TRAFFIC", 1000);
    let price = env_i64("SWEEP_PRICE", 49);

    let conversions = domain_steps(&CONVERSION_RATE_DOMAIN);
    let churns = domain_steps(&MONTHLY_CHURN_DOMAIN);

    let cells: Vec<(f64, f64)> = conversions
        .iter()
        .flat_map(|&c| churns.iter().map(move |&ch| (c, ch)))
        .collect();

    println!(
        "Sweeping {} scenarios (traffic={}, price=${})...",
        cells.len(),
        traffic,
        price
    );
    let start = Instant::now();

    let rows: Vec<SweepRow> = cells
        .par_iter()
        .map(|&(conversion_rate, monthly_churn)| {
            let inputs = CalculatorInputs {
                monthly_traffic: traffic,
                conversion_rate,
                average_price: price,
                monthly_churn,
            };
            let summary = project(&inputs).summary();
            SweepRow {
                conversion_rate,
                monthly_churn,
                final_customers: summary.final_customers,
                final_mrr: summary.final_mrr,
                cumulative_revenue: summary.cumulative_revenue,
            }
        })
        .collect();

    println!("Sweep complete in {:?}", start.elapsed());

    let output_path = "sweep_output.csv";
    let file = File::create(output_path).expect("Failed to create output file");
    let mut writer = csv::Writer::from_writer(file);
    for row in &rows {
        writer.serialize(row).expect("Failed to write sweep row");
    }
    writer.flush().expect("Failed to flush sweep output");

    println!("Output written to {}", output_path);

    // Corner cells for a quick sanity read
    println!("\nSurface corners (month-12 MRR):");
    for &(c, ch) in &[
        (CONVERSION_RATE_DOMAIN.min, MONTHLY_CHURN_DOMAIN.min),
        (CONVERSION_RATE_DOMAIN.min, MONTHLY_CHURN_DOMAIN.max),
        (CONVERSION_RATE_DOMAIN.max, MONTHLY_CHURN_DOMAIN.min),
        (CONVERSION_RATE_DOMAIN.max, MONTHLY_CHURN_DOMAIN.max),
    ] {
        if let Some(row) = rows
            .iter()
            .find(|r| r.conversion_rate == c && r.monthly_churn == ch)
        {
            println!(
                "  conversion={:>4}% churn={:>4}%: MRR=${} customers={}",
                c, ch, row.final_mrr, row.final_customers
            );
        }
    }

    println!("\nTotal time: {:?}", start.elapsed());
}
