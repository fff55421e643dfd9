//! MRR Calculator CLI
//!
//! One-shot mode renders the projection for the flag-supplied inputs;
//! `--interactive` drops into an edit loop that re-renders the chart and
//! summary cards after every accepted input change.

use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use mrr_calculator::format::{format_count, format_currency};
use mrr_calculator::inputs::{CONVERSION_RATE_DOMAIN, MONTHLY_CHURN_DOMAIN};
use mrr_calculator::{report, CalculatorInputs, CalculatorShell, Chart};

/// Project SaaS monthly recurring revenue over 12 months
#[derive(Debug, Parser)]
#[command(name = "mrr_calculator", version, about)]
struct Cli {
    /// Monthly visitor traffic
    #[arg(long, default_value_t = 1000)]
    traffic: i64,

    /// Conversion rate in percent (0-10, 0.1 steps)
    #[arg(long, default_value_t = 2.0)]
    conversion: f64,

    /// Average price per customer per month in whole dollars
    #[arg(long, default_value_t = 49)]
    price: i64,

    /// Monthly churn in percent (0-20, 0.5 steps)
    #[arg(long, default_value_t = 5.0)]
    churn: f64,

    /// Chart width in characters
    #[arg(long, default_value_t = 100)]
    width: usize,

    /// Write the monthly records to a CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write inputs, records, and summary to a JSON file
    #[arg(long)]
    json: Option<PathBuf>,

    /// Interactive edit loop (traffic/conversion/price/churn/month/quit)
    #[arg(long, short)]
    interactive: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    // Slider-bound flags go through the same domain constraint the slider
    // control enforces; free-entry flags are already integers via clap.
    let inputs = CalculatorInputs {
        monthly_traffic: cli.traffic,
        conversion_rate: CONVERSION_RATE_DOMAIN.clamp(cli.conversion),
        average_price: cli.price,
        monthly_churn: MONTHLY_CHURN_DOMAIN.clamp(cli.churn),
    };
    let mut shell = CalculatorShell::with_inputs(inputs);
    let chart = Chart::new(cli.width);

    render(&shell, &chart);

    if let Some(path) = &cli.csv {
        let file = File::create(path)
            .with_context(|| format!("creating CSV output {}", path.display()))?;
        report::write_csv(file, shell.projection())?;
        println!("Records written to: {}", path.display());
    }

    if let Some(path) = &cli.json {
        let file = File::create(path)
            .with_context(|| format!("creating JSON output {}", path.display()))?;
        report::write_json(file, shell.inputs(), shell.projection())?;
        println!("Report written to: {}", path.display());
    }

    if cli.interactive {
        run_interactive(&mut shell, &chart, io::stdin().lock())?;
    }

    Ok(())
}

/// Render the full calculator view: inputs, summary cards, chart, table
fn render(shell: &CalculatorShell, chart: &Chart) {
    let inputs = shell.inputs();

    println!("SaaS MRR Calculator");
    println!("===================\n");
    println!("Inputs:");
    println!("  Monthly Traffic: {} visitors", inputs.monthly_traffic);
    println!("  Conversion Rate: {}%", inputs.conversion_rate);
    println!("  Average Price:   ${}/mo", inputs.average_price);
    println!("  Monthly Churn:   {}%", inputs.monthly_churn);
    println!();

    print!("{}", shell.summary_cards().render());
    println!();
    print!("{}", chart.render(shell.projection()));
    println!();

    println!(
        "{:>5} {:>12} {:>14} {:>18}",
        "Month", "Customers", "MRR", "Cumulative"
    );
    println!("{}", "-".repeat(52));
    for record in &shell.projection().records {
        println!(
            "{:>5} {:>12} {:>14} {:>18}",
            record.month,
            format_count(record.customers),
            format_currency(record.mrr),
            format_currency(record.cumulative_revenue),
        );
    }
    println!();
}

/// Read edit commands line by line, re-rendering after every change
///
/// Command failures (bad values, unwritable export paths) print and leave
/// the session running; only EOF or `quit` ends the loop.
fn run_interactive<R: BufRead>(
    shell: &mut CalculatorShell,
    chart: &Chart,
    mut input: R,
) -> Result<()> {
    println!("Interactive mode. Commands: traffic N, conversion N, price N,");
    println!("churn N, month N, csv PATH, json PATH, show, quit");

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break; // EOF
        }
        let mut parts = line.trim().splitn(2, ' ');
        let command = parts.next().unwrap_or("");
        let argument = parts.next().unwrap_or("").trim();

        match command {
            "" => continue,
            "quit" | "exit" | "q" => break,
            "show" => render(shell, chart),
            "traffic" => {
                shell.set_monthly_traffic_raw(argument);
                render(shell, chart);
            }
            "price" => {
                shell.set_average_price_raw(argument);
                render(shell, chart);
            }
            "conversion" => match argument.parse::<f64>() {
                Ok(value) => {
                    shell.set_conversion_rate(value);
                    render(shell, chart);
                }
                Err(_) => println!("conversion takes a number (0-10)"),
            },
            "churn" => match argument.parse::<f64>() {
                Ok(value) => {
                    shell.set_monthly_churn(value);
                    render(shell, chart);
                }
                Err(_) => println!("churn takes a number (0-20)"),
            },
            "month" => match argument.parse::<u32>() {
                Ok(month) => match chart.tooltip(shell.projection(), month) {
                    Some(tooltip) => println!("{tooltip}"),
                    None => println!("month must be 1-12"),
                },
                Err(_) => println!("month takes a number (1-12)"),
            },
            "csv" => match File::create(argument) {
                Ok(file) => match report::write_csv(file, shell.projection()) {
                    Ok(()) => println!("Records written to: {argument}"),
                    Err(err) => println!("cannot write {argument}: {err}"),
                },
                Err(err) => println!("cannot create {argument}: {err}"),
            },
            "json" => match File::create(argument) {
                Ok(file) => match report::write_json(file, shell.inputs(), shell.projection()) {
                    Ok(()) => println!("Report written to: {argument}"),
                    Err(err) => println!("cannot write {argument}: {err}"),
                },
                Err(err) => println!("cannot create {argument}: {err}"),
            },
            other => println!("unknown command: {other}"),
        }
    }

    Ok(())
}
