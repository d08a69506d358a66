use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use simple_logger::SimpleLogger;

use amortize::loan::Loan;
use amortize::writer;

/// Generate a loan amortization schedule.
#[derive(Parser)]
#[command(name = "amortize", version)]
struct Cli {
    /// Loan principal amount (e.g. 50000 for $50,000)
    #[arg(long, value_parser = parse_principal)]
    principal: f64,

    /// Annual interest rate percentage (e.g. 6 for 6%)
    #[arg(long, value_parser = parse_rate)]
    rate: f64,

    /// Amortization period in years
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    years: u32,

    /// Write the schedule here instead of the derived filename
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .init()?;

    let cli = Cli::parse();
    let loan = Loan::new(cli.principal, cli.rate, cli.years);
    let schedule = loan.amortization_schedule();

    let path = cli
        .output
        .unwrap_or_else(|| PathBuf::from(schedule_filename(&loan)));
    writer::write_schedule_to_file(&schedule, &path)
        .with_context(|| format!("failed to write schedule to {}", path.display()))?;
    println!("Amortization schedule saved to {}", path.display());
    Ok(())
}

/// Derives the output filename from the loan terms, e.g.
/// `loan_50000k_6pct_5yr.csv`. The principal is truncated to a whole number
/// and the rate rounded to zero decimals, so distinct terms can share a name.
fn schedule_filename(loan: &Loan) -> String {
    format!(
        "loan_{}k_{:.0}pct_{}yr.csv",
        loan.principal as i64, loan.annual_rate, loan.years
    )
}

fn parse_principal(value: &str) -> Result<f64, String> {
    let principal: f64 = value
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))?;
    if principal.is_finite() && principal > 0. {
        Ok(principal)
    } else {
        Err("principal must be greater than zero".to_string())
    }
}

fn parse_rate(value: &str) -> Result<f64, String> {
    let rate: f64 = value
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))?;
    if rate.is_finite() && rate >= 0. {
        Ok(rate)
    } else {
        Err("rate cannot be negative".to_string())
    }
}
