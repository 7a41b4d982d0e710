mod engine;
mod ledger;
mod models;
mod pricing;
mod report;

use std::env;
use std::io::{BufWriter, Write, stderr, stdout};
use std::path::Path;
use std::process::exit;

use anyhow::{Result, bail};
use chrono::NaiveDate;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

use crate::engine::CostBasisEngine;
use crate::models::CostBasisSummary;
use crate::pricing::CryptoComparePrices;
use crate::report::write_report;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: btc-cost-basis [ledger].csv [min-date:optional, YYYY-MM-DD]");
        exit(1);
    }

    setup_logging();

    let path = &args[1];
    let min_date = match args.get(2) {
        Some(raw) => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                eprintln!("Invalid minimum date '{raw}', expected YYYY-MM-DD");
                exit(1);
            }
        },
        None => None,
    };

    if !Path::new(path).exists() {
        bail!("Ledger file not found: {path}");
    }

    let mut source = CryptoComparePrices::new()?;
    if let Ok(base_url) = env::var("PRICE_SERVICE_URL") {
        source = source.with_base_url(base_url);
    }

    let engine = CostBasisEngine::new(source);
    let outcome = engine.run(path, min_date).await?;

    if outcome.deposits_found == 0 {
        println!("No BTC deposits found in {path}.");
        return Ok(());
    }

    if outcome.priced.is_empty() {
        println!("No price data could be fetched; nothing to report.");
        return Ok(());
    }

    let summary = CostBasisSummary::from_deposits(&outcome.priced);

    let mut output = BufWriter::new(stdout().lock());
    write_report(&mut output, &summary, &outcome.priced, min_date)?;
    output.flush()?;

    Ok(())
}

fn setup_logging() {
    //NOTE: The report owns stdout, so all logging goes to stderr
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
