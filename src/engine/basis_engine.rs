use std::str::FromStr;
use std::time::Duration;

use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use tokio::time::sleep;
use tracing::{info, warn};

use crate::ledger::{self, COL_DATE, COL_IN_AMOUNT};
use crate::models::PricedDeposit;
use crate::pricing::PriceSource;

/// The price service budgets requests per second; stay well under it.
const DEFAULT_REQUEST_SPACING: Duration = Duration::from_secs(3);

/// Result of one pass over a wallet export.
pub struct RunOutcome {
    /// How many BTC deposits survived filtering.
    pub deposits_found: usize,
    /// Deposits that were successfully priced, in input order.
    pub priced: Vec<PricedDeposit>,
}

/// Sequential cost-basis pipeline over a wallet export file.
pub struct CostBasisEngine<P> {
    source: P,
    request_spacing: Duration,
}

impl<P: PriceSource> CostBasisEngine<P> {
    pub fn new(source: P) -> Self {
        Self {
            source,
            request_spacing: DEFAULT_REQUEST_SPACING,
        }
    }

    /// Overrides the minimum delay between consecutive price lookups.
    pub fn with_request_spacing(mut self, spacing: Duration) -> Self {
        self.request_spacing = spacing;
        self
    }

    /// Parses the export, filters for BTC deposits, and prices each one.
    ///
    /// Lookups run strictly one after another with the configured spacing in
    /// between; no delay follows the final one. A failed lookup is logged and
    /// skipped, it never aborts the run.
    ///
    /// # Errors
    /// Only a whole-file open or read failure is fatal.
    pub async fn run(&self, path: &str, min_date: Option<NaiveDate>) -> Result<RunOutcome> {
        info!("Reading ledger from {path}");
        let records = ledger::read_ledger(path)?;
        info!("Parsed {} ledger row(s)", records.len());

        let deposits = ledger::filter_btc_deposits(records, min_date);
        info!("Matched {} BTC deposit(s)", deposits.len());

        let total = deposits.len();
        let mut priced = Vec::with_capacity(total);

        for (index, record) in deposits.iter().enumerate() {
            match ledger::parse_timestamp(record.get(COL_DATE)) {
                Some(date) => {
                    info!(
                        "[{}/{}] Fetching BTC price for {}",
                        index + 1,
                        total,
                        date.format("%Y-%m-%d")
                    );

                    match self.source.price_at(date).await {
                        Ok(price) => {
                            if let Ok(amount) = Decimal::from_str(record.get(COL_IN_AMOUNT)) {
                                priced.push(PricedDeposit::new(date, amount, price));
                            }
                        }
                        Err(error) => {
                            warn!("Skipping deposit dated {}: {error}", date.format("%Y-%m-%d"));
                        }
                    }
                }
                None => {
                    //NOTE: Only reachable without a date threshold; the filter already
                    //      rejected unparseable dates when one was given.
                    warn!(
                        "Skipping deposit with unparseable date '{}'",
                        record.get(COL_DATE)
                    );
                }
            }

            if index + 1 < total {
                sleep(self.request_spacing).await;
            }
        }

        Ok(RunOutcome {
            deposits_found: total,
            priced,
        })
    }
}
