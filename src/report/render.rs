use std::io::{Result, Write};

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{CostBasisSummary, PricedDeposit};

/// Renders the summary block and the per-deposit table.
///
/// Presentation only; every figure is computed upstream. BTC quantities show
/// 8 decimal places, fiat figures 2 with a dollar sign, columns are
/// left-justified at fixed widths.
pub fn write_report<W: Write>(
    output: &mut W,
    summary: &CostBasisSummary,
    deposits: &[PricedDeposit],
    min_date: Option<NaiveDate>,
) -> Result<()> {
    writeln!(output, "=== BTC DEPOSIT COST BASIS ===")?;

    if let Some(threshold) = min_date {
        writeln!(output, "Deposits from: {}", threshold.format("%Y-%m-%d"))?;
    }

    writeln!(output, "Transactions: {}", deposits.len())?;
    writeln!(output, "Total BTC: {}", btc(summary.total_btc))?;
    writeln!(output, "Total cost: {}", usd(summary.total_usd))?;
    writeln!(output, "Average price: {}", usd(summary.average_price))?;
    writeln!(output, "Median price: {}", usd(summary.median_price))?;
    writeln!(output, "Weighted average price: {}", usd(summary.weighted_average_price))?;
    writeln!(output)?;
    writeln!(output, "{:<12} {:<14} {:<14} {:<14}", "DATE", "BTC", "PRICE", "COST")?;

    for deposit in deposits {
        writeln!(
            output,
            "{:<12} {:<14} {:<14} {:<14}",
            deposit.date.format("%Y-%m-%d").to_string(),
            btc(deposit.btc_amount),
            usd(deposit.cost_per_btc),
            usd(deposit.usd_cost)
        )?;
    }

    Ok(())
}

fn usd(value: Decimal) -> String {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    format!("${rounded}")
}

fn btc(value: Decimal) -> String {
    let mut rounded = value.round_dp_with_strategy(8, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(8);
    rounded.to_string()
}
