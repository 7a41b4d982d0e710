use super::{CostBasisSummary, PricedDeposit};

use std::str::FromStr;

use anyhow::Result;
use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;

fn deposit(amount: &str, price: &str) -> Result<PricedDeposit> {
    Ok(PricedDeposit::new(
        Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap(),
        Decimal::from_str(amount)?,
        Decimal::from_str(price)?,
    ))
}

fn prices_only(prices: &[&str]) -> Result<Vec<PricedDeposit>> {
    prices.iter().map(|price| deposit("1", price)).collect()
}

#[test]
fn test_priced_deposit_derives_cost_fields() -> Result<()> {
    let priced = deposit("0.5", "40000")?;

    assert_eq!(priced.usd_cost, Decimal::from_str("20000")?);
    assert_eq!(priced.cost_per_btc, priced.btc_price);

    Ok(())
}

#[test]
fn test_median_of_odd_price_series_is_middle_element() -> Result<()> {
    let summary = CostBasisSummary::from_deposits(&prices_only(&["30", "10", "20"])?);

    assert_eq!(summary.median_price, Decimal::from_str("20")?);

    Ok(())
}

#[test]
fn test_median_of_even_price_series_averages_middle_pair() -> Result<()> {
    let summary = CostBasisSummary::from_deposits(&prices_only(&["40", "10", "30", "20"])?);

    assert_eq!(summary.median_price, Decimal::from_str("25")?);

    Ok(())
}

#[test]
fn test_weighted_average_weights_by_amount_not_count() -> Result<()> {
    let deposits = vec![deposit("1", "100")?, deposit("3", "200")?];
    let summary = CostBasisSummary::from_deposits(&deposits);

    assert_eq!(summary.total_btc, Decimal::from_str("4")?);
    assert_eq!(summary.total_usd, Decimal::from_str("700")?);
    assert_eq!(summary.weighted_average_price, Decimal::from_str("175")?);
    assert_eq!(summary.average_price, Decimal::from_str("150")?);
    assert_ne!(summary.weighted_average_price, summary.average_price);

    Ok(())
}

#[test]
fn test_empty_batch_reduces_to_zeroed_summary() {
    let summary = CostBasisSummary::from_deposits(&[]);

    assert!(summary.total_btc.is_zero());
    assert!(summary.weighted_average_price.is_zero());
}
