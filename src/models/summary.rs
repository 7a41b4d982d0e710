use rust_decimal::Decimal;

use crate::models::PricedDeposit;

/// Aggregate cost-basis statistics over a batch of priced deposits.
#[derive(Debug, Clone, PartialEq)]
pub struct CostBasisSummary {
    /// Arithmetic mean of the per-deposit BTC prices.
    pub average_price: Decimal,
    /// Median of the per-deposit BTC prices.
    pub median_price: Decimal,
    /// Total Bitcoin acquired.
    pub total_btc: Decimal,
    /// Total fiat spent.
    pub total_usd: Decimal,
    /// Volume-weighted average price, `total_usd / total_btc`.
    pub weighted_average_price: Decimal,
}

impl CostBasisSummary {
    /// Reduces the priced deposits to summary statistics.
    ///
    /// Callers are expected to hand in at least one deposit; an empty batch
    /// reduces to an all-zero summary rather than a division by zero.
    pub fn from_deposits(deposits: &[PricedDeposit]) -> Self {
        if deposits.is_empty() {
            return Self {
                average_price: Decimal::ZERO,
                median_price: Decimal::ZERO,
                total_btc: Decimal::ZERO,
                total_usd: Decimal::ZERO,
                weighted_average_price: Decimal::ZERO,
            };
        }

        let mut prices: Vec<Decimal> = deposits.iter().map(|deposit| deposit.btc_price).collect();
        prices.sort();

        let total_btc: Decimal = deposits.iter().map(|deposit| deposit.btc_amount).sum();
        let total_usd: Decimal = deposits.iter().map(|deposit| deposit.usd_cost).sum();
        let price_sum: Decimal = prices.iter().copied().sum();

        let weighted_average_price = if total_btc.is_zero() {
            Decimal::ZERO
        } else {
            total_usd / total_btc
        };

        Self {
            average_price: price_sum / Decimal::from(prices.len() as u64),
            median_price: median_of_sorted(&prices),
            total_btc,
            total_usd,
            weighted_average_price,
        }
    }
}

fn median_of_sorted(prices: &[Decimal]) -> Decimal {
    let mid = prices.len() / 2;

    if prices.len() % 2 == 1 {
        prices[mid]
    } else {
        (prices[mid - 1] + prices[mid]) / Decimal::TWO
    }
}
