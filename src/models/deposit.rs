use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// A Bitcoin deposit joined with the market price at its deposit date.
///
/// Amount and price are both positive by construction: the filter rejects
/// non-positive amounts and a resolved price is always above zero.
#[derive(Debug, Clone)]
pub struct PricedDeposit {
    /// When the deposit landed in the wallet.
    pub date: DateTime<Utc>,
    /// Quantity of Bitcoin received.
    pub btc_amount: Decimal,
    /// USD market price of one BTC at `date`.
    pub btc_price: Decimal,
    /// Fiat cost of the deposit, `btc_amount * btc_price`.
    pub usd_cost: Decimal,
    /// Cost per whole BTC. Equal to `btc_price` for a single-fill deposit;
    /// kept as its own column in the report.
    pub cost_per_btc: Decimal,
}

impl PricedDeposit {
    pub fn new(date: DateTime<Utc>, btc_amount: Decimal, btc_price: Decimal) -> Self {
        let usd_cost = btc_amount * btc_price;
        let cost_per_btc = if btc_amount.is_zero() {
            Decimal::ZERO
        } else {
            usd_cost / btc_amount
        };

        Self {
            date,
            btc_amount,
            btc_price,
            usd_cost,
            cost_per_btc,
        }
    }
}
