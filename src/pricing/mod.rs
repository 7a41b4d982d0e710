mod crypto_compare;
mod errors;
#[cfg(test)]
mod tests;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

pub use crypto_compare::CryptoComparePrices;
pub use errors::PriceError;

/// A source of historical BTC market prices.
///
/// The engine only ever issues one lookup at a time, so implementations do
/// not need to tolerate concurrent calls.
pub trait PriceSource {
    /// Returns the USD price of one BTC at the given moment.
    async fn price_at(&self, at: DateTime<Utc>) -> Result<Decimal, PriceError>;
}
