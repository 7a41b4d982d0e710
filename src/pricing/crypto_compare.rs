use std::collections::HashMap;

use anyhow::Context;
use chrono::{DateTime, Utc};
use reqwest::{Client, ClientBuilder};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

use crate::pricing::{PriceError, PriceSource};

const DEFAULT_BASE_URL: &str = "https://min-api.cryptocompare.com";
const BASE_SYMBOL: &str = "BTC";
const QUOTE_CURRENCY: &str = "USD";

/// Historical price lookups against the CryptoCompare REST API.
///
/// One GET per lookup, no caching and no retries; every failure mode is
/// collapsed into a [`PriceError`] for the caller to log and move past.
pub struct CryptoComparePrices {
    client: Client,
    base_url: String,
}

/// Error payloads come back with HTTP 200 and are flagged in the body.
#[derive(Debug, Deserialize)]
struct ServiceFailure {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Message")]
    message: String,
}

impl CryptoComparePrices {
    pub fn new() -> anyhow::Result<Self> {
        let client = ClientBuilder::new()
            .build()
            .context("error creating http client")?;

        Ok(Self {
            client,
            base_url: DEFAULT_BASE_URL.to_owned(),
        })
    }

    /// Overrides the service base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub(super) fn endpoint(&self, at: DateTime<Utc>) -> String {
        format!(
            "{base}/data/pricehistorical?fsym={BASE_SYMBOL}&tsyms={QUOTE_CURRENCY}&ts={ts}",
            base = self.base_url,
            ts = at.timestamp()
        )
    }
}

impl PriceSource for CryptoComparePrices {
    async fn price_at(&self, at: DateTime<Utc>) -> Result<Decimal, PriceError> {
        let response = self.client.get(self.endpoint(at)).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PriceError::Status(status));
        }

        let payload = response.json::<Value>().await?;
        price_from_payload(&payload)
    }
}

/// Extracts the quote from a response body.
///
/// A well-formed success payload nests the USD price under the base symbol,
/// `{"BTC": {"USD": 42000.0}}`.
pub(super) fn price_from_payload(payload: &Value) -> Result<Decimal, PriceError> {
    if let Ok(failure) = serde_json::from_value::<ServiceFailure>(payload.clone()) {
        if failure.response == "Error" {
            return Err(PriceError::Service(failure.message));
        }
    }

    let quotes: HashMap<String, HashMap<String, Decimal>> =
        serde_json::from_value(payload.clone())
            .map_err(|error| PriceError::Payload(error.to_string()))?;

    quotes
        .get(BASE_SYMBOL)
        .and_then(|pair| pair.get(QUOTE_CURRENCY))
        .copied()
        .ok_or_else(|| {
            PriceError::Payload(format!("{BASE_SYMBOL}/{QUOTE_CURRENCY} quote missing from payload"))
        })
}
