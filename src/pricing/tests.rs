use super::PriceError;
use super::crypto_compare::{CryptoComparePrices, price_from_payload};

use std::str::FromStr;

use anyhow::Result;
use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use serde_json::json;

#[test]
fn test_payload_with_nested_quote_yields_price() -> Result<()> {
    let payload = json!({ "BTC": { "USD": 40000.5 } });

    let price = price_from_payload(&payload)?;

    assert_eq!(price, Decimal::from_str("40000.5")?);

    Ok(())
}

#[test]
fn test_service_error_payload_surfaces_message() {
    let payload = json!({ "Response": "Error", "Message": "rate limit exceeded" });

    let result = price_from_payload(&payload);

    assert!(matches!(result, Err(PriceError::Service(message)) if message == "rate limit exceeded"));
}

#[test]
fn test_payload_missing_quote_currency_is_rejected() {
    let payload = json!({ "BTC": { "EUR": 38000.0 } });

    assert!(matches!(price_from_payload(&payload), Err(PriceError::Payload(_))));
}

#[test]
fn test_payload_with_wrong_base_symbol_is_rejected() {
    let payload = json!({ "ETH": { "USD": 2500.0 } });

    assert!(matches!(price_from_payload(&payload), Err(PriceError::Payload(_))));
}

#[test]
fn test_payload_with_unexpected_shape_is_rejected() {
    let payload = json!({ "BTC": "not a quote map" });

    assert!(matches!(price_from_payload(&payload), Err(PriceError::Payload(_))));
}

#[test]
fn test_endpoint_carries_epoch_second_timestamp() -> Result<()> {
    let source = CryptoComparePrices::new()?.with_base_url("http://localhost:9999");
    let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

    assert_eq!(
        source.endpoint(at),
        "http://localhost:9999/data/pricehistorical?fsym=BTC&tsyms=USD&ts=1704067200"
    );

    Ok(())
}
