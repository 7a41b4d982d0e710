use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::ledger::{COL_DATE, COL_IN_AMOUNT, COL_IN_CURRENCY, COL_TYPE, Record, parse_timestamp};

/// Selects the Bitcoin deposit records, preserving input order.
///
/// A record passes when its type is `deposit`, its incoming currency is
/// `BTC`, and its incoming amount parses to a positive number. With a
/// threshold, the record's date must parse and fall on or after it; without
/// one, the date is not inspected here at all.
pub fn filter_btc_deposits(records: Vec<Record>, min_date: Option<NaiveDate>) -> Vec<Record> {
    records
        .into_iter()
        .filter(|record| is_btc_deposit(record, min_date))
        .collect()
}

fn is_btc_deposit(record: &Record, min_date: Option<NaiveDate>) -> bool {
    if record.get(COL_TYPE) != "deposit" || record.get(COL_IN_CURRENCY) != "BTC" {
        return false;
    }

    match Decimal::from_str(record.get(COL_IN_AMOUNT)) {
        Ok(amount) if amount > Decimal::ZERO => {}
        _ => return false,
    }

    let Some(threshold) = min_date else {
        return true;
    };

    match parse_timestamp(record.get(COL_DATE)) {
        Some(timestamp) => timestamp.date_naive() >= threshold,
        None => false,
    }
}
