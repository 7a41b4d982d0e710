mod filter;
mod reader;
mod record;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

pub use filter::filter_btc_deposits;
pub use reader::{parse_ledger, read_ledger};
pub use record::Record;

/// Columns consumed from the wallet export. Other columns are carried along
/// but never read.
pub const COL_DATE: &str = "DATE";
pub const COL_TYPE: &str = "TYPE";
pub const COL_IN_CURRENCY: &str = "INCURRENCY";
pub const COL_IN_AMOUNT: &str = "INAMOUNT";

/// Parses the export's timestamp column.
///
/// Wallet exports are inconsistent about the `DATE` column: some carry a full
/// RFC 3339 timestamp, some a zoneless datetime, some a bare date. All are
/// accepted and read as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(timestamp.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
}
