use std::fs::File;
use std::io::{BufReader, Read};
use std::sync::Arc;

use anyhow::{Context, Result};
use csv::{ReaderBuilder, Trim};
use tracing::warn;

use crate::ledger::Record;

/// Parses a whole wallet export into ordered records.
///
/// The first line names the columns; every following non-empty line becomes
/// one record. Quoted fields may contain the delimiter. Rows that cannot be
/// decoded are skipped with a warning rather than aborting the run.
pub fn parse_ledger<R: Read>(input: R) -> Result<Vec<Record>> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(input);

    let headers = Arc::new(reader.headers().context("error reading header row")?.clone());
    let mut records = Vec::new();

    for row in reader.records() {
        match row {
            Ok(fields) => records.push(Record::new(headers.clone(), fields)),
            Err(error) => warn!("Skipping unreadable ledger row: {error}"),
        }
    }

    Ok(records)
}

/// Opens and parses the wallet export at `path`.
pub fn read_ledger(path: &str) -> Result<Vec<Record>> {
    let file = File::open(path).with_context(|| format!("error opening ledger file at {path}"))?;
    parse_ledger(BufReader::new(file))
}
