use std::sync::Arc;

use csv::StringRecord;

/// One parsed row of the wallet export, keyed by the file's header row.
///
/// The header is shared across all records from the same file. Lookup is by
/// column name; a column that is absent from the header, or cut off by a
/// short row, reads as the empty string.
#[derive(Debug, Clone)]
pub struct Record {
    headers: Arc<StringRecord>,
    fields: StringRecord,
}

impl Record {
    pub fn new(headers: Arc<StringRecord>, fields: StringRecord) -> Self {
        Self { headers, fields }
    }

    /// Returns the value under `column`, or `""` when it is missing.
    pub fn get(&self, column: &str) -> &str {
        self.headers
            .iter()
            .position(|header| header == column)
            .and_then(|index| self.fields.get(index))
            .unwrap_or("")
    }

    /// The column names this record was parsed against, in file order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.headers.iter()
    }
}
