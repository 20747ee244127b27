//! Reading the URL table that drives a batch run.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Result, SentimetricError};

/// Column holding the caller's identifier for each row.
pub const URL_ID_COLUMN: &str = "URL_ID";

/// Column holding the article URL.
pub const URL_COLUMN: &str = "URL";

/// One row of the input table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlRecord {
    #[serde(rename = "URL_ID")]
    pub url_id: String,
    #[serde(rename = "URL")]
    pub url: String,
}

impl UrlRecord {
    pub fn new(url_id: impl Into<String>, url: impl Into<String>) -> Self {
        Self { url_id: url_id.into(), url: url.into() }
    }
}

/// Reads URL records from CSV with a header row.
///
/// The header must contain `URL_ID` and `URL`; other columns are ignored.
/// Rows keep their input order.
///
/// # Example
///
/// ```rust
/// use sentimetric_core::read_url_records;
///
/// let csv = "URL_ID,URL\n42,https://example.com/a\n";
/// let records = read_url_records(csv.as_bytes()).unwrap();
/// assert_eq!(records[0].url_id, "42");
/// ```
pub fn read_url_records<R: Read>(reader: R) -> Result<Vec<UrlRecord>> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let headers = reader.headers()?;
    for column in [URL_ID_COLUMN, URL_COLUMN] {
        if !headers.iter().any(|h| h == column) {
            return Err(SentimetricError::MissingColumn(column.to_string()));
        }
    }

    reader.deserialize().map(|row| row.map_err(SentimetricError::from)).collect()
}

/// Reads URL records from a CSV file.
pub fn read_url_records_from_path(path: &Path) -> Result<Vec<UrlRecord>> {
    if !path.exists() {
        return Err(SentimetricError::FileNotFound(path.to_path_buf()));
    }

    read_url_records(File::open(path)?)
}
