use serde::Serialize;

use crate::input::UrlRecord;
use crate::metrics::MetricRecord;

/// One output row: the input identifiers followed by the metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    #[serde(rename = "URL_ID")]
    pub url_id: String,
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(flatten)]
    pub metrics: MetricRecord,
}

impl Report {
    pub fn new(record: UrlRecord, metrics: MetricRecord) -> Self {
        Self { url_id: record.url_id, url: record.url, metrics }
    }
}
