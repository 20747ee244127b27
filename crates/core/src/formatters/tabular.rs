//! CSV output of analysis reports.
//!
//! Columns are `URL_ID`, `URL`, then the metric columns in their fixed order.
//! Rows are written by hand rather than through serde because the metric
//! fields are flattened into the row.

use std::io::Write;

use crate::Result;
use crate::input::{URL_COLUMN, URL_ID_COLUMN};
use crate::metrics::METRIC_COLUMNS;
use crate::report::Report;

/// The full output header, identifiers first.
pub fn header_row() -> Vec<&'static str> {
    [URL_ID_COLUMN, URL_COLUMN].into_iter().chain(METRIC_COLUMNS).collect()
}

/// Writes `reports` as CSV with a header row, preserving their order.
///
/// The header is written even when there are no reports.
pub fn write_csv<W: Write>(reports: &[Report], writer: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(header_row())?;

    for report in reports {
        let values = report.metrics.values();
        let row = [report.url_id.as_str(), report.url.as_str()].into_iter().chain(values.iter().map(String::as_str));
        writer.write_record(row)?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::MetricRecord;

    fn report(id: &str, url: &str, positive: usize) -> Report {
        Report {
            url_id: id.to_string(),
            url: url.to_string(),
            metrics: MetricRecord { positive_score: positive, polarity_score: 0.5, ..Default::default() },
        }
    }

    fn render(reports: &[Report]) -> String {
        let mut buffer = Vec::new();
        write_csv(reports, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_header_row() {
        let header = header_row();
        assert_eq!(header.len(), 15);
        assert_eq!(header[0], "URL_ID");
        assert_eq!(header[1], "URL");
        assert_eq!(header[2], "POSITIVE SCORE");
        assert_eq!(header[14], "AVG WORD LENGTH");
    }

    #[test]
    fn test_write_csv_rows_in_order() {
        let output = render(&[report("2", "https://b.example", 4), report("1", "https://a.example", 0)]);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("URL_ID,URL,POSITIVE SCORE,NEGATIVE SCORE"));
        assert!(lines[1].starts_with("2,https://b.example,4,0,0.5,"));
        assert!(lines[2].starts_with("1,https://a.example,0,0,0.5,"));
    }

    #[test]
    fn test_write_csv_quotes_fields() {
        let output = render(&[report("a,b", "https://x.example/?q=1,2", 1)]);
        assert!(output.lines().nth(1).unwrap().starts_with("\"a,b\",\"https://x.example/?q=1,2\",1"));
    }

    #[test]
    fn test_write_csv_empty() {
        let output = render(&[]);
        assert_eq!(output.lines().count(), 1);
    }
}
