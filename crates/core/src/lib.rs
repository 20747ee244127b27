//! Readability and sentiment metrics for web article text.
//!
//! The pure analysis core ([`analyze`] over a [`Lexicon`]) has no I/O. Page
//! fetching and batch orchestration live behind the default `fetch` feature.

#[cfg(feature = "fetch")]
pub mod analyzer;
pub mod clean;
pub mod error;
pub mod extract;
#[cfg(feature = "fetch")]
pub mod fetch;
pub mod formatters;
pub mod input;
pub mod lexicon;
pub mod metrics;
pub mod pronouns;
pub mod report;
pub mod syllables;
pub mod tokenize;

#[cfg(feature = "fetch")]
pub use analyzer::{Analyzer, AnalyzerConfig, AnalyzerConfigBuilder};
pub use clean::clean;
pub use error::{Result, SentimetricError};
pub use extract::extract_article_text;
#[cfg(feature = "fetch")]
pub use fetch::{FetchConfig, fetch_url, scrape_article};
pub use formatters::{JsonConfig, JsonFormatter, convert_to_json, write_csv};
pub use input::{UrlRecord, read_url_records, read_url_records_from_path};
pub use lexicon::{Lexicon, LexiconLoader, LexiconLoaderBuilder};
pub use metrics::{EPSILON, METRIC_COLUMNS, MetricRecord, analyze};
pub use pronouns::count_personal_pronouns;
pub use report::Report;
pub use syllables::count_syllables;
