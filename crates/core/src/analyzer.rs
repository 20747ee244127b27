//! Batch orchestration: fetch, extract and analyze a list of URLs.
//!
//! The [`Analyzer`] loads its [`Lexicon`] once and shares it read-only across
//! every document. Batches may fetch several pages at a time, but reports are
//! always returned in input order and a failing URL only zeroes its own row.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use futures::stream::{self, StreamExt};
use tracing::info;

use crate::fetch::{FetchConfig, scrape_article};
use crate::input::UrlRecord;
use crate::lexicon::{Lexicon, LexiconLoader};
use crate::metrics::{MetricRecord, analyze};
use crate::report::Report;

/// Configuration for an [`Analyzer`].
///
/// # Example
///
/// ```rust
/// use sentimetric_core::AnalyzerConfig;
///
/// let config = AnalyzerConfig::builder()
///     .stopwords_dir("data/StopWords")
///     .timeout(5)
///     .concurrency(4)
///     .build();
/// assert_eq!(config.fetch.timeout, 5);
/// ```
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Stop-word directory (default: `./StopWords` or the user config dir).
    pub stopwords_dir: Option<PathBuf>,

    /// Master-dictionary directory (default: `./MasterDictionary` or the user config dir).
    pub master_dict_dir: Option<PathBuf>,

    /// HTTP settings used for every page fetch.
    pub fetch: FetchConfig,

    /// Maximum number of pages fetched at once (default: 1).
    pub concurrency: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self { stopwords_dir: None, master_dict_dir: None, fetch: FetchConfig::default(), concurrency: 1 }
    }
}

impl AnalyzerConfig {
    /// Creates a new builder for AnalyzerConfig.
    pub fn builder() -> AnalyzerConfigBuilder {
        AnalyzerConfigBuilder::new()
    }

    /// The lexicon loader for this configuration, filling unset directories with defaults.
    pub fn lexicon_loader(&self) -> LexiconLoader {
        let defaults = LexiconLoader::default();
        let mut builder = LexiconLoader::builder();

        if let Some(dir) = self.stopwords_dir.as_deref().or(defaults.stopwords_dir()) {
            builder = builder.stopwords_dir(dir);
        }
        if let Some(dir) = self.master_dict_dir.as_deref().or(defaults.master_dict_dir()) {
            builder = builder.master_dict_dir(dir);
        }

        builder.build()
    }
}

/// Builder for AnalyzerConfig.
pub struct AnalyzerConfigBuilder {
    config: AnalyzerConfig,
}

impl AnalyzerConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: AnalyzerConfig::default() }
    }

    /// Sets the stop-word directory.
    pub fn stopwords_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config.stopwords_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the master-dictionary directory.
    pub fn master_dict_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config.master_dict_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the request timeout in seconds.
    pub fn timeout(mut self, seconds: u64) -> Self {
        self.config.fetch.timeout = seconds;
        self
    }

    /// Sets the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.fetch.user_agent = user_agent.into();
        self
    }

    /// Sets how many pages may be fetched at once. Zero is treated as one.
    pub fn concurrency(mut self, value: usize) -> Self {
        self.config.concurrency = value;
        self
    }

    /// Builds the config.
    pub fn build(self) -> AnalyzerConfig {
        self.config
    }
}

impl Default for AnalyzerConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Main entry point for analyzing articles.
///
/// # Example
///
/// ```rust
/// use sentimetric_core::{Analyzer, AnalyzerConfig, Lexicon};
///
/// let lexicon = Lexicon::new(["i", "we", "this", "are"], ["love", "happy"], Vec::<&str>::new());
/// let analyzer = Analyzer::with_lexicon(lexicon, AnalyzerConfig::default());
/// let record = analyzer.analyze_text("I love this. We are happy.");
/// assert_eq!(record.positive_score, 2);
/// ```
pub struct Analyzer {
    lexicon: Arc<Lexicon>,
    config: AnalyzerConfig,
}

impl Analyzer {
    /// Creates an analyzer, loading the lexicon from the configured directories.
    pub fn new(config: AnalyzerConfig) -> Self {
        let lexicon = config.lexicon_loader().load();
        Self::with_lexicon(lexicon, config)
    }

    /// Creates an analyzer around an already loaded lexicon.
    pub fn with_lexicon(lexicon: Lexicon, config: AnalyzerConfig) -> Self {
        Self { lexicon: Arc::new(lexicon), config }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Computes metrics for already extracted text.
    pub fn analyze_text(&self, text: &str) -> MetricRecord {
        analyze(text, &self.lexicon)
    }

    /// Fetches one page and computes its metrics.
    ///
    /// Fetch and extraction failures produce the all-zero record.
    pub async fn analyze_url(&self, url: &str) -> MetricRecord {
        let text = scrape_article(url, &self.config.fetch).await;
        self.analyze_text(&text)
    }

    /// Analyzes every record, returning one report per record in input order.
    pub async fn analyze_batch(&self, records: Vec<UrlRecord>) -> Vec<Report> {
        let total = records.len();

        stream::iter(records.into_iter().enumerate())
            .map(|(idx, record)| async move {
                info!("Processing {}/{}: {}", idx + 1, total, record.url);
                let metrics = self.analyze_url(&record.url).await;
                Report::new(record, metrics)
            })
            .buffered(self.config.concurrency.max(1))
            .collect()
            .await
    }
}
