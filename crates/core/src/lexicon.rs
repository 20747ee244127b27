//! Stop-word and master-dictionary lexicon.
//!
//! A [`Lexicon`] is built once per run and shared read-only by every analysis
//! call. Positive and negative words never contain stop words; that rule is
//! applied while loading, so lookups are plain set membership.
//!
//! # Example
//!
//! ```rust
//! use sentimetric_core::Lexicon;
//!
//! let lexicon = Lexicon::from_sources(&["GOOD morning"], "good\nhappy\n", "sad\n");
//! assert!(lexicon.is_stop_word("good"));
//! assert!(!lexicon.is_positive("good"));
//! assert!(lexicon.is_positive("happy"));
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::{Result, SentimetricError};

/// File name of the positive word list inside the master-dictionary directory.
pub const POSITIVE_WORDS_FILE: &str = "positive-words.txt";

/// File name of the negative word list inside the master-dictionary directory.
pub const NEGATIVE_WORDS_FILE: &str = "negative-words.txt";

/// Default stop-word directory, relative to the working directory.
pub const DEFAULT_STOPWORDS_DIR: &str = "StopWords";

/// Default master-dictionary directory, relative to the working directory.
pub const DEFAULT_MASTER_DICT_DIR: &str = "MasterDictionary";

/// Baseline English stop words, always part of every loaded lexicon.
pub(crate) const BASELINE_STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've", "you'll", "you'd", "your",
    "yours", "yourself", "yourselves", "he", "him", "his", "himself", "she", "she's", "her", "hers", "herself", "it",
    "it's", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which", "who", "whom", "this",
    "that", "that'll", "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
    "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or", "because", "as", "until",
    "while", "of", "at", "by", "for", "with", "about", "against", "between", "into", "through", "during", "before",
    "after", "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over", "under", "again",
    "further", "then", "once", "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few",
    "more", "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than", "too", "very",
    "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now", "d", "ll", "m", "o", "re", "ve",
    "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn", "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn",
    "hasn't", "haven", "haven't", "isn", "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't",
    "shan", "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];

/// Immutable stop-word, positive-word and negative-word sets.
///
/// All words are lowercase. `positive_words` and `negative_words` are disjoint
/// from `stop_words` but may overlap each other.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    stop_words: HashSet<String>,
    positive_words: HashSet<String>,
    negative_words: HashSet<String>,
}

impl Lexicon {
    /// Builds a lexicon from explicit word sets.
    ///
    /// Words are lowercased and trimmed; empty entries are dropped and any
    /// positive or negative word that is also a stop word is discarded. The
    /// baseline stop-word list is not added.
    pub fn new<S, P, N>(stop_words: S, positive_words: P, negative_words: N) -> Self
    where
        S: IntoIterator,
        S::Item: AsRef<str>,
        P: IntoIterator,
        P::Item: AsRef<str>,
        N: IntoIterator,
        N::Item: AsRef<str>,
    {
        let stop_words: HashSet<String> = stop_words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        let positive_words = admit_words(positive_words, &stop_words);
        let negative_words = admit_words(negative_words, &stop_words);

        Self { stop_words, positive_words, negative_words }
    }

    /// Builds a lexicon from raw text sources.
    ///
    /// Every stop-word source is lowercased and split on whitespace, then
    /// merged with the baseline English list. The positive and negative
    /// sources hold one word per line.
    pub fn from_sources(stopword_sources: &[&str], positive_source: &str, negative_source: &str) -> Self {
        let mut stop_words = baseline_stop_words();
        for source in stopword_sources {
            stop_words.extend(split_stop_words(source));
        }

        let positive_words = parse_dictionary(positive_source, &stop_words);
        let negative_words = parse_dictionary(negative_source, &stop_words);

        Self { stop_words, positive_words, negative_words }
    }

    /// A lexicon holding only the baseline stop words and no sentiment words.
    pub fn baseline() -> Self {
        Self { stop_words: baseline_stop_words(), ..Default::default() }
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    pub fn is_positive(&self, word: &str) -> bool {
        self.positive_words.contains(word)
    }

    pub fn is_negative(&self, word: &str) -> bool {
        self.negative_words.contains(word)
    }

    pub fn stop_words(&self) -> &HashSet<String> {
        &self.stop_words
    }

    pub fn positive_words(&self) -> &HashSet<String> {
        &self.positive_words
    }

    pub fn negative_words(&self) -> &HashSet<String> {
        &self.negative_words
    }
}

fn baseline_stop_words() -> HashSet<String> {
    BASELINE_STOP_WORDS.iter().map(|w| w.to_string()).collect()
}

fn split_stop_words(source: &str) -> impl Iterator<Item = String> + '_ {
    source.split_whitespace().map(str::to_lowercase)
}

fn admit_words<I>(words: I, stop_words: &HashSet<String>) -> HashSet<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    words
        .into_iter()
        .map(|w| w.as_ref().trim().to_lowercase())
        .filter(|w| !w.is_empty() && !stop_words.contains(w))
        .collect()
}

fn parse_dictionary(source: &str, stop_words: &HashSet<String>) -> HashSet<String> {
    admit_words(source.lines(), stop_words)
}

/// Reads a file as Latin-1, so arbitrary bytes never fail to decode.
fn read_latin1(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(SentimetricError::FileNotFound(path.to_path_buf()));
    }

    let bytes = fs::read(path)?;
    Ok(bytes.iter().map(|&b| b as char).collect())
}

/// Loads a [`Lexicon`] from a stop-word directory and a master-dictionary directory.
///
/// Loading never fails. Unreadable stop-word files are skipped with a warning;
/// a missing master dictionary leaves the positive and negative sets empty.
#[derive(Debug, Clone)]
pub struct LexiconLoader {
    stopwords_dir: Option<PathBuf>,
    master_dict_dir: Option<PathBuf>,
}

impl LexiconLoader {
    /// Create a loader with no directories (baseline stop words only).
    pub fn new() -> Self {
        Self { stopwords_dir: None, master_dict_dir: None }
    }

    /// Create a builder for configuring directories.
    pub fn builder() -> LexiconLoaderBuilder {
        LexiconLoaderBuilder::new()
    }

    pub fn stopwords_dir(&self) -> Option<&Path> {
        self.stopwords_dir.as_deref()
    }

    pub fn master_dict_dir(&self) -> Option<&Path> {
        self.master_dict_dir.as_deref()
    }

    /// Load the full lexicon: stop words first, then the master dictionary
    /// filtered against them.
    pub fn load(&self) -> Lexicon {
        let stop_words = self.load_stop_words();
        let (positive_words, negative_words) = self.load_master_dictionary(&stop_words);

        info!(
            "Loaded lexicon: {} stop words, {} positive, {} negative",
            stop_words.len(),
            positive_words.len(),
            negative_words.len()
        );

        Lexicon { stop_words, positive_words, negative_words }
    }

    /// Baseline stop words merged with every readable file of the stop-word directory.
    fn load_stop_words(&self) -> HashSet<String> {
        let mut stop_words = baseline_stop_words();

        let Some(dir) = &self.stopwords_dir else {
            return stop_words;
        };

        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Failed to read stop-word directory {}: {e}", dir.display());
                return stop_words;
            }
        };

        for entry in entries.flatten() {
            let path = entry.path();
            if !path.is_file() {
                warn!("Skipping non-file stop-word source {}", path.display());
                continue;
            }

            match read_latin1(&path) {
                Ok(content) => stop_words.extend(split_stop_words(&content)),
                Err(e) => warn!("Error loading stop words from {}: {e}", path.display()),
            }
        }

        stop_words
    }

    /// Positive and negative word sets, both filtered against `stop_words`.
    fn load_master_dictionary(&self, stop_words: &HashSet<String>) -> (HashSet<String>, HashSet<String>) {
        let Some(dir) = self.master_dict_dir.as_ref().filter(|d| d.is_dir()) else {
            warn!("Master dictionary directory not found; sentiment scores will be zero");
            return (HashSet::new(), HashSet::new());
        };

        let load = |name: &str| match read_latin1(&dir.join(name)) {
            Ok(content) => parse_dictionary(&content, stop_words),
            Err(e) => {
                warn!("Error loading {name}: {e}");
                HashSet::new()
            }
        };

        (load(POSITIVE_WORDS_FILE), load(NEGATIVE_WORDS_FILE))
    }
}

/// Builder for LexiconLoader
#[derive(Debug)]
pub struct LexiconLoaderBuilder {
    stopwords_dir: Option<PathBuf>,
    master_dict_dir: Option<PathBuf>,
}

impl LexiconLoaderBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self { stopwords_dir: None, master_dict_dir: None }
    }

    /// Set the stop-word directory
    pub fn stopwords_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.stopwords_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the master-dictionary directory
    pub fn master_dict_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.master_dict_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Build the LexiconLoader
    pub fn build(self) -> LexiconLoader {
        LexiconLoader { stopwords_dir: self.stopwords_dir, master_dict_dir: self.master_dict_dir }
    }
}

impl Default for LexiconLoaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for LexiconLoader {
    fn default() -> Self {
        let root = Self::default_root();
        LexiconLoaderBuilder::new()
            .stopwords_dir(root.join(DEFAULT_STOPWORDS_DIR))
            .master_dict_dir(root.join(DEFAULT_MASTER_DICT_DIR))
            .build()
    }
}

impl LexiconLoader {
    /// Working directory if it holds a stop-word directory, otherwise
    /// `~/.config/sentimetric` (or the platform equivalent).
    fn default_root() -> PathBuf {
        let cwd = PathBuf::from(".");
        if cwd.join(DEFAULT_STOPWORDS_DIR).is_dir() {
            return cwd;
        }

        dirs::config_dir().map(|dir| dir.join("sentimetric")).unwrap_or(cwd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_baseline_contains_common_words() {
        let lexicon = Lexicon::baseline();
        assert!(lexicon.is_stop_word("the"));
        assert!(lexicon.is_stop_word("wouldn't"));
        assert!(!lexicon.is_stop_word("us"));
        assert_eq!(lexicon.stop_words().len(), BASELINE_STOP_WORDS.len());
        assert!(lexicon.positive_words().is_empty());
    }

    #[test]
    fn test_new_filters_stop_words_from_sentiment_sets() {
        let lexicon = Lexicon::new(["Good", "the"], ["good", "great", "  "], ["bad", "THE"]);
        assert!(lexicon.is_stop_word("good"));
        assert!(!lexicon.is_positive("good"));
        assert!(lexicon.is_positive("great"));
        assert!(lexicon.is_negative("bad"));
        assert_eq!(lexicon.positive_words().len(), 1);
        assert_eq!(lexicon.negative_words().len(), 1);
    }

    #[test]
    fn test_positive_and_negative_may_overlap() {
        let lexicon = Lexicon::new(Vec::<&str>::new(), ["envious"], ["envious"]);
        assert!(lexicon.is_positive("envious"));
        assert!(lexicon.is_negative("envious"));
    }

    #[test]
    fn test_from_sources_splits_on_whitespace() {
        let lexicon = Lexicon::from_sources(&["SMITH | Surnames\nJONES"], "smith\n", "");
        assert!(lexicon.is_stop_word("smith"));
        assert!(lexicon.is_stop_word("|"));
        assert!(lexicon.is_stop_word("surnames"));
        assert!(lexicon.is_stop_word("jones"));
        assert!(lexicon.positive_words().is_empty());
    }

    #[test]
    fn test_dictionary_lines_are_trimmed_and_lowercased() {
        let lexicon = Lexicon::from_sources(&[], "  Abound \n\n\t\nACCLAIM\n", "abnormal\r\n");
        assert!(lexicon.is_positive("abound"));
        assert!(lexicon.is_positive("acclaim"));
        assert!(lexicon.is_negative("abnormal"));
        assert_eq!(lexicon.positive_words().len(), 2);
    }

    #[test]
    fn test_loader_reads_directories() {
        let temp_dir = TempDir::new().unwrap();
        let stop_dir = temp_dir.path().join("StopWords");
        let dict_dir = temp_dir.path().join("MasterDictionary");
        fs::create_dir_all(&stop_dir).unwrap();
        fs::create_dir_all(&dict_dir).unwrap();

        fs::write(stop_dir.join("StopWords_Names.txt"), "ALICE\nBOB\n").unwrap();
        fs::write(stop_dir.join("StopWords_Generic.txt"), "Able Nice").unwrap();
        fs::write(dict_dir.join(POSITIVE_WORDS_FILE), "nice\nbrilliant\n").unwrap();
        fs::write(dict_dir.join(NEGATIVE_WORDS_FILE), "awful\n").unwrap();

        let lexicon = LexiconLoader::builder().stopwords_dir(&stop_dir).master_dict_dir(&dict_dir).build().load();

        assert!(lexicon.is_stop_word("alice"));
        assert!(lexicon.is_stop_word("able"));
        assert!(lexicon.is_stop_word("nice"));
        assert!(!lexicon.is_positive("nice"));
        assert!(lexicon.is_positive("brilliant"));
        assert!(lexicon.is_negative("awful"));
    }

    #[test]
    fn test_loader_decodes_latin1() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("names.txt"), [b'C', b'A', b'F', 0xC9, b'\n']).unwrap();

        let lexicon = LexiconLoader::builder().stopwords_dir(temp_dir.path()).build().load();
        assert!(lexicon.is_stop_word("café"));
    }

    #[test]
    fn test_loader_missing_directories_degrade() {
        let lexicon = LexiconLoader::builder()
            .stopwords_dir("/nonexistent/StopWords")
            .master_dict_dir("/nonexistent/MasterDictionary")
            .build()
            .load();

        assert_eq!(lexicon.stop_words().len(), BASELINE_STOP_WORDS.len());
        assert!(lexicon.positive_words().is_empty());
        assert!(lexicon.negative_words().is_empty());
    }

    #[test]
    fn test_loader_missing_negative_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(POSITIVE_WORDS_FILE), "gain\n").unwrap();

        let lexicon = LexiconLoader::builder().master_dict_dir(temp_dir.path()).build().load();
        assert!(lexicon.is_positive("gain"));
        assert!(lexicon.negative_words().is_empty());
    }

    #[test]
    fn test_loader_skips_subdirectories() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("nested")).unwrap();
        fs::write(temp_dir.path().join("extra.txt"), "zebra").unwrap();

        let lexicon = LexiconLoader::builder().stopwords_dir(temp_dir.path()).build().load();
        assert!(lexicon.is_stop_word("zebra"));
        assert!(!lexicon.is_stop_word("nested"));
    }

    #[test]
    fn test_loader_builder() {
        let loader = LexiconLoader::builder().stopwords_dir("a").master_dict_dir("b").build();
        assert_eq!(loader.stopwords_dir(), Some(Path::new("a")));
        assert_eq!(loader.master_dict_dir(), Some(Path::new("b")));

        let empty = LexiconLoader::new();
        assert!(empty.stopwords_dir().is_none());
    }
}
