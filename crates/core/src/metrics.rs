//! Readability and sentiment metrics for a single document.
//!
//! [`analyze`] is a pure function of the text and the [`Lexicon`]: the same
//! inputs always produce a bit-identical [`MetricRecord`]. Every ratio adds
//! [`EPSILON`] to its denominator, so no input can produce NaN or infinity.

use serde::Serialize;

use crate::clean::content_words;
use crate::lexicon::Lexicon;
use crate::pronouns::count_personal_pronouns;
use crate::syllables::count_syllables;
use crate::tokenize::{is_alphabetic, sentences, words};

/// Added to every denominator.
pub const EPSILON: f64 = 0.000001;

/// Syllable count above which a word is complex.
const COMPLEX_WORD_SYLLABLES: usize = 2;

/// Output column names, in output order.
pub const METRIC_COLUMNS: [&str; 13] = [
    "POSITIVE SCORE",
    "NEGATIVE SCORE",
    "POLARITY SCORE",
    "SUBJECTIVITY SCORE",
    "AVG SENTENCE LENGTH",
    "PERCENTAGE OF COMPLEX WORDS",
    "FOG INDEX",
    "AVG NUMBER OF WORDS PER SENTENCE",
    "COMPLEX WORD COUNT",
    "WORD COUNT",
    "SYLLABLE PER WORD",
    "PERSONAL PRONOUNS",
    "AVG WORD LENGTH",
];

/// The thirteen metrics computed for one document.
///
/// Fractional fields are already rounded. `avg_sentence_length` and
/// `avg_words_per_sentence` always hold the same value; both columns exist in
/// the output table. `word_count` counts content words (after stop-word
/// removal), not every alphabetic token.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct MetricRecord {
    #[serde(rename = "POSITIVE SCORE")]
    pub positive_score: usize,
    #[serde(rename = "NEGATIVE SCORE")]
    pub negative_score: usize,
    #[serde(rename = "POLARITY SCORE")]
    pub polarity_score: f64,
    #[serde(rename = "SUBJECTIVITY SCORE")]
    pub subjectivity_score: f64,
    #[serde(rename = "AVG SENTENCE LENGTH")]
    pub avg_sentence_length: f64,
    /// A fraction in `[0, 1]`, despite the column name.
    #[serde(rename = "PERCENTAGE OF COMPLEX WORDS")]
    pub percentage_complex_words: f64,
    #[serde(rename = "FOG INDEX")]
    pub fog_index: f64,
    #[serde(rename = "AVG NUMBER OF WORDS PER SENTENCE")]
    pub avg_words_per_sentence: f64,
    #[serde(rename = "COMPLEX WORD COUNT")]
    pub complex_word_count: usize,
    #[serde(rename = "WORD COUNT")]
    pub word_count: usize,
    #[serde(rename = "SYLLABLE PER WORD")]
    pub syllables_per_word: f64,
    #[serde(rename = "PERSONAL PRONOUNS")]
    pub personal_pronouns: usize,
    #[serde(rename = "AVG WORD LENGTH")]
    pub avg_word_length: f64,
}

impl MetricRecord {
    /// The all-zero record reported for empty or unfetchable documents.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Field values as strings, in [`METRIC_COLUMNS`] order.
    pub fn values(&self) -> [String; 13] {
        [
            self.positive_score.to_string(),
            self.negative_score.to_string(),
            self.polarity_score.to_string(),
            self.subjectivity_score.to_string(),
            self.avg_sentence_length.to_string(),
            self.percentage_complex_words.to_string(),
            self.fog_index.to_string(),
            self.avg_words_per_sentence.to_string(),
            self.complex_word_count.to_string(),
            self.word_count.to_string(),
            self.syllables_per_word.to_string(),
            self.personal_pronouns.to_string(),
            self.avg_word_length.to_string(),
        ]
    }
}

/// Computes the metrics for `text`.
///
/// Empty text yields [`MetricRecord::zero`].
///
/// # Example
///
/// ```rust
/// use sentimetric_core::{Lexicon, analyze};
///
/// let lexicon = Lexicon::new(["i", "we", "this", "are"], ["love", "happy"], Vec::<&str>::new());
/// let record = analyze("I love this. We are happy.", &lexicon);
/// assert_eq!(record.positive_score, 2);
/// assert_eq!(record.polarity_score, 1.0);
/// assert_eq!(record.personal_pronouns, 2);
/// ```
pub fn analyze(text: &str, lexicon: &Lexicon) -> MetricRecord {
    if text.is_empty() {
        return MetricRecord::zero();
    }

    let total_sentences = sentences(text).len();
    let tokens = words(&text.to_lowercase());
    let cleaned = content_words(&tokens, lexicon);

    let positive_score = cleaned.iter().filter(|w| lexicon.is_positive(w)).count();
    let negative_score = cleaned.iter().filter(|w| lexicon.is_negative(w)).count();

    let polarity_score =
        (positive_score as f64 - negative_score as f64) / ((positive_score + negative_score) as f64 + EPSILON);
    let subjectivity_score = (positive_score + negative_score) as f64 / (cleaned.len() as f64 + EPSILON);

    let alphabetic: Vec<&String> = tokens.iter().filter(|t| is_alphabetic(t)).collect();
    let total_words = alphabetic.len() as f64;

    let avg_sentence_length = total_words / (total_sentences as f64 + EPSILON);

    let syllables: Vec<usize> = alphabetic.iter().map(|w| count_syllables(w)).collect();
    let complex_word_count = syllables.iter().filter(|&&s| s > COMPLEX_WORD_SYLLABLES).count();
    let percentage_complex_words = complex_word_count as f64 / (total_words + EPSILON);

    let fog_index = 0.4 * (avg_sentence_length + percentage_complex_words);

    let syllables_per_word = syllables.iter().sum::<usize>() as f64 / (total_words + EPSILON);

    let total_characters: usize = alphabetic.iter().map(|w| w.chars().count()).sum();
    let avg_word_length = total_characters as f64 / (total_words + EPSILON);

    MetricRecord {
        positive_score,
        negative_score,
        polarity_score: round_to(polarity_score, 4),
        subjectivity_score: round_to(subjectivity_score, 4),
        avg_sentence_length: round_to(avg_sentence_length, 2),
        percentage_complex_words: round_to(percentage_complex_words, 4),
        fog_index: round_to(fog_index, 2),
        avg_words_per_sentence: round_to(avg_sentence_length, 2),
        complex_word_count,
        word_count: cleaned.len(),
        syllables_per_word: round_to(syllables_per_word, 2),
        personal_pronouns: count_personal_pronouns(text),
        avg_word_length: round_to(avg_word_length, 2),
    }
}

/// Rounds to `places` decimals using the exact binary value of `value`.
///
/// Float formatting is correctly rounded, so printing and re-parsing avoids the
/// drift of scaling by powers of ten.
pub fn round_to(value: f64, places: usize) -> f64 {
    format!("{value:.places$}").parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_lexicon() -> Lexicon {
        Lexicon::new(["i", "we", "this", "are"], ["love", "happy"], Vec::<&str>::new())
    }

    #[test]
    fn test_empty_text_is_all_zero() {
        let record = analyze("", &scenario_lexicon());
        assert_eq!(record, MetricRecord::zero());
        assert!(record.values().iter().all(|v| v == "0"));
    }

    #[test]
    fn test_scenario() {
        let record = analyze("I love this. We are happy.", &scenario_lexicon());

        assert_eq!(record.positive_score, 2);
        assert_eq!(record.negative_score, 0);
        assert_eq!(record.polarity_score, 1.0);
        assert_eq!(record.subjectivity_score, 1.0);
        assert_eq!(record.word_count, 2);
        assert_eq!(record.personal_pronouns, 2);
        assert_eq!(record.avg_sentence_length, 3.0);
        assert_eq!(record.avg_words_per_sentence, 3.0);
        assert_eq!(record.complex_word_count, 0);
        assert_eq!(record.percentage_complex_words, 0.0);
        assert_eq!(record.fog_index, 1.2);
        assert_eq!(record.syllables_per_word, 1.33);
        assert_eq!(record.avg_word_length, 3.17);
    }

    #[test]
    fn test_negative_polarity() {
        let lexicon = Lexicon::new(Vec::<&str>::new(), ["good"], ["bad", "awful"]);
        let record = analyze("Bad, awful, good.", &lexicon);

        assert_eq!(record.positive_score, 1);
        assert_eq!(record.negative_score, 2);
        assert_eq!(record.polarity_score, -0.3333);
        assert!((-1.0..=1.0).contains(&record.polarity_score));
    }

    #[test]
    fn test_polarity_zero_without_sentiment_words() {
        let record = analyze("Plain words only here.", &Lexicon::baseline());
        assert_eq!(record.polarity_score, 0.0);
        assert_eq!(record.subjectivity_score, 0.0);
    }

    #[test]
    fn test_overlapping_word_counts_both_ways() {
        let lexicon = Lexicon::new(Vec::<&str>::new(), ["envious"], ["envious"]);
        let record = analyze("Envious.", &lexicon);
        assert_eq!(record.positive_score, 1);
        assert_eq!(record.negative_score, 1);
        assert_eq!(record.polarity_score, 0.0);
    }

    #[test]
    fn test_complex_words() {
        let record = analyze("Beautiful education matters.", &Lexicon::default());

        assert_eq!(record.complex_word_count, 2);
        assert_eq!(record.percentage_complex_words, 0.6667);
        assert_eq!(record.avg_sentence_length, 3.0);
        assert_eq!(record.fog_index, 1.47);
    }

    #[test]
    fn test_word_count_uses_cleaned_words() {
        let text = "The quick brown fox jumps over the lazy dog.";
        let record = analyze(text, &Lexicon::baseline());
        let tokens = words(&text.to_lowercase());

        assert_eq!(record.word_count, 6);
        assert!(record.word_count <= tokens.len());
    }

    #[test]
    fn test_whitespace_only_text() {
        let record = analyze("   ", &Lexicon::baseline());
        assert_eq!(record, MetricRecord::zero());
    }

    #[test]
    fn test_punctuation_only_text_is_finite() {
        let record = analyze("?!...", &Lexicon::baseline());
        for value in [record.polarity_score, record.avg_sentence_length, record.fog_index, record.avg_word_length] {
            assert!(value.is_finite());
        }
        assert_eq!(record.word_count, 0);
    }

    #[test]
    fn test_analyze_is_idempotent() {
        let text = "We measured everything twice. Results were wonderful, not terrible!";
        let lexicon = Lexicon::new(["we"], ["wonderful"], ["terrible"]);
        let first = analyze(text, &lexicon);
        let second = analyze(text, &lexicon);

        assert_eq!(first, second);
        assert_eq!(first.fog_index.to_bits(), second.fog_index.to_bits());
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(3.33333, 2), 3.33);
        assert_eq!(round_to(0.666666, 4), 0.6667);
        assert_eq!(round_to(2.0, 2), 2.0);
        assert_eq!(round_to(-0.99999966, 4), -1.0);
    }

    #[test]
    fn test_values_follow_column_order() {
        let record = MetricRecord { positive_score: 3, word_count: 9, fog_index: 4.5, ..Default::default() };
        let values = record.values();

        assert_eq!(values.len(), METRIC_COLUMNS.len());
        assert_eq!(values[0], "3");
        assert_eq!(values[6], "4.5");
        assert_eq!(values[9], "9");
    }

    #[test]
    fn test_serializes_with_column_names() {
        let json = serde_json::to_value(MetricRecord::zero()).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object.len(), METRIC_COLUMNS.len());
        for column in METRIC_COLUMNS {
            assert!(object.contains_key(column), "missing {column}");
        }
    }
}
