//! Content-word extraction.
//!
//! Cleaning lowercases the text, tokenizes it and keeps only the tokens that
//! are purely alphabetic and not stop words. Order and duplicates are kept,
//! since sentiment scoring counts every occurrence.

use crate::lexicon::Lexicon;
use crate::tokenize::{is_alphabetic, words};

/// Returns the ordered content words of `text`.
///
/// # Example
///
/// ```rust
/// use sentimetric_core::{Lexicon, clean};
///
/// let lexicon = Lexicon::new(["the"], Vec::<&str>::new(), Vec::<&str>::new());
/// assert_eq!(clean("The cat saw the cat, twice!", &lexicon), vec!["cat", "saw", "cat", "twice"]);
/// ```
pub fn clean(text: &str, lexicon: &Lexicon) -> Vec<String> {
    content_words(&words(&text.to_lowercase()), lexicon)
}

/// Filters already-lowercased tokens down to content words.
pub(crate) fn content_words(tokens: &[String], lexicon: &Lexicon) -> Vec<String> {
    tokens.iter().filter(|t| is_alphabetic(t) && !lexicon.is_stop_word(t)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> Lexicon {
        Lexicon::new(["i", "we", "this", "are"], ["love", "happy"], Vec::<&str>::new())
    }

    #[test]
    fn test_clean_scenario() {
        assert_eq!(clean("I love this. We are happy.", &lexicon()), vec!["love", "happy"]);
    }

    #[test]
    fn test_clean_drops_non_alphabetic() {
        let result = clean("Version 2 shipped in 2024, well-known & loved!", &lexicon());
        assert_eq!(result, vec!["version", "shipped", "in", "loved"]);
    }

    #[test]
    fn test_clean_keeps_duplicates_in_order() {
        let result = clean("Happy happy JOY", &lexicon());
        assert_eq!(result, vec!["happy", "happy", "joy"]);
    }

    #[test]
    fn test_clean_contractions() {
        let lexicon = Lexicon::baseline();
        assert_eq!(clean("Don't panic", &lexicon), vec!["panic"]);
    }

    #[test]
    fn test_clean_splits_cannot_into_stop_words() {
        let lexicon = Lexicon::baseline();
        assert_eq!(clean("We cannot stop.", &lexicon), vec!["stop"]);
    }

    #[test]
    fn test_clean_empty() {
        assert!(clean("", &lexicon()).is_empty());
        assert!(clean("... !!! 42", &lexicon()).is_empty());
    }
}
