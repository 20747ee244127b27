//! First-person pronoun counting.

use std::sync::LazyLock;

use regex::Regex;

static PRONOUN_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\b(I|we|my|ours|us)\b").unwrap());

static COUNTRY_CODE_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bUS\b").unwrap());

/// Counts first-person pronouns (`I`, `we`, `my`, `ours`, `us`) in raw, unlowercased text.
///
/// Matching is case-insensitive on word boundaries. The all-caps match `US` is
/// treated as the country abbreviation and never counted. A lowercase `us` is
/// also dropped whenever a standalone `US` appears anywhere in the text, so a
/// document mentioning the country undercounts its "us" pronouns.
///
/// # Example
///
/// ```rust
/// use sentimetric_core::count_personal_pronouns;
///
/// assert_eq!(count_personal_pronouns("I love this. We are happy."), 2);
/// assert_eq!(count_personal_pronouns("The US economy helped us."), 0);
/// ```
pub fn count_personal_pronouns(text: &str) -> usize {
    let mentions_country = COUNTRY_CODE_PATTERN.is_match(text);

    PRONOUN_PATTERN
        .find_iter(text)
        .filter(|m| match m.as_str() {
            "US" => false,
            "us" => !mentions_country,
            _ => true,
        })
        .count()
}
