//! Heuristic syllable estimation.

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// Estimates the number of syllables in a word.
///
/// Each maximal run of vowels counts as one syllable. Words ending in `es` or
/// `ed` lose one syllable (a silent-suffix approximation that undercounts
/// words like "wanted"). The result is never below 1; an empty word also
/// yields 1, although callers only pass alphabetic tokens.
///
/// # Example
///
/// ```rust
/// use sentimetric_core::count_syllables;
///
/// assert_eq!(count_syllables("beautiful"), 3);
/// assert_eq!(count_syllables("cats"), 1);
/// ```
pub fn count_syllables(word: &str) -> usize {
    let word = word.to_lowercase();

    let mut count = 0usize;
    let mut previous_was_vowel = false;
    for c in word.chars() {
        let is_vowel = VOWELS.contains(&c);
        if is_vowel && !previous_was_vowel {
            count += 1;
        }
        previous_was_vowel = is_vowel;
    }

    if word.ends_with("es") || word.ends_with("ed") {
        count = count.saturating_sub(1);
    }

    count.max(1)
}
