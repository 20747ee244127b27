//! Sentence and word tokenization.
//!
//! Sentences come from Unicode (UAX #29) sentence boundaries, repaired so that
//! titles, common abbreviations and single-letter initials do not end a
//! sentence. Words follow Penn Treebank conventions closely enough for
//! counting: punctuation and `...` become their own tokens, sentence-final
//! periods are split off (after an abbreviation too when it ends the text),
//! and contractions such as `can't` or `cannot` are split in two.
//!
//! # Example
//!
//! ```rust
//! use sentimetric_core::tokenize::{sentences, words};
//!
//! assert_eq!(sentences("Dr. Smith arrived. He sat down.").len(), 2);
//! assert_eq!(words("don't stop."), vec!["do", "n't", "stop", "."]);
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::lexicon::BASELINE_STOP_WORDS;

/// Abbreviations whose trailing period neither ends a sentence nor splits off as a token.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "rev", "gen", "col", "capt", "lt", "sgt", "gov", "sen",
    "rep", "hon", "vs", "etc", "inc", "ltd", "co", "corp", "dept", "univ", "no", "vol", "fig", "approx", "est", "jan",
    "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec",
];

/// Punctuation that always forms a token of its own.
const SEPARATORS: &[char] = &[
    ';', '!', '?', '(', ')', '[', ']', '{', '}', '<', '>', '&', '@', '#', '$', '%', '"', '\u{201C}', '\u{201D}',
    '\u{2014}', '\u{2013}', '\u{2026}',
];

/// Quote characters peeled off the start or end of a word.
const QUOTES: &[char] = &['\'', '`', '\u{2018}', '\u{2019}', '\u{00AB}', '\u{00BB}'];

/// Clitic suffixes split from their stem, longest first.
const CLITICS: &[&str] = &["n't", "'ll", "'re", "'ve", "'s", "'m", "'d"];

/// Whole-word contractions and the character offset they split at.
const CONTRACTIONS: &[(&str, usize)] = &[
    ("cannot", 3),
    ("d'ye", 1),
    ("gimme", 3),
    ("gonna", 3),
    ("gotta", 3),
    ("lemme", 3),
    ("more'n", 4),
    ("wanna", 3),
    ("'tis", 2),
    ("'twas", 2),
];

/// Tokens that may follow a text-final period.
const CLOSERS: &[&str] = &[")", "]", "}", ">", "\"", "'", "\u{2019}", "\u{201D}"];

/// Splits text into sentences.
///
/// Whitespace-only segments are dropped and each sentence is trimmed.
pub fn sentences(text: &str) -> Vec<String> {
    let segments: Vec<&str> = text.unicode_sentences().collect();
    let mut result = Vec::new();
    let mut pending = String::new();

    for (i, segment) in segments.iter().enumerate() {
        pending.push_str(segment);
        if continues_past_period(&pending, segments.get(i + 1).copied()) {
            continue;
        }

        push_sentence(&mut result, &pending);
        pending.clear();
    }

    push_sentence(&mut result, &pending);
    result
}

fn push_sentence(result: &mut Vec<String>, sentence: &str) {
    let trimmed = sentence.trim();
    if !trimmed.is_empty() {
        result.push(trimmed.to_string());
    }
}

/// Whether a sentence candidate stops on an abbreviation, or on an initial
/// that the next segment carries on from.
fn continues_past_period(candidate: &str, next: Option<&str>) -> bool {
    let Some(last) = candidate.split_whitespace().last() else {
        return false;
    };
    let Some(stem) = last.strip_suffix('.') else {
        return false;
    };

    let stem = stem.trim_start_matches(|c: char| !c.is_alphanumeric());
    if ABBREVIATIONS.contains(&stem.to_lowercase().as_str()) {
        return true;
    }

    is_initial(stem) && next.is_some_and(|segment| !opens_sentence(segment))
}

/// A single uppercase letter other than the pronoun `I`.
fn is_initial(stem: &str) -> bool {
    let mut chars = stem.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_uppercase() && c != 'I')
}

/// Whether a segment opens with a capitalized function word such as `We` or `The`.
fn opens_sentence(segment: &str) -> bool {
    let Some(raw) = segment.split_whitespace().next() else {
        return false;
    };
    let first = raw.trim_matches(|c: char| !c.is_alphanumeric());
    if raw.ends_with('.') && is_initial(first) {
        return false;
    }

    first.chars().next().is_some_and(char::is_uppercase)
        && BASELINE_STOP_WORDS.contains(&first.to_lowercase().as_str())
}

/// Splits text into word and punctuation tokens, preserving order and case.
pub fn words(text: &str) -> Vec<String> {
    let spaced = text.replace("--", " -- ");
    let mut tokens = Vec::new();

    for chunk in spaced.split_whitespace() {
        if chunk == "--" {
            tokens.push(chunk.to_string());
            continue;
        }
        for piece in split_separators(chunk) {
            match piece {
                Piece::Punct(p) => tokens.push(p.to_string()),
                Piece::Word(w) => tokenize_word(w, &mut tokens),
            }
        }
    }

    split_final_period(&mut tokens);
    tokens
}

/// Whether a token is non-empty and made only of alphabetic characters.
pub fn is_alphabetic(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic)
}

enum Piece<'a> {
    Word(&'a str),
    Punct(&'a str),
}

/// Cuts a whitespace-free chunk at separator punctuation and `...`.
///
/// Commas and colons only separate when they are not between two digits, so
/// `1,000` and `10:30` stay whole.
fn split_separators(chunk: &str) -> Vec<Piece<'_>> {
    let chars: Vec<(usize, char)> = chunk.char_indices().collect();
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while let Some(&(pos, c)) = chars.get(i) {
        let width = if chunk[pos..].starts_with("...") {
            3
        } else if is_separator(&chars, i) {
            c.len_utf8()
        } else {
            i += 1;
            continue;
        };

        if start < pos {
            pieces.push(Piece::Word(&chunk[start..pos]));
        }
        let end = pos + width;
        pieces.push(Piece::Punct(&chunk[pos..end]));
        start = end;
        i += chunk[pos..end].chars().count();
    }

    if start < chunk.len() {
        pieces.push(Piece::Word(&chunk[start..]));
    }

    pieces
}

fn is_separator(chars: &[(usize, char)], i: usize) -> bool {
    match chars[i].1 {
        ',' | ':' => {
            let prev_digit = i > 0 && chars[i - 1].1.is_ascii_digit();
            let next_digit = chars.get(i + 1).is_some_and(|&(_, n)| n.is_ascii_digit());
            !(prev_digit && next_digit)
        }
        c => SEPARATORS.contains(&c),
    }
}

/// Peels quotes and final periods from a word, then splits contractions and clitics.
fn tokenize_word(word: &str, tokens: &mut Vec<String>) {
    let mut core = word;

    while let Some(c) = core.chars().next() {
        if !QUOTES.contains(&c) || core.len() == c.len_utf8() || is_contraction(strip_trailing(core)) {
            break;
        }
        tokens.push(c.to_string());
        core = &core[c.len_utf8()..];
    }

    let mut trailing = Vec::new();
    loop {
        let Some(c) = core.chars().next_back() else {
            break;
        };

        if QUOTES.contains(&c) && core.len() > c.len_utf8() {
            let cut = core.len() - c.len_utf8();
            trailing.push(&core[cut..]);
            core = &core[..cut];
        } else if c == '.' {
            let stem = core.trim_end_matches('.');
            if stem.is_empty() || is_abbreviation(stem) {
                break;
            }
            trailing.push(&core[stem.len()..]);
            core = stem;
        } else {
            break;
        }
    }

    if !split_contraction(core, tokens) {
        split_clitic(core, tokens);
    }
    tokens.extend(trailing.into_iter().rev().map(str::to_string));
}

fn strip_trailing(word: &str) -> &str {
    word.trim_end_matches(|c: char| c == '.' || QUOTES.contains(&c))
}

fn is_abbreviation(stem: &str) -> bool {
    stem.contains('.') || ABBREVIATIONS.contains(&stem.to_lowercase().as_str())
}

/// Lowercases a word and folds the typographic apostrophe to `'`.
fn fold_apostrophes(word: &str) -> String {
    word.replace('\u{2019}', "'").to_lowercase()
}

fn is_contraction(word: &str) -> bool {
    let folded = fold_apostrophes(word);
    CONTRACTIONS.iter().any(|(contraction, _)| *contraction == folded)
}

fn split_contraction(word: &str, tokens: &mut Vec<String>) -> bool {
    let folded = fold_apostrophes(word);
    let Some(&(_, at)) = CONTRACTIONS.iter().find(|(contraction, _)| *contraction == folded) else {
        return false;
    };

    let cut = word.char_indices().nth(at).map_or(word.len(), |(i, _)| i);
    tokens.push(word[..cut].to_string());
    tokens.push(word[cut..].to_string());
    true
}

fn split_clitic(word: &str, tokens: &mut Vec<String>) {
    let normalized = fold_apostrophes(word);

    for clitic in CLITICS {
        if normalized.ends_with(clitic) && normalized.len() > clitic.len() {
            let suffix_chars = clitic.chars().count();
            let cut = word.char_indices().rev().nth(suffix_chars - 1).map_or(0, |(i, _)| i);
            if cut > 0 {
                tokens.push(word[..cut].to_string());
                tokens.push(word[cut..].to_string());
                return;
            }
        }
    }

    if !word.is_empty() {
        tokens.push(word.to_string());
    }
}

/// Splits the period off the last word of the text, abbreviations included.
///
/// Closing brackets and quotes may follow it. A run of periods is left alone.
fn split_final_period(tokens: &mut Vec<String>) {
    let Some(index) = tokens.iter().rposition(|t| !CLOSERS.contains(&t.as_str())) else {
        return;
    };
    let Some(stem) = tokens[index].strip_suffix('.') else {
        return;
    };
    if stem.is_empty() || stem.ends_with('.') {
        return;
    }

    let stem = stem.to_string();
    tokens[index] = stem;
    tokens.insert(index + 1, ".".to_string());
}
