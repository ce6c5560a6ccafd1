//! Word count, reading ease and keyword density
//!
//! Reading ease is the Flesch formula:
//! `206.835 - 1.015 * (words / sentences) - 84.6 * (syllables / words)`.
//! Higher is easier. Typical prose lands in 0-100, but short or irregular
//! text can fall outside that range.

use super::tokenizer::Tokenizer;
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

const FLESCH_BASE: f64 = 206.835;
const FLESCH_SENTENCE_WEIGHT: f64 = 1.015;
const FLESCH_SYLLABLE_WEIGHT: f64 = 84.6;

fn sentence_break() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[.!?]+").unwrap())
}

/// Count of whitespace-delimited tokens in the raw text
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Flesch reading ease of the raw text.
///
/// Text without any words scores the formula's base value.
pub fn readability(text: &str) -> f64 {
    let words: Vec<&str> = text
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| !w.is_empty())
        .collect();

    if words.is_empty() {
        return FLESCH_BASE;
    }

    let sentences = sentence_count(text).max(1) as f64;
    let syllables: usize = words.iter().map(|w| syllable_count(w)).sum();
    let word_total = words.len() as f64;

    FLESCH_BASE
        - FLESCH_SENTENCE_WEIGHT * (word_total / sentences)
        - FLESCH_SYLLABLE_WEIGHT * (syllables as f64 / word_total)
}

/// Number of sentences: runs of text with at least one alphanumeric
/// character, separated by `.`, `!` or `?`
pub fn sentence_count(text: &str) -> usize {
    sentence_break()
        .split(text)
        .filter(|s| s.chars().any(char::is_alphanumeric))
        .count()
}

/// Estimated syllables in a single word (vowel groups, silent trailing `e`).
/// Every word has at least one syllable.
pub fn syllable_count(word: &str) -> usize {
    let letters: Vec<char> = word
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect();

    if letters.is_empty() {
        return 1;
    }

    let mut count = 0;
    let mut prev_vowel = false;
    for &c in &letters {
        let vowel = is_vowel(c);
        if vowel && !prev_vowel {
            count += 1;
        }
        prev_vowel = vowel;
    }

    let n = letters.len();
    let consonant_le = n >= 3 && letters[n - 2] == 'l' && !is_vowel(letters[n - 3]);
    if letters[n - 1] == 'e' && count > 1 && !consonant_le {
        count -= 1;
    }

    count.max(1)
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Fraction of filtered tokens that exactly match one of the keywords.
///
/// Matching is case-insensitive and the keywords are treated as a set, so
/// the result stays within `[0, 1]`. Returns 0.0 when no tokens survive
/// filtering.
pub fn keyword_density<S: AsRef<str>>(tokenizer: &Tokenizer, text: &str, keywords: &[S]) -> f64 {
    let tokens = tokenizer.tokenize(text);
    if tokens.is_empty() {
        return 0.0;
    }

    let targets: HashSet<String> = keywords
        .iter()
        .map(|k| k.as_ref().trim().to_lowercase())
        .collect();
    let matches = tokens.iter().filter(|t| targets.contains(*t)).count();

    matches as f64 / tokens.len() as f64
}
