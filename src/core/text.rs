//! Text normalization and fallback tokenization

use lazy_static::lazy_static;
use regex::Regex;

use crate::{REPEAT_RUN_KEEP, REPEAT_RUN_MIN};

lazy_static! {
    static ref RE_WHITESPACE: Regex = Regex::new(r"\s+").unwrap();

    // Whitespace plus ASCII and CJK sentence punctuation
    static ref RE_TOKEN_SPLIT: Regex = Regex::new(r"[\s,;!?。、]+").unwrap();
}

/// Normalize text for keyword matching.
///
/// 1. optional Thai cleanup (zero-width characters, doubled combining marks)
/// 2. whitespace runs → one space, trimmed
/// 3. runs of ≥5 identical characters → 3 (e.g. 5555555 → 555)
pub fn normalize(text: &str, thai: bool) -> String {
    if text.is_empty() {
        return String::new();
    }

    let cleaned = if thai {
        normalize_thai(text)
    } else {
        text.to_string()
    };

    let collapsed = RE_WHITESPACE.replace_all(&cleaned, " ");
    reduce_repeats(collapsed.trim())
}

/// Split into word-like tokens. Empty or blank text gives no tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    RE_TOKEN_SPLIT
        .split(text)
        .filter(|tok| !tok.is_empty())
        .map(String::from)
        .collect()
}

fn reduce_repeats(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        let mut run = 1;
        while chars.peek() == Some(&c) {
            chars.next();
            run += 1;
        }
        let keep = if run >= REPEAT_RUN_MIN { REPEAT_RUN_KEEP } else { run };
        out.extend(std::iter::repeat(c).take(keep));
    }

    out
}

fn normalize_thai(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev: Option<char> = None;

    for c in text.chars() {
        if is_zero_width(c) {
            continue;
        }
        // Same vowel/tone mark typed twice renders as one; keep one
        if is_thai_combining(c) && prev == Some(c) {
            continue;
        }
        out.push(c);
        prev = Some(c);
    }

    out
}

fn is_zero_width(c: char) -> bool {
    matches!(c, '\u{200B}' | '\u{200C}' | '\u{200D}' | '\u{FEFF}')
}

fn is_thai_combining(c: char) -> bool {
    matches!(c, '\u{0E31}' | '\u{0E34}'..='\u{0E3A}' | '\u{0E47}'..='\u{0E4E}')
}
