use crate::scheme::Scheme;
use crate::unicode::has_latin;

use super::transliterate_with;

/// Split `s` into alternating runs of whitespace and non-whitespace.
///
/// Concatenating the returned slices reproduces `s` exactly.
pub fn split_whitespace_runs(s: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut prev_ws: Option<bool> = None;
    for (idx, c) in s.char_indices() {
        let ws = c.is_whitespace();
        if prev_ws.is_some_and(|p| p != ws) {
            tokens.push(&s[start..idx]);
            start = idx;
        }
        prev_ws = Some(ws);
    }
    if start < s.len() {
        tokens.push(&s[start..]);
    }
    tokens
}

/// Transliterate every word of `sentence`, keeping its whitespace as typed.
pub fn transliterate_sentence(sentence: &str) -> String {
    transliterate_sentence_with(Scheme::global(), sentence)
}

pub fn transliterate_sentence_with(scheme: &Scheme, sentence: &str) -> String {
    split_whitespace_runs(sentence)
        .into_iter()
        .map(|token| {
            if token.trim().is_empty() || !has_latin(token) {
                token.to_string()
            } else {
                transliterate_with(scheme, token)
            }
        })
        .collect()
}
