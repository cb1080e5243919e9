//! Script-agnostic search keys.
//!
//! `normalize_for_search` folds Devanagari and Roman spellings of a word onto
//! one lower-case Roman key, so a query typed in either script finds records
//! stored in the other. Keys are for comparison only, never for display.

use crate::scheme::Scheme;

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Normalize `text` with the global scheme.
pub fn normalize_for_search(text: &str) -> String {
    normalize_for_search_with(Scheme::global(), text)
}

pub fn normalize_for_search_with(scheme: &Scheme, text: &str) -> String {
    let lowered = text.trim().to_lowercase();

    let mut romanized = String::with_capacity(lowered.len());
    for c in lowered.chars() {
        match scheme.reverse(c) {
            Some(roman) => romanized.push_str(roman),
            None if c.is_whitespace() => {}
            None => romanized.push(c),
        }
    }

    // Whitespace is dropped before collapsing so that "a a" and "aa" share a
    // key and a second pass finds nothing left to collapse.
    let mut key = String::with_capacity(romanized.len());
    let mut prev_vowel = false;
    for c in romanized.chars() {
        let vowel = is_vowel(c);
        if !(vowel && prev_vowel) {
            key.push(c);
        }
        prev_vowel = vowel;
    }
    key
}

/// A search term normalized once and matched against many fields.
///
/// Fields are normalized with the same scheme that built the key, so a query
/// made with [`SearchQuery::with_scheme`] never compares against keys from
/// the global scheme.
#[derive(Debug, Clone)]
pub struct SearchQuery<'s> {
    scheme: &'s Scheme,
    key: String,
}

impl SearchQuery<'static> {
    pub fn new(term: &str) -> Self {
        Self::with_scheme(Scheme::global(), term)
    }
}

impl<'s> SearchQuery<'s> {
    pub fn with_scheme(scheme: &'s Scheme, term: &str) -> Self {
        Self {
            scheme,
            key: normalize_for_search_with(scheme, term),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// An empty query matches everything.
    pub fn is_empty(&self) -> bool {
        self.key.is_empty()
    }

    pub fn matches(&self, field: &str) -> bool {
        self.is_empty() || normalize_for_search_with(self.scheme, field).contains(&self.key)
    }

    /// True when any of `fields` matches, e.g. a transaction's category,
    /// account, payee and notes.
    pub fn matches_any<'a, I>(&self, fields: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.is_empty() || fields.into_iter().any(|f| self.matches(f))
    }
}

/// One-off match of `term` against `field`.
pub fn matches(term: &str, field: &str) -> bool {
    SearchQuery::new(term).matches(field)
}
