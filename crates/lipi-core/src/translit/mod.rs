//! Roman-to-Devanagari phonetic transliteration.
//!
//! A word is scanned left to right with greedy longest-match lookups against
//! the active [`Scheme`]: a consonant takes the vowel sign that follows it,
//! or the virama when another consonant follows. Anything unrecognised is
//! copied through unchanged, so every input has an output.

mod explain;
mod sentence;

pub use explain::format_segments;
pub use sentence::{split_whitespace_runs, transliterate_sentence, transliterate_sentence_with};

use serde::Serialize;
use tracing::debug_span;

use crate::scheme::Scheme;
use crate::unicode::has_latin;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    /// Consonant followed by a vowel sign (possibly the silent inherent "a").
    Syllable,
    /// Consonant followed by another consonant or symbol; carries the virama.
    HalfConsonant,
    /// Consonant at the end of a word, printed bare.
    FinalConsonant,
    /// Standalone vowel letter.
    Vowel,
    /// Character copied through unchanged.
    Literal,
}

/// One step of the scan: the Roman text consumed and the glyphs it produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub roman: String,
    pub output: String,
    pub kind: SegmentKind,
}

/// Transliterate a single word using the global scheme.
pub fn transliterate(text: &str) -> String {
    transliterate_with(Scheme::global(), text)
}

pub fn transliterate_with(scheme: &Scheme, text: &str) -> String {
    if !has_latin(text) {
        return text.to_string();
    }
    segment_with(scheme, text)
        .into_iter()
        .map(|s| s.output)
        .collect()
}

/// Break `text` into the segments the transliterator would emit.
pub fn segment(text: &str) -> Vec<Segment> {
    segment_with(Scheme::global(), text)
}

pub fn segment_with(scheme: &Scheme, text: &str) -> Vec<Segment> {
    let chars: Vec<char> = text.chars().collect();
    let _span = debug_span!("segment", char_count = chars.len()).entered();
    // Consonants are matched on `chars` (case matters for T/D/N);
    // vowels always on the lower-cased copy.
    let lower: Vec<char> = chars.iter().map(char::to_ascii_lowercase).collect();
    let mut segments = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        if let Some((len, consonant)) = scheme.consonant_at(&chars[i..]) {
            let next = i + len;
            if let Some((vlen, matra)) = scheme.matra_at(&lower[next..]) {
                segments.push(Segment {
                    roman: chars[i..next + vlen].iter().collect(),
                    output: format!("{consonant}{matra}"),
                    kind: SegmentKind::Syllable,
                });
                i = next + vlen;
            } else {
                let at_word_end = chars.get(next).map_or(true, |c| c.is_whitespace());
                let (output, kind) = if at_word_end {
                    (consonant.to_string(), SegmentKind::FinalConsonant)
                } else {
                    (
                        format!("{consonant}{}", scheme.virama()),
                        SegmentKind::HalfConsonant,
                    )
                };
                segments.push(Segment {
                    roman: chars[i..next].iter().collect(),
                    output,
                    kind,
                });
                i = next;
            }
            continue;
        }

        if let Some((len, vowel)) = scheme.vowel_at(&lower[i..]) {
            segments.push(Segment {
                roman: chars[i..i + len].iter().collect(),
                output: vowel.to_string(),
                kind: SegmentKind::Vowel,
            });
            i += len;
            continue;
        }

        segments.push(Segment {
            roman: chars[i].to_string(),
            output: chars[i].to_string(),
            kind: SegmentKind::Literal,
        });
        i += 1;
    }

    segments
}
