//! Character-level classification for Roman and Devanagari text.

/// Check the Devanagari block (U+0900..U+097F).
#[cfg(test)]
pub(crate) fn is_devanagari(c: char) -> bool {
    ('\u{0900}'..='\u{097F}').contains(&c)
}

pub fn is_latin(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// True when `s` contains at least one ASCII letter, i.e. something the
/// transliterator could convert.
pub fn has_latin(s: &str) -> bool {
    s.chars().any(is_latin)
}
