//! Phonetic scheme: the Roman ⇄ Devanagari lookup tables.
//!
//! A scheme is loaded from TOML (`default_scheme.toml` is embedded) and then
//! never mutated. `Scheme::global()` returns the process-wide instance;
//! `Scheme::init_custom()` may replace the default before first use.

mod config;
mod table;

pub use config::{parse_scheme_toml, SchemeError};

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::debug;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Returns the embedded default scheme TOML content.
pub fn default_toml() -> &'static str {
    table::DEFAULT_TOML
}

#[derive(Debug, Clone)]
pub struct Scheme {
    consonants: HashMap<String, String>,
    matras: HashMap<String, String>,
    vowels: HashMap<String, String>,
    reverse: HashMap<char, String>,
    virama: String,
    max_consonant_len: usize,
    max_vowel_len: usize,
}

impl Scheme {
    pub(crate) fn from_tables(
        consonants: HashMap<String, String>,
        matras: HashMap<String, String>,
        vowels: HashMap<String, String>,
        reverse: HashMap<char, String>,
        virama: String,
    ) -> Self {
        let max_consonant_len = consonants.keys().map(String::len).max().unwrap_or(0);
        let max_vowel_len = matras
            .keys()
            .chain(vowels.keys())
            .map(String::len)
            .max()
            .unwrap_or(0);
        Self {
            consonants,
            matras,
            vowels,
            reverse,
            virama,
            max_consonant_len,
            max_vowel_len,
        }
    }

    /// Parse a scheme from TOML text. Same as [`parse_scheme_toml`].
    pub fn from_toml(toml_str: &str) -> Result<Self, SchemeError> {
        parse_scheme_toml(toml_str)
    }

    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), SchemeError> {
        // Validate eagerly
        parse_scheme_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| SchemeError::AlreadyInitialized)?;
        debug!("custom phonetic scheme installed");
        Ok(())
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static Scheme {
        static INSTANCE: OnceLock<Scheme> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let custom = CUSTOM_TOML.get();
            let toml_str = custom.map(|s| s.as_str()).unwrap_or(table::DEFAULT_TOML);
            let scheme = parse_scheme_toml(toml_str).expect("scheme TOML must be valid");
            debug!(
                custom = custom.is_some(),
                consonants = scheme.consonants.len(),
                vowels = scheme.vowels.len(),
                reverse = scheme.reverse.len(),
                "phonetic scheme loaded"
            );
            scheme
        })
    }

    /// Longest consonant grapheme at the start of `rest`.
    ///
    /// Each length is tried in exact case first and then lower-cased, so
    /// upper-case keys such as `T` only match upper-case input while `Kh`
    /// still finds `kh`. Returns the number of chars consumed and the glyph.
    pub fn consonant_at(&self, rest: &[char]) -> Option<(usize, &str)> {
        for len in (1..=self.max_consonant_len.min(rest.len())).rev() {
            let part: String = rest[..len].iter().collect();
            let glyph = self
                .consonants
                .get(&part)
                .or_else(|| self.consonants.get(&part.to_ascii_lowercase()));
            if let Some(glyph) = glyph {
                return Some((len, glyph.as_str()));
            }
        }
        None
    }

    /// Longest vowel sign at the start of an already lower-cased `rest`.
    pub fn matra_at(&self, rest: &[char]) -> Option<(usize, &str)> {
        longest_match(&self.matras, rest, self.max_vowel_len)
    }

    /// Longest independent vowel at the start of an already lower-cased `rest`.
    pub fn vowel_at(&self, rest: &[char]) -> Option<(usize, &str)> {
        longest_match(&self.vowels, rest, self.max_vowel_len)
    }

    /// Simplified Roman spelling of a single Devanagari glyph.
    pub fn reverse(&self, c: char) -> Option<&str> {
        self.reverse.get(&c).map(String::as_str)
    }

    pub fn virama(&self) -> &str {
        &self.virama
    }

    pub fn consonant_count(&self) -> usize {
        self.consonants.len()
    }

    pub fn reverse_count(&self) -> usize {
        self.reverse.len()
    }
}

fn longest_match<'a>(
    map: &'a HashMap<String, String>,
    rest: &[char],
    max_len: usize,
) -> Option<(usize, &'a str)> {
    for len in (1..=max_len.min(rest.len())).rev() {
        let part: String = rest[..len].iter().collect();
        if let Some(value) = map.get(&part) {
            return Some((len, value.as_str()));
        }
    }
    None
}
