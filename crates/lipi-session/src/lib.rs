//! Transliterating text-input buffer.
//!
//! `TransliteratedInput` holds the value of one form field and applies the
//! conversion policy of the bookkeeping UI: while typing in Hindi, the text
//! is converted when a word is completed with a space, and once more when
//! the field loses focus. The host owns rendering and focus; it feeds edits
//! and blur events in and displays the returned value.

mod language;
mod response;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use lipi_core::translit::transliterate_sentence_with;
use lipi_core::Scheme;
use tracing::debug;

pub use language::{InputLanguage, LanguageError};
pub use response::InputResponse;

pub struct TransliteratedInput {
    language: InputLanguage,
    value: String,
    /// Custom scheme; `None` uses `Scheme::global()`.
    scheme: Option<Arc<Scheme>>,
}

impl TransliteratedInput {
    pub fn new(language: InputLanguage) -> Self {
        Self {
            language,
            value: String::new(),
            scheme: None,
        }
    }

    pub fn with_scheme(mut self, scheme: Arc<Scheme>) -> Self {
        self.scheme = Some(scheme);
        self
    }

    pub fn language(&self) -> InputLanguage {
        self.language
    }

    pub fn set_language(&mut self, language: InputLanguage) {
        self.language = language;
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the value from outside (e.g. a form reset). Not converted.
    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }

    /// Handle an edit. `new_value` is the full field content after the edit.
    pub fn handle_change(&mut self, new_value: &str) -> InputResponse {
        self.value = new_value.to_string();
        if self.language.transliterates() && new_value.ends_with(' ') {
            self.convert()
        } else {
            InputResponse::unchanged(&self.value)
        }
    }

    /// Handle loss of focus: convert whatever is left unconverted.
    pub fn handle_blur(&mut self) -> InputResponse {
        if self.language.transliterates() {
            self.convert()
        } else {
            InputResponse::unchanged(&self.value)
        }
    }

    fn convert(&mut self) -> InputResponse {
        let scheme = self.scheme.as_deref().unwrap_or_else(|| Scheme::global());
        let converted = transliterate_sentence_with(scheme, &self.value);
        let transliterated = converted != self.value;
        if transliterated {
            debug!(
                chars = self.value.chars().count(),
                "input converted to devanagari"
            );
            self.value = converted;
        }
        InputResponse {
            value: self.value.clone(),
            transliterated,
        }
    }
}
