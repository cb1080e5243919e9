use std::sync::{Arc, Mutex, MutexGuard};

use lipi_session::{InputLanguage, TransliteratedInput};

use super::{LipiError, LipiInputResponse};

fn parse_language(code: &str) -> Result<InputLanguage, LipiError> {
    code.parse().map_err(|e: lipi_session::LanguageError| LipiError::InvalidData {
        msg: e.to_string(),
    })
}

/// One transliterated text field, shared with the host UI.
#[derive(uniffi::Object)]
pub struct LipiInput {
    inner: Mutex<TransliteratedInput>,
}

impl LipiInput {
    fn inner(&self) -> MutexGuard<'_, TransliteratedInput> {
        // The buffer is valid after any panic mid-update, so recover it.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[uniffi::export]
impl LipiInput {
    #[uniffi::constructor]
    pub fn new(language: String) -> Result<Arc<Self>, LipiError> {
        let language = parse_language(&language)?;
        Ok(Arc::new(Self {
            inner: Mutex::new(TransliteratedInput::new(language)),
        }))
    }

    pub fn handle_change(&self, value: String) -> LipiInputResponse {
        self.inner().handle_change(&value).into()
    }

    pub fn handle_blur(&self) -> LipiInputResponse {
        self.inner().handle_blur().into()
    }

    pub fn set_value(&self, value: String) {
        self.inner().set_value(&value);
    }

    pub fn set_language(&self, language: String) -> Result<(), LipiError> {
        let language = parse_language(&language)?;
        self.inner().set_language(language);
        Ok(())
    }

    pub fn language(&self) -> String {
        self.inner().language().code().to_string()
    }

    pub fn value(&self) -> String {
        self.inner().value().to_string()
    }
}
