use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Language the user is typing in. Persisted by the host as its code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InputLanguage {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "hi")]
    Hindi,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LanguageError {
    #[error("unknown language code: {0:?}")]
    UnknownLanguage(String),
}

impl InputLanguage {
    pub fn code(self) -> &'static str {
        match self {
            InputLanguage::English => "en",
            InputLanguage::Hindi => "hi",
        }
    }

    /// Whether typed Roman text is converted to Devanagari.
    pub fn transliterates(self) -> bool {
        matches!(self, InputLanguage::Hindi)
    }
}

impl FromStr for InputLanguage {
    type Err = LanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "en" => Ok(InputLanguage::English),
            "hi" => Ok(InputLanguage::Hindi),
            other => Err(LanguageError::UnknownLanguage(other.to_string())),
        }
    }
}

impl fmt::Display for InputLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
