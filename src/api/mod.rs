//! UniFFI export layer: type-safe bindings for the host UI.
//!
//! Each public type here maps to a generated foreign class, record, or enum.

mod input;
mod types;

pub use input::LipiInput;
pub use types::{LipiError, LipiInputResponse, LipiSegment, LipiSegmentKind};

use lipi_core::search::SearchQuery;
use lipi_core::{normalize_for_search, segment, transliterate, transliterate_sentence, Scheme};
use tracing::info;

// ---------------------------------------------------------------------------
// Top-level functions
// ---------------------------------------------------------------------------

#[uniffi::export]
fn engine_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[uniffi::export]
fn lipi_transliterate(text: String) -> String {
    transliterate(&text)
}

#[uniffi::export]
fn lipi_transliterate_sentence(sentence: String) -> String {
    transliterate_sentence(&sentence)
}

#[uniffi::export]
fn lipi_explain(word: String) -> Vec<LipiSegment> {
    segment(&word).into_iter().map(LipiSegment::from).collect()
}

#[uniffi::export]
fn lipi_normalize_for_search(text: String) -> String {
    normalize_for_search(&text)
}

/// True when `term` matches any of `fields` (or `term` is blank).
#[uniffi::export]
fn lipi_search_matches(term: String, fields: Vec<String>) -> bool {
    SearchQuery::new(&term).matches_any(fields.iter().map(String::as_str))
}

/// Install a custom phonetic scheme from a TOML file. Must be called before
/// any other function touches the scheme.
#[uniffi::export]
fn lipi_load_scheme(path: String) -> Result<(), LipiError> {
    let content = std::fs::read_to_string(&path).map_err(|e| LipiError::Io {
        msg: format!("{path}: {e}"),
    })?;
    Scheme::init_custom(content).map_err(|e| LipiError::InvalidData { msg: e.to_string() })?;
    info!(path = %path, "custom scheme loaded");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(engine_version(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_transliterate_exports() {
        assert_eq!(lipi_transliterate("kaa".into()), "का");
        assert_eq!(lipi_transliterate("123".into()), "123");
        assert_eq!(
            lipi_transliterate_sentence("ram  shyam".into()),
            "रम  श्यम"
        );
    }

    #[test]
    fn test_explain_export() {
        let segs = lipi_explain("kbz".into());
        let kinds: Vec<LipiSegmentKind> = segs.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                LipiSegmentKind::HalfConsonant,
                LipiSegmentKind::HalfConsonant,
                LipiSegmentKind::FinalConsonant,
            ]
        );
        assert_eq!(segs[2].output, "ज़");
    }

    #[test]
    fn test_search_exports() {
        assert_eq!(lipi_normalize_for_search("Raahul".into()), "rahul");
        let fields = vec!["Rent".to_string(), "सुरेश कुमार".to_string()];
        assert!(lipi_search_matches("suresh".into(), fields.clone()));
        assert!(!lipi_search_matches("ramesh".into(), fields.clone()));
        assert!(lipi_search_matches(" ".into(), fields));
    }

    #[test]
    fn test_load_scheme_missing_file() {
        let err = lipi_load_scheme("/nonexistent/lipi-scheme.toml".into()).unwrap_err();
        assert!(matches!(err, LipiError::Io { .. }));
    }

    #[test]
    fn test_load_scheme_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "virama = \"\"").unwrap();
        let path = file.path().to_string_lossy().into_owned();
        let err = lipi_load_scheme(path).unwrap_err();
        assert!(matches!(err, LipiError::InvalidData { .. }));
    }
}
