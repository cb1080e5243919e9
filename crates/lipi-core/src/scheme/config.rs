use std::collections::BTreeMap;

use serde::Deserialize;

use super::Scheme;

const MAX_CONSONANT_LEN: usize = 3;
const MAX_VOWEL_LEN: usize = 2;

#[derive(Deserialize)]
struct SchemeConfig {
    virama: String,
    consonants: BTreeMap<String, String>,
    matras: BTreeMap<String, String>,
    vowels: BTreeMap<String, String>,
    #[serde(default)]
    reverse: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum SchemeError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[{0}] table is empty")]
    Empty(&'static str),
    #[error("invalid key {key:?} in [{table}]: {reason}")]
    InvalidKey {
        table: &'static str,
        key: String,
        reason: &'static str,
    },
    #[error("empty value for key {key:?} in [{table}]")]
    EmptyValue { table: &'static str, key: String },
    #[error("matra {0:?} has no matching entry in [vowels]")]
    MissingVowel(String),
    #[error("virama must not be empty")]
    EmptyVirama,
    #[error("phonetic scheme already initialized")]
    AlreadyInitialized,
}

/// Parse and validate a scheme TOML document.
pub fn parse_scheme_toml(toml_str: &str) -> Result<Scheme, SchemeError> {
    let config: SchemeConfig =
        toml::from_str(toml_str).map_err(|e| SchemeError::Parse(e.to_string()))?;

    if config.virama.is_empty() {
        return Err(SchemeError::EmptyVirama);
    }
    check_graphemes("consonants", &config.consonants, MAX_CONSONANT_LEN, false)?;
    // The inherent vowel has no visible sign, so matras may map to "".
    check_graphemes("matras", &config.matras, MAX_VOWEL_LEN, true)?;
    check_graphemes("vowels", &config.vowels, MAX_VOWEL_LEN, false)?;
    // Vowels are matched against lower-cased input only.
    check_lowercase("matras", &config.matras)?;
    check_lowercase("vowels", &config.vowels)?;

    if let Some(key) = config
        .matras
        .keys()
        .find(|k| !config.vowels.contains_key(k.as_str()))
    {
        return Err(SchemeError::MissingVowel(key.clone()));
    }

    let mut reverse = Vec::with_capacity(config.reverse.len());
    for (key, value) in config.reverse {
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => reverse.push((c, value)),
            _ => {
                return Err(SchemeError::InvalidKey {
                    table: "reverse",
                    key,
                    reason: "must be exactly one character",
                })
            }
        }
    }

    Ok(Scheme::from_tables(
        config.consonants.into_iter().collect(),
        config.matras.into_iter().collect(),
        config.vowels.into_iter().collect(),
        reverse.into_iter().collect(),
        config.virama,
    ))
}

fn check_graphemes(
    table: &'static str,
    map: &BTreeMap<String, String>,
    max_len: usize,
    allow_empty_value: bool,
) -> Result<(), SchemeError> {
    if map.is_empty() {
        return Err(SchemeError::Empty(table));
    }
    for (key, value) in map {
        if key.is_empty() || !key.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(SchemeError::InvalidKey {
                table,
                key: key.clone(),
                reason: "must be ASCII letters",
            });
        }
        if key.len() > max_len {
            return Err(SchemeError::InvalidKey {
                table,
                key: key.clone(),
                reason: "grapheme too long",
            });
        }
        if value.is_empty() && !allow_empty_value {
            return Err(SchemeError::EmptyValue {
                table,
                key: key.clone(),
            });
        }
    }
    Ok(())
}

fn check_lowercase(
    table: &'static str,
    map: &BTreeMap<String, String>,
) -> Result<(), SchemeError> {
    match map.keys().find(|k| k.bytes().any(|b| b.is_ascii_uppercase())) {
        Some(key) => Err(SchemeError::InvalidKey {
            table,
            key: key.clone(),
            reason: "must be lower case",
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
virama = "्"

[consonants]
k = "क"

[matras]
a = ""
i = "ि"

[vowels]
a = "अ"
i = "इ"
"#;

    #[test]
    fn parse_minimal_toml() {
        let scheme = parse_scheme_toml(MINIMAL).unwrap();
        assert_eq!(scheme.consonant_count(), 1);
        assert_eq!(scheme.virama(), "्");
    }

    #[test]
    fn parse_default_toml() {
        let scheme = parse_scheme_toml(super::super::table::DEFAULT_TOML).unwrap();
        assert_eq!(scheme.consonant_count(), 36);
        assert!(scheme.reverse_count() > 50);
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_scheme_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, SchemeError::Parse(_)));
    }

    #[test]
    fn error_missing_table() {
        let err = parse_scheme_toml("virama = \"्\"\n[consonants]\nk = \"क\"\n").unwrap_err();
        assert!(matches!(err, SchemeError::Parse(_)));
    }

    #[test]
    fn error_empty_consonants() {
        let toml = MINIMAL.replace("k = \"क\"", "");
        let err = parse_scheme_toml(&toml).unwrap_err();
        assert!(matches!(err, SchemeError::Empty("consonants")));
    }

    #[test]
    fn error_non_ascii_key() {
        let toml = MINIMAL.replace("k = \"क\"", "\"क\" = \"k\"");
        let err = parse_scheme_toml(&toml).unwrap_err();
        assert!(matches!(
            err,
            SchemeError::InvalidKey {
                table: "consonants",
                ..
            }
        ));
    }

    #[test]
    fn error_long_grapheme() {
        let toml = MINIMAL.replace("k = \"क\"", "kshh = \"क\"");
        let err = parse_scheme_toml(&toml).unwrap_err();
        assert!(matches!(err, SchemeError::InvalidKey { .. }));
    }

    #[test]
    fn error_upper_case_vowel_key() {
        let toml = MINIMAL.replace("i = \"इ\"", "I = \"इ\"");
        let err = parse_scheme_toml(&toml).unwrap_err();
        assert!(matches!(
            err,
            SchemeError::InvalidKey {
                table: "vowels",
                ref key,
                ..
            } if key == "I"
        ));

        let toml = MINIMAL.replace("i = \"ि\"", "I = \"ि\"");
        let err = parse_scheme_toml(&toml).unwrap_err();
        assert!(matches!(err, SchemeError::InvalidKey { table: "matras", .. }));
    }

    #[test]
    fn upper_case_consonant_key_allowed() {
        let toml = MINIMAL.replace("k = \"क\"", "T = \"ट\"");
        assert!(parse_scheme_toml(&toml).is_ok());
    }

    #[test]
    fn error_empty_consonant_value() {
        let toml = MINIMAL.replace("k = \"क\"", "k = \"\"");
        let err = parse_scheme_toml(&toml).unwrap_err();
        assert!(matches!(
            err,
            SchemeError::EmptyValue {
                table: "consonants",
                ..
            }
        ));
    }

    #[test]
    fn error_matra_without_vowel() {
        let toml = MINIMAL.replace("i = \"इ\"", "");
        let err = parse_scheme_toml(&toml).unwrap_err();
        assert!(matches!(err, SchemeError::MissingVowel(ref k) if k == "i"));
    }

    #[test]
    fn error_multi_char_reverse_key() {
        let toml = format!("{MINIMAL}\n[reverse]\n\"कि\" = \"ki\"\n");
        let err = parse_scheme_toml(&toml).unwrap_err();
        assert!(matches!(err, SchemeError::InvalidKey { table: "reverse", .. }));
    }

    #[test]
    fn error_empty_virama() {
        let toml = MINIMAL.replace("virama = \"्\"", "virama = \"\"");
        let err = parse_scheme_toml(&toml).unwrap_err();
        assert!(matches!(err, SchemeError::EmptyVirama));
    }
}
