//! Bilingual phonetic transliteration: Roman keyboard input to Devanagari,
//! and script-agnostic search keys for matching either spelling.

pub mod scheme;
pub mod search;
pub mod translit;
pub mod unicode;

pub use scheme::{Scheme, SchemeError};
pub use search::{normalize_for_search, SearchQuery};
pub use translit::{segment, transliterate, transliterate_sentence, Segment, SegmentKind};
