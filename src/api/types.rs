use lipi_core::{Segment, SegmentKind};
use lipi_session::InputResponse;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum LipiError {
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error("invalid data: {msg}")]
    InvalidData { msg: String },
}

// ---------------------------------------------------------------------------
// Records (value types, copied across FFI boundary)
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, uniffi::Record)]
pub struct LipiSegment {
    pub roman: String,
    pub output: String,
    pub kind: LipiSegmentKind,
}

#[derive(Debug, PartialEq, uniffi::Record)]
pub struct LipiInputResponse {
    pub value: String,
    pub transliterated: bool,
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, uniffi::Enum)]
pub enum LipiSegmentKind {
    Syllable,
    HalfConsonant,
    FinalConsonant,
    Vowel,
    Literal,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

impl From<SegmentKind> for LipiSegmentKind {
    fn from(kind: SegmentKind) -> Self {
        match kind {
            SegmentKind::Syllable => Self::Syllable,
            SegmentKind::HalfConsonant => Self::HalfConsonant,
            SegmentKind::FinalConsonant => Self::FinalConsonant,
            SegmentKind::Vowel => Self::Vowel,
            SegmentKind::Literal => Self::Literal,
        }
    }
}

impl From<Segment> for LipiSegment {
    fn from(seg: Segment) -> Self {
        Self {
            roman: seg.roman,
            output: seg.output,
            kind: seg.kind.into(),
        }
    }
}

impl From<InputResponse> for LipiInputResponse {
    fn from(resp: InputResponse) -> Self {
        Self {
            value: resp.value,
            transliterated: resp.transliterated,
        }
    }
}
