use unicode_width::UnicodeWidthStr;

use super::{Segment, SegmentKind};

fn kind_label(kind: SegmentKind) -> &'static str {
    match kind {
        SegmentKind::Syllable => "syllable",
        SegmentKind::HalfConsonant => "half",
        SegmentKind::FinalConsonant => "final",
        SegmentKind::Vowel => "vowel",
        SegmentKind::Literal => "literal",
    }
}

/// Render segments as an aligned text table, one segment per line.
pub fn format_segments(input: &str, segments: &[Segment]) -> String {
    let output: String = segments.iter().map(|s| s.output.as_str()).collect();
    let mut out = format!(
        "=== \"{}\" -> \"{}\" ({} segments) ===\n",
        input,
        output,
        segments.len()
    );

    let roman_width = segments
        .iter()
        .map(|s| s.roman.width())
        .max()
        .unwrap_or(0);
    for (i, seg) in segments.iter().enumerate() {
        // Pad by display width; Devanagari marks are zero-width.
        let pad = roman_width - seg.roman.width();
        out.push_str(&format!(
            "  #{:<3} {}{}  {:<8}  {}\n",
            i + 1,
            seg.roman,
            " ".repeat(pad),
            kind_label(seg.kind),
            seg.output,
        ));
    }
    out
}
