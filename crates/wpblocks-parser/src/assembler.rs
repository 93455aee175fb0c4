//! Building the ordered segment sequence from scanned spans.

use crate::block::Segment;
use crate::builder::parse_block_comment;
use crate::diagnostics::Diagnostic;
use crate::scanner::ParseSpan;

/// Interleave blocks built from `spans` with the trimmed markup around them.
///
/// Spans must be in document order and must not overlap. A span whose block
/// cannot be built is kept verbatim as text.
pub fn assemble(
    document: &str,
    spans: &[ParseSpan<'_>],
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    for span in spans {
        if span.start > cursor {
            push_text(&mut segments, &document[cursor..span.start]);
        }

        let before = diagnostics.len();
        match parse_block_comment(span.raw, diagnostics) {
            Some(block) => segments.push(Segment::Block(block)),
            None => {
                for diag in &mut diagnostics[before..] {
                    diag.range.get_or_insert(span.start..span.end());
                }
                segments.push(Segment::Text(span.raw.to_string()));
            }
        }

        cursor = span.end();
    }

    if cursor < document.len() {
        push_text(&mut segments, &document[cursor..]);
    }

    segments
}

fn push_text(segments: &mut Vec<Segment>, text: &str) {
    let text = text.trim();
    if !text.is_empty() {
        segments.push(Segment::Text(text.to_string()));
    }
}
