//! Locating block markers in a whole document.

use std::collections::HashMap;

use crate::diagnostics::{Diagnostic, codes};
use crate::grammar::{CLOSE_MARKER, OPEN_MARKER};
use crate::options::Limits;

/// One marker occurrence. Offsets are byte offsets into the scanned document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseSpan<'a> {
    pub start: usize,
    pub len: usize,
    pub raw: &'a str,
}

impl ParseSpan<'_> {
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Closing marker positions grouped by block name, in document order.
struct CloserIndex<'a> {
    by_name: HashMap<&'a str, Vec<(usize, usize)>>,
}

impl<'a> CloserIndex<'a> {
    fn build(document: &'a str) -> Self {
        let mut by_name: HashMap<&'a str, Vec<(usize, usize)>> = HashMap::new();
        for caps in CLOSE_MARKER.captures_iter(document) {
            if let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) {
                by_name
                    .entry(name.as_str())
                    .or_default()
                    .push((whole.start(), whole.end()));
            }
        }
        Self { by_name }
    }

    /// End offset of the first `name` closer starting at or after `from`.
    fn first_after(&self, name: &str, from: usize) -> Option<usize> {
        let closers = self.by_name.get(name)?;
        let idx = closers.partition_point(|&(start, _)| start < from);
        closers.get(idx).map(|&(_, end)| end)
    }
}

/// Find every marker in `document`, in order and without overlap.
///
/// An opener pairs with the nearest following closer of the same name, so a
/// block nested inside a block of the same name closes its parent early.
/// Openers without a closer are left as ordinary text.
pub fn scan<'a>(
    document: &'a str,
    limits: &Limits,
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<ParseSpan<'a>> {
    let mut spans = Vec::new();

    if exceeds_char_limit(document, limits.max_document_chars) {
        log::warn!(
            "Document too large ({} bytes), skipping block parsing",
            document.len()
        );
        diagnostics.push(Diagnostic::warning(
            codes::DOCUMENT_TOO_LARGE,
            format!(
                "document exceeds {} characters; block markers were not parsed",
                limits.max_document_chars
            ),
        ));
        return spans;
    }

    let closers = CloserIndex::build(document);
    let mut pos = 0;

    while let Some(caps) = OPEN_MARKER.captures_at(document, pos) {
        let (Some(open), Some(name)) = (caps.get(0), caps.get(1)) else {
            break;
        };

        let end = if caps.get(3).is_some() {
            Some(open.end())
        } else {
            closers.first_after(name.as_str(), open.end())
        };

        let Some(end) = end else {
            // Unclosed opener: retry from the next character, which may
            // start a marker nested in this opener's payload.
            pos = open.start() + 1;
            continue;
        };

        if spans.len() >= limits.max_markers {
            log::warn!(
                "Too many block markers (limit {}), stopping block parsing",
                limits.max_markers
            );
            diagnostics.push(
                Diagnostic::warning(
                    codes::MARKER_LIMIT,
                    format!(
                        "more than {} block markers; the rest are kept as text",
                        limits.max_markers
                    ),
                )
                .with_range(open.start()..end),
            );
            break;
        }

        spans.push(ParseSpan {
            start: open.start(),
            len: end - open.start(),
            raw: &document[open.start()..end],
        });
        pos = end;
    }

    log::debug!("Found {} block marker(s)", spans.len());
    spans
}

fn exceeds_char_limit(document: &str, max_chars: usize) -> bool {
    // Byte length bounds the character count from above.
    document.len() > max_chars && document.chars().count() > max_chars
}
