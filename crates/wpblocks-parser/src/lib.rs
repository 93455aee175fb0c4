//! Parser for block-editor comment markers embedded in HTML.
//!
//! Content exported by a block-based editor is HTML in which each block is
//! delimited by comment markers:
//!
//! ```text
//! <!-- wp:image {"id":5} /-->
//! <!-- wp:quote --><p>Hi</p><!-- /wp:quote -->
//! ```
//!
//! [`parse`] turns such a document into an ordered sequence of [`Segment`]s:
//! typed [`Block`]s interleaved with the markup around them. Parsing is total:
//! malformed markers, oversized documents and internal failures all degrade
//! to keeping the original markup as text. [`parse_with_options`] also
//! returns [`Diagnostic`]s describing each degradation.

use std::panic::{self, AssertUnwindSafe};

pub mod assembler;
pub mod block;
pub mod builder;
pub mod diagnostics;
pub mod grammar;
pub mod options;
pub mod scanner;
pub mod strip;

pub use block::{Attributes, Block, Segment, Summary};
pub use builder::{BlockError, build_block, parse_block_comment};
pub use diagnostics::{Diagnostic, Location, Severity};
pub use grammar::{MarkerKind, MarkerMatch, match_marker};
pub use options::{Limits, ParseOptions};
pub use strip::strip_markers;

/// Segments of a parsed document plus what went wrong along the way.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParseOutput {
    pub segments: Vec<Segment>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseOutput {
    pub fn summary(&self) -> Summary {
        Summary::from_segments(&self.segments)
    }
}

/// Parses a document into blocks and text fragments with default limits.
///
/// # Examples
///
/// ```rust
/// use wpblocks_parser::{Segment, parse};
///
/// let segments = parse(r#"<p>intro</p><!-- wp:image {"id":5} /-->"#);
/// assert_eq!(segments.len(), 2);
/// assert!(matches!(&segments[1], Segment::Block(b) if b.name == "image"));
/// ```
pub fn parse(document: &str) -> Vec<Segment> {
    parse_with_options(document, &ParseOptions::default()).segments
}

/// Parses a document, returning diagnostics alongside the segments.
///
/// Never panics: a failure inside the pipeline is logged and the whole
/// document is returned as a single untrimmed fragment.
pub fn parse_with_options(document: &str, options: &ParseOptions) -> ParseOutput {
    if document.is_empty() {
        return ParseOutput::default();
    }

    guarded(document, || run_pipeline(document, options))
}

/// Runs `pipeline`, falling back to the whole document as one fragment if it
/// panics.
fn guarded(document: &str, pipeline: impl FnOnce() -> ParseOutput) -> ParseOutput {
    match panic::catch_unwind(AssertUnwindSafe(pipeline)) {
        Ok(output) => output,
        Err(payload) => {
            let reason = panic_message(payload.as_ref());
            log::error!("Error parsing blocks: {}", reason);
            ParseOutput {
                segments: vec![Segment::Text(document.to_string())],
                diagnostics: vec![Diagnostic::error(
                    diagnostics::codes::INTERNAL_ERROR,
                    format!("block parsing failed: {}", reason),
                )],
            }
        }
    }
}

fn run_pipeline(document: &str, options: &ParseOptions) -> ParseOutput {
    let mut diagnostics = Vec::new();
    let spans = scanner::scan(document, &options.limits, &mut diagnostics);
    let segments = assembler::assemble(document, &spans, &mut diagnostics);
    ParseOutput {
        segments,
        diagnostics,
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
