use std::ops::Range;

/// Diagnostic codes produced by the parser.
pub mod codes {
    pub const INVALID_ATTRIBUTES: &str = "invalid-attributes";
    pub const DOCUMENT_TOO_LARGE: &str = "document-too-large";
    pub const MARKER_LIMIT: &str = "marker-limit";
    pub const INTERNAL_ERROR: &str = "internal-error";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

/// A degraded-result report. Parsing never fails; these describe what was
/// skipped or preserved verbatim instead.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Diagnostic {
    pub severity: Severity,
    pub code: String,
    pub message: String,
    /// Byte range into the parsed document, when the issue has one.
    pub range: Option<Range<usize>>,
}

impl Diagnostic {
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code: code.into(),
            message: message.into(),
            range: None,
        }
    }

    pub fn warning(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code: code.into(),
            message: message.into(),
            range: None,
        }
    }

    pub fn with_range(mut self, range: Range<usize>) -> Self {
        self.range = Some(range);
        self
    }

    /// Line/column of the start of this diagnostic's range in `input`.
    pub fn location(&self, input: &str) -> Option<Location> {
        self.range
            .as_ref()
            .map(|range| Location::from_offset(input, range.start))
    }
}

impl Location {
    pub fn from_offset(input: &str, offset: usize) -> Self {
        let (line, column) = offset_to_line_col(input, offset);
        Self { line, column }
    }
}

fn offset_to_line_col(input: &str, offset: usize) -> (usize, usize) {
    let mut line = 1;
    let mut column = 1;

    for (i, ch) in input.char_indices() {
        if i >= offset {
            break;
        }
        if ch == '\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }

    (line, column)
}
