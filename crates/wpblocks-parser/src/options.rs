/// Hard bounds on the work a single parse may do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Limits {
    /// Documents longer than this many characters are not scanned at all.
    pub max_document_chars: usize,
    /// Scanning stops after this many markers.
    pub max_markers: usize,
}

impl Limits {
    pub const DEFAULT_MAX_DOCUMENT_CHARS: usize = 1_000_000;
    pub const DEFAULT_MAX_MARKERS: usize = 1_000;
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_document_chars: Self::DEFAULT_MAX_DOCUMENT_CHARS,
            max_markers: Self::DEFAULT_MAX_MARKERS,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub limits: Limits,
}

impl ParseOptions {
    pub fn with_limits(limits: Limits) -> Self {
        Self { limits }
    }
}
