//! Parsed content types.
//!
//! A parsed document is an ordered `Vec<Segment>`: recognized blocks
//! interleaved with the markup between them, in document order.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// Block attributes decoded from the marker's JSON payload.
pub type Attributes = Map<String, Value>;

/// One recognized block marker.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Block {
    /// Block type, e.g. `paragraph` or `core/image`.
    pub name: String,
    /// Empty when the marker carried no payload.
    pub attributes: Attributes,
    /// Trimmed markup between an opening and closing marker. `None` for
    /// self-closing markers.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub inner_markup: Option<String>,
}

impl Block {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Attributes::new(),
            inner_markup: None,
        }
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn with_inner_markup(mut self, inner: impl Into<String>) -> Self {
        self.inner_markup = Some(inner.into());
        self
    }

    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// Whether this block came from an opening/closing marker pair.
    pub fn is_paired(&self) -> bool {
        self.inner_markup.is_some()
    }
}

/// An element of the parsed sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Trimmed, non-empty markup outside any recognized block, or a marker
    /// that could not be turned into a block, kept verbatim.
    Text(String),
    Block(Block),
}

impl Segment {
    pub fn as_block(&self) -> Option<&Block> {
        match self {
            Segment::Block(block) => Some(block),
            Segment::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Segment::Text(text) => Some(text.as_str()),
            Segment::Block(_) => None,
        }
    }

    pub fn is_block(&self) -> bool {
        matches!(self, Segment::Block(_))
    }
}

impl From<Block> for Segment {
    fn from(block: Block) -> Self {
        Segment::Block(block)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum SegmentRepr<'a> {
    Text { text: &'a str },
    Block(&'a Block),
}

#[cfg(feature = "serde")]
impl serde::Serialize for Segment {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Segment::Text(text) => {
                serde::Serialize::serialize(&SegmentRepr::Text { text }, serializer)
            }
            Segment::Block(block) => {
                serde::Serialize::serialize(&SegmentRepr::Block(block), serializer)
            }
        }
    }
}

/// Counts over a parsed sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Summary {
    pub blocks: usize,
    pub fragments: usize,
    /// Occurrences per block name, sorted by name.
    pub names: BTreeMap<String, usize>,
}

impl Summary {
    pub fn from_segments(segments: &[Segment]) -> Self {
        let mut summary = Summary::default();
        for segment in segments {
            match segment {
                Segment::Text(_) => summary.fragments += 1,
                Segment::Block(block) => {
                    summary.blocks += 1;
                    *summary.names.entry(block.name.clone()).or_insert(0) += 1;
                }
            }
        }
        summary
    }
}
