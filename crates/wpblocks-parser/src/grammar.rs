//! Block marker grammar.
//!
//! Syntax:
//! - Self-closing: `<!-- wp:name {"json":"attrs"} /-->`
//! - Paired: `<!-- wp:name {"json":"attrs"} -->inner<!-- /wp:name -->`
//!
//! Names are `[A-Za-z0-9_/-]+`. The attribute payload is a single
//! brace-delimited object with no `}` inside it; marker boundaries are found
//! without brace balancing. The closing marker of a pair must repeat the
//! opening marker's name exactly, which is checked after matching since the
//! regex engine has no back-references.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Opening or self-closing marker anywhere in a document. Group 3 is the `/`
/// of a self-closing marker.
///
/// The name is lazy: `/` is a name character, so in `<!-- wp:image/-->` a
/// greedy name would swallow the self-closing slash.
pub(crate) static OPEN_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<!--\s*wp:([A-Za-z0-9_/-]+?)(?:\s+(\{[^}]*\}))?\s*(/)?-->")
        .expect("invalid open marker regex")
});

/// Closing marker anywhere in a document.
pub(crate) static CLOSE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<!--\s*/wp:([A-Za-z0-9_/-]+)\s*-->").expect("invalid close marker regex")
});

static SELF_CLOSING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\A<!--\s*wp:([A-Za-z0-9_/-]+)(?:\s+(\{[^}]*\}))?\s*/-->\z")
        .expect("invalid self-closing marker regex")
});

static PAIRED_OPEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\A<!--\s*wp:([A-Za-z0-9_/-]+)(?:\s+(\{[^}]*\}))?\s*-->")
        .expect("invalid paired open regex")
});

static PAIRED_CLOSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<!--\s*/wp:([A-Za-z0-9_/-]+)\s*-->\z").expect("invalid paired close regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    SelfClosing,
    Paired,
}

/// The parts of one marker, borrowed from the matched text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerMatch<'a> {
    pub kind: MarkerKind,
    pub name: &'a str,
    /// Raw JSON payload including its braces.
    pub attributes: Option<&'a str>,
    /// Untrimmed markup between the opening and closing marker.
    pub inner: Option<&'a str>,
}

/// Match `text` as one whole marker, self-closing form first.
///
/// Surrounding whitespace is ignored. Text that only contains a marker
/// somewhere inside it does not match.
pub fn match_marker(text: &str) -> Option<MarkerMatch<'_>> {
    let text = text.trim();
    match_self_closing(text).or_else(|| match_paired(text))
}

fn match_self_closing(text: &str) -> Option<MarkerMatch<'_>> {
    let caps = SELF_CLOSING.captures(text)?;
    Some(MarkerMatch {
        kind: MarkerKind::SelfClosing,
        name: caps.get(1)?.as_str(),
        attributes: attributes_of(&caps),
        inner: None,
    })
}

fn match_paired(text: &str) -> Option<MarkerMatch<'_>> {
    let open = PAIRED_OPEN.captures(text)?;
    let close = PAIRED_CLOSE.captures(text)?;

    let open_end = open.get(0)?.end();
    let close_start = close.get(0)?.start();
    if close_start < open_end {
        return None;
    }

    let name = open.get(1)?.as_str();
    if close.get(1)?.as_str() != name {
        return None;
    }

    Some(MarkerMatch {
        kind: MarkerKind::Paired,
        name,
        attributes: attributes_of(&open),
        inner: Some(&text[open_end..close_start]),
    })
}

fn attributes_of<'a>(caps: &Captures<'a>) -> Option<&'a str> {
    caps.get(2).map(|m| m.as_str())
}
