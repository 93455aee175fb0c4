//! Turning matched markers into [`Block`]s.

use serde_json::Value;

use crate::block::{Attributes, Block};
use crate::diagnostics::{Diagnostic, codes};
use crate::grammar::match_marker;

/// Errors that prevent a matched marker from becoming a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockError {
    /// The marker had no block name.
    EmptyName,
    /// The attribute payload was not a valid JSON object.
    InvalidAttributes { name: String, message: String },
}

impl std::fmt::Display for BlockError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "block marker has no name"),
            Self::InvalidAttributes { name, message } => {
                write!(f, "failed to parse attributes for {}: {}", name, message)
            }
        }
    }
}

impl std::error::Error for BlockError {}

/// Build a block from its marker parts.
///
/// `inner` is trimmed. A missing payload gives empty attributes; a payload
/// that is not a JSON object is an error, never an empty record.
pub fn build_block(
    name: &str,
    attributes: Option<&str>,
    inner: Option<&str>,
) -> Result<Block, BlockError> {
    if name.is_empty() {
        return Err(BlockError::EmptyName);
    }

    let attributes = match attributes {
        Some(json) => parse_attributes(name, json)?,
        None => Attributes::new(),
    };

    Ok(Block {
        name: name.to_string(),
        attributes,
        inner_markup: inner.map(|s| s.trim().to_string()),
    })
}

fn parse_attributes(name: &str, json: &str) -> Result<Attributes, BlockError> {
    let invalid = |message: String| BlockError::InvalidAttributes {
        name: name.to_string(),
        message,
    };

    match serde_json::from_str::<Value>(json.trim()) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(invalid(format!("expected a JSON object, found {}", other))),
        Err(e) => Err(invalid(e.to_string())),
    }
}

/// Parse one marker's text into a block.
///
/// Returns `None` when the text is not a marker or the block cannot be
/// built. Build failures are logged and recorded in `diagnostics`.
pub fn parse_block_comment(text: &str, diagnostics: &mut Vec<Diagnostic>) -> Option<Block> {
    let marker = match_marker(text)?;

    match build_block(marker.name, marker.attributes, marker.inner) {
        Ok(block) => Some(block),
        Err(err) => {
            log::warn!("Discarding block marker: {}", err);
            diagnostics.push(Diagnostic::warning(codes::INVALID_ATTRIBUTES, err.to_string()));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builds_block_without_attributes() {
        let block = build_block("separator", None, None).unwrap();
        assert_eq!(block, Block::new("separator"));
    }

    #[test]
    fn builds_block_with_attributes_and_trimmed_inner() {
        let block = build_block("quote", Some(r#" {"cite":"me"} "#), Some("\n <p>Hi</p> \n")).unwrap();
        assert_eq!(block.name, "quote");
        assert_eq!(block.attribute("cite"), Some(&json!("me")));
        assert_eq!(block.inner_markup.as_deref(), Some("<p>Hi</p>"));
    }

    #[test]
    fn whitespace_only_inner_becomes_empty_string() {
        let block = build_block("spacer", None, Some("  \n ")).unwrap();
        assert_eq!(block.inner_markup.as_deref(), Some(""));
    }

    #[test]
    fn keeps_nested_attribute_values() {
        let block = build_block("gallery", Some(r#"{"ids":[1,2,3],"linkTo":null}"#), None).unwrap();
        assert_eq!(block.attribute("ids"), Some(&json!([1, 2, 3])));
        assert_eq!(block.attribute("linkTo"), Some(&Value::Null));
    }

    #[test]
    fn empty_name_is_an_error() {
        assert_eq!(build_block("", None, None), Err(BlockError::EmptyName));
    }

    #[test]
    fn invalid_json_is_an_error() {
        let err = build_block("list", Some("{bad json}"), None).unwrap_err();
        match &err {
            BlockError::InvalidAttributes { name, .. } => assert_eq!(name, "list"),
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(err.to_string().starts_with("failed to parse attributes for list:"));
    }

    #[test]
    fn non_object_json_is_an_error() {
        let err = build_block("list", Some("[1, 2]"), None).unwrap_err();
        assert!(err.to_string().contains("expected a JSON object"));
    }

    #[test]
    fn parse_block_comment_records_invalid_attributes() {
        let mut diagnostics = Vec::new();
        let block = parse_block_comment("<!-- wp:list {bad json} /-->", &mut diagnostics);

        assert!(block.is_none());
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, codes::INVALID_ATTRIBUTES);
        assert!(diagnostics[0].message.contains("list"));
    }

    #[test]
    fn parse_block_comment_ignores_non_markers() {
        let mut diagnostics = Vec::new();
        assert!(parse_block_comment("<!-- just a comment -->", &mut diagnostics).is_none());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn parse_block_comment_paired() {
        let mut diagnostics = Vec::new();
        let block = parse_block_comment(
            r#"<!-- wp:heading {"level":2} --><h2>Title</h2><!-- /wp:heading -->"#,
            &mut diagnostics,
        )
        .unwrap();

        assert_eq!(block.name, "heading");
        assert_eq!(block.attribute("level"), Some(&json!(2)));
        assert_eq!(block.inner_markup.as_deref(), Some("<h2>Title</h2>"));
        assert!(diagnostics.is_empty());
    }
}
