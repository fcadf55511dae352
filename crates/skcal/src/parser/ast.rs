//! Public AST types for calendar templates.
//!
//! These types are public so callers can inspect a template (for example, to
//! list the tokens it uses) without rendering it.

use crate::types::TokenKey;

/// The placeholder inside a sub-format that receives the token value.
pub const VALUE_PLACEHOLDER: &str = "[value]";

/// A parsed template string containing segments.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub segments: Vec<Segment>,
}

/// A segment within a template.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Literal text, copied to the output unchanged.
    Literal(String),
    /// A `{key}` or `{key:subformat}` marker.
    Token(Token),
}

/// A token marker as written in the template.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The full marker text including braces, e.g. `{nameday:Meniny má [value]}`.
    pub source: String,
    /// Text before the first `:`. Unrecognized keys are kept; they are elided
    /// at render time rather than rejected here.
    pub key: String,
    /// Text after the first `:`, if non-empty.
    pub subformat: Option<String>,
}

impl Template {
    /// A template made of a single literal with no tokens.
    pub fn literal(text: &str) -> Self {
        let segments = if text.is_empty() {
            Vec::new()
        } else {
            vec![Segment::Literal(text.to_string())]
        };
        Template { segments }
    }

    /// Token markers in order of appearance, duplicates included.
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Token(token) => Some(token),
            Segment::Literal(_) => None,
        })
    }

    /// Reassemble the original template text.
    pub fn to_source(&self) -> String {
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Literal(text) => text.as_str(),
                Segment::Token(token) => token.source.as_str(),
            })
            .collect()
    }
}

impl Token {
    /// Build a token from its full marker text and the body between the braces.
    pub fn from_body(source: &str, body: &str) -> Self {
        let (key, subformat) = match body.split_once(':') {
            Some((key, subformat)) => (key, Some(subformat)),
            None => (body, None),
        };
        Token {
            source: source.to_string(),
            key: key.to_string(),
            subformat: subformat.filter(|s| !s.is_empty()).map(str::to_string),
        }
    }

    /// The recognized key, or `None` when the key is not one of the known names.
    pub fn token_key(&self) -> Option<TokenKey> {
        TokenKey::from_name(&self.key)
    }

    /// Text that replaces this marker given the resolved value for its key.
    ///
    /// Blank values produce an empty string regardless of the sub-format.
    pub fn expand(&self, value: &str) -> String {
        if value.trim().is_empty() {
            return String::new();
        }
        match &self.subformat {
            Some(subformat) => subformat.replace(VALUE_PLACEHOLDER, value),
            None => value.to_string(),
        }
    }
}
