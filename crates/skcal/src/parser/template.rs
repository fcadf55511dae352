//! Template string scanner using winnow.
//!
//! Splits a template into literal text and `{...}` token markers. A marker is a
//! `{` followed by any text without `}` and a closing `}`; the body may contain
//! further `{` characters. A `{` with no later `}` is literal text, as is any
//! stray `}`. Scanning never fails.

use super::ast::*;
use winnow::combinator::{alt, delimited, repeat};
use winnow::prelude::*;
use winnow::token::take_till;

/// Parse a template string into literal and token segments.
pub fn parse_template(input: &str) -> Template {
    let mut remaining = input;
    match template(&mut remaining) {
        Ok(t) if remaining.is_empty() => t,
        // Every input scans as literals and tokens; keep the text intact regardless.
        _ => Template::literal(input),
    }
}

/// Parse a complete template into segments.
fn template(input: &mut &str) -> ModalResult<Template> {
    let segments: Vec<Segment> = repeat(0.., segment).parse_next(input)?;

    Ok(Template {
        segments: merge_literals(segments),
    })
}

/// Merge adjacent Literal segments into single segments.
fn merge_literals(segments: Vec<Segment>) -> Vec<Segment> {
    let mut result = Vec::with_capacity(segments.len());

    for segment in segments {
        match segment {
            Segment::Literal(text) => {
                if let Some(Segment::Literal(prev)) = result.last_mut() {
                    prev.push_str(&text);
                } else {
                    result.push(Segment::Literal(text));
                }
            }
            other => result.push(other),
        }
    }

    result
}

/// Parse a single segment: a token, a run of plain text, or an unmatched `{`.
fn segment(input: &mut &str) -> ModalResult<Segment> {
    alt((token, literal_run, open_brace)).parse_next(input)
}

/// Parse a token marker: `{` body `}` where the body holds no `}`.
fn token(input: &mut &str) -> ModalResult<Segment> {
    delimited('{', take_till(0.., '}'), '}')
        .with_taken()
        .map(|(body, source): (&str, &str)| Segment::Token(Token::from_body(source, body)))
        .parse_next(input)
}

/// Parse text up to the next `{`.
fn literal_run(input: &mut &str) -> ModalResult<Segment> {
    take_till(1.., '{')
        .map(|text: &str| Segment::Literal(text.to_string()))
        .parse_next(input)
}

/// Parse a `{` that does not open a token.
fn open_brace(input: &mut &str) -> ModalResult<Segment> {
    '{'.value(Segment::Literal("{".to_string()))
        .parse_next(input)
}
