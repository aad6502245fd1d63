//! Comma/quote tokenizer for directive lists.

use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Unquoted,
    Quoted,
}

/// Byte ranges of the comma-separated tokens in `value`.
///
/// Commas inside a double-quoted span do not split. There is no escape
/// processing: every `"` toggles the state, and input that ends inside quotes
/// is closed implicitly.
pub(crate) fn split_top_level_commas(value: &str) -> Vec<Range<usize>> {
    let mut state = State::Unquoted;
    let mut ranges = Vec::new();
    let mut token_start = 0;

    for (i, b) in value.bytes().enumerate() {
        match (state, b) {
            (State::Unquoted, b',') => {
                ranges.push(token_start..i);
                token_start = i + 1;
            }
            (State::Unquoted, b'"') => state = State::Quoted,
            (State::Quoted, b'"') => state = State::Unquoted,
            _ => {}
        }
    }

    ranges.push(token_start..value.len());
    ranges
}

/// One `name[=value]` directive. The name is lower-cased; the value is trimmed
/// and unquoted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Directive<'a> {
    pub name: String,
    pub value: Option<&'a str>,
}

/// Parses a single token; `None` for empty tokens (e.g. from a trailing comma).
pub(crate) fn parse_directive(token: &str) -> Option<Directive<'_>> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }

    let directive = match token.split_once('=') {
        Some((name, value)) => Directive {
            name: name.trim().to_ascii_lowercase(),
            value: Some(unquote(value.trim())),
        },
        None => Directive {
            name: token.to_ascii_lowercase(),
            value: None,
        },
    };
    Some(directive)
}

/// Directives of one header value, in order.
pub(crate) fn directives(value: &str) -> impl Iterator<Item = Directive<'_>> {
    split_top_level_commas(value)
        .into_iter()
        .filter_map(move |range| parse_directive(&value[range]))
}

/// Interior of a `"..."` value, taken verbatim. A dangling opening quote is
/// dropped; unquoted values pass through.
fn unquote(value: &str) -> &str {
    match value.strip_prefix('"') {
        Some(inner) => inner.strip_suffix('"').unwrap_or(inner),
        None => value,
    }
}
