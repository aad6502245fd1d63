//! End-to-end reference resolution: scheme and fragment handling around
//! [`UrlHandler::resolve`].

use super::{UrlComponents, UrlError, UrlHandler};

/// Splits a leading `scheme:` off `text`, returning the lower-cased scheme and
/// the byte offset just past the colon.
///
/// A scheme is `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )` and must appear
/// before any `/`.
pub fn split_scheme(text: &str) -> Option<(String, usize)> {
    let colon = text.find([':', '/'])?;
    if text.as_bytes()[colon] != b':' {
        return None;
    }
    let candidate = &text[..colon];
    let mut bytes = candidate.bytes();
    let valid = bytes.next().is_some_and(|b| b.is_ascii_alphabetic())
        && bytes.all(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.'));
    valid.then(|| (candidate.to_ascii_lowercase(), colon + 1))
}

/// Resolves URL text, optionally against a base URL.
///
/// Surrounding whitespace and a leading `url:` are ignored. A reference with the
/// base's scheme and a hierarchical base path is treated as relative; a different
/// scheme discards the base. The inherited query and fragment are only kept for
/// an empty reference.
pub fn resolve_reference<H: UrlHandler>(
    handler: &H,
    base: Option<&UrlComponents>,
    text: &str,
) -> Result<UrlComponents, UrlError> {
    let spec = text.trim_matches(|c: char| c <= ' ');
    let mut start = 0;
    if spec.get(..4).is_some_and(|p| p.eq_ignore_ascii_case("url:")) {
        start = 4;
    }

    let is_fragment_only = spec[start..].starts_with('#');
    let mut scheme = None;
    if !is_fragment_only {
        if let Some((s, after)) = split_scheme(&spec[start..]) {
            scheme = Some(s);
            start += after;
        }
    }

    let inherit = match (base, &scheme) {
        (Some(b), None) => Some(b),
        (Some(b), Some(s)) if s.eq_ignore_ascii_case(b.scheme()) && b.path().starts_with('/') => {
            Some(b)
        }
        _ => None,
    };

    let mut limit = spec.len();
    let mut fragment = None;
    if let Some(hash) = spec[start..].find('#').map(|i| i + start) {
        fragment = Some(spec[hash + 1..].to_string());
        limit = hash;
    }

    let context = match inherit {
        Some(b) => {
            let empty = start == limit;
            let query = if empty { b.query().map(String::from) } else { None };
            let fragment = if empty && fragment.is_none() {
                b.fragment().map(String::from)
            } else {
                fragment
            };
            b.with_context(query, fragment)
        }
        None => {
            let scheme = scheme.ok_or_else(|| UrlError::MissingScheme(text.to_string()))?;
            UrlComponents::new(scheme).with_fragment(fragment.as_deref())
        }
    };

    handler.resolve(&context, spec, start, limit)
}
