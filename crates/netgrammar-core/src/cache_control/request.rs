//! Request-side cache policy.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::date::{DateInterpreter, HttpDateInterpreter};
use super::{CacheDirectives, RawHeaders};

/// Cache directives and conditions of an outgoing request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestCacheDirectives {
    pub cache_control: CacheDirectives,
    /// `If-Modified-Since`, if present and parseable.
    pub if_modified_since: Option<DateTime<Utc>>,
    /// `If-None-Match`, verbatim.
    pub if_none_match: Option<String>,
    pub has_authorization: bool,
}

impl RequestCacheDirectives {
    /// True if the request carries its own validators, so a cached response
    /// must not be served without the origin's say.
    pub fn has_conditions(&self) -> bool {
        self.if_modified_since.is_some() || self.if_none_match.is_some()
    }
}

/// Parses request headers with the default HTTP date interpreter.
pub fn parse_request_directives(headers: &RawHeaders) -> RequestCacheDirectives {
    parse_request_directives_with(headers, &HttpDateInterpreter)
}

/// Parses request headers; never fails.
pub fn parse_request_directives_with<D: DateInterpreter + ?Sized>(
    headers: &RawHeaders,
    dates: &D,
) -> RequestCacheDirectives {
    RequestCacheDirectives {
        cache_control: CacheDirectives::from_headers(headers),
        if_modified_since: headers.get("If-Modified-Since").and_then(|v| dates.parse(v)),
        if_none_match: headers.get("If-None-Match").map(String::from),
        has_authorization: headers.contains("Authorization"),
    }
}
