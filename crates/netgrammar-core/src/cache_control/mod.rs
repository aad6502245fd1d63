//! HTTP cache header interpretation.
//!
//! Turns raw, possibly repeated, case-insensitive header lines into a
//! structured cache policy: directive flags, delta-seconds values, dates and
//! validators. Parsing is total: malformed input degrades to permissive
//! defaults (flags false, seconds unset) instead of failing.

mod date;
mod directives;
mod raw_headers;
mod request;
mod response;
mod seconds;
mod tokenize;

pub use date::{DateInterpreter, HttpDateInterpreter};
pub use directives::CacheDirectives;
pub use raw_headers::RawHeaders;
pub use request::{parse_request_directives, parse_request_directives_with, RequestCacheDirectives};
pub use response::{
    parse_response_directives, parse_response_directives_with, ResponseCacheDirectives,
};
pub use seconds::{parse_seconds, UNSET};

#[cfg(test)]
mod tests;
