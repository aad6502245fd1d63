//! Response-side cache policy: directives, validators and freshness.

use std::collections::BTreeSet;

use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;

use super::date::{DateInterpreter, HttpDateInterpreter};
use super::seconds::{parse_seconds, UNSET};
use super::{CacheDirectives, RawHeaders};

/// Cache directives, dates and validators of a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponseCacheDirectives {
    /// URI the response was served for.
    pub uri: String,
    pub cache_control: CacheDirectives,
    /// `Date`: when the origin generated the response.
    pub served_date: Option<DateTime<Utc>>,
    /// `Expires`
    pub expires: Option<DateTime<Utc>>,
    pub last_modified: Option<DateTime<Utc>>,
    /// `ETag`, verbatim.
    pub etag: Option<String>,
    /// `Age` in seconds, same integer policy as the directives.
    pub age_seconds: i32,
    /// Lower-cased `Vary` field names.
    pub vary_fields: BTreeSet<String>,
}

impl ResponseCacheDirectives {
    /// How long the response stays fresh, measured from the served date.
    ///
    /// `max-age` wins; then `Expires` relative to the served date (or
    /// `received_at` when the response has no `Date`). Without either, and only
    /// for URIs without a query, 10% of the time since `Last-Modified`.
    pub fn freshness_lifetime(&self, received_at: DateTime<Utc>) -> TimeDelta {
        let max_age = self.cache_control.max_age_seconds;
        if max_age != UNSET {
            return TimeDelta::seconds(i64::from(max_age));
        }

        let served = self.served_date.unwrap_or(received_at);
        if let Some(expires) = self.expires {
            return (expires - served).max(TimeDelta::zero());
        }

        if let Some(last_modified) = self.last_modified {
            if !self.uri_has_query() {
                let delta = served - last_modified;
                return if delta > TimeDelta::zero() {
                    delta / 10
                } else {
                    TimeDelta::zero()
                };
            }
        }

        TimeDelta::zero()
    }

    /// True if a later conditional request could revalidate this response.
    pub fn has_validators(&self) -> bool {
        self.etag.is_some() || self.last_modified.is_some()
    }

    /// `Vary: *` means no request can be matched against the cached response.
    pub fn has_vary_all(&self) -> bool {
        self.vary_fields.contains("*")
    }

    fn uri_has_query(&self) -> bool {
        self.uri
            .split('#')
            .next()
            .is_some_and(|without_fragment| without_fragment.contains('?'))
    }
}

/// Parses response headers with the default HTTP date interpreter.
pub fn parse_response_directives(uri: &str, headers: &RawHeaders) -> ResponseCacheDirectives {
    parse_response_directives_with(uri, headers, &HttpDateInterpreter)
}

/// Parses response headers; never fails.
pub fn parse_response_directives_with<D: DateInterpreter + ?Sized>(
    uri: &str,
    headers: &RawHeaders,
    dates: &D,
) -> ResponseCacheDirectives {
    let date = |name: &str| headers.get(name).and_then(|v| dates.parse(v));

    let vary_fields = headers
        .values("Vary")
        .flat_map(|v| v.split(','))
        .map(|field| field.trim().to_ascii_lowercase())
        .filter(|field| !field.is_empty())
        .collect();

    let parsed = ResponseCacheDirectives {
        uri: uri.to_string(),
        cache_control: CacheDirectives::from_headers(headers),
        served_date: date("Date"),
        expires: date("Expires"),
        last_modified: date("Last-Modified"),
        etag: headers.get("ETag").map(String::from),
        age_seconds: parse_seconds(headers.get("Age")),
        vary_fields,
    };
    tracing::trace!("parsed response cache policy for {}: {:?}", uri, parsed);
    parsed
}
