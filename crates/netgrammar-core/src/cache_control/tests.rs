//! Request/response parsing tests.

use chrono::{DateTime, TimeDelta, Utc};

use super::*;

const URI: &str = "http://localhost/";

fn headers(pairs: &[(&str, &str)]) -> RawHeaders {
    pairs.iter().copied().collect()
}

fn response(pairs: &[(&str, &str)]) -> ResponseCacheDirectives {
    parse_response_directives(URI, &headers(pairs))
}

fn request(pairs: &[(&str, &str)]) -> RequestCacheDirectives {
    parse_request_directives(&headers(pairs))
}

fn at(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap()
}

#[test]
fn upper_case_header_names() {
    let parsed = response(&[
        ("CACHE-CONTROL", "no-store"),
        ("DATE", "Thu, 01 Jan 1970 00:00:01 UTC"),
        ("EXPIRES", "Thu, 01 Jan 1970 00:00:02 UTC"),
        ("LAST-MODIFIED", "Thu, 01 Jan 1970 00:00:03 UTC"),
        ("ETAG", "v1"),
        ("PRAGMA", "no-cache"),
    ]);
    assert!(parsed.cache_control.no_store);
    assert_eq!(parsed.served_date, Some(at(1)));
    assert_eq!(parsed.expires, Some(at(2)));
    assert_eq!(parsed.last_modified, Some(at(3)));
    assert_eq!(parsed.etag.as_deref(), Some("v1"));
    assert!(parsed.cache_control.no_cache);
}

#[test]
fn comma_separated_cache_control() {
    let parsed = response(&[("Cache-Control", "no-store, max-age=60, public")]);
    assert!(parsed.cache_control.no_store);
    assert_eq!(parsed.cache_control.max_age_seconds, 60);
    assert!(parsed.cache_control.is_public);
}

#[test]
fn quoted_field_name() {
    let parsed = response(&[("Cache-Control", "private=\"Set-Cookie\"")]);
    assert_eq!(parsed.cache_control.private_field.as_deref(), Some("Set-Cookie"));
}

#[test]
fn unquoted_value() {
    let parsed = response(&[("Cache-Control", "private=Set-Cookie, no-store")]);
    assert_eq!(parsed.cache_control.private_field.as_deref(), Some("Set-Cookie"));
    assert!(parsed.cache_control.no_store);
}

#[test]
fn quoted_value_keeps_interior_verbatim() {
    let parsed = response(&[("Cache-Control", "private=\" a, no-cache, c \", no-store")]);
    assert_eq!(
        parsed.cache_control.private_field.as_deref(),
        Some(" a, no-cache, c ")
    );
    assert!(parsed.cache_control.no_store);
    assert!(!parsed.cache_control.no_cache);
}

#[test]
fn dangling_quote() {
    let parsed = response(&[("Cache-Control", "private=\"a, no-cache, c")]);
    assert_eq!(
        parsed.cache_control.private_field.as_deref(),
        Some("a, no-cache, c")
    );
    assert!(!parsed.cache_control.no_cache);
}

#[test]
fn dangling_quote_is_closed_per_header_line() {
    let parsed = response(&[
        ("Cache-Control", "private=\"a, b"),
        ("Cache-Control", "no-store"),
    ]);
    assert_eq!(parsed.cache_control.private_field.as_deref(), Some("a, b"));
    assert!(parsed.cache_control.no_store);
}

#[test]
fn trailing_comma() {
    let parsed = response(&[("Cache-Control", "public,")]);
    assert!(parsed.cache_control.is_public);
    assert_eq!(parsed.cache_control.private_field, None);
}

#[test]
fn trailing_equals() {
    let parsed = response(&[("Cache-Control", "private=")]);
    assert_eq!(parsed.cache_control.private_field.as_deref(), Some(""));
}

#[test]
fn space_before_equals() {
    let parsed = request(&[("Cache-Control", "max-age =60")]);
    assert_eq!(parsed.cache_control.max_age_seconds, 60);
}

#[test]
fn space_after_equals_with_quotes() {
    let parsed = request(&[("Cache-Control", "max-age= \"60\"")]);
    assert_eq!(parsed.cache_control.max_age_seconds, 60);
}

#[test]
fn space_after_equals_without_quotes() {
    let parsed = request(&[("Cache-Control", "max-age= 60")]);
    assert_eq!(parsed.cache_control.max_age_seconds, 60);
}

#[test]
fn request_directives_are_case_insensitive() {
    let parsed = request(&[
        ("Cache-Control", "NO-CACHE"),
        ("Cache-Control", "MAX-AGE=60"),
        ("Cache-Control", "MAX-STALE=70"),
        ("Cache-Control", "MIN-FRESH=80"),
        ("Cache-Control", "ONLY-IF-CACHED"),
    ]);
    let cc = &parsed.cache_control;
    assert!(cc.no_cache);
    assert_eq!(cc.max_age_seconds, 60);
    assert_eq!(cc.max_stale_seconds, 70);
    assert_eq!(cc.min_fresh_seconds, 80);
    assert!(cc.only_if_cached);
}

#[test]
fn response_directives_are_case_insensitive() {
    let parsed = response(&[
        ("Cache-Control", "NO-CACHE"),
        ("Cache-Control", "NO-STORE"),
        ("Cache-Control", "MAX-AGE=60"),
        ("Cache-Control", "S-MAXAGE=70"),
        ("Cache-Control", "PUBLIC"),
        ("Cache-Control", "PRIVATE=a"),
        ("Cache-Control", "MUST-REVALIDATE"),
    ]);
    let cc = &parsed.cache_control;
    assert!(cc.no_cache);
    assert!(cc.no_store);
    assert_eq!(cc.max_age_seconds, 60);
    assert_eq!(cc.s_max_age_seconds, 70);
    assert!(cc.is_public);
    assert_eq!(cc.private_field.as_deref(), Some("a"));
    assert!(cc.must_revalidate);
}

#[test]
fn pragma_is_case_insensitive() {
    let parsed = request(&[("Pragma", "NO-CACHE")]);
    assert!(parsed.cache_control.no_cache);
}

#[test]
fn missing_integer() {
    let parsed = request(&[("Cache-Control", "max-age")]);
    assert_eq!(parsed.cache_control.max_age_seconds, UNSET);
}

#[test]
fn invalid_integer() {
    let parsed = request(&[("Cache-Control", "MAX-AGE=pi")]);
    assert_eq!(parsed.cache_control.max_age_seconds, UNSET);
}

#[test]
fn very_large_integer() {
    let value = format!("MAX-AGE={}", i64::from(i32::MAX) + 1);
    let parsed = request(&[("Cache-Control", value.as_str())]);
    assert_eq!(parsed.cache_control.max_age_seconds, i32::MAX);
}

#[test]
fn negative_integer() {
    let parsed = request(&[("Cache-Control", "MAX-AGE=-2")]);
    assert_eq!(parsed.cache_control.max_age_seconds, 0);
}

#[test]
fn request_conditions() {
    let parsed = request(&[
        ("If-Modified-Since", "Thu, 01 Jan 1970 00:00:05 GMT"),
        ("Authorization", "Bearer t"),
    ]);
    assert_eq!(parsed.if_modified_since, Some(at(5)));
    assert!(parsed.has_authorization);
    assert!(parsed.has_conditions());

    let etag_only = request(&[("If-None-Match", "\"v1\"")]);
    assert_eq!(etag_only.if_none_match.as_deref(), Some("\"v1\""));
    assert!(etag_only.has_conditions());

    assert!(!request(&[]).has_conditions());
}

#[test]
fn unparseable_dates_are_ignored() {
    let parsed = response(&[("Expires", "0"), ("Date", "soon")]);
    assert_eq!(parsed.expires, None);
    assert_eq!(parsed.served_date, None);
}

#[test]
fn age_and_vary() {
    let parsed = response(&[
        ("Age", "30"),
        ("Vary", "Accept-Encoding, User-Agent"),
        ("vary", "accept-encoding,,Cookie"),
    ]);
    assert_eq!(parsed.age_seconds, 30);
    let fields: Vec<_> = parsed.vary_fields.iter().map(String::as_str).collect();
    assert_eq!(fields, ["accept-encoding", "cookie", "user-agent"]);
    assert!(!parsed.has_vary_all());

    assert!(response(&[("Vary", "*")]).has_vary_all());
    assert_eq!(response(&[]).age_seconds, UNSET);
}

#[test]
fn freshness_prefers_max_age() {
    let parsed = response(&[
        ("Cache-Control", "max-age=60"),
        ("Date", "Thu, 01 Jan 1970 00:00:00 GMT"),
        ("Expires", "Thu, 01 Jan 1970 01:00:00 GMT"),
    ]);
    assert_eq!(parsed.freshness_lifetime(at(0)), TimeDelta::seconds(60));
}

#[test]
fn freshness_from_expires() {
    let parsed = response(&[
        ("Date", "Thu, 01 Jan 1970 00:00:10 GMT"),
        ("Expires", "Thu, 01 Jan 1970 00:01:10 GMT"),
    ]);
    assert_eq!(parsed.freshness_lifetime(at(1000)), TimeDelta::seconds(60));

    let no_date = response(&[("Expires", "Thu, 01 Jan 1970 00:01:10 GMT")]);
    assert_eq!(no_date.freshness_lifetime(at(40)), TimeDelta::seconds(30));
    assert_eq!(no_date.freshness_lifetime(at(500)), TimeDelta::zero());
}

#[test]
fn freshness_heuristic_from_last_modified() {
    let pairs = [
        ("Date", "Thu, 01 Jan 1970 00:01:40 GMT"),
        ("Last-Modified", "Thu, 01 Jan 1970 00:00:00 GMT"),
    ];
    let parsed = parse_response_directives(URI, &headers(&pairs));
    assert_eq!(parsed.freshness_lifetime(at(0)), TimeDelta::seconds(10));
    assert!(parsed.has_validators());

    let with_query = parse_response_directives("http://localhost/?q=1", &headers(&pairs));
    assert_eq!(with_query.freshness_lifetime(at(0)), TimeDelta::zero());
}

#[test]
fn freshness_defaults_to_zero() {
    let parsed = response(&[]);
    assert_eq!(parsed.freshness_lifetime(at(0)), TimeDelta::zero());
    assert!(!parsed.has_validators());
}

struct EpochOnly;

impl DateInterpreter for EpochOnly {
    fn parse(&self, text: &str) -> Option<DateTime<Utc>> {
        text.parse().ok().and_then(|secs| DateTime::from_timestamp(secs, 0))
    }
}

#[test]
fn custom_date_interpreter() {
    let h = headers(&[("Date", "42"), ("If-Modified-Since", "7")]);
    let parsed = parse_response_directives_with(URI, &h, &EpochOnly);
    assert_eq!(parsed.served_date, Some(at(42)));
    let req = parse_request_directives_with(&h, &EpochOnly);
    assert_eq!(req.if_modified_since, Some(at(7)));
}

#[test]
fn policy_serializes_with_field_names() {
    let parsed = response(&[("Cache-Control", "max-age=5, private=\"X\"")]);
    let value = serde_json::to_value(&parsed).unwrap();
    assert_eq!(value["cache_control"]["max_age_seconds"], 5);
    assert_eq!(value["cache_control"]["private_field"], "X");
    assert_eq!(value["age_seconds"], UNSET);
    assert!(value["served_date"].is_null());
}
