//! HTTP date interpretation.
//!
//! The directive parser only needs "text in, instant out"; callers with their
//! own date handling can plug in a different [`DateInterpreter`].

use chrono::{DateTime, NaiveDateTime, Utc};

/// Turns header date text into an instant. Unparseable text is `None`.
pub trait DateInterpreter {
    fn parse(&self, text: &str) -> Option<DateTime<Utc>>;
}

/// Accepts the three HTTP/1.1 date forms with a `GMT`, `UTC` or `UT` zone:
///
/// - IMF-fixdate / RFC 1123: `Sun, 06 Nov 1994 08:49:37 GMT`
/// - RFC 850: `Sunday, 06-Nov-94 08:49:37 GMT`
/// - asctime: `Sun Nov  6 08:49:37 1994` (no zone)
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpDateInterpreter;

const ZONED_FORMATS: &[&str] = &["%a, %d %b %Y %H:%M:%S", "%A, %d-%b-%y %H:%M:%S"];
const ASCTIME_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

impl DateInterpreter for HttpDateInterpreter {
    fn parse(&self, text: &str) -> Option<DateTime<Utc>> {
        let text = text.trim();

        let zoned = strip_utc_zone(text).and_then(|local| {
            ZONED_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(local, fmt).ok())
        });

        let parsed = zoned.or_else(|| NaiveDateTime::parse_from_str(text, ASCTIME_FORMAT).ok());
        if parsed.is_none() {
            tracing::trace!("unparseable HTTP date {:?}", text);
        }
        parsed.map(|naive| naive.and_utc())
    }
}

/// Text before a trailing UTC zone name, if there is one.
fn strip_utc_zone(text: &str) -> Option<&str> {
    let (local, zone) = text.rsplit_once(' ')?;
    ["GMT", "UTC", "UT"]
        .iter()
        .any(|z| zone.eq_ignore_ascii_case(z))
        .then(|| local.trim_end())
}
