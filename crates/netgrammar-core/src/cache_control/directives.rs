//! Cache-Control / Pragma directive set shared by requests and responses.

use serde::Serialize;

use super::seconds::{parse_seconds, UNSET};
use super::tokenize::{directives, Directive};
use super::RawHeaders;

/// Directives gathered from every `Cache-Control` line plus `Pragma: no-cache`.
///
/// Seconds fields use [`UNSET`] (-1) for "absent", distinct from an explicit 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheDirectives {
    pub no_cache: bool,
    /// Field-name payload of `no-cache="..."`, verbatim.
    pub no_cache_field: Option<String>,
    pub no_store: bool,
    pub no_transform: bool,
    pub must_revalidate: bool,
    pub is_public: bool,
    /// True for `private` with or without a value.
    pub is_private: bool,
    /// Field-name payload of `private=...`, verbatim. Callers re-split on comma.
    pub private_field: Option<String>,
    pub only_if_cached: bool,
    pub max_age_seconds: i32,
    pub s_max_age_seconds: i32,
    pub max_stale_seconds: i32,
    pub min_fresh_seconds: i32,
}

impl Default for CacheDirectives {
    fn default() -> Self {
        Self {
            no_cache: false,
            no_cache_field: None,
            no_store: false,
            no_transform: false,
            must_revalidate: false,
            is_public: false,
            is_private: false,
            private_field: None,
            only_if_cached: false,
            max_age_seconds: UNSET,
            s_max_age_seconds: UNSET,
            max_stale_seconds: UNSET,
            min_fresh_seconds: UNSET,
        }
    }
}

impl CacheDirectives {
    /// Reads all `Cache-Control` values in arrival order, then `Pragma`.
    pub fn from_headers(headers: &RawHeaders) -> Self {
        let mut out = Self::default();

        for value in headers.values("Cache-Control") {
            for directive in directives(value) {
                out.apply(directive);
            }
        }

        for value in headers.values("Pragma") {
            if directives(value).any(|d| d.name == "no-cache") {
                out.no_cache = true;
            }
        }

        out
    }

    fn apply(&mut self, directive: Directive<'_>) {
        let value = directive.value;
        match directive.name.as_str() {
            "no-cache" => {
                self.no_cache = true;
                if let Some(v) = value {
                    self.no_cache_field = Some(v.to_string());
                }
            }
            "no-store" => self.no_store = true,
            "no-transform" => self.no_transform = true,
            "must-revalidate" => self.must_revalidate = true,
            "public" => self.is_public = true,
            "private" => {
                self.is_private = true;
                if let Some(v) = value {
                    self.private_field = Some(v.to_string());
                }
            }
            "only-if-cached" => self.only_if_cached = true,
            "max-age" => self.max_age_seconds = parse_seconds(value),
            "s-maxage" => self.s_max_age_seconds = parse_seconds(value),
            "max-stale" => self.max_stale_seconds = parse_seconds(value),
            "min-fresh" => self.min_fresh_seconds = parse_seconds(value),
            other => tracing::trace!("ignoring cache directive {:?}", other),
        }
    }
}
