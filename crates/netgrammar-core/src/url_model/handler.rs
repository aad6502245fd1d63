//! Per-scheme handler: resolution, resource equality, hashing and rendering.
//!
//! Everything except the default port is provided by the trait, so a handler
//! for a new scheme only has to say which port an unset port stands for.

use std::hash::{Hash, Hasher};

use super::resolve::parse_url;
use super::{UrlComponents, UrlError, PORT_UNSET};
use crate::config::NetgrammarConfig;

/// Trait implemented by scheme handlers.
pub trait UrlHandler {
    /// Port an unset ([`PORT_UNSET`]) port stands for.
    fn default_port(&self) -> i32 {
        PORT_UNSET
    }

    /// Resolves `spec[start..limit]` against `base`, returning a new record.
    ///
    /// `start` is just past the scheme's `:` (if any) and `limit` is the end of
    /// the text or the position of `#`. Both are clamped to `spec.len()`; an
    /// index that does not fall on a char boundary panics.
    fn resolve(
        &self,
        base: &UrlComponents,
        spec: &str,
        start: usize,
        limit: usize,
    ) -> Result<UrlComponents, UrlError> {
        parse_url(base, spec, start, limit)
    }

    fn effective_port(&self, url: &UrlComponents) -> i32 {
        if url.port() != PORT_UNSET {
            url.port()
        } else {
            self.default_port()
        }
    }

    /// Same resource: fragment, query and [`Self::same_file`] all match.
    fn equals(&self, a: &UrlComponents, b: &UrlComponents) -> bool {
        a.fragment() == b.fragment() && a.query() == b.query() && self.same_file(a, b)
    }

    /// Same scheme (case-insensitive), path-and-query, effective port and host.
    fn same_file(&self, a: &UrlComponents, b: &UrlComponents) -> bool {
        a.scheme().eq_ignore_ascii_case(b.scheme())
            && a.file() == b.file()
            && self.effective_port(a) == self.effective_port(b)
            && self.hosts_equal(a, b)
    }

    /// Case-insensitive host comparison. Hosts are never looked up in DNS.
    fn hosts_equal(&self, a: &UrlComponents, b: &UrlComponents) -> bool {
        a.host().eq_ignore_ascii_case(b.host())
    }

    /// Hashes the fields [`Self::equals`] compares, normalized the same way.
    fn hash_url<H: Hasher>(&self, url: &UrlComponents, state: &mut H)
    where
        Self: Sized,
    {
        url.fragment().hash(state);
        url.query().hash(state);
        url.scheme().to_ascii_lowercase().hash(state);
        url.file().hash(state);
        url.host().to_ascii_lowercase().hash(state);
        self.effective_port(url).hash(state);
    }

    fn to_external_form(&self, url: &UrlComponents) -> String {
        url.to_external_form()
    }
}

/// Stock handler: hierarchical parsing with a configurable default port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemeHandler {
    default_port: i32,
}

impl SchemeHandler {
    pub fn new(default_port: i32) -> Self {
        Self { default_port }
    }

    /// Handler for `scheme` using the config's default-port table.
    pub fn for_scheme(cfg: &NetgrammarConfig, scheme: &str) -> Self {
        Self::new(cfg.default_port(scheme))
    }
}

impl Default for SchemeHandler {
    fn default() -> Self {
        Self::new(PORT_UNSET)
    }
}

impl UrlHandler for SchemeHandler {
    fn default_port(&self) -> i32 {
        self.default_port
    }
}

/// Wrapper giving [`UrlComponents`] the handler's equality and hash, for use as
/// a set member or map key.
#[derive(Debug, Clone, Copy)]
pub struct ResourceKey<'a, H: UrlHandler> {
    handler: &'a H,
    url: &'a UrlComponents,
}

impl<'a, H: UrlHandler> ResourceKey<'a, H> {
    pub fn new(handler: &'a H, url: &'a UrlComponents) -> Self {
        Self { handler, url }
    }

    pub fn url(&self) -> &'a UrlComponents {
        self.url
    }
}

impl<H: UrlHandler> PartialEq for ResourceKey<'_, H> {
    fn eq(&self, other: &Self) -> bool {
        self.handler.equals(self.url, other.url)
    }
}

impl<H: UrlHandler> Eq for ResourceKey<'_, H> {}

impl<H: UrlHandler> Hash for ResourceKey<'_, H> {
    fn hash<S: Hasher>(&self, state: &mut S) {
        self.handler.hash_url(self.url, state);
    }
}
