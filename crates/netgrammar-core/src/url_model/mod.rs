//! URL modeling and reference resolution.
//!
//! Parses URL text (optionally relative to a base URL) into normalized
//! components: scheme, authority, user-info, host, port, path, query, fragment.
//! Parsing never mutates its input; every resolution returns a new
//! [`UrlComponents`] whose scheme is inherited from the base.

mod authority;
mod error;
mod handler;
mod host;
mod path;
mod reference;
mod resolve;

use serde::Serialize;
use std::fmt;

pub use error::UrlError;
pub use handler::{ResourceKey, SchemeHandler, UrlHandler};
pub use host::is_ipv6_literal;
pub use path::remove_dot_segments;
pub use reference::{resolve_reference, split_scheme};

/// Port sentinel meaning "use the protocol default".
pub const PORT_UNSET: i32 = -1;

/// Parsed components of a URL.
///
/// Derived `PartialEq` is structural. Resource equality (case-insensitive
/// scheme and host, default ports) lives on [`UrlHandler::equals`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlComponents {
    scheme: String,
    authority: Option<String>,
    user_info: Option<String>,
    host: String,
    port: i32,
    path: String,
    query: Option<String>,
    fragment: Option<String>,
}

/// Fields a resolution may override on top of a base URL.
///
/// Scheme and fragment are not here: the scheme never changes once set and the
/// fragment is parsed by the caller before resolution.
#[derive(Debug, Clone)]
pub(crate) struct UrlOverrides {
    pub authority: Option<String>,
    pub user_info: Option<String>,
    pub host: String,
    pub port: i32,
    pub path: String,
    pub query: Option<String>,
}

impl UrlOverrides {
    /// Starts from the base URL's inherited context.
    pub fn inherit(base: &UrlComponents) -> Self {
        Self {
            authority: base.authority.clone(),
            user_info: base.user_info.clone(),
            host: base.host.clone(),
            port: base.port,
            path: base.path.clone(),
            query: base.query.clone(),
        }
    }
}

impl UrlComponents {
    /// Empty URL with only a scheme; the starting point for absolute references.
    pub fn new(scheme: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            authority: None,
            user_info: None,
            host: String::new(),
            port: PORT_UNSET,
            path: String::new(),
            query: None,
            fragment: None,
        }
    }

    /// Builds components from a host that may carry `user-info@` and a file that
    /// may carry `?query`.
    ///
    /// The authority is `host` or `host:port`; user-info is split off at the last
    /// `@`, the query at the last `?` of `file`.
    pub fn from_host_and_file(
        scheme: impl Into<String>,
        host: &str,
        port: i32,
        file: Option<&str>,
        fragment: Option<&str>,
    ) -> Self {
        let mut out = Self::new(scheme);

        if !host.is_empty() {
            out.authority = Some(if port == PORT_UNSET {
                host.to_string()
            } else {
                format!("{host}:{port}")
            });
            match host.rfind('@') {
                Some(at) => {
                    out.user_info = Some(host[..at].to_string());
                    out.host = host[at + 1..].to_string();
                }
                None => out.host = host.to_string(),
            }
        }
        out.port = port;

        if let Some(file) = file {
            match file.rfind('?') {
                Some(q) => {
                    out.path = file[..q].to_string();
                    out.query = Some(file[q + 1..].to_string());
                }
                None => out.path = file.to_string(),
            }
        }
        out.fragment = fragment.map(String::from);
        out
    }

    /// Same URL with the fragment replaced. Callers set the fragment before
    /// resolving; the resolver only carries it through.
    pub fn with_fragment(mut self, fragment: Option<&str>) -> Self {
        self.fragment = fragment.map(String::from);
        self
    }

    /// Applies resolver overrides; scheme and fragment always come from `self`.
    pub(crate) fn merge(&self, overrides: UrlOverrides) -> Self {
        Self {
            scheme: self.scheme.clone(),
            authority: overrides.authority,
            user_info: overrides.user_info,
            host: overrides.host,
            port: overrides.port,
            path: overrides.path,
            query: overrides.query,
            fragment: self.fragment.clone(),
        }
    }

    /// Base prepared for resolving a reference: query and fragment replaced.
    pub(crate) fn with_context(&self, query: Option<String>, fragment: Option<String>) -> Self {
        Self {
            query,
            fragment,
            ..self.clone()
        }
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn authority(&self) -> Option<&str> {
        self.authority.as_deref()
    }

    pub fn user_info(&self) -> Option<&str> {
        self.user_info.as_deref()
    }

    /// Host, empty when absent. IPv6 literals keep their brackets.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Explicit port or [`PORT_UNSET`].
    pub fn port(&self) -> i32 {
        self.port
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Path followed by `?query` when a query is present.
    pub fn file(&self) -> String {
        match &self.query {
            Some(q) => format!("{}?{}", self.path, q),
            None => self.path.clone(),
        }
    }

    /// `scheme ":" ["//" authority] path ["?" query] ["#" fragment]`
    pub fn to_external_form(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for UrlComponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.scheme)?;
        if let Some(authority) = &self.authority {
            write!(f, "//{authority}")?;
        }
        f.write_str(&self.path)?;
        if let Some(query) = &self.query {
            write!(f, "?{query}")?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{fragment}")?;
        }
        Ok(())
    }
}
