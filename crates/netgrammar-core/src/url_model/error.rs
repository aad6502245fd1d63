//! Error type for URI reference resolution.

use thiserror::Error;

/// Rejected input from the resolver. Each variant carries the offending substring.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    /// Bracketed host is not a valid IPv6 literal, `]` is missing, or junk follows it.
    #[error("invalid authority field: {0}")]
    InvalidAuthority(String),
    /// Port suffix is not a number, does not fit, or is below the -1 sentinel.
    #[error("invalid port: {0}")]
    InvalidPort(String),
    /// Reference has no scheme and there is no base URL to inherit one from.
    #[error("no scheme in reference: {0}")]
    MissingScheme(String),
}
