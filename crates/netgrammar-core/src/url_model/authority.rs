//! Authority splitting: `[user-info@]host[:port]`.

use super::host::is_ipv6_literal;
use super::{UrlError, PORT_UNSET};

/// Pieces of a parsed authority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AuthorityParts {
    pub user_info: Option<String>,
    pub host: String,
    pub port: i32,
}

/// Splits an authority into user-info, host and port.
///
/// User-info is everything before the last `@`. A host starting with `[` must be
/// a bracketed IPv6 literal; otherwise the port follows the last `:`.
pub(crate) fn split_authority(authority: &str) -> Result<AuthorityParts, UrlError> {
    let (user_info, host_port) = match authority.rfind('@') {
        Some(at) => (Some(authority[..at].to_string()), &authority[at + 1..]),
        None => (None, authority),
    };

    let (host, port) = if host_port.starts_with('[') {
        split_bracketed(authority, host_port)?
    } else {
        split_plain(authority, host_port)?
    };

    if port < PORT_UNSET {
        return Err(UrlError::InvalidPort(port.to_string()));
    }

    Ok(AuthorityParts {
        user_info,
        host,
        port,
    })
}

fn split_bracketed(authority: &str, host_port: &str) -> Result<(String, i32), UrlError> {
    let close = host_port
        .find(']')
        .ok_or_else(|| UrlError::InvalidAuthority(authority.to_string()))?;

    let host = &host_port[..=close];
    if !is_ipv6_literal(&host_port[1..close]) {
        return Err(UrlError::InvalidAuthority(host.to_string()));
    }

    let tail = &host_port[close + 1..];
    let port = match tail.strip_prefix(':') {
        // Empty port after the colon is legal and means "default".
        Some("") => PORT_UNSET,
        Some(port) => port
            .parse::<i32>()
            .map_err(|_| UrlError::InvalidAuthority(authority.to_string()))?,
        None if tail.is_empty() => PORT_UNSET,
        None => return Err(UrlError::InvalidAuthority(authority.to_string())),
    };

    Ok((host.to_string(), port))
}

fn split_plain(authority: &str, host_port: &str) -> Result<(String, i32), UrlError> {
    if host_port.contains(']') {
        return Err(UrlError::InvalidAuthority(authority.to_string()));
    }

    let Some(colon) = host_port.rfind(':') else {
        return Ok((host_port.to_string(), PORT_UNSET));
    };

    let suffix = &host_port[colon + 1..];
    let port = if suffix.is_empty() {
        PORT_UNSET
    } else if suffix.bytes().all(|b| b.is_ascii_digit()) {
        suffix
            .parse::<i32>()
            .map_err(|_| UrlError::InvalidPort(suffix.to_string()))?
    } else {
        return Err(UrlError::InvalidPort(suffix.to_string()));
    };

    Ok((host_port[..colon].to_string(), port))
}
