//! Resolution of a URL reference against base components.

use super::authority::split_authority;
use super::path::{merge_paths, remove_dot_segments};
use super::{UrlComponents, UrlError, UrlOverrides};

/// Parses `spec[start..limit]` in the context of `base`.
///
/// The range excludes any scheme prefix and `#fragment`. Fields not named by the
/// reference are inherited from `base`; a new authority discards the inherited
/// path, and the inherited query unless the reference has its own.
///
/// # Panics
///
/// Panics if `start` or `limit` (after clamping to `spec.len()`) is not on a
/// char boundary.
pub(crate) fn parse_url(
    base: &UrlComponents,
    spec: &str,
    start: usize,
    limit: usize,
) -> Result<UrlComponents, UrlError> {
    let limit = limit.min(spec.len());
    let start = start.min(limit);
    let mut rest = &spec[start..limit];
    let mut ctx = UrlOverrides::inherit(base);

    let mut query_set = false;
    if let Some(q) = rest.find('?') {
        ctx.query = Some(rest[q + 1..].to_string());
        rest = &rest[..q];
        query_set = true;
    }

    if rest.starts_with("//") && !rest.starts_with("///") {
        let after = &rest[2..];
        let end = after.find('/').unwrap_or(after.len());
        let authority = &after[..end];

        let parts = split_authority(authority).map_err(|e| {
            tracing::debug!("rejected authority {:?}: {}", authority, e);
            e
        })?;

        ctx.authority = Some(authority.to_string());
        ctx.user_info = parts.user_info;
        ctx.host = parts.host;
        ctx.port = parts.port;
        ctx.path.clear();
        if !query_set {
            ctx.query = None;
        }
        rest = &after[end..];
    }

    if !rest.is_empty() {
        let has_authority = ctx.authority.is_some();
        ctx.path = if rest.starts_with('/') {
            rest.to_string()
        } else if !ctx.path.is_empty() {
            merge_paths(&ctx.path, rest, has_authority)
        } else if has_authority {
            format!("/{rest}")
        } else {
            rest.to_string()
        };
    }

    ctx.path = remove_dot_segments(&ctx.path);

    let resolved = base.merge(ctx);
    tracing::trace!(
        "resolved {:?} against {} -> {}",
        &spec[start..limit],
        base,
        resolved
    );
    Ok(resolved)
}
