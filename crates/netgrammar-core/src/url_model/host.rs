//! IPv6 literal validation for bracketed hosts.

use std::net::Ipv6Addr;

/// Returns true if `literal` (the text between `[` and `]`) is an IPv6 address,
/// optionally followed by a `%zone` identifier.
pub fn is_ipv6_literal(literal: &str) -> bool {
    let (addr, zone) = match literal.split_once('%') {
        Some((addr, zone)) => (addr, Some(zone)),
        None => (literal, None),
    };

    if let Some(zone) = zone {
        let zone_ok = !zone.is_empty()
            && zone
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.' | b'_' | b'~'));
        if !zone_ok {
            return false;
        }
    }

    addr.parse::<Ipv6Addr>().is_ok()
}
