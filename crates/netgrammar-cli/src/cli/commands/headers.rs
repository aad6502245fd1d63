//! `netgrammar headers` – interpret header lines as a cache policy.

use anyhow::{Context, Result};
use chrono::Utc;
use netgrammar_core::cache_control::{
    parse_request_directives, parse_response_directives, CacheDirectives, RawHeaders, UNSET,
};
use std::io::{self, BufRead};

pub fn run_headers(lines: &[String], request: bool, uri: &str, json: bool) -> Result<()> {
    let headers = if lines.is_empty() {
        read_headers(io::stdin().lock())?
    } else {
        RawHeaders::from_lines(lines)
    };
    tracing::debug!("parsing {} header(s)", headers.len());

    if request {
        let policy = parse_request_directives(&headers);
        if json {
            println!("{}", serde_json::to_string_pretty(&policy)?);
        } else {
            print_directives(&policy.cache_control);
            println!("has-conditions: {}", policy.has_conditions());
            println!("has-authorization: {}", policy.has_authorization);
        }
    } else {
        let policy = parse_response_directives(uri, &headers);
        if json {
            println!("{}", serde_json::to_string_pretty(&policy)?);
        } else {
            print_directives(&policy.cache_control);
            if let Some(etag) = &policy.etag {
                println!("etag: {etag}");
            }
            println!("has-validators: {}", policy.has_validators());
            println!(
                "freshness-lifetime: {}s",
                policy.freshness_lifetime(Utc::now()).num_seconds()
            );
        }
    }
    Ok(())
}

/// Reads `Name: value` lines until EOF or the first blank line after a header.
fn read_headers(input: impl BufRead) -> Result<RawHeaders> {
    let mut lines = Vec::new();
    for line in input.lines() {
        let line = line.context("failed to read headers from stdin")?;
        if line.trim().is_empty() {
            if lines.is_empty() {
                continue;
            }
            break;
        }
        lines.push(line);
    }
    Ok(RawHeaders::from_lines(lines))
}

fn print_directives(d: &CacheDirectives) {
    let flags = [
        ("no-cache", d.no_cache),
        ("no-store", d.no_store),
        ("no-transform", d.no_transform),
        ("must-revalidate", d.must_revalidate),
        ("public", d.is_public),
        ("private", d.is_private),
        ("only-if-cached", d.only_if_cached),
    ];
    for (name, set) in flags {
        if set {
            println!("{name}");
        }
    }
    if let Some(field) = &d.private_field {
        println!("private-field: {field:?}");
    }
    if let Some(field) = &d.no_cache_field {
        println!("no-cache-field: {field:?}");
    }
    let seconds = [
        ("max-age", d.max_age_seconds),
        ("s-maxage", d.s_max_age_seconds),
        ("max-stale", d.max_stale_seconds),
        ("min-fresh", d.min_fresh_seconds),
    ];
    for (name, value) in seconds {
        if value != UNSET {
            println!("{name}: {value}");
        }
    }
}
