//! `netgrammar resolve <reference> [--base <url>]` – resolve and print a URL.

use anyhow::{Context, Result};
use netgrammar_core::config::NetgrammarConfig;
use netgrammar_core::url_model::{resolve_reference, split_scheme, SchemeHandler, UrlHandler};

pub fn run_resolve(
    cfg: &NetgrammarConfig,
    reference: &str,
    base: Option<&str>,
    json: bool,
) -> Result<()> {
    let base = base
        .map(|b| {
            let handler = handler_for(cfg, b, None);
            resolve_reference(&handler, None, b).with_context(|| format!("invalid base URL: {b}"))
        })
        .transpose()?;

    let handler = handler_for(cfg, reference, base.as_ref().map(|b| b.scheme()));
    let resolved = resolve_reference(&handler, base.as_ref(), reference)
        .with_context(|| format!("cannot resolve {reference}"))?;
    tracing::debug!("resolved {:?} to {}", reference, resolved);

    if json {
        let out = serde_json::json!({
            "external_form": handler.to_external_form(&resolved),
            "effective_port": handler.effective_port(&resolved),
            "components": resolved,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", handler.to_external_form(&resolved));
    }
    Ok(())
}

/// Handler for the reference's own scheme, else the base's.
fn handler_for(cfg: &NetgrammarConfig, text: &str, base_scheme: Option<&str>) -> SchemeHandler {
    let own = split_scheme(text.trim()).map(|(scheme, _)| scheme);
    match own.as_deref().or(base_scheme) {
        Some(scheme) => SchemeHandler::for_scheme(cfg, scheme),
        None => SchemeHandler::default(),
    }
}
