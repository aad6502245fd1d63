//! URI reference resolution and HTTP cache header interpretation.
//!
//! Two independent, pure parsers:
//!
//! - [`url_model`]: resolves URL text against a base URL into normalized
//!   components.
//! - [`cache_control`]: turns raw header lines into a structured cache policy.

pub mod config;
pub mod logging;

pub mod cache_control;
pub mod url_model;
