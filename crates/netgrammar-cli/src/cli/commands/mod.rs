//! CLI command handlers, one per file.

mod config;
mod headers;
mod resolve;

pub use config::run_config;
pub use headers::run_headers;
pub use resolve::run_resolve;
