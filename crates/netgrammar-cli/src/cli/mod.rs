//! CLI for netgrammar.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use netgrammar_core::{config, logging};

use commands::{run_config, run_headers, run_resolve};

/// Top-level CLI for netgrammar.
#[derive(Debug, Parser)]
#[command(name = "netgrammar")]
#[command(about = "Resolve URL references and interpret HTTP cache headers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve a URL reference, optionally against a base URL.
    Resolve {
        /// Absolute URL or relative reference.
        reference: String,
        /// Base URL for relative references.
        #[arg(long)]
        base: Option<String>,
        /// Print components as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Interpret HTTP header lines as a cache policy.
    Headers {
        /// Header line ("Name: value"); repeatable. Reads stdin when omitted.
        #[arg(short = 'H', long = "header", value_name = "LINE")]
        headers: Vec<String>,
        /// Treat the headers as request headers instead of response headers.
        #[arg(long)]
        request: bool,
        /// URI the response was served for (affects heuristic freshness).
        #[arg(long, default_value = "http://localhost/")]
        uri: String,
        /// Print the parsed policy as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show the config file path and effective configuration.
    Config,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;

        let filter = cfg.log_filter.as_deref();
        if let Err(e) = logging::init_logging(filter) {
            logging::init_logging_stderr(filter);
            tracing::debug!("file logging unavailable, using stderr: {:#}", e);
        }
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Resolve {
                reference,
                base,
                json,
            } => run_resolve(&cfg, &reference, base.as_deref(), json)?,
            CliCommand::Headers {
                headers,
                request,
                uri,
                json,
            } => run_headers(&headers, request, &uri, json)?,
            CliCommand::Config => run_config(&cfg)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
