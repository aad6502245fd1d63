mod cli;

use crate::cli::CliCommand;

fn main() {
    // Parse CLI, set up config and logging, and dispatch.
    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("netgrammar error: {:#}", err);
        std::process::exit(1);
    }
}
