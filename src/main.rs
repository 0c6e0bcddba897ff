pub mod cli;
pub mod config;
pub mod defaults;
pub mod errors;
pub mod imports;
pub mod ingest;
pub mod ir;
pub mod jq_exec;
pub mod lang;
pub mod lower;
pub mod naming;
pub mod resolve;

use colored::Colorize;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let command_line_interface = cli::CommandLineInterface::load();
    if let Err(error) = command_line_interface.run() {
        eprintln!("{} {error:#}", "error:".red().bold());
        std::process::exit(1);
    }
}
