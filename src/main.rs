//! txtbatch - Batch reports over the .txt files of a folder
//!
//! txtbatch provides:
//! - Decimal to binary/hexadecimal conversion
//! - Descriptive statistics (mean, median, mode, variance, standard deviation)
//! - Word frequency counting
//!
//! Every utility writes one block per input file to stdout and to its own
//! results file.

use anyhow::Result;
use clap::Parser;

mod backends;
mod cli;
mod core;
mod flows;

use crate::core::error::BatchError;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // RUST_LOG takes precedence over -q / -v
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    log::debug!("Starting txtbatch v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = cli::run(cli) {
        match e.downcast_ref::<BatchError>() {
            Some(BatchError::NoInputFiles) => println!("{}", e),
            _ => eprintln!("Error: {}", e),
        }
        std::process::exit(1);
    }

    Ok(())
}
