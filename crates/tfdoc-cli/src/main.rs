//! tfdoc CLI
//!
//! Explains, inspects, and ingests documented Terraform resources.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use std::process::ExitCode;

use clap::Parser;
use tfdoc_cli::cli::Cli;
use tfdoc_cli::{commands, logging};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    logging::init();
    let cli = Cli::parse();

    let outcome = commands::run(cli).await?;
    print!("{}", outcome.output);
    Ok(outcome.exit_code())
}
