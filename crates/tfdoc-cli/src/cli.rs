//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// tfdoc - grounded explanations of Terraform provider resources
#[derive(Parser, Debug)]
#[command(name = "tfdoc")]
#[command(about = "Explain and inspect documented Terraform resources", long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// tfdoc commands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Ask a language model to explain a resource using only its stored documentation
    Explain {
        /// Resource name, e.g. azurerm_storage_account
        #[arg(long)]
        resource: String,

        /// Provider version, e.g. 4.52.0
        #[arg(long)]
        version: String,

        /// Language of the explanation: 'de' for German, anything else for English
        #[arg(long, default_value = "en")]
        language: String,

        /// Chat model name (default: TFDOC_MODEL or gpt-4o-mini)
        #[arg(long)]
        model: Option<String>,
    },

    /// Display a resource and all of its attributes
    Inspect {
        /// Resource name, e.g. azurerm_storage_account
        #[arg(long)]
        resource: String,

        /// Provider version, e.g. 4.52.0
        #[arg(long)]
        version: String,
    },

    /// Insert a documented resource into the record store
    Ingest {
        /// JSON file holding one resource with its attributes
        /// (defaults to the built-in azurerm_storage_account example)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}
