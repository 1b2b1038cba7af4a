//! CLI argument definitions using clap
//!
//! Commands:
//! - formguard init --data-dir <dir>
//! - formguard list --data-dir <dir>
//! - formguard check --data-dir <dir>
//! - formguard inspect --data-dir <dir> --target <id> [--pretty]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// formguard - A strict, deterministic field-validation descriptor engine
#[derive(Parser, Debug)]
#[command(name = "formguard")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize a new formguard data directory
    Init {
        /// Path to the data directory
        #[arg(long, default_value = "./formguard")]
        data_dir: PathBuf,
    },

    /// List declared targets
    List {
        /// Path to the data directory
        #[arg(long, default_value = "./formguard")]
        data_dir: PathBuf,
    },

    /// Load all declarations and build every descriptor
    Check {
        /// Path to the data directory
        #[arg(long, default_value = "./formguard")]
        data_dir: PathBuf,
    },

    /// Print the validation descriptor for one target
    Inspect {
        /// Path to the data directory
        #[arg(long, default_value = "./formguard")]
        data_dir: PathBuf,

        /// Target id to inspect
        #[arg(long)]
        target: String,

        /// Pretty-print the descriptor JSON
        #[arg(long)]
        pretty: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
