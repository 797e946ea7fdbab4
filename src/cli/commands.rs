//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - generate: run the retrying generation loop
//! - stream: relay one attempt as `data:` frames
//! - check: screen names given on the command line
//! - lookup: print the trademark search URL for a name

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Namesmith - LLM-assisted trademark name generator
#[derive(Parser, Debug)]
#[command(name = "namesmith")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate names, regenerating until one passes screening
    Generate {
        /// Industry the brand operates in
        #[arg(short, long)]
        industry: String,

        /// Core keywords the name should reflect
        #[arg(short, long)]
        keywords: String,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Stream one generation attempt as server-sent event frames
    Stream {
        /// Industry the brand operates in
        #[arg(short, long)]
        industry: String,

        /// Core keywords the name should reflect
        #[arg(short, long)]
        keywords: String,
    },

    /// Screen names against the compliance rule
    Check {
        /// Names to screen
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Print the trademark search URL for a name
    Lookup {
        /// Name to look up
        name: String,
    },
}
