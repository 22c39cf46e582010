//! Command-line interface for locus-server.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **serve**: Load the datasets and start the query API
//! - **inspect**: Load the datasets and report what was found
//!
//! ## Usage
//!
//! ```text
//! # Check a data directory before deploying it
//! locus-server inspect --data-dir data
//!
//! # Machine-readable summary
//! locus-server inspect --data-dir data --format json
//!
//! # Start the API
//! locus-server serve --port 8000
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::store::dataset::DataPaths;

pub mod inspect;

#[derive(Parser)]
#[command(name = "locus-server")]
#[command(version)]
#[command(about = "Serve gene, LD, recombination and variant tracks to a genome browser")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve(ServeArgs),

    /// Load the datasets and print a summary
    Inspect(inspect::InspectArgs),
}

/// Where the datasets live
#[derive(clap::Args, Debug, Clone)]
pub struct DataArgs {
    /// Directory holding the dataset files
    #[arg(short, long, default_value = "data")]
    pub data_dir: PathBuf,

    /// Gene set JSON (default: <data-dir>/genes.json)
    #[arg(long)]
    pub genes: Option<PathBuf>,

    /// LD pairs JSON (default: <data-dir>/ld.json)
    #[arg(long)]
    pub ld: Option<PathBuf>,

    /// Recombination table JSON (default: <data-dir>/recomb.json)
    #[arg(long)]
    pub recomb: Option<PathBuf>,

    /// VCF served by /pandas/genes
    #[arg(long)]
    pub variants: Option<PathBuf>,

    /// VCF served by /pandas/test/genes
    #[arg(long)]
    pub test_variants: Option<PathBuf>,
}

impl DataArgs {
    /// Default locations under `data_dir`, with explicit paths taking precedence.
    pub fn paths(&self) -> DataPaths {
        let defaults = DataPaths::from_dir(&self.data_dir);
        DataPaths {
            genes: self.genes.clone().unwrap_or(defaults.genes),
            ld: self.ld.clone().unwrap_or(defaults.ld),
            recomb: self.recomb.clone().unwrap_or(defaults.recomb),
            variants: self.variants.clone().or(defaults.variants),
            test_variants: self.test_variants.clone().or(defaults.test_variants),
        }
    }
}

#[derive(clap::Args)]
pub struct ServeArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Port to listen on
    #[arg(short, long, default_value = "8000")]
    pub port: u16,

    /// Address to bind to
    #[arg(short, long, default_value = "127.0.0.1")]
    pub address: String,

    /// Browser origin allowed to call the API
    #[arg(long, default_value = "http://localhost:5173")]
    pub allow_origin: String,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
