//! Command-line argument definitions for the planet CRS registry
//!
//! This module defines the CLI interface using the clap derive API. Every
//! subcommand shares the corpus, configuration and logging flags in
//! [`CommonArgs`].

use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the planet CRS registry
///
/// Parses a corpus of IAU planetary coordinate reference systems written as
/// WKT and answers registry queries over it.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "planet-crs-registry",
    version,
    about = "Parse and query IAU planetary coordinate reference systems written as WKT",
    long_about = "Reads a corpus of blank-line separated WKT definitions for solar system bodies, \
                  classifies every definition against the eight known CRS shapes and builds an \
                  in-memory registry that can be listed, searched and exported as OGC identifiers."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Classify the corpus and report parse statistics
    Parse(ParseArgs),
    /// List registry rows, optionally filtered
    List(ListArgs),
    /// Print a single WKT by identifier
    Get(GetArgs),
    /// List solar bodies with their WKT counts
    Bodies(CommonArgs),
    /// List IAU versions with their WKT counts
    Versions(CommonArgs),
    /// List OGC identifiers for all versions or for one version
    Identifiers(IdentifiersArgs),
}

impl Commands {
    /// Flags shared by every subcommand
    pub fn common(&self) -> &CommonArgs {
        match self {
            Commands::Parse(args) => &args.common,
            Commands::List(args) => &args.common,
            Commands::Get(args) => &args.common,
            Commands::Bodies(common) | Commands::Versions(common) => common,
            Commands::Identifiers(args) => &args.common,
        }
    }
}

/// Corpus, configuration and logging flags
#[derive(Debug, Clone, clap::Args)]
pub struct CommonArgs {
    /// WKT corpus file
    ///
    /// Overrides `corpus_path` from the configuration file and the
    /// PLANET_CRS_CORPUS environment variable.
    #[arg(long = "corpus", value_name = "FILE", help = "WKT corpus file to load")]
    pub corpus_path: Option<PathBuf>,

    /// Configuration file path
    ///
    /// TOML file with registry settings. If not specified, the user
    /// configuration file is used when present.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Configuration file path (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Number of parallel classification workers
    #[arg(
        short = 'j',
        long = "workers",
        value_name = "NUM",
        help = "Number of parallel classification workers"
    )]
    pub workers: Option<usize>,

    /// Classify the corpus on the blocking thread pool
    #[arg(long = "parallel", help = "Classify WKT blocks in parallel")]
    pub parallel: bool,

    /// Enable verbose logging output
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Enable verbose logging (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress all output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Output format for results
    #[arg(
        long = "format",
        value_name = "FORMAT",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,
}

/// Arguments for the parse command
#[derive(Debug, Clone, Parser)]
pub struct ParseArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// List every block that matched no template
    #[arg(long = "show-failures", help = "List unclassified WKT blocks")]
    pub show_failures: bool,
}

/// Arguments for the list command
#[derive(Debug, Clone, Parser)]
pub struct ListArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Only rows of this IAU version
    #[arg(
        long = "version",
        value_name = "YEAR",
        conflicts_with_all = ["solar_body", "search"],
        help = "Only rows of this IAU version"
    )]
    pub version: Option<u32>,

    /// Only rows of this solar body (case-insensitive)
    #[arg(
        long = "body",
        value_name = "NAME",
        conflicts_with = "search",
        help = "Only rows of this solar body"
    )]
    pub solar_body: Option<String>,

    /// Only rows whose identifier or WKT contains this text
    #[arg(long = "search", value_name = "TEXT", help = "Search identifiers and WKT text")]
    pub search: Option<String>,

    /// Number of rows to skip
    #[arg(long = "offset", value_name = "NUM", default_value_t = 0)]
    pub offset: usize,

    /// Maximum number of rows to print
    #[arg(long = "limit", value_name = "NUM", help = "Maximum number of rows to print")]
    pub limit: Option<usize>,
}

/// Arguments for the get command
#[derive(Debug, Clone, Parser)]
pub struct GetArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Identifier in the form IAU:<version>:<code>
    #[arg(value_name = "ID")]
    pub id: String,

    /// Require the WKT to belong to this IAU version
    #[arg(long = "version", value_name = "YEAR", conflicts_with = "solar_body")]
    pub version: Option<u32>,

    /// Require the WKT to belong to this solar body
    #[arg(long = "body", value_name = "NAME")]
    pub solar_body: Option<String>,
}

/// Arguments for the identifiers command
#[derive(Debug, Clone, Parser)]
pub struct IdentifiersArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// IAU version to list identifiers for; lists versions when omitted
    #[arg(value_name = "VERSION")]
    pub version: Option<u32>,
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
    /// CSV format for data analysis
    Csv,
}

impl CommonArgs {
    /// Validate the shared arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(workers) = self.workers {
            if workers == 0 {
                return Err(Error::configuration(
                    "Number of workers must be greater than 0",
                ));
            }

            if workers > 100 {
                return Err(Error::configuration("Number of workers cannot exceed 100"));
            }
        }

        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        Ok(())
    }

    /// Determine the log level from verbosity flags, falling back to the configured one
    pub fn get_log_level(&self, configured: &str) -> String {
        if self.quiet {
            return "error".to_string();
        }

        match self.verbose {
            0 => configured.to_string(),
            1 => "info".to_string(),
            2 => "debug".to_string(),
            _ => "trace".to_string(),
        }
    }

    /// Check if we should show progress bars
    pub fn show_progress(&self) -> bool {
        !self.quiet && self.output_format == OutputFormat::Human
    }
}
