//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.

use std::path::PathBuf;

use clap::Parser;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// modbuild - deploy private references into module output directories
#[derive(Parser, Debug)]
#[command(name = "modbuild")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Example: modbuild \"ModulePath=Modules/Smartstore.Blog;Modules/Smartstore.Forums\"")]
pub struct Cli {
    /// ";"-delimited key=value options, e.g. "ModulePath=Modules/A;Modules/B"
    #[arg(value_name = "OPTION_STRING")]
    pub options: Option<String>,

    /// Report copies and deletions without changing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Do not delete build byproducts after deploying
    #[arg(long)]
    pub no_prune: bool,

    /// Emit an NDJSON event stream on stdout
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// TOML configuration file
    #[arg(long, env = "MODBUILD_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Color output
    #[arg(long, value_enum, value_name = "WHEN")]
    pub color: Option<ColorWhen>,
}
