use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "license-digest",
    about = "Collect license notices from source trees and group identical ones",
    version
)]
pub struct Cli {
    /// Directories to scan (none gives an empty report)
    pub roots: Vec<PathBuf>,

    /// Report format
    #[arg(long, default_value = "terminal", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// Write the text, html or json report to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Config file [default: <first root>/.license-digest/config.toml, fallback ~/.config/license-digest/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Prefix covered file names with their directory relative to the root
    #[arg(long)]
    pub qualify_paths: bool,

    /// Print every license text; enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print summary line
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Text,
    Html,
    Json,
}
