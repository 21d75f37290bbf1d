//! `license-digest` — collect license notices from source trees and group identical ones.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load config ([`config::load_config`]).
//! 3. Walk every root, classify each file and extract its notices ([`scan`], [`notice`]).
//! 4. Merge notices into distinct licenses by normalized text ([`registry`]).
//! 5. Order the result ([`report::assemble`]) and render the requested format ([`report`]).
//! 6. Exit `0`, or `1` if any root could not be scanned.

mod cli;
mod config;
mod error;
mod models;
mod notice;
mod registry;
mod report;
mod scan;

use std::io::IsTerminal;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use cli::{Cli, ReportFormat};
use config::load_config;
use scan::Scanner;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    let config = load_config(
        cli.roots.first().map(|root| root.as_path()),
        cli.config.as_deref(),
    )?;

    let mut options = config.scan.to_options();
    options.qualify_paths |= cli.qualify_paths;

    let progress = if cli.quiet || !std::io::stderr().is_terminal() {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {pos} files {wide_msg}")?,
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    };

    let scanner = Scanner::new(options)?.with_progress(progress.clone());
    let outcome = scanner.scan(&cli.roots);
    progress.finish_and_clear();
    tracing::debug!(
        files = outcome.files_seen,
        licenses = outcome.registry.len(),
        "scan finished"
    );

    if !cli.quiet && !outcome.skipped.is_empty() {
        eprintln!(
            "  {} skipped {} unreadable file(s)",
            "⚠".yellow(),
            outcome.skipped.len()
        );
    }

    let groups = report::assemble(&outcome.registry);

    let document = match cli.report {
        ReportFormat::Terminal => {
            report::terminal::render(&groups, &outcome, cli.verbose, cli.quiet);
            None
        }
        ReportFormat::Text => Some(report::text::render(&groups, &config.report.title)),
        ReportFormat::Html => Some(report::html::render(&groups, &config.report.title)),
        ReportFormat::Json => Some(serde_json::to_string_pretty(&groups)?),
    };

    if let Some(document) = document {
        match &cli.output {
            Some(path) => write_report(path, &document, cli.quiet)?,
            None => println!("{}", document),
        }
    }

    // Exit code: 1 if any root could not be scanned
    if !outcome.failed_roots.is_empty() {
        std::process::exit(1);
    }

    Ok(())
}

fn init_logging(verbose: bool, quiet: bool) {
    let default_level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn write_report(path: &Path, document: &str, quiet: bool) -> Result<()> {
    std::fs::write(path, document)
        .with_context(|| format!("Failed to write report to {}", path.display()))?;

    if !quiet {
        eprintln!("  {} report written to: {}", "→".cyan(), path.display());
    }
    Ok(())
}
