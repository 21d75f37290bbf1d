use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use crate::models::LicenseGroup;
use crate::report::text::display_name;
use crate::scan::ScanOutcome;

/// Files listed per table row before the rest are summarised as "+N more".
const FILES_PREVIEW: usize = 3;

/// Render a colored terminal report.
pub fn render(groups: &[LicenseGroup], outcome: &ScanOutcome, verbose: bool, quiet: bool) {
    let covered: usize = groups.iter().map(|g| g.filenames.len()).sum();
    let skipped = outcome.skipped.len();
    let failed = outcome.failed_roots.len();

    if quiet {
        println!(
            "Files: {}  Licenses: {}  Skipped: {}  Failed roots: {}",
            outcome.files_seen,
            groups.len().to_string().green(),
            skipped.to_string().yellow(),
            failed.to_string().red(),
        );
        return;
    }

    println!(
        "\n {} v{}\n",
        "license-digest".bold(),
        env!("CARGO_PKG_VERSION")
    );

    println!(" ┌────────────────────────────────────────────────────┐");
    println!(" │  {:<48} │", "SUMMARY".bold());
    println!(" │  {:<48} │", format!("Files scanned      : {:>6}", outcome.files_seen));
    println!(" │  {:<48} │", format!("Distinct licenses  : {:>6}", groups.len()));
    println!(" │  {:<48} │", format!("Files covered      : {:>6}", covered));
    println!(
        " │  {:<48} │",
        format!("{}  Skipped files   : {:>6}", "⚠".yellow(), skipped)
    );
    println!(
        " │  {:<48} │",
        format!("{}  Failed roots    : {:>6}", "✗".red(), failed)
    );
    println!(" └────────────────────────────────────────────────────┘\n");

    if groups.is_empty() {
        println!(" No license notices found.\n");
        return;
    }

    render_table(groups);
    println!();

    if verbose {
        for (index, group) in groups.iter().enumerate() {
            println!(" {} License #{}\n", "[LICENSE]".green().bold(), index + 1);
            for name in &group.filenames {
                println!("   {}", display_name(name).cyan());
            }
            println!("\n{}\n", group.license_text.trim_end().dimmed());
        }
    }
}

fn render_table(groups: &[LicenseGroup]) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("#").add_attribute(Attribute::Bold),
            Cell::new("Notice").add_attribute(Attribute::Bold),
            Cell::new("Files").add_attribute(Attribute::Bold),
            Cell::new("Covers").add_attribute(Attribute::Bold),
        ]);

    for (index, group) in groups.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index + 1).set_alignment(CellAlignment::Right),
            Cell::new(group.headline()),
            Cell::new(group.filenames.len()).set_alignment(CellAlignment::Right),
            Cell::new(preview_files(&group.filenames)),
        ]);
    }

    println!("{}", table);
}

fn preview_files(filenames: &[String]) -> String {
    let mut lines: Vec<String> = filenames
        .iter()
        .take(FILES_PREVIEW)
        .map(|name| display_name(name).to_string())
        .collect();

    let more = filenames.len().saturating_sub(FILES_PREVIEW);
    if more > 0 {
        lines.push(format!("+{} more", more));
    }

    lines.join("\n")
}
