use std::fmt::Write;

use crate::models::LicenseGroup;

const RULE: &str = "--------------------------------------------------------------------------------";

/// Render the groups as a plain-text document: title, then for every group a
/// heading, its files, and the license text.
pub fn render(groups: &[LicenseGroup], title: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{}", "=".repeat(title.chars().count()));

    if groups.is_empty() {
        let _ = writeln!(out, "\nNo license notices found.");
        return out;
    }

    for (index, group) in groups.iter().enumerate() {
        let _ = writeln!(out, "\n{RULE}");
        let _ = writeln!(out, "License {} of {}", index + 1, groups.len());
        let _ = writeln!(out, "{RULE}\n");
        let _ = writeln!(out, "Applies to:");
        for name in &group.filenames {
            let _ = writeln!(out, "  {}", display_name(name));
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", group.license_text.trim_end());
    }

    out
}

/// Empty covered names stand for the containing directory.
pub fn display_name(name: &str) -> &str {
    if name.is_empty() {
        "(whole directory)"
    } else {
        name
    }
}
