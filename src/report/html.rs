use std::fmt::Write;

use crate::models::LicenseGroup;
use crate::report::text::display_name;

const STYLE: &str = "body{font-family:sans-serif;margin:2em auto;max-width:60em;color:#222}\
h2{border-top:1px solid #ccc;padding-top:1em}\
ul{font-family:monospace}\
pre{background:#f6f8fa;padding:1em;overflow-x:auto;white-space:pre-wrap}";

/// Render the groups as a standalone HTML page.
pub fn render(groups: &[LicenseGroup], title: &str) -> String {
    let title = html_escape(title);
    let mut out = String::new();

    let _ = writeln!(out, "<!DOCTYPE html>");
    let _ = writeln!(out, "<html lang=\"en\">");
    let _ = writeln!(out, "<head>");
    let _ = writeln!(out, "<meta charset=\"utf-8\">");
    let _ = writeln!(out, "<title>{title}</title>");
    let _ = writeln!(out, "<style>{STYLE}</style>");
    let _ = writeln!(out, "</head>");
    let _ = writeln!(out, "<body>");
    let _ = writeln!(out, "<h1>{title}</h1>");

    if groups.is_empty() {
        let _ = writeln!(out, "<p>No license notices found.</p>");
    }

    for (index, group) in groups.iter().enumerate() {
        let _ = writeln!(out, "<section id=\"license-{}\">", index + 1);
        let _ = writeln!(out, "<h2>Notice for files:</h2>");
        let _ = writeln!(out, "<ul>");
        for name in &group.filenames {
            let _ = writeln!(out, "<li>{}</li>", html_escape(display_name(name)));
        }
        let _ = writeln!(out, "</ul>");
        let _ = writeln!(out, "<pre>{}</pre>", html_escape(group.license_text.trim_end()));
        let _ = writeln!(out, "</section>");
    }

    let _ = writeln!(out, "</body>");
    let _ = writeln!(out, "</html>");
    out
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
