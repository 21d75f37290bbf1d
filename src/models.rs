use serde::Serialize;

/// A notice found in one file, before it is merged into the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// The notice text exactly as it appears in the file.
    pub text: String,
    /// The file the notice applies to. Empty means the whole directory.
    pub covers: String,
}

/// One distinct license as it appears in the final report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseGroup {
    pub license_text: String,
    /// Sorted ascending by byte order.
    pub filenames: Vec<String>,
}

impl LicenseGroup {
    /// First line of the license text with content, trimmed of comment
    /// decoration. Used as a short label in the terminal summary.
    pub fn headline(&self) -> &str {
        self.license_text
            .lines()
            .map(|line| line.trim_matches(|c: char| c.is_whitespace() || c == '/' || c == '*'))
            .find(|line| !line.is_empty())
            .unwrap_or("")
    }
}
