//! Extension-based content type guessing.
//!
//! Only the file name is consulted; contents are never sniffed. The table
//! covers the types in [`EXCLUDED_TYPES`] plus common source and asset types.

/// Content types whose files are never scanned for embedded comment blocks.
pub const EXCLUDED_TYPES: &[&str] = &["application/xml", "image/png"];

/// Guess the MIME type of `file_name` from its extension.
///
/// Returns `None` when the name has no extension or the extension is not in
/// the table. Leading dots belong to the stem, so `.png` has no extension.
pub fn guess_type(file_name: &str) -> Option<&'static str> {
    let (_, ext) = file_name.trim_start_matches('.').rsplit_once('.')?;

    let mime = match ext.to_ascii_lowercase().as_str() {
        "xml" | "xsl" | "xsd" => "application/xml",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "ico" => "image/vnd.microsoft.icon",
        "webp" => "image/webp",
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "js" | "mjs" => "text/javascript",
        "json" => "application/json",
        "txt" => "text/plain",
        "md" => "text/markdown",
        "c" | "h" => "text/x-c",
        "cc" | "cpp" | "cxx" | "hpp" => "text/x-c++",
        "java" => "text/x-java",
        "kt" | "kts" => "text/x-kotlin",
        "rs" => "text/x-rust",
        "go" => "text/x-go",
        "py" => "text/x-python",
        "sh" => "application/x-sh",
        "pdf" => "application/pdf",
        "zip" => "application/zip",
        "jar" => "application/java-archive",
        _ => return None,
    };

    Some(mime)
}

/// The guessed type of `file_name`, if it is one of [`EXCLUDED_TYPES`].
pub fn excluded_type(file_name: &str) -> Option<&'static str> {
    guess_type(file_name).filter(|mime| EXCLUDED_TYPES.contains(mime))
}
