//! Turning a finished scan into something a person can read.
//!
//! [`assemble`] fixes the order of everything in the report; the renderers
//! only format what it returns.
//!
//! - [`terminal`] — coloured summary box and license table; respects `--verbose` / `--quiet`.
//! - [`text`] — plain-text document.
//! - [`html`] — self-contained HTML document.

pub mod html;
pub mod terminal;
pub mod text;

use crate::models::LicenseGroup;
use crate::registry::LicenseRegistry;

/// One [`LicenseGroup`] per registry entry, in registry order, with each
/// group's filenames sorted by byte order.
pub fn assemble(registry: &LicenseRegistry) -> Vec<LicenseGroup> {
    registry
        .snapshot()
        .map(|license| {
            let mut filenames: Vec<String> = license.filenames.iter().cloned().collect();
            filenames.sort_unstable();
            LicenseGroup {
                license_text: license.text.clone(),
                filenames,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assemble_sorts_files_keeps_group_order() {
        let mut registry = LicenseRegistry::new();
        registry.upsert("/* Copyright B License */", "zeta.c");
        registry.upsert("/* Copyright A License */", "b.c");
        registry.upsert("/* copyright   b license */", "Alpha.c");
        registry.upsert("/* Copyright B License */", "alpha.c");

        let groups = assemble(&registry);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].license_text, "/* Copyright B License */");
        assert_eq!(groups[0].filenames, vec!["Alpha.c", "alpha.c", "zeta.c"]);
        assert_eq!(groups[1].license_text, "/* Copyright A License */");
        assert_eq!(groups[1].filenames, vec!["b.c"]);
    }

    #[test]
    fn test_assemble_empty() {
        assert!(assemble(&LicenseRegistry::new()).is_empty());
    }
}
