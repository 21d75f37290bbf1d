//! Accumulates notices into distinct licenses, keyed by their normalized text.

use indexmap::{IndexMap, IndexSet};

use crate::notice::normalize::normalize;

/// One distinct license: the first text seen for its key plus every file it
/// was found to cover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct License {
    pub text: String,
    /// In first-seen order, without duplicates.
    pub filenames: IndexSet<String>,
}

/// Map from normalization key to [`License`], in the order keys were first
/// seen. Owned by a single scan; it only ever grows.
#[derive(Debug, Default)]
pub struct LicenseRegistry {
    licenses: IndexMap<String, License>,
}

impl LicenseRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `text` covers `filename`.
    ///
    /// The first text seen for a key is the one kept for display. Adding a
    /// filename that is already attributed to the license is a no-op.
    pub fn upsert(&mut self, text: &str, filename: &str) {
        let license = self
            .licenses
            .entry(normalize(text))
            .or_insert_with(|| License {
                text: text.to_string(),
                filenames: IndexSet::new(),
            });

        license.filenames.insert(filename.to_string());
    }

    /// All licenses in the order their keys were first seen.
    pub fn snapshot(&self) -> impl Iterator<Item = &License> {
        self.licenses.values()
    }

    pub fn len(&self) -> usize {
        self.licenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.licenses.is_empty()
    }
}
