use regex::{Matches, Regex};

use crate::models::Candidate;
use crate::notice::mime::excluded_type;

/// File name suffix that marks a standalone notice file.
const NOTICE_SUFFIX: &str = "LICENSE";

/// How a file is treated by the extractor, decided from its name alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileKind {
    /// The whole file is one notice covering `covers` (empty = the directory).
    StandaloneNotice { covers: String },
    /// Scan the contents for `/* ... */` notice blocks.
    EmbeddedScan,
    /// Skipped without being opened.
    Excluded { mime: &'static str },
}

impl FileKind {
    /// Classify a file by name. A `LICENSE` suffix wins over the type
    /// exclusion table, so `foo.LICENSE` is always read.
    pub fn classify(file_name: &str) -> Self {
        if let Some(stem) = file_name.strip_suffix(NOTICE_SUFFIX) {
            let covers = stem.strip_suffix('.').unwrap_or(stem);
            return FileKind::StandaloneNotice {
                covers: covers.to_string(),
            };
        }

        match excluded_type(file_name) {
            Some(mime) => FileKind::Excluded { mime },
            None => FileKind::EmbeddedScan,
        }
    }
}

/// Finds license notices in file contents.
pub struct NoticeExtractor {
    block_comment: Regex,
}

impl NoticeExtractor {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            block_comment: Regex::new(r"(?s)/\*.*?\*/")?,
        })
    }

    /// Yield the candidate notices of one file.
    ///
    /// `kind` must come from [`FileKind::classify`] on the same `file_name`.
    /// Blocks are matched left to right without overlap; a block that is not
    /// a notice is dropped and matching carries on after it.
    pub fn extract<'a>(
        &'a self,
        file_name: &'a str,
        kind: &FileKind,
        text: &'a str,
    ) -> Candidates<'a> {
        match kind {
            FileKind::StandaloneNotice { covers } => Candidates::Standalone(Some(Candidate {
                text: text.to_string(),
                covers: covers.clone(),
            })),
            FileKind::EmbeddedScan => Candidates::Embedded {
                blocks: self.block_comment.find_iter(text),
                file_name,
            },
            FileKind::Excluded { .. } => Candidates::Empty,
        }
    }
}

/// A comment block is a notice when it mentions both a license and a
/// copyright, in any case.
pub fn is_notice(block: &str) -> bool {
    let lower = block.to_lowercase();
    lower.contains("license") && lower.contains("copyright")
}

/// Lazy sequence of candidates produced by [`NoticeExtractor::extract`].
pub enum Candidates<'a> {
    Standalone(Option<Candidate>),
    Embedded {
        blocks: Matches<'a, 'a>,
        file_name: &'a str,
    },
    Empty,
}

impl Iterator for Candidates<'_> {
    type Item = Candidate;

    fn next(&mut self) -> Option<Candidate> {
        match self {
            Candidates::Standalone(candidate) => candidate.take(),
            Candidates::Embedded { blocks, file_name } => blocks
                .by_ref()
                .map(|m| m.as_str())
                .find(|block| is_notice(block))
                .map(|block| Candidate {
                    text: block.to_string(),
                    covers: (*file_name).to_string(),
                }),
            Candidates::Empty => None,
        }
    }
}
