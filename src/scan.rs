//! Walks the roots and feeds every file through the extractor into a fresh
//! [`LicenseRegistry`].

use std::path::Path;

use indicatif::ProgressBar;
use tracing::{debug, error, warn};
use walkdir::WalkDir;

use crate::error::ScanError;
use crate::notice::extractor::{FileKind, NoticeExtractor};
use crate::registry::LicenseRegistry;

#[derive(Debug, Clone, Copy, Default)]
pub struct ScanOptions {
    /// Follow symbolic links while walking.
    pub follow_links: bool,
    /// Prefix covered names with their directory relative to the root.
    pub qualify_paths: bool,
}

/// Everything a scan produced, including what it had to skip.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub registry: LicenseRegistry,
    /// Regular files visited, including excluded and skipped ones.
    pub files_seen: usize,
    /// Files (or subtrees) that could not be read.
    pub skipped: Vec<ScanError>,
    /// Roots that could not be scanned at all.
    pub failed_roots: Vec<ScanError>,
}

pub struct Scanner {
    extractor: NoticeExtractor,
    options: ScanOptions,
    progress: ProgressBar,
}

impl Scanner {
    pub fn new(options: ScanOptions) -> Result<Self, ScanError> {
        Ok(Self {
            extractor: NoticeExtractor::new()?,
            options,
            progress: ProgressBar::hidden(),
        })
    }

    /// Report each visited file to `progress`.
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = progress;
        self
    }

    /// Scan every root in order. A failing root is recorded and the next one
    /// is scanned anyway.
    pub fn scan<P: AsRef<Path>>(&self, roots: &[P]) -> ScanOutcome {
        let mut outcome = ScanOutcome::default();

        for root in roots {
            let root = root.as_ref();
            if let Err(err) = self.scan_root(root, &mut outcome) {
                self.progress.suspend(|| error!("{}", err.detail()));
                outcome.failed_roots.push(err);
            }
        }

        outcome
    }

    fn scan_root(&self, root: &Path, outcome: &mut ScanOutcome) -> Result<(), ScanError> {
        let metadata = std::fs::metadata(root).map_err(|source| ScanError::RootUnreadable {
            path: root.to_path_buf(),
            source,
        })?;
        if !metadata.is_dir() {
            return Err(ScanError::NotADirectory(root.to_path_buf()));
        }

        for entry in WalkDir::new(root).follow_links(self.options.follow_links) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(source) if source.depth() == 0 => {
                    return Err(ScanError::Walk {
                        path: root.to_path_buf(),
                        source,
                    });
                }
                Err(source) => {
                    let err = ScanError::Walk {
                        path: source
                            .path()
                            .map_or_else(|| root.to_path_buf(), Path::to_path_buf),
                        source,
                    };
                    self.progress.suspend(|| warn!("skipping {}", err.detail()));
                    outcome.skipped.push(err);
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            outcome.files_seen += 1;
            self.progress.set_message(entry.path().display().to_string());
            self.progress.inc(1);

            if let Err(err) = self.scan_file(root, entry.path(), &mut outcome.registry) {
                self.progress.suspend(|| warn!("skipping {}", err.detail()));
                outcome.skipped.push(err);
            }
        }

        Ok(())
    }

    fn scan_file(
        &self,
        root: &Path,
        path: &Path,
        registry: &mut LicenseRegistry,
    ) -> Result<(), ScanError> {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_default();
        let kind = FileKind::classify(&file_name);

        if let FileKind::Excluded { mime } = kind {
            debug!(path = %path.display(), mime, "excluded by type");
            return Ok(());
        }
        debug!(path = %path.display(), ?kind, "scanning");

        let bytes = std::fs::read(path).map_err(|source| ScanError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8(bytes).map_err(|source| ScanError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        let prefix = if self.options.qualify_paths {
            relative_dir(root, path)
        } else {
            String::new()
        };

        for candidate in self.extractor.extract(&file_name, &kind, &text) {
            let covers = format!("{prefix}{}", candidate.covers);
            registry.upsert(&candidate.text, &covers);
        }

        Ok(())
    }
}

/// Directory of `path` relative to `root`, `/`-separated with a trailing
/// slash, or empty for files directly under the root.
fn relative_dir(root: &Path, path: &Path) -> String {
    let Some(rel) = path.parent().and_then(|dir| dir.strip_prefix(root).ok()) else {
        return String::new();
    };

    rel.components()
        .map(|c| format!("{}/", c.as_os_str().to_string_lossy()))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use tempfile::TempDir;

    use super::*;

    const NOTICE: &str = "/*\n * Copyright 2017 Google Inc.\n *\n * Licensed under the Apache License, Version 2.0\n */";

    fn write(dir: &Path, rel: &str, contents: &[u8]) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    fn scanner() -> Scanner {
        Scanner::new(ScanOptions::default()).unwrap()
    }

    fn filenames(outcome: &ScanOutcome) -> Vec<Vec<String>> {
        outcome
            .registry
            .snapshot()
            .map(|l| l.filenames.iter().cloned().collect())
            .collect()
    }

    #[test]
    fn test_identical_blocks_share_one_license() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "b/Second.java", format!("{NOTICE}\nclass B {{}}\n").as_bytes());
        write(dir.path(), "a/First.java", format!("{NOTICE}\nclass A {{}}\n").as_bytes());

        let outcome = scanner().scan(&[dir.path()]);

        assert_eq!(outcome.registry.len(), 1);
        assert_eq!(outcome.files_seen, 2);
        let mut files = filenames(&outcome).remove(0);
        files.sort();
        assert_eq!(files, vec!["First.java", "Second.java"]);
    }

    #[test]
    fn test_license_file_and_sibling() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "LICENSE", b"MIT License\nCopyright (c) 2020 X\n");
        write(dir.path(), "foo.txt", b"no notice here");

        let outcome = scanner().scan(&[dir.path()]);

        assert_eq!(filenames(&outcome), vec![vec![String::new()]]);
    }

    #[test]
    fn test_png_is_never_read() {
        let dir = TempDir::new().unwrap();
        // Not valid UTF-8; reading it as text would fail.
        write(dir.path(), "logo.png", &[0x89, b'P', b'N', b'G', 0xff, 0xfe]);

        let outcome = scanner().scan(&[dir.path()]);

        assert!(outcome.registry.is_empty());
        assert!(outcome.skipped.is_empty());
        assert_eq!(outcome.files_seen, 1);
    }

    #[test]
    fn test_decode_failure_skips_file_only() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "bad.c", &[b'/', b'*', 0xff, 0xfe, b'*', b'/']);
        write(dir.path(), "good.c", NOTICE.as_bytes());

        let outcome = scanner().scan(&[dir.path()]);

        assert_eq!(outcome.skipped.len(), 1);
        assert!(matches!(outcome.skipped[0], ScanError::Decode { .. }));
        assert_eq!(filenames(&outcome), vec![vec!["good.c".to_string()]]);
    }

    #[test]
    fn test_missing_root_does_not_stop_other_roots() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "x.c", NOTICE.as_bytes());
        let missing = dir.path().join("does-not-exist");

        let roots: Vec<PathBuf> = vec![missing, dir.path().to_path_buf()];
        let outcome = scanner().scan(&roots);

        assert_eq!(outcome.failed_roots.len(), 1);
        assert!(matches!(
            outcome.failed_roots[0],
            ScanError::RootUnreadable { .. }
        ));
        assert_eq!(outcome.registry.len(), 1);
    }

    #[test]
    fn test_file_root_is_rejected() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "x.c", NOTICE.as_bytes());

        let outcome = scanner().scan(&[dir.path().join("x.c")]);

        assert!(matches!(outcome.failed_roots[0], ScanError::NotADirectory(_)));
        assert!(outcome.registry.is_empty());
    }

    #[test]
    fn test_no_roots_is_empty() {
        let roots: Vec<PathBuf> = Vec::new();
        let outcome = scanner().scan(&roots);
        assert!(outcome.registry.is_empty());
        assert!(outcome.failed_roots.is_empty());
    }

    #[test]
    fn test_qualified_paths() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "third_party/lib/LICENSE", b"Copyright X. License Y.");
        write(dir.path(), "third_party/lib/foo.LICENSE", b"Copyright Z. License W.");
        write(dir.path(), "src/A.java", NOTICE.as_bytes());
        write(dir.path(), "LICENSE", b"Copyright R. License S.");

        let scanner = Scanner::new(ScanOptions {
            qualify_paths: true,
            ..ScanOptions::default()
        })
        .unwrap();
        let outcome = scanner.scan(&[dir.path()]);

        let mut all: Vec<String> = filenames(&outcome).into_iter().flatten().collect();
        all.sort();
        assert_eq!(all, vec!["", "src/A.java", "third_party/lib/", "third_party/lib/foo"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_is_skipped() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "a.c", NOTICE.as_bytes());
        std::os::unix::fs::symlink(dir.path().join("gone"), dir.path().join("link.c")).unwrap();

        let scanner = Scanner::new(ScanOptions {
            follow_links: true,
            ..ScanOptions::default()
        })
        .unwrap();
        let outcome = scanner.scan(&[dir.path()]);

        assert_eq!(outcome.skipped.len(), 1);
        assert!(matches!(outcome.skipped[0], ScanError::Walk { .. }));
        assert!(outcome.failed_roots.is_empty());
        assert_eq!(filenames(&outcome), vec![vec!["a.c".to_string()]]);
    }

    #[test]
    fn test_unreadable_file_is_a_read_error() {
        let dir = TempDir::new().unwrap();
        // A directory where a file was expected cannot be read as one.
        let path = dir.path().join("vanished.c");
        fs::create_dir(&path).unwrap();

        let mut registry = LicenseRegistry::new();
        let err = scanner()
            .scan_file(dir.path(), &path, &mut registry)
            .unwrap_err();

        assert!(matches!(err, ScanError::FileRead { .. }));
        assert!(registry.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_permission_denied_file_is_skipped() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        write(dir.path(), "good.c", NOTICE.as_bytes());
        write(dir.path(), "locked.c", NOTICE.as_bytes());
        let locked = dir.path().join("locked.c");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
        if fs::read(&locked).is_ok() {
            // Running as root: permissions are not enforced.
            return;
        }

        let outcome = scanner().scan(&[dir.path()]);

        assert_eq!(outcome.skipped.len(), 1);
        assert!(matches!(outcome.skipped[0], ScanError::FileRead { .. }));
        assert!(outcome.failed_roots.is_empty());
        assert_eq!(filenames(&outcome), vec![vec!["good.c".to_string()]]);
    }

    #[test]
    fn test_progress_counts_files_and_skips_still_recorded() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "good.c", NOTICE.as_bytes());
        write(dir.path(), "bad.c", &[0xff, 0xfe]);
        write(dir.path(), "logo.png", &[0x89]);

        let progress = ProgressBar::hidden();
        let outcome = scanner()
            .with_progress(progress.clone())
            .scan(&[dir.path()]);

        assert_eq!(progress.position(), 3);
        assert_eq!(outcome.files_seen, 3);
        assert_eq!(outcome.skipped.len(), 1);
        assert_eq!(outcome.registry.len(), 1);
    }

    #[test]
    fn test_relative_dir() {
        let root = Path::new("/r");
        assert_eq!(relative_dir(root, Path::new("/r/a.c")), "");
        assert_eq!(relative_dir(root, Path::new("/r/x/y/a.c")), "x/y/");
    }
}
