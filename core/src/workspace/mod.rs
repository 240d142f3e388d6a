//! Workspace enumeration: turns a root directory into searchable candidates.
//!
//! An optional settings file in the root lists the sub-folders to scan, one
//! per line. Without it the whole root is scanned. Sub-folders that cannot be
//! found are reported but never stop the scan of the others.

use crate::types::{Candidate, WorkspaceSettings};
use ignore::WalkBuilder;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkspaceError {
    #[error("workspace root not found: {0}")]
    RootNotFound(PathBuf),

    #[error("subfolder not found: {0}")]
    SubfolderNotFound(PathBuf),

    #[error("failed to read settings file {path}: {source}")]
    Settings {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("walk error: {0}")]
    Walk(#[from] ignore::Error),
}

/// Result of a workspace scan.
///
/// `errors` holds the non-fatal failures encountered along the way; the
/// candidates that were found are valid regardless.
#[derive(Debug, Default)]
pub struct Scan {
    pub candidates: Vec<Candidate>,
    pub errors: Vec<WorkspaceError>,
}

pub struct Workspace {
    root: PathBuf,
    settings: WorkspaceSettings,
}

impl Workspace {
    pub fn new(root: impl AsRef<Path>, settings: &WorkspaceSettings) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            settings: settings.clone(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the sub-folder list, relative to the root.
    pub fn settings_path(&self) -> PathBuf {
        self.root.join(&self.settings.settings_file)
    }

    /// Reads the configured sub-folders.
    ///
    /// Returns `Ok(None)` when the settings file does not exist, meaning the
    /// entire root should be scanned.
    pub fn subfolders(&self) -> Result<Option<Vec<String>>, WorkspaceError> {
        let path = self.settings_path();
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(WorkspaceError::Settings { path, source }),
        };
        Ok(Some(parse_subfolders(&content)))
    }

    /// Enumerates every regular file below the configured sub-folders.
    pub fn scan(&self) -> Result<Scan, WorkspaceError> {
        if !self.root.is_dir() {
            return Err(WorkspaceError::RootNotFound(self.root.clone()));
        }

        let targets = match self.subfolders()? {
            Some(subfolders) => subfolders.iter().map(|s| self.root.join(s)).collect(),
            None => vec![self.root.clone()],
        };

        let mut scan = Scan::default();
        for target in targets {
            if !target.is_dir() {
                tracing::warn!(subfolder = %target.display(), "configured subfolder not found");
                scan.errors.push(WorkspaceError::SubfolderNotFound(target));
                continue;
            }

            let start = scan.candidates.len();
            self.walk(&target, &mut scan);
            scan.candidates[start..].sort_by(|a, b| a.id().cmp(b.id()));
        }

        tracing::info!(
            root = %self.root.display(),
            files = scan.candidates.len(),
            errors = scan.errors.len(),
            "workspace scanned"
        );
        Ok(scan)
    }

    fn walk(&self, dir: &Path, scan: &mut Scan) {
        let respect_ignore = self.settings.respect_gitignore;
        let mut builder = WalkBuilder::new(dir);
        builder
            .hidden(!self.settings.include_hidden)
            .ignore(respect_ignore)
            .parents(respect_ignore)
            .git_ignore(respect_ignore)
            .git_global(respect_ignore)
            .git_exclude(respect_ignore)
            .require_git(false);

        for result in builder.build() {
            match result {
                Ok(entry) => {
                    if !entry.file_type().is_some_and(|t| t.is_file()) {
                        continue;
                    }
                    match Candidate::from_path(entry.path()) {
                        Some(candidate) => scan.candidates.push(candidate),
                        None => {
                            tracing::debug!(path = %entry.path().display(), "skipping unnamed entry")
                        }
                    }
                }
                Err(err) => {
                    tracing::warn!("failed to read entry: {err}");
                    scan.errors.push(err.into());
                }
            }
        }
    }
}

/// Parses the newline-separated sub-folder list.
///
/// Blank lines and `#` comments are skipped; repeated entries keep their first
/// position.
pub fn parse_subfolders(content: &str) -> Vec<String> {
    let mut subfolders: Vec<String> = Vec::new();
    for line in content.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if !subfolders.iter().any(|s| s == line) {
            subfolders.push(line.to_string());
        }
    }
    subfolders
}
