use std::path::Path;

/// A single searchable entry.
///
/// `id` identifies the entry (a full path for workspace files) and `label` is
/// the short name shown to the user. Matching reads the characters of both
/// but never changes them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Candidate {
    id: String,
    label: String,
}

impl Candidate {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }

    /// Builds a candidate whose id is the whole path and whose label is the
    /// final path component.
    ///
    /// Returns `None` when the path has no file name (`/`, `..`).
    pub fn from_path(path: &Path) -> Option<Self> {
        let label = path.file_name()?.to_string_lossy().into_owned();
        Some(Self {
            id: path.to_string_lossy().into_owned(),
            label,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

#[cfg(test)]
mod tests;
