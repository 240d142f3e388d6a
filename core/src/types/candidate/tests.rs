use super::*;
use std::path::PathBuf;

#[test]
fn candidate_from_path_uses_file_name_as_label() {
    let path: PathBuf = ["src", "engine", "alignment.rs"].iter().collect();
    let candidate = Candidate::from_path(&path).unwrap();

    assert_eq!(candidate.label(), "alignment.rs");
    assert_eq!(candidate.id(), path.to_string_lossy());
}

#[test]
fn candidate_from_path_rejects_paths_without_file_name() {
    assert!(Candidate::from_path(Path::new("/")).is_none());
    assert!(Candidate::from_path(Path::new("..")).is_none());
}

#[test]
fn candidate_new_keeps_strings_verbatim() {
    let candidate = Candidate::new("  Some/Path.TXT ", "Path.TXT");

    assert_eq!(candidate.id(), "  Some/Path.TXT ");
    assert_eq!(candidate.label(), "Path.TXT");
}
