use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn touch(root: &Path, relative: &str) {
    let path = root.join(relative);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, b"").unwrap();
}

fn workspace(files: &[&str]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for file in files {
        touch(dir.path(), file);
    }
    dir
}

fn quickopen(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("quickopen").unwrap();
    cmd.arg("--root").arg(root).env_remove("RUST_LOG");
    cmd
}

#[test]
fn ranks_matching_files_best_first() {
    let dir = workspace(&["src/foo.txt", "src/afoobar", "src/zz"]);

    let output = quickopen(dir.path()).arg("foo").assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    // Label matches always outrank a match against a long temp-dir path.
    assert!(lines.len() >= 2);
    assert!(lines[0].starts_with("6\t") && lines[0].ends_with("foo.txt"));
    assert!(lines[1].starts_with("3\t") && lines[1].ends_with("afoobar"));
}

#[test]
fn limit_caps_output() {
    let dir = workspace(&["a1.rs", "a2.rs", "a3.rs"]);

    quickopen(dir.path())
        .args(["--limit", "2", "a"])
        .assert()
        .success()
        .stdout(predicate::function(|out: &str| out.lines().count() == 2));
}

#[test]
fn json_output_has_one_object_per_line() {
    let dir = workspace(&["readme.md"]);

    quickopen(dir.path())
        .args(["--json", "rdm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"label\":\"readme.md\""))
        .stdout(predicate::str::contains("\"score\":"));
}

#[test]
fn missing_subfolder_does_not_stop_search() {
    let dir = workspace(&["src/main.rs"]);
    std::fs::write(dir.path().join(".quickopen"), "missing\nsrc\n").unwrap();

    quickopen(dir.path())
        .arg("main")
        .assert()
        .success()
        .stdout(predicate::str::contains("main.rs"))
        .stderr(predicate::str::contains("subfolder not found"));
}

#[test]
fn config_limits_are_applied() {
    let dir = workspace(&["b1.rs", "b2.rs", "b3.rs"]);
    std::fs::write(dir.path().join("quickopen.toml"), "[search]\nresult_limit = 1\n").unwrap();

    quickopen(dir.path())
        .arg("b")
        .assert()
        .success()
        .stdout(predicate::function(|out: &str| out.lines().count() == 1));
}

#[test]
fn interactive_mode_answers_each_line() {
    let dir = workspace(&["alpha.rs", "beta.rs"]);

    let output = quickopen(dir.path())
        .write_stdin("alp\nbet\n")
        .assert()
        .success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let blocks: Vec<&str> = stdout.split("\n\n").filter(|b| !b.is_empty()).collect();

    assert_eq!(blocks.len(), 2);
    assert!(blocks[0].lines().next().unwrap().ends_with("alpha.rs"));
    assert!(blocks[1].lines().next().unwrap().ends_with("beta.rs"));
}

#[test]
fn missing_root_fails() {
    let dir = TempDir::new().unwrap();

    quickopen(&dir.path().join("nope"))
        .arg("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to scan workspace"));
}
