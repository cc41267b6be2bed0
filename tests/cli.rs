//! Integration tests driving the relkit binary end to end.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn relkit() -> Command {
    Command::cargo_bin("relkit").unwrap()
}

#[test]
fn size_formats_kilo_boundary() {
    relkit()
        .args(["size", "1024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1.0 Ko"));
}

#[test]
fn size_zero_is_singular() {
    relkit()
        .args(["size", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 octet"));
}

#[test]
fn size_rejects_counts_past_peta() {
    let max = u64::MAX.to_string();
    relkit()
        .args(["size", max.as_str()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("supported unit range"));
}

#[test]
fn tag_prints_parsed_version() {
    relkit()
        .args(["tag", "1.2.3-rc1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1.2.3-rc1"));
}

#[test]
fn tag_rejects_malformed() {
    relkit()
        .args(["tag", "nightly"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nightly"));
}

#[test]
fn replace_edits_file_in_place() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("metadata.txt");
    fs::write(&file, "version=0.0.0\nname=demo\n").unwrap();

    relkit()
        .args([
            "replace",
            file.to_str().unwrap(),
            "^version=.*$",
            "version=1.2.3",
        ])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&file).unwrap(),
        "version=1.2.3\nname=demo\n"
    );
}

#[test]
fn replace_missing_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.txt");

    relkit()
        .args(["replace", missing.to_str().unwrap(), "a", "b"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn render_applies_substitutions_in_order() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("template.txt");
    let dest = temp_dir.path().join("out.txt");
    fs::write(&source, "a").unwrap();

    relkit()
        .args([
            "render",
            source.to_str().unwrap(),
            dest.to_str().unwrap(),
            "--set",
            "a=b",
            "--set",
            "b=c",
        ])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&dest).unwrap(), "c");
}

#[test]
fn touch_creates_parent_chain() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("a/b/c/file.txt");

    relkit()
        .args(["touch", path.to_str().unwrap()])
        .assert()
        .success();

    assert!(path.exists());
    assert_eq!(fs::metadata(&path).unwrap().len(), 0);

    relkit()
        .args(["touch", path.to_str().unwrap()])
        .assert()
        .success();

    assert_eq!(fs::metadata(&path).unwrap().len(), 0);
}
