//! Command-line tests for `locus-server inspect`.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data")
}

fn locus_server() -> Command {
    Command::cargo_bin("locus-server").unwrap()
}

#[test]
fn test_inspect_text_summary() {
    locus_server()
        .arg("inspect")
        .arg("--data-dir")
        .arg(data_dir())
        .arg("--variants")
        .arg(data_dir().join("test.vcf"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Genes:          4"))
        .stdout(predicate::str::contains("LD pairs:       4 (1 undecodable entries dropped)"))
        .stdout(predicate::str::contains("Recomb rows:    6"))
        .stdout(predicate::str::contains("HG00098.vcf.gz (missing)"));
}

#[test]
fn test_inspect_verbose_lists_chromosomes() {
    locus_server()
        .args(["inspect", "--verbose", "--data-dir"])
        .arg(data_dir())
        .assert()
        .success()
        .stdout(predicate::str::contains("Genes per chromosome:"))
        .stdout(predicate::str::contains("  17       1"));
}

#[test]
fn test_inspect_json_summary() {
    let output = locus_server()
        .args(["--format", "json", "inspect", "--data-dir"])
        .arg(data_dir())
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["summary"]["genes"], 4);
    assert_eq!(value["summary"]["ld_dropped"], 1);
    assert_eq!(value["gene_chromosomes"]["16"], 3);
    assert_eq!(value["recomb_chromosomes"]["17"], 1);
}

#[test]
fn test_inspect_fails_on_missing_dataset() {
    let dir = tempfile::tempdir().unwrap();
    locus_server()
        .arg("inspect")
        .arg("--data-dir")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("genes.json"));
}

#[test]
fn test_inspect_fails_on_misaligned_recomb_columns() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("recomb.json"),
        r#"{"data": {"chromosome": ["16"], "id": [], "pos_cm": [], "position": [], "recomb_rate": []}, "meta": {}}"#,
    )
    .unwrap();

    locus_server()
        .arg("inspect")
        .arg("--data-dir")
        .arg(data_dir())
        .arg("--recomb")
        .arg(dir.path().join("recomb.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("differ in length"));
}
