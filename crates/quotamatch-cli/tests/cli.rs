//! Integration tests for the quotamatch binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn write_roster(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("roster.json");
    std::fs::write(
        &path,
        r#"[{"id": 1, "nome": "Mario", "cognome": "Rossi", "matricola": "M001"}]"#,
    )
    .unwrap();
    path
}

#[test]
fn help_lists_reconcile() {
    Command::cargo_bin("quotamatch")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("reconcile"));
}

#[test]
fn missing_statement_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let roster = write_roster(&dir);

    Command::cargo_bin("quotamatch")
        .unwrap()
        .args(["reconcile", "does-not-exist.pdf", "--roster"])
        .arg(&roster)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn unreadable_statement_fails_with_pdf_error() {
    let dir = tempfile::tempdir().unwrap();
    let roster = write_roster(&dir);
    let statement = dir.path().join("statement.pdf");
    std::fs::write(&statement, b"this is not a pdf").unwrap();

    Command::cargo_bin("quotamatch")
        .unwrap()
        .arg("reconcile")
        .arg(&statement)
        .arg("--roster")
        .arg(&roster)
        .assert()
        .failure()
        .stderr(predicate::str::contains("PDF"));
}

#[test]
fn malformed_roster_fails() {
    let dir = tempfile::tempdir().unwrap();
    let roster = dir.path().join("roster.json");
    std::fs::write(&roster, "{not json").unwrap();
    let statement = dir.path().join("statement.pdf");
    std::fs::write(&statement, b"irrelevant").unwrap();

    Command::cargo_bin("quotamatch")
        .unwrap()
        .arg("reconcile")
        .arg(&statement)
        .arg("--roster")
        .arg(&roster)
        .assert()
        .failure()
        .stderr(predicate::str::contains("roster"));
}
