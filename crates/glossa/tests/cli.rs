use assert_cmd::Command;
use predicates::prelude::*;

fn glossa() -> Command {
    Command::cargo_bin("glossa").unwrap()
}

#[test]
fn missing_archive_fails_before_any_work() {
    glossa()
        .arg("/no/such/archive.zip")
        .assert()
        .failure()
        .stderr(predicate::str::contains("file not found"));
}

#[test]
fn invalid_zip_reports_decode_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.zip");
    std::fs::write(&path, b"this is not a zip archive").unwrap();

    glossa()
        .arg(path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("corrupted"));
}

#[test]
fn archive_argument_is_required() {
    glossa()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_documents_the_container_mode() {
    glossa()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--docker"))
        .stdout(predicate::str::contains("--image"));
}
