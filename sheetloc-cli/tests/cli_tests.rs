//! Smoke tests driving the `sheetloc` binary end to end.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

fn write_fixture(dir: &Path) -> std::path::PathBuf {
    let source = dir.join("source");
    fs::create_dir_all(&source).unwrap();
    fs::write(
        source.join("common.csv"),
        "key,en_GB,es_ES\nhomepage.title,Hello,Hola\n",
    )
    .unwrap();

    let config = dir.join("sheetloc.yaml");
    fs::write(
        &config,
        format!(
            concat!(
                "books:\n",
                "  frontend:\n",
                "    provider:\n",
                "      name: local_file\n",
                "      source_resource: \"{}\"\n",
                "    exporter:\n",
                "      format: yml\n",
                "      prefix: demo_\n",
                "      destination_folder: \"%project_dir%/translations\"\n",
                "    shared:\n",
                "      default_locale: en\n",
                "      name_separator: \".\"\n",
            ),
            source.display()
        ),
    )
    .unwrap();
    config
}

#[test]
fn export_writes_files_and_reports_them() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_fixture(dir.path());

    Command::cargo_bin("sheetloc")
        .unwrap()
        .args(["export", "--config"])
        .arg(&config)
        .arg("--project-dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("demo_common.en_GB.yml")
                .and(predicate::str::contains("demo_common.es_ES.yml")),
        );

    let rendered =
        fs::read_to_string(dir.path().join("translations/demo_common.es_ES.yml")).unwrap();
    assert_eq!(rendered, "homepage:\n  title: Hola\n");
}

#[test]
fn export_single_sheet_by_name() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_fixture(dir.path());

    Command::cargo_bin("sheetloc")
        .unwrap()
        .args(["export", "--sheet", "common", "--config"])
        .arg(&config)
        .arg("--project-dir")
        .arg(dir.path())
        .assert()
        .success();

    assert!(dir.path().join("translations/demo_common.en_GB.yml").is_file());
}

#[test]
fn empty_sheet_name_is_an_input_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_fixture(dir.path());

    Command::cargo_bin("sheetloc")
        .unwrap()
        .args(["export", "--sheet", "", "--config"])
        .arg(&config)
        .assert()
        .failure();
}

#[test]
fn unknown_book_fails_with_a_diagnostic() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_fixture(dir.path());

    Command::cargo_bin("sheetloc")
        .unwrap()
        .args(["export", "--book", "mobile", "--config"])
        .arg(&config)
        .arg("--project-dir")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("mobile"));
}

#[test]
fn books_lists_configured_books() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_fixture(dir.path());

    Command::cargo_bin("sheetloc")
        .unwrap()
        .args(["books", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("frontend (default)"));
}
