//! End-to-end pipeline tests: configuration file → local provider → exported
//! artifact files.

use std::fs;
use std::path::Path;

use indoc::{formatdoc, indoc};
use sheetloc::{Config, Error, Translator};

/// Seeds a two-sheet source directory and returns a translator whose single
/// book reads from it and writes into `out`.
fn translator_for(source: &Path, out: &Path, format: &str) -> Translator {
    fs::write(
        source.join("common.csv"),
        indoc! {"
            key,en_GB,es_ES
            homepage.title,Hello,Hola
            homepage.body.intro,Welcome,Bienvenido
            footer.note,Bye,
        "},
    )
    .unwrap();
    fs::write(
        source.join("checkout.csv"),
        indoc! {"
            key,en_GB,es_ES
            pay.now,Pay now,Pague ahora
        "},
    )
    .unwrap();

    let yaml = formatdoc! {r#"
        books:
          frontend:
            provider:
              name: local_file
              source_resource: "{source}"
            exporter:
              format: {format}
              prefix: demo_
              destination_folder: "%project_dir%/translations"
            shared:
              default_locale: en
              name_separator: "."
    "#,
        source = source.display(),
        format = format,
    };
    let mut config = Config::from_yaml_str(&yaml).unwrap();
    config.substitute_project_dir(out);
    Translator::new(config.books)
}

#[test]
fn book_run_writes_one_file_per_sheet_and_locale() {
    let source = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let translator = translator_for(source.path(), out.path(), "yml");

    let outcome = translator.process_book("").unwrap();
    assert_eq!(outcome.artifacts.len(), 4);
    assert!(outcome.issues.is_empty());
    assert!(outcome.failures.is_empty());

    let translations = out.path().join("translations");
    for name in [
        "demo_common.en_GB.yml",
        "demo_common.es_ES.yml",
        "demo_checkout.en_GB.yml",
        "demo_checkout.es_ES.yml",
    ] {
        assert!(translations.join(name).is_file(), "missing {name}");
    }
}

#[test]
fn exported_yaml_contains_the_nested_structure() {
    let source = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let translator = translator_for(source.path(), out.path(), "yml");
    translator.process_book("").unwrap();

    let rendered = fs::read_to_string(
        out.path().join("translations/demo_common.en_GB.yml"),
    )
    .unwrap();
    assert_eq!(
        rendered,
        indoc! {"
            homepage:
              title: Hello
              body:
                intro: Welcome
            footer:
              note: Bye
        "}
    );

    // the blank es_ES cell for footer.note leaves no entry behind
    let spanish: serde_yaml::Value = serde_yaml::from_str(
        &fs::read_to_string(out.path().join("translations/demo_common.es_ES.yml")).unwrap(),
    )
    .unwrap();
    assert_eq!(spanish["homepage"]["title"], "Hola");
    assert!(spanish.get("footer").is_none());
}

#[test]
fn repeated_runs_are_byte_identical() {
    let source = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let translator = translator_for(source.path(), out.path(), "yml");

    translator.process_book("").unwrap();
    let path = out.path().join("translations/demo_common.es_ES.yml");
    let first = fs::read(&path).unwrap();

    translator.process_book("").unwrap();
    let second = fs::read(&path).unwrap();
    assert_eq!(first, second);
}

#[test]
fn single_sheet_processing_leaves_other_sheets_alone() {
    let source = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let translator = translator_for(source.path(), out.path(), "yml");

    let outcome = translator.process_sheet("common", "frontend").unwrap();
    assert_eq!(outcome.artifacts.len(), 2);

    let translations = out.path().join("translations");
    assert!(translations.join("demo_common.en_GB.yml").is_file());
    assert!(!translations.join("demo_checkout.en_GB.yml").exists());
}

#[test]
fn unknown_book_name_is_a_configuration_error() {
    let source = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let translator = translator_for(source.path(), out.path(), "yml");

    let error = translator.process_book("mobile").unwrap_err();
    assert!(matches!(error, Error::Configuration(_)));
    assert!(error.to_string().contains("mobile"));
}

#[test]
fn unknown_sheet_name_fails_the_run() {
    let source = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let translator = translator_for(source.path(), out.path(), "yml");

    let error = translator.process_sheet("missing", "").unwrap_err();
    assert!(matches!(error, Error::SheetNotFound(_)));
}

#[test]
fn unrecognized_format_writes_no_files() {
    let source = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let translator = translator_for(source.path(), out.path(), "docx");

    let error = translator.process_book("").unwrap_err();
    assert!(matches!(error, Error::UnknownFormat(_)));
    assert!(!out.path().join("translations").exists());
}

#[test]
fn json_export_round_trips_structurally() {
    let source = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let translator = translator_for(source.path(), out.path(), "json");
    translator.process_book("").unwrap();

    let value: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(out.path().join("translations/demo_common.en_GB.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(value["homepage"]["body"]["intro"], "Welcome");
}

#[test]
fn xliff_export_carries_locale_metadata() {
    let source = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let translator = translator_for(source.path(), out.path(), "xliff");
    translator.process_book("").unwrap();

    let rendered = fs::read_to_string(
        out.path().join("translations/demo_common.es_ES.xlf"),
    )
    .unwrap();
    assert!(rendered.contains(r#"target-language="es-ES""#));
    assert!(rendered.contains(r#"resname="homepage.title""#));
    assert!(rendered.contains("<target>Hola</target>"));
}

#[test]
fn malformed_rows_are_reported_but_do_not_fail_the_sheet() {
    let source = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    fs::write(
        source.path().join("common.csv"),
        indoc! {"
            key,en
            homepage..title,Broken
            homepage.title,Hello
        "},
    )
    .unwrap();

    let yaml = formatdoc! {r#"
        books:
          frontend:
            provider:
              name: local_file
              source_resource: "{source}"
            exporter:
              format: yml
              prefix: ""
              destination_folder: "{out}"
            shared:
              default_locale: en
              name_separator: "."
    "#,
        source = source.path().join("common.csv").display(),
        out = out.path().display(),
    };
    let translator = Translator::new(Config::from_yaml_str(&yaml).unwrap().books);

    let outcome = translator.process_book("").unwrap();
    assert_eq!(outcome.issues.len(), 1);
    assert!(outcome.issues[0].to_string().contains("empty segment"));
    assert_eq!(outcome.artifacts.len(), 1);

    let rendered = fs::read_to_string(out.path().join("common.en.yml")).unwrap();
    assert_eq!(rendered, "homepage:\n  title: Hello\n");
}
