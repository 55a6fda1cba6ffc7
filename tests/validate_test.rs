use assert_cmd::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn jsonval() -> assert_cmd::Command {
    cargo_bin_cmd!("jsonval")
}

#[test]
fn report_lines_appear_in_order() {
    let tmp = TempDir::new().unwrap();
    let doc = tmp.path().join("doc.json");
    fs::write(&doc, r#"{"name": "Alice", "age": 30}"#).unwrap();

    jsonval()
        .arg(doc.to_str().unwrap())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Validation results:\nValidation was true.\nNo schema errors.",
        ));
}

#[test]
fn violations_are_printed_with_instance_paths() {
    let tmp = TempDir::new().unwrap();
    let doc = tmp.path().join("doc.json");
    let schema = tmp.path().join("schema.json");
    fs::write(&doc, r#"{"name": "Alice", "age": "thirty"}"#).unwrap();
    fs::write(
        &schema,
        r#"{"type": "object", "properties": {"age": {"type": "integer"}}}"#,
    )
    .unwrap();

    jsonval()
        .args([doc.to_str().unwrap(), schema.to_str().unwrap()])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Validation was false."))
        .stdout(predicate::str::contains("/age"));
}

#[test]
fn array_root_passes_under_fallback_schema() {
    let tmp = TempDir::new().unwrap();
    let doc = tmp.path().join("doc.json");
    fs::write(&doc, "[1,2,3]").unwrap();

    jsonval()
        .arg(doc.to_str().unwrap())
        .assert()
        .success()
        .stdout(predicate::str::contains("Validation was true."));
}

#[test]
fn malformed_document_reports_failure_without_crashing() {
    let tmp = TempDir::new().unwrap();
    let doc = tmp.path().join("doc.json");
    fs::write(&doc, "{definitely not json").unwrap();

    jsonval()
        .arg(doc.to_str().unwrap())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Validation was false."))
        .stderr(predicate::str::contains("could not load document"));
}

#[test]
fn composition_keywords_are_supported() {
    let tmp = TempDir::new().unwrap();
    let doc = tmp.path().join("doc.json");
    let schema = tmp.path().join("schema.json");
    fs::write(&doc, r#"{"id": 7}"#).unwrap();
    fs::write(
        &schema,
        r#"{
            "anyOf": [
                {"type": "object", "required": ["id"], "properties": {"id": {"type": "integer", "minimum": 1}}},
                {"type": "string", "pattern": "^[a-z]+$"}
            ]
        }"#,
    )
    .unwrap();

    jsonval()
        .args([doc.to_str().unwrap(), schema.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Validation was true."));
}
