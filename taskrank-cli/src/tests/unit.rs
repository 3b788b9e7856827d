//! Focused unit tests for shared CLI plumbing.

use super::helpers::{Workspace, write_utf8};
use super::*;
use rstest::rstest;
use serde_json::json;

#[rstest]
fn today_parses_iso_dates() {
    let today = resolve_today(Some("2024-02-29")).expect("valid date");
    assert_eq!(today, NaiveDate::from_ymd_opt(2024, 2, 29).expect("valid date"));
}

#[rstest]
#[case("29/02/2024")]
#[case("2023-02-29")]
#[case("tomorrow")]
fn today_rejects_other_formats(#[case] text: &str) {
    let err = resolve_today(Some(text)).expect_err("invalid date");
    match err {
        CliError::InvalidToday { value, .. } => assert_eq!(value, text),
        other => panic!("expected InvalidToday, found {other:?}"),
    }
}

#[rstest]
fn require_existing_rejects_directories() {
    let workspace = Workspace::new();
    let err = require_existing(workspace.root(), ARG_REQUEST).expect_err("directory rejected");
    match err {
        CliError::SourcePathNotFile { field, .. } => assert_eq!(field, ARG_REQUEST),
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn require_existing_reports_missing_files() {
    let workspace = Workspace::new();
    let path = workspace.root().join("missing.json");
    let err = require_existing(&path, ARG_REQUEST).expect_err("missing file");
    match err {
        CliError::MissingSourceFile { field, path: reported } => {
            assert_eq!(field, ARG_REQUEST);
            assert_eq!(reported, path);
        }
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn emit_creates_output_parents() {
    let workspace = Workspace::new();
    let output = workspace.root().join("nested/deeper/out.json");
    let mut stdout = Vec::new();

    emit(&json!({"ok": true}), Some(&output), &mut stdout).expect("emit");

    assert!(stdout.is_empty());
    let written = std::fs::read(output.as_std_path()).expect("read output");
    assert_eq!(super::helpers::parse_output(&written), json!({"ok": true}));
}

#[rstest]
fn emit_overwrites_existing_output() {
    let workspace = Workspace::new();
    let output = workspace.root().join("out.json");
    write_utf8(&output, b"stale contents that are longer than the new payload");
    let mut stdout = Vec::new();

    emit(&json!([]), Some(&output), &mut stdout).expect("emit");

    let written = std::fs::read(output.as_std_path()).expect("read output");
    assert_eq!(super::helpers::parse_output(&written), json!([]));
}

#[rstest]
fn unknown_subcommand_fails_argument_parsing() {
    let mut stdout = Vec::new();
    let err = run_with(["taskrank", "prioritise"], &mut stdout).expect_err("unknown command");
    assert!(matches!(err, CliError::ArgumentParsing(_)));
}

#[rstest]
fn non_numeric_limit_fails_argument_parsing() {
    let mut stdout = Vec::new();
    let err = run_with(["taskrank", "suggest", "--limit", "many"], &mut stdout)
        .expect_err("invalid limit");
    assert!(matches!(err, CliError::ArgumentParsing(_)));
}
