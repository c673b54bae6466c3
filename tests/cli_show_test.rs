//! Integration tests for `folio show`.
//!
//! - lookup by slug and by canonical detail path
//! - found: false for a missing slug (exit 0 - not-found is a state, not
//!   a failure)
//! - derived fields and body variants in the JSON payload

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_show_by_slug() {
    let env = TestEnv::with_sample_projects();

    let output = env.folio().args(["show", "june"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["found"], true);
    let project = &value["project"];
    assert_eq!(project["title"], "June Project");
    assert_eq!(project["year"], 2024);
    assert_eq!(project["month_label"], "June 2024");
    assert_eq!(project["detail_url"], "/work/june");
    assert_eq!(project["highlight"], true);
    assert_eq!(project["body"]["kind"], "markdown");
    assert_eq!(project["body"]["text"], "June body.");
}

#[test]
fn test_show_by_detail_path_round_trips() {
    let env = TestEnv::with_sample_projects();

    let output = env.folio().args(["show", "/work/march"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["slug"], "march");
    assert_eq!(value["project"]["detail_url"], "/work/march");
}

#[test]
fn test_show_missing_slug_is_not_found_not_error() {
    let env = TestEnv::with_sample_projects();

    env.folio()
        .args(["show", "nonexistent-id"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"found\":false"));
}

#[test]
fn test_show_missing_slug_human() {
    let env = TestEnv::with_sample_projects();

    env.folio()
        .args(["-H", "show", "nonexistent-id"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No project with slug 'nonexistent-id'",
        ));
}

#[test]
fn test_show_human_readable() {
    let env = TestEnv::with_sample_projects();

    env.folio()
        .args(["-H", "show", "june"])
        .assert()
        .success()
        .stdout(predicate::str::contains("June Project (june)"))
        .stdout(predicate::str::contains("url:   /work/june"))
        .stdout(predicate::str::contains("The newest one."));
}

#[test]
fn test_show_bodyless_document_gets_plain_text_fallback() {
    let env = TestEnv::new();
    env.write_doc(
        "quiet.md",
        "---\ntitle: Quiet\ndate: \"2024-01-01\"\nsummary: Only a summary.\n---\n",
    );

    let output = env.folio().args(["show", "quiet"]).output().unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["project"]["body"]["kind"], "plain_text");
    assert_eq!(value["project"]["body"]["text"], "Only a summary.");
}

#[test]
fn test_show_record_with_links_and_roles() {
    let env = TestEnv::new();
    env.write_doc(
        "full.md",
        "---\n\
         title: Full\n\
         date: \"2024-01-01\"\n\
         summary: s\n\
         role: [Design, Engineering]\n\
         links:\n  - label: Live site\n    href: https://example.com\n\
         ---\nbody\n",
    );

    let output = env.folio().args(["show", "full"]).output().unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["project"]["roles"][1], "Engineering");
    assert_eq!(value["project"]["links"][0]["label"], "Live site");
    assert_eq!(value["project"]["links"][0]["href"], "https://example.com");
}
