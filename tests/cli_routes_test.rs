//! Integration tests for `folio routes`.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_routes_manifest_json() {
    let env = TestEnv::with_sample_projects();

    let output = env.folio().arg("routes").output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["base_path"], "/work");
    assert_eq!(value["count"], 3);

    let routes = value["routes"].as_array().unwrap();
    let june = routes.iter().find(|r| r["slug"] == "june").unwrap();
    assert_eq!(june["detail_url"], "/work/june");
    assert_eq!(june["source"], "june.md");
}

#[test]
fn test_routes_respect_config_base_path() {
    let env = TestEnv::with_sample_projects();
    env.write_config("base-path = \"/portfolio\"\n");

    env.folio()
        .arg("routes")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"base_path\":\"/portfolio\""))
        .stdout(predicate::str::contains("/portfolio/june"));
}

#[test]
fn test_routes_human_readable() {
    let env = TestEnv::with_sample_projects();

    env.folio()
        .args(["-H", "routes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 route(s) under /work"))
        .stdout(predicate::str::contains("june -> /work/june"));
}

#[test]
fn test_routes_empty_catalog() {
    let env = TestEnv::new();

    env.folio()
        .arg("routes")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"count\":0"));
}
