//! Integration tests for folio.toml handling.
//!
//! - config keys redirect the content directory and base path
//! - output preference precedence: -H flag > folio.toml > json default
//! - malformed config is a hard error (a silently ignored config would
//!   mispoint the whole catalog)

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_config_content_dir() {
    let env = TestEnv::new();
    std::fs::create_dir_all(env.path().join("writing")).unwrap();
    std::fs::write(
        env.path().join("writing/solo.md"),
        "---\ntitle: Solo\ndate: \"2024-01-01\"\nsummary: s\n---\nbody\n",
    )
    .unwrap();
    env.write_config("content-dir = \"writing\"\n");

    env.folio()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"slug\":\"solo\""));
}

#[test]
fn test_content_dir_flag_overrides_config() {
    let env = TestEnv::with_sample_projects();
    // Config points somewhere that doesn't exist; the flag wins.
    env.write_config("content-dir = \"no-such-dir\"\n");

    env.folio()
        .args(["list", "--content-dir", "content/projects"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"count\":3"));
}

#[test]
fn test_config_output_human() {
    let env = TestEnv::with_sample_projects();
    env.write_config("output = \"human\"\n");

    env.folio()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("3 project(s) (relevance)"));
}

#[test]
fn test_config_placeholder_cover() {
    let env = TestEnv::new();
    env.write_doc(
        "bare.md",
        "---\ntitle: Bare\ndate: \"2024-01-01\"\nsummary: s\n---\nbody\n",
    );
    env.write_config("placeholder-cover = \"/img/default.png\"\n");

    env.folio()
        .args(["show", "bare"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"cover\":\"/img/default.png\""));
}

#[test]
fn test_malformed_config_is_error() {
    let env = TestEnv::with_sample_projects();
    env.write_config("base-path = [oops\n");

    env.folio()
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration error"));
}

#[test]
fn test_invalid_base_path_is_error() {
    let env = TestEnv::with_sample_projects();
    env.write_config("base-path = \"work\"\n");

    env.folio()
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("base-path must start with '/'"));
}

#[test]
fn test_root_flag_runs_from_elsewhere() {
    let env = TestEnv::with_sample_projects();

    let mut cmd = assert_cmd::Command::new(env!("CARGO_BIN_EXE_folio"));
    cmd.args(["-C"])
        .arg(env.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"count\":3"));
}

#[test]
fn test_root_env_var() {
    let env = TestEnv::with_sample_projects();

    let mut cmd = assert_cmd::Command::new(env!("CARGO_BIN_EXE_folio"));
    cmd.env("FOLIO_ROOT", env.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"count\":3"));
}

#[test]
fn test_missing_root_is_error() {
    let mut cmd = assert_cmd::Command::new(env!("CARGO_BIN_EXE_folio"));
    cmd.args(["-C", "/no/such/site/root", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}
