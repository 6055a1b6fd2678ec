//! End-to-end tests for the `campaign` binary

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SPEC_YAML: &str = r#"
name: update-deps
description: Bump dependencies everywhere
steps:
  - run: ./update.sh
    container: alpine:3
    env:
      - CAMPAIGN_TEST_TOKEN
      - MODE: fast
changesetTemplate:
  title: Update dependencies
  branch:
    default: campaign/deps
    except:
      - github.com/sourcegraph/*: sg/deps
  published:
    - "*": false
    - github.com/sourcegraph/*: true
  draft:
    only:
      - github.com/sourcegraph/sourcegraph
"#;

fn write_spec(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn campaign() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("campaign"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help() {
    campaign()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("resolve"))
        .stdout(predicate::str::contains("normalize"));
}

#[test]
fn test_check_valid_spec() {
    let dir = TempDir::new().unwrap();
    let path = write_spec(&dir, "spec.yaml", SPEC_YAML);

    campaign()
        .arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("ok"));
}

#[test]
fn test_check_reports_schema_violation() {
    let dir = TempDir::new().unwrap();
    let path = write_spec(&dir, "spec.yaml", "description: missing a name\n");

    campaign()
        .arg("check")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"))
        .stderr(predicate::str::contains("name"));
}

#[test]
fn test_check_reports_invalid_pattern() {
    let dir = TempDir::new().unwrap();
    let spec = r#"
name: bad-pattern
changesetTemplate:
  title: t
  branch: b
  published:
    - "github.com/[": true
"#;
    let path = write_spec(&dir, "spec.yml", spec);

    campaign()
        .arg("check")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("github.com/["));
}

#[test]
fn test_check_unsupported_extension() {
    let dir = TempDir::new().unwrap();
    let path = write_spec(&dir, "spec.txt", SPEC_YAML);

    campaign()
        .arg("check")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported campaign spec format"));
}

#[test]
fn test_check_missing_file() {
    let dir = TempDir::new().unwrap();

    campaign()
        .arg("check")
        .arg(dir.path().join("missing.yaml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"));
}

#[test]
fn test_check_toml_spec() {
    let dir = TempDir::new().unwrap();
    let spec = r#"
name = "toml-campaign"

[changesetTemplate]
title = "t"
branch = "b"
published = true
"#;
    let path = write_spec(&dir, "spec.toml", spec);

    campaign().arg("check").arg(&path).assert().success();
}

#[test]
fn test_resolve_json() {
    let dir = TempDir::new().unwrap();
    let path = write_spec(&dir, "spec.yaml", SPEC_YAML);

    let output = campaign()
        .arg("resolve")
        .arg(&path)
        .args(["-r", "github.com/sourcegraph/sourcegraph"])
        .args(["-r", "github.com/other/repo"])
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let resolved: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(resolved[0]["branch"], "sg/deps");
    assert_eq!(resolved[0]["published"], true);
    assert_eq!(resolved[0]["draft"], true);
    assert_eq!(resolved[1]["branch"], "campaign/deps");
    assert_eq!(resolved[1]["published"], false);
    assert_eq!(resolved[1]["draft"], false);
}

#[test]
fn test_resolve_text() {
    let dir = TempDir::new().unwrap();
    let path = write_spec(&dir, "spec.yaml", SPEC_YAML);

    campaign()
        .arg("resolve")
        .arg(&path)
        .args(["--repo", "github.com/sourcegraph/src-cli"])
        .assert()
        .success()
        .stdout(predicate::str::contains("github.com/sourcegraph/src-cli"))
        .stdout(predicate::str::contains("sg/deps"));
}

#[test]
fn test_resolve_without_template() {
    let dir = TempDir::new().unwrap();
    let path = write_spec(&dir, "spec.json", r#"{"name": "no-template"}"#);

    campaign()
        .arg("resolve")
        .arg(&path)
        .args(["-r", "a"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no changesetTemplate"));
}

#[test]
fn test_env_resolves_outer_variables() {
    let dir = TempDir::new().unwrap();
    let path = write_spec(&dir, "spec.yaml", SPEC_YAML);

    let output = campaign()
        .arg("env")
        .arg(&path)
        .arg("--json")
        .env("CAMPAIGN_TEST_TOKEN", "secret")
        .output()
        .unwrap();
    assert!(output.status.success());

    let steps: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(steps[0]["env"]["CAMPAIGN_TEST_TOKEN"], "secret");
    assert_eq!(steps[0]["env"]["MODE"], "fast");
}

#[test]
fn test_env_missing_outer_variable_is_empty() {
    let dir = TempDir::new().unwrap();
    let path = write_spec(&dir, "spec.yaml", SPEC_YAML);

    let output = campaign()
        .arg("env")
        .arg(&path)
        .arg("--json")
        .env_remove("CAMPAIGN_TEST_TOKEN")
        .output()
        .unwrap();
    assert!(output.status.success());

    let steps: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(steps[0]["env"]["CAMPAIGN_TEST_TOKEN"], "");
}

#[test]
fn test_normalize_collapses_wildcard_rule() {
    let dir = TempDir::new().unwrap();
    let spec = r#"
name: collapse
changesetTemplate:
  title: t
  branch:
    default: main
  published:
    - "*": true
  draft: false
"#;
    let path = write_spec(&dir, "spec.yaml", spec);

    let output = campaign().arg("normalize").arg(&path).output().unwrap();
    assert!(output.status.success());

    let normalized: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        normalized,
        serde_json::json!({
            "name": "collapse",
            "changesetTemplate": {
                "title": "t",
                "branch": "main",
                "published": true,
                "draft": false
            }
        })
    );
}

#[test]
fn test_normalize_yaml_output() {
    let dir = TempDir::new().unwrap();
    let path = write_spec(&dir, "spec.yaml", SPEC_YAML);

    campaign()
        .arg("normalize")
        .arg(&path)
        .args(["--format", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("name: update-deps"))
        .stdout(predicate::str::contains("sg/deps"));
}
