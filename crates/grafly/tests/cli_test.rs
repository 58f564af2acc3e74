//! Integration tests for the `grafly` CLI binary.
//!
//! Argument parsing, help, completions and template conversion run without
//! a server; the session tests drive the binary against wiremock.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a command for the `grafly` binary with env isolation.
fn grafly_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("grafly");
    cmd.env("HOME", "/tmp/grafly-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/grafly-cli-test-nonexistent")
        .env_remove("GRAFLY_PROFILE")
        .env_remove("GRAFLY_URL")
        .env_remove("GRAFLY_USER")
        .env_remove("GRAFLY_PASSWORD")
        .env_remove("GRAFLY_OUTPUT")
        .env_remove("GRAFLY_INSECURE")
        .env_remove("GRAFLY_TIMEOUT")
        .env_remove("RUST_LOG");
    cmd
}

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"))
}

fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

/// Run the binary off the async runtime so the mock server keeps serving.
async fn run_against(server: &MockServer, args: &[&str]) -> std::process::Output {
    let mut cmd = grafly_cmd();
    cmd.args(["--url", &server.uri(), "--user", "admin", "--password", "admin"])
        .args(args);
    tokio::task::spawn_blocking(move || cmd.output().unwrap())
        .await
        .unwrap()
}

/// Write `config.toml` where `directories` looks for it under `XDG_CONFIG_HOME`.
fn write_config(xdg: &std::path::Path, contents: &str) {
    let dir = xdg.join("grafly");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), contents).unwrap();
}

async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "Logged in" })))
        .mount(server)
        .await;
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = grafly_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("Usage"));
}

#[test]
fn test_help_flag() {
    grafly_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("Grafana")
            .and(predicate::str::contains("datasources"))
            .and(predicate::str::contains("dashboards")),
    );
}

#[test]
fn test_version_flag() {
    grafly_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("grafly"));
}

#[test]
fn test_completions_zsh() {
    grafly_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

#[test]
fn test_config_path() {
    grafly_cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

// ── Template conversion (offline) ───────────────────────────────────

#[test]
fn test_convert_prints_expanded_dashboard() {
    let output = grafly_cmd()
        .args(["dashboards", "convert", &fixture("cpu.toml")])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", combined_output(&output));

    let dashboard: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let target = &dashboard["rows"][0]["panels"][0]["targets"][0];
    assert_eq!(target["measurement"], "cpu");
    assert_eq!(target["tags"][0]["value"], "/host1|host2/");
    assert_eq!(target["tags"][1]["value"], "/busy/");
    assert_eq!(dashboard["time"]["from"], "now-24h");
    assert!(dashboard["rows"][0]["panels"][0].get("metrics").is_none());
}

#[test]
fn test_convert_plain_prints_title() {
    grafly_cmd()
        .args(["-o", "plain", "dashboards", "convert", &fixture("cpu.toml")])
        .assert()
        .success()
        .stdout("cpu\n");
}

#[test]
fn test_convert_malformed_template() {
    let dir = tempfile::tempdir().unwrap();
    let bad = dir.path().join("bad.toml");
    std::fs::write(&bad, "[[row]\ntitle = {").unwrap();

    let output = grafly_cmd()
        .args(["dashboards", "convert", bad.to_str().unwrap()])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let text = combined_output(&output);
    assert!(text.contains("Unable to parse template"), "{text}");
    assert!(text.contains("TOML error"), "{text}");
}

// ── Server commands ─────────────────────────────────────────────────

#[test]
fn test_server_command_without_config() {
    let output = grafly_cmd().args(["datasources", "list"]).output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("No server configured"));
}

#[test]
fn test_connection_refused() {
    let output = grafly_cmd()
        .args([
            "--url",
            "http://127.0.0.1:9",
            "--user",
            "admin",
            "--password",
            "admin",
            "login",
        ])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(7), "{}", combined_output(&output));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_login_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "message": "Invalid username or password" })),
        )
        .mount(&server)
        .await;

    let output = run_against(&server, &["login"]).await;
    assert_eq!(output.status.code(), Some(3), "{}", combined_output(&output));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_datasources_list_plain() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/datasources"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "name": "influx", "type": "influxdb", "url": "http://localhost:8086" },
            { "id": 2, "name": "graphite", "type": "graphite", "url": "http://localhost:8080" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_against(&server, &["-o", "plain", "datasources", "list"]).await;
    assert!(output.status.success(), "{}", combined_output(&output));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "influx\ngraphite\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_datasource_get_missing() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/datasources"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let output = run_against(&server, &["datasources", "get", "nope"]).await;
    assert_eq!(output.status.code(), Some(4), "{}", combined_output(&output));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_dashboard_upload() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/dashboards/db"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "success" })))
        .expect(1)
        .mount(&server)
        .await;

    let template = fixture("cpu.toml");
    let output = run_against(&server, &["dashboards", "upload", &template, "--overwrite"]).await;
    assert!(output.status.success(), "{}", combined_output(&output));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Dashboard 'cpu' uploaded"));
}

// ── Config file resolution ──────────────────────────────────────────

#[test]
fn test_malformed_config_is_reported() {
    let xdg = tempfile::tempdir().unwrap();
    write_config(xdg.path(), "[profiles.lab\nurl =");

    let output = grafly_cmd()
        .env("XDG_CONFIG_HOME", xdg.path())
        .args(["datasources", "list"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let text = combined_output(&output);
    assert!(text.contains("Configuration error"), "{text}");
    assert!(!text.contains("No server configured"), "{text}");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_user_flag_with_profile_password() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_partial_json(json!({ "user": "admin", "password": "secret" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "Logged in" })))
        .expect(1)
        .mount(&server)
        .await;

    let xdg = tempfile::tempdir().unwrap();
    write_config(
        xdg.path(),
        &format!(
            "default_profile = \"lab\"\n\n[profiles.lab]\nurl = \"{}\"\npassword = \"secret\"\n",
            server.uri()
        ),
    );

    let mut cmd = grafly_cmd();
    cmd.env("XDG_CONFIG_HOME", xdg.path())
        .args(["--user", "admin", "login"]);
    let output = tokio::task::spawn_blocking(move || cmd.output().unwrap())
        .await
        .unwrap();
    assert!(output.status.success(), "{}", combined_output(&output));
}
