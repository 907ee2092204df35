//! End-to-end CLI tests for the quick-launch binary.

use assert_cmd::Command;
use predicates::prelude::*;

/// Test that invoking with no URL fails with a usage error.
#[test]
fn test_binary_missing_url_returns_error() {
    let mut cmd = Command::cargo_bin("quick-launch").unwrap();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

/// Test that --help displays usage information and exits with code 0.
#[test]
fn test_binary_help_displays_usage() {
    let mut cmd = Command::cargo_bin("quick-launch").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("quick-launch browser extension"));
}

/// Test that --version displays version and exits with code 0.
#[test]
fn test_binary_version_displays_version() {
    let mut cmd = Command::cargo_bin("quick-launch").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("quick-launch"));
}

/// Test that a non-absolute URL fails up front, before any network work.
#[test]
fn test_binary_invalid_url_returns_error() {
    let mut cmd = Command::cargo_bin("quick-launch").unwrap();
    cmd.arg("not-a-url")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid URL"));
}

/// Test that invalid flags cause non-zero exit.
#[test]
fn test_binary_invalid_flag_returns_error() {
    let mut cmd = Command::cargo_bin("quick-launch").unwrap();
    cmd.arg("https://example.com")
        .arg("--invalid-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

/// Full offline run: page resolution and favicon fetches against a local
/// mock server, output under a temp root. Success prints exactly one
/// stdout line naming the output path.
#[tokio::test(flavor = "multi_thread")]
async fn test_binary_generates_package_offline() {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/launch"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/favicons"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"\x89PNGfake".as_slice()))
        .mount(&server)
        .await;

    let out = tempfile::tempdir().unwrap();
    let templates = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("templates");
    let url = format!("{}/launch", server.uri());
    let favicon_endpoint = format!("{}/favicons", server.uri());
    let output_root = out.path().to_path_buf();

    // The binary blocks; run it off the runtime worker threads.
    let assert = tokio::task::spawn_blocking(move || {
        let mut cmd = Command::cargo_bin("quick-launch").unwrap();
        cmd.arg(&url)
            .arg("beta")
            .arg("--templates")
            .arg(&templates)
            .arg("--output-root")
            .arg(&output_root)
            .arg("--favicon-endpoint")
            .arg(&favicon_endpoint)
            .arg("--quiet")
            .assert()
    })
    .await
    .unwrap();

    let expected_dir = out.path().join("quick-launch-127.0.0.1-beta");
    assert
        .success()
        .stdout(predicate::str::contains("quick-launch-127.0.0.1-beta"));

    assert!(expected_dir.join("manifest.json").is_file());
    assert!(expected_dir.join("background.js").is_file());
    assert!(expected_dir.join("options.html").is_file());
    assert!(expected_dir.join("options.js").is_file());
    assert!(expected_dir.join("icon64.png").is_file());
}

/// A failed icon fetch is fatal: non-zero exit and no success line.
#[tokio::test(flavor = "multi_thread")]
async fn test_binary_icon_failure_exits_nonzero_without_success_line() {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/launch"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/favicons"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let out = tempfile::tempdir().unwrap();
    let templates = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("templates");
    let url = format!("{}/launch", server.uri());
    let favicon_endpoint = format!("{}/favicons", server.uri());
    let output_root = out.path().to_path_buf();

    let assert = tokio::task::spawn_blocking(move || {
        let mut cmd = Command::cargo_bin("quick-launch").unwrap();
        cmd.arg(&url)
            .arg("--templates")
            .arg(&templates)
            .arg("--output-root")
            .arg(&output_root)
            .arg("--favicon-endpoint")
            .arg(&favicon_endpoint)
            .arg("--quiet")
            .assert()
    })
    .await
    .unwrap();

    assert
        .failure()
        .stdout(predicate::str::contains("Generated extension").not())
        .stderr(predicate::str::contains("404"));
}
