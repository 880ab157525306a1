//! CLI tests.
//!
//! These tests run the `elasticloud` binary in an isolated directory and
//! check its output, exit status, and config/env precedence.

use predicates::prelude::*;

mod support;
use support::*;

// ============================================================================
// decode
// ============================================================================

#[test]
fn test_decode_prints_endpoints() {
    let t = Test::new();

    let output = t.decode(DEMO_CLOUD_ID);
    assert_success(&output);
    assert_stdout_contains(&output, DEMO_PRIMARY);
    assert_stdout_contains(&output, DEMO_SECONDARY);
}

#[test]
fn test_decode_json() {
    let t = Test::new();

    let output = t.decode_json(CASCADE_PAYLOAD);
    assert_success(&output);
    let value = stdout_json(&output);
    assert_eq!(value["primary"], "https://svcA.domain:9200");
    assert_eq!(value["secondary"], "https://svcB.domain:9201");
    assert_eq!(value["endpoints"]["secondary"]["port"], "9201");
}

#[test]
fn test_decode_from_env() {
    let t = Test::new();

    t.cmd()
        .arg("decode")
        .env("ELASTICLOUD_CLOUD_ID", DEMO_CLOUD_ID)
        .assert()
        .success()
        .stdout(predicate::str::contains(DEMO_PRIMARY));
}

#[test]
fn test_decode_from_config() {
    let t = Test::with_config(FULL_CONFIG);

    t.cmd()
        .arg("decode")
        .assert()
        .success()
        .stdout(predicate::str::contains(DEMO_SECONDARY));
}

#[test]
fn test_decode_argument_beats_env_and_config() {
    let t = Test::with_config(FULL_CONFIG);

    t.cmd()
        .args(["decode", CASCADE_PAYLOAD])
        .env("ELASTICLOUD_CLOUD_ID", TWO_FIELD_PAYLOAD)
        .assert()
        .success()
        .stdout(predicate::str::contains("https://svcA.domain:9200"));
}

#[test]
fn test_decode_explicit_config_path() {
    let t = Test::new();
    let path = t.write_config("custom.toml", FULL_CONFIG);

    t.cmd()
        .args(["--config", path.to_str().unwrap(), "decode"])
        .assert()
        .success()
        .stdout(predicate::str::contains(DEMO_PRIMARY));
}

#[test]
fn test_decode_missing_config_path_fails() {
    let t = Test::new();

    t.cmd()
        .args(["--config", "nope.toml", "decode", DEMO_CLOUD_ID])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn test_decode_without_cloud_id_hints() {
    let t = Test::new();

    let output = t.cmd().arg("decode").output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "no cloud id given");
    assert_stderr_contains(&output, "ELASTICLOUD_CLOUD_ID");
}

#[test]
fn test_decode_malformed_payload() {
    let t = Test::new();

    let output = t.decode(TWO_FIELD_PAYLOAD);
    assert_failure(&output);
    assert_stderr_contains(&output, "expected at least 3 parts in example.com$es");
    assert_stderr_contains(&output, "domain$primary$secondary");
}

#[test]
fn test_decode_invalid_base64() {
    let t = Test::new();

    let output = t.decode("demo:%%%");
    assert_failure(&output);
    assert_stderr_contains(&output, "base64 decoding failed on %%%");
}

// ============================================================================
// auth
// ============================================================================

#[test]
fn test_auth_masks_password() {
    let t = Test::new();

    let output = t.auth("arthur:pa:ss");
    assert_success(&output);
    assert_stdout_contains(&output, "arthur");
    assert_stdout_contains(&output, "********");
    assert_output_excludes(&output, "pa:ss");
}

#[test]
fn test_auth_show_password_json() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["auth", "arthur:pa:ss", "--show-password", "--json"])
        .output()
        .unwrap();
    assert_success(&output);
    let value = stdout_json(&output);
    assert_eq!(value["username"], "arthur");
    assert_eq!(value["password"], "pa:ss");
}

#[test]
fn test_auth_missing_delimiter() {
    let t = Test::new();

    let output = t.auth("noColonHere");
    assert_failure(&output);
    assert_stderr_contains(&output, "doesn't contain `:`");
    assert_output_excludes(&output, "noColonHere");
}

#[test]
fn test_auth_empty_password_warns() {
    let t = Test::new();

    let output = t.auth("arthur:");
    assert_success(&output);
    assert_stderr_contains(&output, "password is empty");
}

// ============================================================================
// encode
// ============================================================================

#[test]
fn test_encode_then_decode() {
    let t = Test::new();

    let output = t.encode(&[
        "--domain",
        "example.com",
        "--port",
        "9243",
        "--primary",
        "es",
        "--secondary",
        "kb",
        "--secondary-port",
        "9244",
        "--label",
        "staging",
    ]);
    assert_success(&output);
    let cloud_id = stdout(&output).trim().to_string();
    assert!(cloud_id.starts_with("staging:"));

    let output = t.decode(&cloud_id);
    assert_success(&output);
    assert_stdout_contains(&output, "https://es.example.com:9243");
    assert_stdout_contains(&output, "https://kb.example.com:9244");
}

#[test]
fn test_encode_rejects_delimiter() {
    let t = Test::new();

    let output = t.encode(&["--domain", "a$b", "--primary", "es", "--secondary", "kb"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid value for domain");
}

// ============================================================================
// settings
// ============================================================================

#[test]
fn test_settings_from_config() {
    let t = Test::with_config(FULL_CONFIG);

    let output = t.settings_json();
    assert_success(&output);
    let value = stdout_json(&output);
    assert_eq!(value["client"]["url"], DEMO_PRIMARY);
    assert_eq!(value["client"]["username"], "arthur");
    assert_eq!(value["client"]["timeout"], 30);
    assert_eq!(value["client"]["compression_level"], 3);
    assert!(value["client"].get("password").is_none());
    assert_eq!(value["index"], "test");
    assert_eq!(value["document_type"], "_doc");
    assert_eq!(value["params"]["refresh"], "true");
    assert_output_excludes(&output, "test123");
}

#[test]
fn test_settings_env_overrides_config() {
    let t = Test::with_config(FULL_CONFIG);

    let output = t
        .cmd()
        .args(["settings", "--json"])
        .env("ELASTICLOUD_CLOUD_AUTH", "robin:hunter2")
        .output()
        .unwrap();
    assert_success(&output);
    assert_eq!(stdout_json(&output)["client"]["username"], "robin");
}

#[test]
fn test_settings_text_masks_password() {
    let t = Test::with_config(FULL_CONFIG);

    t.cmd()
        .arg("settings")
        .assert()
        .success()
        .stdout(predicate::str::contains(DEMO_PRIMARY))
        .stdout(predicate::str::contains("refresh"))
        .stdout(predicate::str::contains("test123").not());
}

#[test]
fn test_settings_missing_auth() {
    let t = Test::new();

    t.cmd()
        .args(["settings", "--cloud-id", DEMO_CLOUD_ID])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no cloud auth given"));
}

#[test]
fn test_settings_invalid_config() {
    let t = Test::with_config("[index]\ncompression_level = 12\n");

    t.cmd()
        .args(["settings", "--cloud-id", DEMO_CLOUD_ID, "--cloud-auth", DEMO_CLOUD_AUTH])
        .assert()
        .failure()
        .stderr(predicate::str::contains("index.compression_level"));
}

// ============================================================================
// flags, logging, completions
// ============================================================================

#[test]
fn test_help() {
    let t = Test::new();

    t.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    t.cmd().arg("unknown-command").assert().failure();
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    t.cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("elasticloud"));
}

#[test]
fn test_default_no_log_output() {
    let t = Test::new();

    let output = t.decode(DEMO_CLOUD_ID);
    assert_success(&output);
    let err = stderr(&output);
    assert!(
        !err.contains("DEBUG") && !err.contains("TRACE"),
        "Default mode should not show debug/trace output"
    );
}

#[test]
fn test_verbose_logs_to_stderr() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["--verbose", "decode", DEMO_CLOUD_ID])
        .output()
        .unwrap();
    assert_success(&output);
    assert_stderr_contains(&output, "cloud id decoded");
    assert_stdout_contains(&output, DEMO_PRIMARY);
}

#[test]
fn test_json_log_format() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["decode", DEMO_CLOUD_ID])
        .env("ELASTICLOUD_LOG", "elasticloud=debug")
        .env("ELASTICLOUD_LOG_FORMAT", "json")
        .output()
        .unwrap();
    assert_success(&output);
    let err = stderr(&output);
    let line = err
        .lines()
        .find(|l| l.contains("cloud id decoded"))
        .expect("missing debug log line");
    let event: serde_json::Value = serde_json::from_str(line).unwrap();
    assert_eq!(event["level"], "DEBUG");
}

#[test]
fn test_verbose_never_logs_password() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["--verbose", "auth", "arthur:s3cr3t"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_output_excludes(&output, "s3cr3t");
}

#[test]
fn test_completions_bash() {
    let t = Test::new();

    t.cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("elasticloud"));
}
