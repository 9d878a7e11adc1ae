//! Tests for `tally config`.

use crate::support::*;

#[test]
fn test_show_defaults() {
    let t = Test::new();

    let output = t.run(&["--json", "config", "show"]);
    assert_success(&output);
    let result = json(&output);
    assert_eq!(result["api.nodes"][0], "http://localhost:4000");
    assert_eq!(result["output.json"], false);
}

#[test]
fn test_set_persists() {
    let t = Test::new();

    assert_success(&t.config_set("api.nodes", "https://node.example:7000/"));
    assert!(t.config_dir().join("config.toml").exists());

    let output = t.run(&["--json", "config", "show"]);
    assert_success(&output);
    assert_eq!(json(&output)["api.nodes"][0], "https://node.example:7000");
}

#[test]
fn test_output_json_setting_applies() {
    let t = Test::new();

    assert_success(&t.config_set("output.json", "true"));

    let output = t.run(&["account", "show", "--passphrase", "pass:abc"]);
    assert_success(&output);
    assert!(json(&output)["publicKey"].is_string());
}

#[test]
fn test_set_unknown_key() {
    let t = Test::new();

    let output = t.config_set("api.network", "main");
    assert_failure(&output);
    assert_stderr_contains(&output, "unknown config key: api.network");
}

#[test]
fn test_malformed_config_reported() {
    let t = Test::new();
    std::fs::create_dir_all(t.config_dir()).unwrap();
    std::fs::write(t.config_dir().join("config.toml"), "[api\n").unwrap();

    let output = t.run(&["config", "show"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid config");
}

#[test]
fn test_set_reports_update() {
    let t = Test::new();

    let output = t.config_set("output.pretty", "true");
    assert_success(&output);
    assert_stdout_contains(&output, "✓ output.pretty updated");

    let output = t.run(&["--json", "config", "set", "output.pretty", "false"]);
    assert_success(&output);
    assert_eq!(json(&output)["output.pretty"], false);
}

#[test]
fn test_set_repairs_malformed_config() {
    let t = Test::new();
    std::fs::create_dir_all(t.config_dir()).unwrap();
    std::fs::write(t.config_dir().join("config.toml"), "[api\n").unwrap();

    let output = t.config_set("api.nodes", "https://repaired.example");
    assert_success(&output);

    let output = t.run(&["--json", "config", "show"]);
    assert_success(&output);
    assert_eq!(json(&output)["api.nodes"][0], "https://repaired.example");
}

#[test]
fn test_completions_ignore_malformed_config() {
    let t = Test::new();
    std::fs::create_dir_all(t.config_dir()).unwrap();
    std::fs::write(t.config_dir().join("config.toml"), "[api\n").unwrap();

    let output = t.run(&["completions", "bash"]);
    assert_success(&output);
    assert_stdout_contains(&output, "tally");
}
