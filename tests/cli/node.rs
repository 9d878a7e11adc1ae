//! Tests for `tally node` that fail before or at the network.

use crate::support::*;
use tally::core::keys::Account;

#[test]
fn test_forging_rejects_bad_public_key() {
    let t = Test::new();

    let output = t.run(&[
        "--node",
        DEAD_NODE,
        "node",
        "forging",
        "enable",
        "not-a-key",
        "--password",
        "pass:secret",
    ]);
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid public key not-a-key");
}

#[test]
fn test_forging_password_env_unset() {
    let t = Test::new();
    let public_key = Account::from_passphrase(PASSPHRASE).public_key_hex();

    let output = t
        .cmd()
        .env_remove("TALLY_IT_NODE_PASSWORD")
        .args([
            "--node",
            DEAD_NODE,
            "node",
            "forging",
            "disable",
            public_key.as_str(),
            "--password",
            "env:TALLY_IT_NODE_PASSWORD",
        ])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "Environmental variable for your password not set.");
}

#[test]
fn test_unreachable_node_hints_at_config() {
    let t = Test::new();

    let output = t.run(&["--node", DEAD_NODE, "node", "get"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "request to node failed");
    assert_stderr_contains(&output, "tally config set api.nodes");
}

#[test]
fn test_invalid_node_url() {
    let t = Test::new();

    let output = t.run(&["--node", "not a url", "node", "get"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid node url");
}

#[test]
fn test_node_from_environment() {
    let t = Test::new();

    let output = t
        .cmd()
        .env("TALLY_NODE", "not a url")
        .args(["node", "get"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid node url not a url");
}
