//! Tests for `tally transaction broadcast` input handling.

use crate::support::*;

#[test]
fn test_empty_stdin() {
    let t = Test::new();

    let output = t.run(&["--node", DEAD_NODE, "transaction", "broadcast"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "No transaction was provided.");
}

#[test]
fn test_invalid_json_on_stdin() {
    let t = Test::new();

    let output = t.run_with_stdin(
        &["--node", DEAD_NODE, "transaction", "broadcast"],
        "type: 0\n",
    );
    assert_failure(&output);
    assert_stderr_contains(
        &output,
        "Could not parse transaction JSON. Did you use the `--json` option?",
    );
}

#[test]
fn test_missing_transaction_file() {
    let t = Test::new();
    let path = t.dir.path().join("tx.json");

    let output = t.run(&[
        "--node",
        DEAD_NODE,
        "transaction",
        "broadcast",
        "--transaction",
        &format!("file:{}", path.display()),
    ]);
    assert_failure(&output);
    assert_stderr_contains(&output, "does not exist.");
}

#[test]
fn test_valid_transaction_reaches_the_node() {
    let t = Test::new();
    let source = t.file_source("tx.json", r#"{"type":0,"amount":"1","id":"7"}"#);

    let output = t.run(&[
        "--node",
        DEAD_NODE,
        "transaction",
        "broadcast",
        "--transaction",
        &source,
    ]);
    assert_failure(&output);
    assert_stderr_contains(&output, "request to node failed");
}
