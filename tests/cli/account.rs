//! Tests for `tally account show` and every secret source.

use crate::support::*;
use tally::core::keys::Account;

fn expected_public_key(passphrase: &str) -> String {
    Account::from_passphrase(passphrase).public_key_hex()
}

#[test]
fn test_passphrase_inline() {
    let t = Test::new();

    let output = t.account_show(&format!("pass:{}", PASSPHRASE));
    assert_success(&output);
    let result = json(&output);
    assert_eq!(result["publicKey"], expected_public_key(PASSPHRASE));
    assert_eq!(result["address"], Account::from_passphrase(PASSPHRASE).address());
}

#[test]
fn test_passphrase_from_env() {
    let t = Test::new();

    let output = t
        .cmd()
        .env("TALLY_IT_PASSPHRASE", PASSPHRASE)
        .args(["--json", "account", "show", "--passphrase", "env:TALLY_IT_PASSPHRASE"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_eq!(json(&output)["publicKey"], expected_public_key(PASSPHRASE));
}

#[test]
fn test_passphrase_from_file_uses_first_line() {
    let t = Test::new();
    let source = t.file_source("passphrase.txt", &format!("{}\r\nignored\n", PASSPHRASE));

    let output = t.account_show(&source);
    assert_success(&output);
    assert_eq!(json(&output)["publicKey"], expected_public_key(PASSPHRASE));
}

#[test]
fn test_passphrase_from_stdin() {
    let t = Test::new();

    let output = t.run_with_stdin(
        &["--json", "account", "show", "--passphrase", "stdin"],
        &format!("{}\n", PASSPHRASE),
    );
    assert_success(&output);
    assert_eq!(json(&output)["publicKey"], expected_public_key(PASSPHRASE));
}

#[test]
fn test_two_passphrases_from_one_stdin() {
    let t = Test::new();

    let output = t.run_with_stdin(
        &[
            "--json",
            "account",
            "show",
            "--passphrase",
            "stdin",
            "--second-passphrase",
            "stdin",
        ],
        "first passphrase\nsecond passphrase\n",
    );
    assert_success(&output);
    let result = json(&output);
    assert_eq!(result["publicKey"], expected_public_key("first passphrase"));
    assert_eq!(result["secondPublicKey"], expected_public_key("second passphrase"));
}

#[test]
fn test_key_value_output() {
    let t = Test::new();

    let output = t.run(&["account", "show", "--passphrase", &format!("pass:{}", PASSPHRASE)]);
    assert_success(&output);
    assert_stdout_contains(&output, "publicKey");
    assert_stdout_contains(&output, &expected_public_key(PASSPHRASE));
    assert_not_leaked(&output, PASSPHRASE);
}

#[test]
fn test_unknown_source_type() {
    let t = Test::new();

    let output = t.account_show("vault:main");
    assert_failure(&output);
    assert_stderr_contains(
        &output,
        "Your secret passphrase was provided with an unknown source type. Must be one of `env`, `file`, `pass`, or `stdin`. Leave blank for prompt.",
    );
}

#[test]
fn test_env_not_set() {
    let t = Test::new();

    let output = t
        .cmd()
        .env_remove("TALLY_IT_MISSING")
        .args(["account", "show", "--passphrase", "env:TALLY_IT_MISSING"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(
        &output,
        "Environmental variable for your secret passphrase not set.",
    );
}

#[test]
fn test_file_not_found() {
    let t = Test::new();
    let path = t.dir.path().join("missing.txt");

    let output = t.account_show(&format!("file:{}", path.display()));
    assert_failure(&output);
    assert_stderr_contains(&output, &format!("File at {} does not exist.", path.display()));
}

#[test]
fn test_stdin_too_short() {
    let t = Test::new();

    let output = t.run_with_stdin(
        &[
            "account",
            "show",
            "--passphrase",
            "stdin",
            "--second-passphrase",
            "stdin",
        ],
        "only one line\n",
    );
    assert_failure(&output);
    assert_stderr_contains(
        &output,
        "Your second secret passphrase was not provided on standard input.",
    );
    assert_not_leaked(&output, "only one line");
}
