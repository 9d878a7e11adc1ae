//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a tally command isolated to this test.
    ///
    /// Returns a Command configured with:
    /// - HOME set to the temporary home directory
    /// - TALLY_CONFIG_DIR pointing inside it
    /// - Current directory set to the working directory
    /// - Logging, node and color overrides cleared
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("tally").expect("failed to find tally binary");
        cmd.env("HOME", self.home.path());
        cmd.env("USERPROFILE", self.home.path());
        cmd.env("TALLY_CONFIG_DIR", self.config_dir());
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("TALLY_LOG");
        cmd.env_remove("TALLY_NODE");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Run tally with `args` and an empty standard input.
    pub fn run(&self, args: &[&str]) -> Output {
        self.run_with_stdin(args, "")
    }

    /// Run tally with `args`, piping `stdin` to it.
    pub fn run_with_stdin(&self, args: &[&str], stdin: &str) -> Output {
        self.cmd()
            .args(args)
            .write_stdin(stdin)
            .output()
            .expect("failed to run tally")
    }

    /// Shortcut for `tally --json account show --passphrase <source>`.
    pub fn account_show(&self, source: &str) -> Output {
        self.run(&["--json", "account", "show", "--passphrase", source])
    }

    /// Shortcut for `tally config set <key> <value>`.
    pub fn config_set(&self, key: &str, value: &str) -> Output {
        self.run(&["config", "set", key, value])
    }
}
