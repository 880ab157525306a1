//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create an elasticloud command isolated from the caller's environment.
    ///
    /// Returns a Command configured with:
    /// - ELASTICLOUD_* variables removed
    /// - NO_COLOR set, so output can be matched literally
    /// - Current directory set to the test directory
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("elasticloud").expect("failed to find elasticloud binary");
        cmd.env_remove("ELASTICLOUD_CLOUD_ID");
        cmd.env_remove("ELASTICLOUD_CLOUD_AUTH");
        cmd.env_remove("ELASTICLOUD_LOG");
        cmd.env_remove("ELASTICLOUD_LOG_FORMAT");
        cmd.env("NO_COLOR", "1");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `elasticloud decode <cloud_id>`.
    pub fn decode(&self, cloud_id: &str) -> Output {
        self.cmd()
            .args(["decode", cloud_id])
            .output()
            .expect("failed to run elasticloud decode")
    }

    /// Shortcut for `elasticloud decode <cloud_id> --json`.
    pub fn decode_json(&self, cloud_id: &str) -> Output {
        self.cmd()
            .args(["decode", cloud_id, "--json"])
            .output()
            .expect("failed to run elasticloud decode --json")
    }

    /// Shortcut for `elasticloud auth <cloud_auth>`.
    pub fn auth(&self, cloud_auth: &str) -> Output {
        self.cmd()
            .args(["auth", cloud_auth])
            .output()
            .expect("failed to run elasticloud auth")
    }

    /// Shortcut for `elasticloud encode ...`.
    pub fn encode(&self, args: &[&str]) -> Output {
        self.cmd()
            .arg("encode")
            .args(args)
            .output()
            .expect("failed to run elasticloud encode")
    }

    /// Shortcut for `elasticloud settings --json`.
    pub fn settings_json(&self) -> Output {
        self.cmd()
            .args(["settings", "--json"])
            .output()
            .expect("failed to run elasticloud settings")
    }
}
