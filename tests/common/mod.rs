use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Runs the calculator binary against an isolated config directory
pub struct TestContext {
    pub temp_dir: TempDir,
}

impl TestContext {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Write `config.json` where the binary looks for it by default
    pub fn write_default_config(&self, content: &str) {
        let dir = self.config_home().join("transcript-similarity");
        std::fs::create_dir_all(&dir).expect("Failed to create config dir");
        std::fs::write(dir.join("config.json"), content).expect("Failed to write config");
    }

    pub fn config_home(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn run<I, S>(&self, args: I) -> Output
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        Command::new(env!("CARGO_BIN_EXE_similarity-calculator"))
            .args(args)
            .env("XDG_CONFIG_HOME", self.config_home())
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to run similarity-calculator")
    }

    /// Run and parse stdout as the single JSON document it must contain
    pub fn run_json<I, S>(&self, args: I) -> (Output, serde_json::Value)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let output = self.run(args);
        let stdout = String::from_utf8_lossy(&output.stdout);
        let value = serde_json::from_str(stdout.trim())
            .unwrap_or_else(|e| panic!("stdout is not JSON ({}): {:?}", e, stdout));
        (output, value)
    }
}
