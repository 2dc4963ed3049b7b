//! TestWorld pattern for running the CLI against a fixture.
//!
//! The source directory is always passed explicitly and `RMTREE_PATH`/`RUST_LOG`
//! are cleared, so the host environment never leaks into a test.

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::Path;

use crate::fixtures::LibraryFixture;

/// Declarative test environment.
///
/// # Example
/// ```no_run
/// use rmtree_testing::TestWorld;
///
/// let world = TestWorld::new();
/// world.library().folder("a", "A", "").unwrap();
///
/// let result = world.run(&["--no-color"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    library: LibraryFixture,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    pub fn new() -> Self {
        Self {
            library: LibraryFixture::new(),
            env_vars: HashMap::new(),
        }
    }

    /// The metadata directory the binary is pointed at.
    pub fn library(&self) -> &LibraryFixture {
        &self.library
    }

    pub fn source_dir(&self) -> &Path {
        self.library.path()
    }

    /// Set an environment variable for all subsequent runs.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Configure a CLI command with this test environment's settings.
    ///
    /// The caller provides the base command (e.g. from `cargo_bin_cmd!("rmtree")`)
    /// and the source directory is left for the caller to pass.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.env_remove("RMTREE_PATH").env_remove("RUST_LOG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Run the binary on the fixture directory with extra `args`.
    ///
    /// # Note
    /// This uses `Command::cargo_bin()`, which needs the binary to be built;
    /// `cargo test` takes care of that.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("rmtree")
            .map_err(|e| anyhow::anyhow!("Failed to find rmtree binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.arg(self.source_dir());
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
