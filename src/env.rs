//! Ambient environment access behind an injectable seam
//!
//! Everything the wrapper reads from the outside world (env vars, the
//! filesystem, OS identity, the toolchain version query) goes through the
//! [`Environment`] trait so the resolver and pipeline stay pure functions
//! over explicit inputs.

use crate::error::{WrapError, WrapResult};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Capability trait for process-ambient reads
#[async_trait]
pub trait Environment: Send + Sync {
    /// Read an environment variable, `None` if unset or not unicode
    fn env_var(&self, name: &str) -> Option<String>;

    /// The current user's home directory
    fn home_dir(&self) -> Option<PathBuf>;

    /// Whether a path exists on disk
    fn file_exists(&self, path: &Path) -> bool;

    /// Host operating system identifier (e.g. "macos", "linux")
    fn os_name(&self) -> String;

    /// The OS version string as reported by the platform
    async fn os_version(&self) -> WrapResult<String>;

    /// Combined stdout+stderr of the toolchain's version query
    async fn toolchain_version_output(&self) -> WrapResult<String>;
}

/// Real process environment
pub struct SystemEnvironment;

impl SystemEnvironment {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Environment for SystemEnvironment {
    fn env_var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }

    fn file_exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn os_name(&self) -> String {
        std::env::consts::OS.to_string()
    }

    async fn os_version(&self) -> WrapResult<String> {
        // Only queried on macOS; caching is gated to that platform before
        // any fingerprint work happens.
        let output = Command::new("sw_vers")
            .arg("-productVersion")
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| WrapError::OsVersion(format!("sw_vers -productVersion: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(WrapError::OsVersion(stderr.trim().to_string()));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    async fn toolchain_version_output(&self) -> WrapResult<String> {
        debug!("Querying toolchain version: clang --version");

        let output = Command::new("clang")
            .arg("--version")
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| WrapError::toolchain_query("clang --version", e))?;

        // clang's exit status is deliberately ignored; the captured text is
        // the fingerprint input either way, matching the combined-stream
        // capture this hash has always been computed over.
        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));
        Ok(text)
    }
}
