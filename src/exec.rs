//! Delegate process execution

use crate::error::{WrapError, WrapResult};
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Env overrides laid over the inherited shell env for the delegate.
///
/// Currently empty; this is the spot for PATH control or variables
/// consumed by bazel rules. Bazelisk's USE_BAZEL_VERSION cannot go here:
/// by the time this wrapper runs, bazelisk has already picked the version.
const ENV_OVERRIDES: &[(&str, &str)] = &[];

/// Run the real bazel binary with inherited streams
///
/// Returns the delegate's exit code verbatim. A delegate killed by a
/// signal has no code and surfaces as an error instead.
pub async fn run_delegate(binary: &str, args: &[String]) -> WrapResult<i32> {
    debug!("Delegating to {binary} with {} arguments", args.len());

    let mut cmd = Command::new(binary);
    cmd.args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    for (key, value) in ENV_OVERRIDES {
        cmd.env(key, value);
    }

    let status = cmd.status().await.map_err(|e| WrapError::DelegateSpawn {
        command: binary.to_string(),
        source: e,
    })?;

    status.code().ok_or(WrapError::DelegateSignaled)
}
