//! Environment fingerprint for cache namespacing
//!
//! Builds and toolchains that differ must never share cache entries, so
//! cache URLs are namespaced by a fingerprint of the OS version and the
//! installed compiler. The OS version component is redundant for collision
//! purposes but keeps cache paths human-readable.

use crate::env::Environment;
use crate::error::WrapResult;
use sha2::{Digest, Sha256};

/// Combine an OS version and a toolchain version text into a fingerprint
///
/// Deterministic: identical inputs always yield the identical string.
pub fn fingerprint(os_version: &str, toolchain_output: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(toolchain_output.as_bytes());
    let digest = hex::encode(hasher.finalize());

    format!("{os_version}/{digest}")
}

/// Compute the fingerprint for the current machine
///
/// Performs the two external reads (OS version, `clang --version`) through
/// the environment seam. A toolchain that cannot be invoked is a hard
/// error: an empty fingerprint would corrupt cache namespacing.
pub async fn compute(env: &dyn Environment) -> WrapResult<String> {
    let os_version = env.os_version().await?;
    let toolchain_output = env.toolchain_version_output().await?;
    Ok(fingerprint(&os_version, &toolchain_output))
}
