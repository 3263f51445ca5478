//! Remote cache flag resolution
//!
//! Decides whether remote caching applies to this machine and, if so,
//! assembles the Bazel flags pointing at the GCS-backed cache. Absence of
//! any prerequisite (supported platform, credentials, override unset) is a
//! normal "caching unavailable" outcome, never an error.

use crate::env::Environment;
use crate::error::WrapResult;
use crate::fingerprint;
use std::path::PathBuf;
use tracing::debug;

const DISABLE_ENV_VAR: &str = "BAZEL_DISABLE_REMOTE_CACHE";
const BUCKET_ENV_VAR: &str = "BAZEL_REMOTE_CACHE_BUCKET_NAME";
const BASE_URL: &str = "https://storage.googleapis.com";
const DEFAULT_BUCKET: &str = "bazel-dev-remote-cache";
const SUPPORTED_OS: &str = "macos";

/// Resolve the bucket name from the environment override, else the default
fn bucket_name(env: &dyn Environment) -> String {
    env.env_var(BUCKET_ENV_VAR)
        .unwrap_or_else(|| DEFAULT_BUCKET.to_string())
}

/// Path of the gcloud application default credentials, if present on disk
///
/// Existence alone gates caching; the file contents are never read.
fn credentials_path(env: &dyn Environment) -> Option<PathBuf> {
    let path = env
        .home_dir()?
        .join(".config")
        .join("gcloud")
        .join("application_default_credentials.json");

    env.file_exists(&path).then_some(path)
}

/// Resolve the remote cache flags for this invocation
///
/// Returns an empty list when caching is disabled; in that case no
/// fingerprint is computed and no toolchain subprocess runs. When enabled,
/// returns exactly three flags: the cache URL, the concurrency guard, and
/// the credentials reference.
pub async fn resolve_flags(env: &dyn Environment) -> WrapResult<Vec<String>> {
    // Lowercasing both normalizes the URL path segment and makes the
    // platform match case-insensitive.
    let os_name = env.os_name().to_lowercase();
    if os_name != SUPPORTED_OS {
        debug!("Remote cache disabled: unsupported platform {os_name}");
        return Ok(Vec::new());
    }

    // Disabled only by the exact sentinel value; anything else means on.
    if env.env_var(DISABLE_ENV_VAR).as_deref() == Some("1") {
        debug!("Remote cache disabled via {DISABLE_ENV_VAR}");
        return Ok(Vec::new());
    }

    let Some(credentials) = credentials_path(env) else {
        debug!("Remote cache disabled: no gcloud application default credentials");
        return Ok(Vec::new());
    };

    let fingerprint = fingerprint::compute(env).await?;
    let url = format!(
        "{BASE_URL}/{bucket}/{os_name}/{fingerprint}",
        bucket = bucket_name(env),
    );
    debug!("Remote cache enabled: {url}");

    Ok(vec![
        format!("--remote_http_cache={url}"),
        "--experimental_guard_against_concurrent_changes".to_string(),
        format!("--google_credentials={}", credentials.display()),
    ])
}
