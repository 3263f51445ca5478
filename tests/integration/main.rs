//! Integration tests for bazelwrap
//!
//! The delegate is replaced with small shell utilities so the tests can
//! observe the exact argument vector the wrapper hands over.

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;

    fn bazelwrap() -> Command {
        let mut cmd = cargo_bin_cmd!("bazelwrap");
        // Isolate from the surrounding shell's wrapper configuration
        cmd.env_remove("BAZEL_REAL")
            .env_remove("BAZEL_DISABLE_REMOTE_CACHE")
            .env_remove("BAZEL_REMOTE_CACHE_BUCKET_NAME");
        cmd
    }

    #[test]
    fn missing_bazel_real_is_fatal() {
        bazelwrap()
            .arg("build")
            .assert()
            .failure()
            .stderr(predicate::str::contains("BAZEL_REAL"))
            .stderr(predicate::str::contains("bazelisk"));
    }

    #[test]
    fn version_passes_through() {
        bazelwrap()
            .env("BAZEL_REAL", "echo")
            .arg("version")
            .assert()
            .success()
            .stdout("version\n");
    }

    #[test]
    fn info_passes_through() {
        bazelwrap()
            .env("BAZEL_REAL", "echo")
            .args(["info", "output_base"])
            .assert()
            .success()
            .stdout("info output_base\n");
    }

    #[test]
    fn disabled_cache_forwards_arguments_verbatim() {
        bazelwrap()
            .env("BAZEL_REAL", "echo")
            .env("BAZEL_DISABLE_REMOTE_CACHE", "1")
            .args(["build", "--", "//target1:a", "//target2:a"])
            .assert()
            .success()
            .stdout("build -- //target1:a //target2:a\n");
    }

    #[test]
    fn delegate_exit_code_is_propagated() {
        bazelwrap()
            .env("BAZEL_REAL", "false")
            .env("BAZEL_DISABLE_REMOTE_CACHE", "1")
            .arg("build")
            .assert()
            .failure()
            .code(1);
    }

    #[test]
    fn missing_delegate_binary_is_reported() {
        bazelwrap()
            .env("BAZEL_REAL", "/nonexistent/bazel-real")
            .env("BAZEL_DISABLE_REMOTE_CACHE", "1")
            .arg("build")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to start"));
    }

    /// End to end with a faked credential file; needs sw_vers and clang,
    /// so it only runs on macOS.
    #[test]
    #[cfg(target_os = "macos")]
    fn cache_flags_injected_before_target_list() {
        let home = tempfile::tempdir().unwrap();
        let gcloud_dir = home.path().join(".config").join("gcloud");
        std::fs::create_dir_all(&gcloud_dir).unwrap();
        std::fs::write(
            gcloud_dir.join("application_default_credentials.json"),
            "{}",
        )
        .unwrap();

        bazelwrap()
            .env("BAZEL_REAL", "echo")
            .env("HOME", home.path())
            .args(["build", "--", "//target1:a"])
            .assert()
            .success()
            .stdout(predicate::str::is_match(
                "^build --remote_http_cache=https://storage\\.googleapis\\.com/bazel-dev-remote-cache/macos/\\S+ --experimental_guard_against_concurrent_changes --google_credentials=\\S+ -- //target1:a\n$",
            ).unwrap());
    }
}
