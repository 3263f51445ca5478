//! Bazelwrap - Transparent Bazel remote-cache wrapper
//!
//! CLI entry point: builds the augmented command and delegates to the
//! real bazel binary, propagating its exit code.

use bazelwrap::command;
use bazelwrap::env::{Environment, SystemEnvironment};
use bazelwrap::error::{WrapError, WrapResult};
use bazelwrap::exec;
use console::style;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr; stdout belongs to bazel.
    let filter = EnvFilter::try_from_env("BAZELWRAP_LOG")
        .unwrap_or_else(|_| EnvFilter::new("bazelwrap=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> WrapResult<ExitCode> {
    let env = SystemEnvironment::new();
    let user_args: Vec<String> = std::env::args().skip(1).collect();

    // Set by the calling bazelisk launcher; without it there is nothing
    // to delegate to, so bail before spawning anything.
    let delegate = env
        .env_var("BAZEL_REAL")
        .ok_or(WrapError::RealBazelNotSet)?;

    let command = command::build_command(&env, &delegate, &user_args).await?;
    debug!("Final command: {command:?}");

    let code = exec::run_delegate(&command[0], &command[1..]).await?;
    Ok(ExitCode::from(u8::try_from(code).unwrap_or(1)))
}
