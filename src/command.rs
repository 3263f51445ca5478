//! Command augmentation pipeline
//!
//! Turns the user's argument vector into the argument vector handed to the
//! real bazel binary, splicing in remote cache flags where they will be
//! parsed as global options.

use crate::env::Environment;
use crate::error::WrapResult;
use crate::remote_cache;

/// Subcommands that never build anything and gain nothing from cache flags
const NON_CACHEABLE_SUBCOMMANDS: [&str; 2] = ["version", "info"];

/// Build the full argument vector for the delegate binary
///
/// Informational subcommands pass through untouched. For everything else
/// the resolved cache flags (possibly empty) are spliced immediately
/// before the first `--` token, since tokens after it are a target list
/// the tool must not reinterpret as flags; with no `--` present the flags
/// go at the end. The input slice is never mutated.
pub async fn build_command(
    env: &dyn Environment,
    delegate: &str,
    user_args: &[String],
) -> WrapResult<Vec<String>> {
    let mut command = Vec::with_capacity(user_args.len() + 4);
    command.push(delegate.to_string());

    if user_args
        .iter()
        .any(|arg| NON_CACHEABLE_SUBCOMMANDS.contains(&arg.as_str()))
    {
        command.extend(user_args.iter().cloned());
        return Ok(command);
    }

    let flags = remote_cache::resolve_flags(env).await?;

    match user_args.iter().position(|arg| arg == "--") {
        Some(separator) => {
            command.extend(user_args[..separator].iter().cloned());
            command.extend(flags);
            command.extend(user_args[separator..].iter().cloned());
        }
        None => {
            command.extend(user_args.iter().cloned());
            command.extend(flags);
        }
    }

    Ok(command)
}
