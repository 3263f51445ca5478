//! Bazelwrap - Transparent Bazel remote-cache wrapper
//!
//! Sits between a bazelisk launcher and the real bazel binary, injecting
//! remote cache flags when the machine is eligible for the shared cache.

pub mod command;
pub mod env;
pub mod error;
pub mod exec;
pub mod fingerprint;
pub mod remote_cache;

pub use error::{WrapError, WrapResult};
