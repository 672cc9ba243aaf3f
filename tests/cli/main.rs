//! CLI integration tests for formatrelay.
//!
//! These tests execute the compiled binary against stub formatters (small
//! shell scripts) and verify:
//! - Subcommand behavior (format, on-save, resolve)
//! - Stdin/stdout handling
//! - Exit codes and error messages
//! - Config discovery

mod common;

#[cfg(unix)]
mod helpers;

#[cfg(unix)]
mod on_save;
#[cfg(unix)]
mod resolve;
